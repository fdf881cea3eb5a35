// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::io;
use std::result;

/// `Error` provides an enumeration of all possible errors reported by Cadenza.
#[derive(Debug)]
pub enum Error {
    /// An IO error occured while reading the stream. End of stream is reported as an IO error of
    /// kind `UnexpectedEof`.
    IoError(std::io::Error),
    /// The stream contained malformed data and the current frame could not be decoded.
    DecodeError(&'static str),
    /// An unsupported stream feature was encounted.
    Unsupported(&'static str),
    /// A default or user-defined limit was reached while reading or decoding the stream.
    LimitError(&'static str),
    /// Too many consecutive frames failed to decode. The stream is considered unrecoverable. The
    /// value is the number of consecutive failures.
    CorruptStream(usize),
}

impl Error {
    /// Returns true if the error only affects the current frame and decoding may continue with
    /// the next frame.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DecodeError(_) | Error::Unsupported(_))
    }

    /// Returns true if the error is the end-of-stream condition of the byte source.
    pub fn is_end_of_stream(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IoError(ref err) => err.fmt(f),
            Error::DecodeError(msg) => {
                write!(f, "malformed stream: {}", msg)
            }
            Error::Unsupported(feature) => {
                write!(f, "unsupported feature: {}", feature)
            }
            Error::LimitError(constraint) => {
                write!(f, "limit reached: {}", constraint)
            }
            Error::CorruptStream(count) => {
                write!(f, "stream is corrupt: {} consecutive frames failed to decode", count)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            Error::DecodeError(_) => None,
            Error::Unsupported(_) => None,
            Error::LimitError(_) => None,
            Error::CorruptStream(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create a decode error.
pub fn decode_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::DecodeError(desc))
}

/// Convenience function to create an unsupport feature error.
pub fn unsupported_error<T>(feature: &'static str) -> Result<T> {
    Err(Error::Unsupported(feature))
}

/// Convenience function to create a limit error.
pub fn limit_error<T>(constraint: &'static str) -> Result<T> {
    Err(Error::LimitError(constraint))
}

/// Convenience function to create an end-of-stream error.
pub fn end_of_stream_error<T>() -> Result<T> {
    Err(Error::IoError(io::Error::new(io::ErrorKind::UnexpectedEof, "end of stream")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_error_classes() {
        assert!(Error::DecodeError("x").is_recoverable());
        assert!(Error::Unsupported("x").is_recoverable());
        assert!(!Error::CorruptStream(3).is_recoverable());
        assert!(!Error::LimitError("x").is_recoverable());

        let eos = end_of_stream_error::<()>().unwrap_err();
        assert!(eos.is_end_of_stream());
        assert!(!eos.is_recoverable());

        let other = Error::from(io::Error::new(io::ErrorKind::Other, "broken pipe"));
        assert!(!other.is_end_of_stream());
    }
}
