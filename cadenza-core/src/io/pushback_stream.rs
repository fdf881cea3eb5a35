// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp;
use std::io;
use std::io::Read;

use log::debug;

use super::{Pushback, ReadBytes};

const END_OF_STREAM_ERROR_STR: &str = "end of stream";

/// `PushbackStreamOptions` specifies the buffering behaviour of a `PushbackStream`.
#[derive(Copy, Clone, Debug)]
pub struct PushbackStreamOptions {
    /// The ring buffer size. It is rounded up to a power of 2, and to at least 4 kB.
    pub buffer_len: usize,
}

impl Default for PushbackStreamOptions {
    fn default() -> Self {
        PushbackStreamOptions { buffer_len: 16 * 1024 }
    }
}

/// A `PushbackStream` wraps any [`std::io::Read`]er with a read-ahead ring buffer and allows
/// bytes to be returned to the front of the stream with [`Pushback::unread`].
///
/// The stream never seeks the inner reader, so it is suitable for network and pipe sources. The
/// number of bytes that can be pushed back at once is the ring buffer length, less the number of
/// buffered bytes not yet read, less one.
pub struct PushbackStream<R: Read> {
    /// The source reader.
    inner: R,
    /// The ring buffer.
    ring: Box<[u8]>,
    /// The ring buffer's wrap-around mask.
    ring_mask: usize,
    /// The read position.
    read_pos: usize,
    /// The write position.
    write_pos: usize,
    /// The current block size for a new read.
    read_block_len: usize,
    /// Position of the next byte to be read, counted from the start of the stream.
    abs_pos: u64,
}

impl<R: Read> PushbackStream<R> {
    const MIN_BLOCK_LEN: usize = 512;
    const MIN_BUFFER_LEN: usize = 4 * 1024;
    const MAX_BUFFER_LEN: usize = 64 * 1024 * 1024;

    pub fn new(inner: R, options: PushbackStreamOptions) -> Self {
        // The buffer length must be a power of 2, and large enough to hold a complete frame
        // after a block of read-ahead.
        let buffer_len = options
            .buffer_len
            .clamp(Self::MIN_BUFFER_LEN, Self::MAX_BUFFER_LEN)
            .next_power_of_two();

        if buffer_len != options.buffer_len {
            debug!("pushback buffer length {} adjusted to {}", options.buffer_len, buffer_len);
        }

        PushbackStream {
            inner,
            ring: vec![0; buffer_len].into_boxed_slice(),
            ring_mask: buffer_len - 1,
            read_pos: 0,
            write_pos: 0,
            read_block_len: Self::MIN_BLOCK_LEN,
            abs_pos: 0,
        }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps this `PushbackStream<R>`, returning the underlying reader. Buffered data is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Get the number of bytes buffered but not yet read.
    pub fn unread_buffer_len(&self) -> usize {
        (self.write_pos + self.ring.len() - self.read_pos) & self.ring_mask
    }

    #[inline(always)]
    fn is_buffer_exhausted(&self) -> bool {
        self.read_pos == self.write_pos
    }

    /// If the buffer has been exhausted, fetch a new block of data to replenish the buffer.
    fn fetch(&mut self) -> io::Result<()> {
        if self.is_buffer_exhausted() {
            // Nothing is buffered, so restart at the beginning of the ring. The block never
            // exceeds half of the ring so there is always room left for pushback.
            self.read_pos = 0;
            self.write_pos = 0;

            let len = self.read_block_len;

            let actual_read_len = loop {
                match self.inner.read(&mut self.ring[..len]) {
                    Ok(count) => break count,
                    Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            };

            self.write_pos = actual_read_len;

            // Grow the read block length for consecutive reads.
            self.read_block_len = cmp::min(self.read_block_len << 1, self.ring.len() >> 1);
        }

        Ok(())
    }

    /// If the buffer has been exhausted, fetch a new block of data to replenish the buffer. If
    /// no more data could be fetched, return an end-of-stream error.
    fn fetch_or_eof(&mut self) -> io::Result<()> {
        self.fetch()?;

        if self.is_buffer_exhausted() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, END_OF_STREAM_ERROR_STR));
        }

        Ok(())
    }

    /// Advances the read position by `len` bytes, taking into account wrap-around.
    #[inline(always)]
    fn consume(&mut self, len: usize) {
        self.read_pos = (self.read_pos + len) & self.ring_mask;
        self.abs_pos += len as u64;
    }

    /// Gets the largest contiguous slice of buffered data starting from the read position.
    #[inline(always)]
    fn contiguous_buf(&self) -> &[u8] {
        if self.write_pos >= self.read_pos {
            &self.ring[self.read_pos..self.write_pos]
        }
        else {
            &self.ring[self.read_pos..]
        }
    }

    fn read_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut bytes = [0; N];

        let buf = self.contiguous_buf();

        if buf.len() >= N {
            bytes.copy_from_slice(&buf[..N]);
            self.consume(N);
        }
        else {
            for byte in bytes.iter_mut() {
                *byte = self.read_byte()?;
            }
        }

        Ok(bytes)
    }
}

impl<R: Read> ReadBytes for PushbackStream<R> {
    #[inline(always)]
    fn read_byte(&mut self) -> io::Result<u8> {
        if self.is_buffer_exhausted() {
            self.fetch_or_eof()?;
        }

        let value = self.ring[self.read_pos];
        self.consume(1);

        Ok(value)
    }

    fn read_triple_bytes(&mut self) -> io::Result<[u8; 3]> {
        self.read_bytes::<3>()
    }

    fn read_quad_bytes(&mut self) -> io::Result<[u8; 4]> {
        self.read_bytes::<4>()
    }

    fn read_buf(&mut self, mut buf: &mut [u8]) -> io::Result<usize> {
        let read_len = buf.len();

        while !buf.is_empty() {
            self.fetch()?;

            let src = self.contiguous_buf();

            if src.is_empty() {
                break;
            }

            let count = cmp::min(src.len(), buf.len());
            buf[..count].copy_from_slice(&src[..count]);

            buf = &mut buf[count..];
            self.consume(count);
        }

        Ok(read_len - buf.len())
    }

    fn read_buf_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        if self.read_buf(buf)? < buf.len() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, END_OF_STREAM_ERROR_STR));
        }
        Ok(())
    }

    fn ignore_bytes(&mut self, mut count: u64) -> io::Result<()> {
        while count > 0 {
            self.fetch_or_eof()?;
            let discard = cmp::min(self.contiguous_buf().len() as u64, count);
            self.consume(discard as usize);
            count -= discard;
        }
        Ok(())
    }

    #[inline(always)]
    fn pos(&self) -> u64 {
        self.abs_pos
    }
}

impl<R: Read> Pushback for PushbackStream<R> {
    fn unread(&mut self, buf: &[u8]) -> io::Result<()> {
        // One slot of the ring always stays empty to distinguish a full ring from an empty one.
        if self.unread_buffer_len() + buf.len() >= self.ring.len() {
            return Err(io::Error::new(io::ErrorKind::Other, "pushback buffer is full"));
        }

        self.read_pos = (self.read_pos + self.ring.len() - buf.len()) & self.ring_mask;

        for (i, &byte) in buf.iter().enumerate() {
            self.ring[(self.read_pos + i) & self.ring_mask] = byte;
        }

        self.abs_pos = self.abs_pos.saturating_sub(buf.len() as u64);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::{PushbackStream, PushbackStreamOptions};
    use crate::io::{Pushback, ReadBytes};

    /// Generate a deterministic byte sequence.
    fn generate_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 7 + 3) % 251) as u8).collect()
    }

    /// A reader that returns at most 3 bytes per read call.
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(3);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn verify_read_and_unread() {
        let data = generate_bytes(10_000);
        let mut stream =
            PushbackStream::new(Cursor::new(data.clone()), PushbackStreamOptions::default());

        let mut frame = vec![0u8; 1441];
        stream.ignore_bytes(100).unwrap();
        assert_eq!(stream.read_buf(&mut frame).unwrap(), frame.len());
        assert_eq!(&frame[..], &data[100..1541]);
        assert_eq!(stream.pos(), 1541);

        // Push the frame back, then skip one byte as a failed sync candidate would.
        stream.unread(&frame).unwrap();
        assert_eq!(stream.pos(), 100);
        assert_eq!(stream.read_byte().unwrap(), data[100]);
        assert_eq!(stream.read_quad_bytes().unwrap(), [data[101], data[102], data[103], data[104]]);

        let mut rest = Vec::new();
        let mut buf = [0u8; 700];
        loop {
            let n = stream.read_buf(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            rest.extend_from_slice(&buf[..n]);
        }
        assert_eq!(&rest[..], &data[105..]);
        assert!(stream.read_byte().is_err());
    }

    #[test]
    fn verify_short_reads_and_end_of_stream() {
        let data = generate_bytes(50);
        let options = PushbackStreamOptions::default();
        let mut stream = PushbackStream::new(Trickle(Cursor::new(data.clone())), options);

        assert_eq!(stream.read_triple_bytes().unwrap(), [data[0], data[1], data[2]]);

        let mut buf = [0u8; 64];
        assert_eq!(stream.read_buf(&mut buf).unwrap(), 47);
        assert_eq!(&buf[..47], &data[3..]);

        // Unread across the start of the ring buffer.
        stream.unread(&data[40..]).unwrap();
        let mut tail = [0u8; 10];
        stream.read_buf_exact(&mut tail).unwrap();
        assert_eq!(&tail[..], &data[40..]);

        assert!(stream.read_buf_exact(&mut tail).is_err());
    }

    #[test]
    fn verify_unread_capacity() {
        let options = PushbackStreamOptions { buffer_len: 4096 };
        let mut stream = PushbackStream::new(Cursor::new(Vec::new()), options);

        assert!(stream.unread(&[0u8; 4096]).is_err());
        assert!(stream.unread(&[0u8; 4095]).is_ok());
        assert!(stream.unread(&[0u8; 1]).is_err());
    }

    #[test]
    fn verify_buffer_len_is_adjusted() {
        // Too small, rounded up to the minimum.
        let options = PushbackStreamOptions { buffer_len: 1000 };
        let mut stream = PushbackStream::new(Cursor::new(Vec::new()), options);

        assert!(stream.unread(&[0u8; 4095]).is_ok());
        assert!(stream.unread(&[0u8; 1]).is_err());

        // Not a power of 2, rounded up to the next power of 2.
        let options = PushbackStreamOptions { buffer_len: 5000 };
        let mut stream = PushbackStream::new(Cursor::new(Vec::new()), options);

        assert!(stream.unread(&[0u8; 8191]).is_ok());
        assert!(stream.unread(&[0u8; 1]).is_err());
    }
}
