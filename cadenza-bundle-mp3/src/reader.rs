// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

use cadenza_core::errors::{limit_error, Result};
use cadenza_core::io::{Pushback, ReadBytes};

use log::debug;

use crate::common::FrameHeader;
use crate::header::*;

/// The length of an ID3v2 tag header.
const ID3V2_HEADER_LEN: usize = 10;

/// A frame read from the stream.
pub struct Frame<'a> {
    /// The parsed frame header.
    pub header: FrameHeader,
    /// The raw header word.
    pub header_word: u32,
    /// The frame bytes following the header word: the optional CRC, the side information, and
    /// the main data.
    pub body: &'a [u8],
}

/// `FrameReader` synchronizes to, and reads, MPEG audio frames from a byte stream.
///
/// The first frame is found by looking for the 11 bit frame sync alone. Once found, the version,
/// layer, sample rate, and channel count of the first frame must be matched by all subsequent
/// frames. While searching for sync, a candidate frame is only accepted if it is followed by
/// another plausible frame header, a trailing tag, or the end of the stream. Once in sync, a frame
/// that starts directly after the previous frame is accepted without looking ahead.
pub struct FrameReader<R: ReadBytes + Pushback> {
    reader: R,
    mode: SyncMode,
    buf: Box<[u8]>,
    is_tag_checked: bool,
    /// True if the previous frame was accepted and the next frame is expected to start directly
    /// after it.
    is_synced: bool,
}

impl<R: ReadBytes + Pushback> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        FrameReader {
            reader,
            mode: SyncMode::Initial,
            buf: vec![0; MAX_MPEG_FRAME_SIZE].into_boxed_slice(),
            is_tag_checked: false,
            is_synced: false,
        }
    }

    /// Gets the current synchronization mode.
    pub fn sync_mode(&self) -> SyncMode {
        self.mode
    }

    /// Gets a reference to the underlying byte stream.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Reads the next frame. Returns `Ok(None)` at the end of the stream, or if the remainder of
    /// the stream is too short to be a frame (usually a trailing ID3v1 tag).
    pub fn read_frame(&mut self) -> Result<Option<Frame<'_>>> {
        if !self.is_tag_checked {
            self.is_tag_checked = true;

            match skip_id3v2(&mut self.reader) {
                Err(err) if err.is_end_of_stream() => return Ok(None),
                res => res?,
            };
        }

        let (header_word, header) = loop {
            let header_word = match self.sync()? {
                Some(word) => word,
                None => return Ok(None),
            };

            // A frame found directly after the previous one continues the synced run.
            let is_contiguous = self.is_synced;

            let header = match parse_frame_header(header_word) {
                Ok(header) => header,
                Err(err) if err.is_recoverable() => {
                    debug!("mp3: skipping candidate frame header, {}", err);
                    self.is_synced = false;
                    self.unread(&header_word.to_be_bytes()[1..])?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let body = &mut self.buf[..header.frame_size];

            if self.reader.read_buf(body)? < header.frame_size {
                debug!("mp3: short frame at end of stream, treating as a trailing tag");
                return Ok(None);
            }

            if is_contiguous || self.is_next_frame_synced()? {
                break (header_word, header);
            }

            // The candidate is not followed by another frame, so resume scanning one byte after
            // the start of the candidate.
            debug!("mp3: candidate frame is not followed by a frame header, resyncing");

            let mut rejected = Vec::with_capacity(3 + header.frame_size);
            rejected.extend_from_slice(&header_word.to_be_bytes()[1..]);
            rejected.extend_from_slice(&self.buf[..header.frame_size]);

            self.unread(&rejected)?;
        };

        self.is_synced = true;

        if self.mode == SyncMode::Initial {
            self.mode = SyncMode::strict(header_word);
        }

        Ok(Some(Frame { header_word, body: &self.buf[..header.frame_size], header }))
    }

    /// Scan the stream one byte at a time until a plausible frame header word is found. Returns
    /// `Ok(None)` if the end of the stream is reached first.
    fn sync(&mut self) -> Result<Option<u32>> {
        let mut triple = [0u8; 3];

        if self.reader.read_buf(&mut triple)? < triple.len() {
            return Ok(None);
        }

        let mut word = u32::from_be_bytes([0, triple[0], triple[1], triple[2]]);

        loop {
            let byte = match self.reader.read_byte() {
                Ok(byte) => byte,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(err) => return Err(err.into()),
            };

            word = (word << 8) | u32::from(byte);

            if is_sync_mark(word, self.mode) {
                return Ok(Some(word));
            }

            // Bytes between frames mean the stream is no longer in sync.
            self.is_synced = false;
        }
    }

    /// Peek at the next 4 bytes. The stream is synced if they form a plausible frame header, or
    /// the start of an ID3v1 or APEv2 tag, or if fewer than 4 bytes remain in the stream.
    fn is_next_frame_synced(&mut self) -> Result<bool> {
        let mut next = [0u8; 4];

        let len = self.reader.read_buf(&mut next)?;
        self.unread(&next[..len])?;

        let is_synced = match &next[..len] {
            [b'T', b'A', b'G', _] | [b'A', b'P', b'E', b'T'] => true,
            [_, _, _, _] => is_sync_mark(u32::from_be_bytes(next), self.mode),
            _ => true,
        };

        Ok(is_synced)
    }

    fn unread(&mut self, buf: &[u8]) -> Result<()> {
        if self.reader.unread(buf).is_err() {
            return limit_error("mp3: pushback capacity exceeded");
        }
        Ok(())
    }
}

/// If the stream begins with an ID3v2 tag, skip it. Returns the number of bytes skipped.
pub fn skip_id3v2<R: ReadBytes + Pushback>(mut reader: R) -> Result<u64> {
    let mut tag_header = [0u8; ID3V2_HEADER_LEN];

    let len = reader.read_buf(&mut tag_header)?;

    if len < ID3V2_HEADER_LEN || &tag_header[..3] != b"ID3" {
        reader.unread(&tag_header[..len])?;
        return Ok(0);
    }

    // The tag size is a 28-bit synchsafe integer (7 bits per byte) following the 3 byte marker, 2
    // byte version, and 1 byte flags. It excludes the tag header itself.
    let size =
        tag_header[6..].iter().fold(0u64, |size, &byte| (size << 7) | u64::from(byte & 0x7f));

    reader.ignore_bytes(size)?;

    debug!("mp3: skipped id3v2 tag of {} bytes", size + ID3V2_HEADER_LEN as u64);

    Ok(size + ID3V2_HEADER_LEN as u64)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use cadenza_core::io::{PushbackStream, PushbackStreamOptions};

    use super::*;

    fn stream(bytes: Vec<u8>) -> PushbackStream<Cursor<Vec<u8>>> {
        PushbackStream::new(Cursor::new(bytes), PushbackStreamOptions::default())
    }

    // MPEG1, layer 3, no CRC, 128 kbps, 44.1 kHz, no padding, mono.
    const HEADER: [u8; 4] = [0xff, 0xfb, 0x90, 0xc0];

    fn frame(fill: u8) -> Vec<u8> {
        let mut frame = HEADER.to_vec();
        frame.resize(417, fill);
        frame
    }

    #[test]
    fn verify_skip_empty_id3v2() {
        let mut bytes = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
        bytes.extend_from_slice(&[0xaa, 0xbb]);

        let mut stream = stream(bytes);

        assert_eq!(skip_id3v2(&mut stream).unwrap(), 10);
        assert_eq!(stream.pos(), 10);
        assert_eq!(stream.read_byte().unwrap(), 0xaa);
    }

    #[test]
    fn verify_skip_id3v2_synchsafe_size() {
        // A size of 0x01 0x7f is 255 bytes.
        let mut bytes = b"ID3\x03\x00\x00\x00\x00\x01\x7f".to_vec();
        bytes.extend(std::iter::repeat(0x11).take(255));
        bytes.push(0x22);

        let mut stream = stream(bytes);

        assert_eq!(skip_id3v2(&mut stream).unwrap(), 265);
        assert_eq!(stream.read_byte().unwrap(), 0x22);
    }

    #[test]
    fn verify_no_id3v2() {
        let mut stream = stream(frame(0));

        assert_eq!(skip_id3v2(&mut stream).unwrap(), 0);
        assert_eq!(stream.pos(), 0);
        assert_eq!(stream.read_quad_bytes().unwrap(), HEADER);
    }

    #[test]
    fn verify_read_frames() {
        let mut bytes = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
        // Garbage before the first frame.
        bytes.extend_from_slice(&[0x00, 0xff, 0x12]);
        bytes.extend(frame(1));
        bytes.extend(frame(2));
        // A truncated frame at the end of the stream.
        bytes.extend_from_slice(&HEADER);
        bytes.extend_from_slice(b"TAG");

        let mut reader = FrameReader::new(stream(bytes));

        let first = reader.read_frame().unwrap().unwrap();
        assert_eq!(first.header.frame_size, 413);
        assert_eq!(first.body.len(), 413);
        assert!(first.body.iter().all(|&b| b == 1));

        assert_eq!(reader.sync_mode(), SyncMode::strict(u32::from_be_bytes(HEADER)));

        let second = reader.read_frame().unwrap().unwrap();
        assert!(second.body.iter().all(|&b| b == 2));

        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn verify_reject_unconfirmed_frame() {
        // A false sync whose "frame" is not followed by a frame header. The real frame starts
        // inside the rejected candidate's payload.
        let mut bytes = HEADER.to_vec();
        bytes.extend_from_slice(&[0x00; 8]);
        bytes.extend(frame(3));
        bytes.extend(frame(4));

        let mut reader = FrameReader::new(stream(bytes));

        let first = reader.read_frame().unwrap().unwrap();
        assert!(first.body.iter().all(|&b| b == 3));

        let second = reader.read_frame().unwrap().unwrap();
        assert!(second.body.iter().all(|&b| b == 4));

        assert!(reader.read_frame().unwrap().is_none());
    }

    fn read_all_frames(bytes: Vec<u8>) -> Vec<u8> {
        let mut reader = FrameReader::new(stream(bytes));
        let mut fills = Vec::new();

        while let Some(frame) = reader.read_frame().unwrap() {
            fills.push(frame.body[0]);
        }

        fills
    }

    #[test]
    fn verify_trailing_id3v1_tag() {
        let mut bytes = frame(1);
        bytes.extend(frame(2));
        bytes.extend_from_slice(b"TAG");
        bytes.extend_from_slice(&[0; 125]);

        assert_eq!(read_all_frames(bytes), [1, 2]);
    }

    #[test]
    fn verify_trailing_garbage() {
        let mut bytes = frame(1);
        bytes.extend(frame(2));
        bytes.extend_from_slice(&[0x00, 0x00]);

        assert_eq!(read_all_frames(bytes), [1, 2]);
    }

    #[test]
    fn verify_single_frame_with_trailing_ape_tag() {
        let mut bytes = frame(5);
        bytes.extend_from_slice(b"APETAGEX");
        bytes.extend_from_slice(&[0; 24]);

        assert_eq!(read_all_frames(bytes), [5]);
    }

    #[test]
    fn verify_resync_after_garbage_between_frames() {
        // Garbage between frames drops the reader out of sync, so the frame after it must be
        // confirmed again.
        let mut bytes = frame(1);
        bytes.extend(frame(2));
        bytes.extend_from_slice(&[0x12, 0x34]);
        bytes.extend(frame(3));
        bytes.extend(frame(4));

        assert_eq!(read_all_frames(bytes), [1, 2, 3, 4]);
    }
}
