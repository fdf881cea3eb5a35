// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::audio::{PcmBuffer, SignalSpec};
use cadenza_core::errors::{Error, Result};
use cadenza_core::io::{Pushback, ReadBytes};

use log::{info, warn};

use crate::common::*;
use crate::header::detect_vbr_tag;
use crate::layer3::Layer3;
use crate::reader::FrameReader;

/// `DecoderOptions` is a common set of options that all decoders use.
#[derive(Copy, Clone, Debug)]
pub struct DecoderOptions {
    /// The number of consecutive frames that may fail to decode before the stream is considered
    /// corrupt.
    pub max_consecutive_errors: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions { max_consecutive_errors: 1000 }
    }
}

/// Information about a stream, taken from its first frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StreamInfo {
    /// The signal specification of every decoded block.
    pub spec: SignalSpec,
    /// The MPEG version of the stream.
    pub version: MpegVersion,
    /// True if the first frame carries a VBR information tag.
    pub is_vbr: bool,
}

/// A `PcmSink` consumes decoded PCM blocks in decode order.
pub trait PcmSink {
    fn write_block(&mut self, block: &PcmBuffer) -> Result<()>;
}

impl PcmSink for Vec<i16> {
    fn write_block(&mut self, block: &PcmBuffer) -> Result<()> {
        self.extend_from_slice(block.samples());
        Ok(())
    }
}

/// A streaming MPEG-1, MPEG-2, and MPEG-2.5 layer 3 decoder.
///
/// Frames are pulled from the byte source one at a time, and each is decoded into a block of
/// interleaved 16-bit PCM.
pub struct Mp3Decoder<R: ReadBytes + Pushback> {
    reader: FrameReader<R>,
    layer3: Box<Layer3>,
    options: DecoderOptions,
    info: Option<StreamInfo>,
    buf: Option<PcmBuffer>,
    n_errors: usize,
}

impl<R: ReadBytes + Pushback> Mp3Decoder<R> {
    pub fn new(reader: R, options: DecoderOptions) -> Self {
        Mp3Decoder {
            reader: FrameReader::new(reader),
            layer3: Box::new(Layer3::new()),
            options,
            info: None,
            buf: None,
            n_errors: 0,
        }
    }

    /// Gets the stream information. Returns `None` until the first frame has been read.
    pub fn stream_info(&self) -> Option<&StreamInfo> {
        self.info.as_ref()
    }

    /// Gets a reference to the underlying byte stream.
    pub fn get_ref(&self) -> &R {
        self.reader.get_ref()
    }

    /// Decodes the next frame that produces audio. Returns `Ok(None)` at the end of the stream.
    ///
    /// Frames that fail to decode are skipped. If more than the configured number of consecutive
    /// frames fail, `Error::CorruptStream` is returned.
    pub fn decode_next(&mut self) -> Result<Option<&PcmBuffer>> {
        let header = loop {
            let frame = match self.reader.read_frame()? {
                Some(frame) => frame,
                None => return Ok(None),
            };

            if self.info.is_none() {
                let vbr_tag = detect_vbr_tag(&frame.header, frame.body);

                info!(
                    "mp3: {:?} layer 3, {} Hz, {:?}, vbr tag: {:?}",
                    frame.header.version,
                    frame.header.sample_rate,
                    frame.header.channel_mode,
                    vbr_tag
                );

                self.info = Some(StreamInfo {
                    spec: frame.header.spec(),
                    version: frame.header.version,
                    is_vbr: vbr_tag.map_or(false, |tag| tag.is_vbr()),
                });
            }

            match self.layer3.decode_frame(&frame.header, frame.body) {
                Ok(true) => {
                    self.n_errors = 0;
                    break frame.header;
                }
                // Not enough main data was buffered. The frame produces no audio.
                Ok(false) => (),
                Err(err) if err.is_recoverable() => {
                    self.n_errors += 1;

                    warn!("mp3: skipping frame ({} consecutive errors), {}", self.n_errors, err);

                    if self.n_errors > self.options.max_consecutive_errors {
                        return Err(Error::CorruptStream(self.n_errors));
                    }
                }
                Err(err) => return Err(err),
            }
        };

        // The output block is created on the first decoded frame. All following frames have the
        // same signal specification since the frame reader only syncs to matching headers.
        let buf = self.buf.get_or_insert_with(|| PcmBuffer::new(1152, header.spec()));

        buf.clear();

        let n_frames = header.n_frames();

        match header.n_channels() {
            1 => buf.append_planar(&[self.layer3.pcm(0, n_frames)]),
            _ => buf.append_planar(&[self.layer3.pcm(0, n_frames), self.layer3.pcm(1, n_frames)]),
        }

        Ok(Some(buf))
    }

    /// Decodes the stream into `sink` until the end of the stream, or until `should_stop` returns
    /// true. `should_stop` is checked before each frame. Returns the number of audio frames
    /// written.
    pub fn decode_all<S, F>(&mut self, sink: &mut S, mut should_stop: F) -> Result<u64>
    where
        S: PcmSink + ?Sized,
        F: FnMut() -> bool,
    {
        let mut n_frames = 0;

        while !should_stop() {
            match self.decode_next()? {
                Some(block) => {
                    sink.write_block(block)?;
                    n_frames += block.frames() as u64;
                }
                None => break,
            }
        }

        Ok(n_frames)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use cadenza_core::audio::Channels;
    use cadenza_core::io::PushbackStream;

    use super::*;
    use crate::header::{parse_frame_header, MPEG_HEADER_LEN};

    // MPEG1, layer 3, no CRC, 128 kbps, 44.1 kHz, no padding, mono.
    const HEADER: [u8; 4] = [0xff, 0xfb, 0x90, 0xc0];

    /// A frame with all-zero side information and main data. It decodes to silence.
    fn silent_frame() -> Vec<u8> {
        let mut frame = HEADER.to_vec();
        frame.resize(417, 0);
        frame
    }

    /// A frame whose first granule uses window switching with the reserved block type.
    fn invalid_frame() -> Vec<u8> {
        let mut frame = silent_frame();
        // The window switching flag is bit 51 of the side information.
        frame[4 + 6] = 0x10;
        frame
    }

    type Stream = PushbackStream<Cursor<Vec<u8>>>;

    fn decoder(frames: &[Vec<u8>], options: DecoderOptions) -> Mp3Decoder<Stream> {
        let stream = PushbackStream::new(Cursor::new(frames.concat()), Default::default());
        Mp3Decoder::new(stream, options)
    }

    #[test]
    fn verify_silent_frames_decode_to_silence() {
        let frames = vec![silent_frame(); 3];
        let mut decoder = decoder(&frames, Default::default());

        let mut pcm: Vec<i16> = Vec::new();
        let n_frames = decoder.decode_all(&mut pcm, || false).unwrap();

        assert_eq!(n_frames, 3 * 1152);
        assert_eq!(pcm.len(), 3 * 1152);
        assert!(pcm.iter().all(|&s| s == 0));

        let info = decoder.stream_info().unwrap();
        assert_eq!(info.spec, SignalSpec::new(44100, Channels::FRONT_CENTRE));
        assert_eq!(info.version, MpegVersion::Mpeg1);
        assert!(!info.is_vbr);
    }

    #[test]
    fn verify_lsf_silent_frames() {
        // MPEG2, 64 kbps, 22.05 kHz, in mono and in joint stereo with intensity stereo.
        for (header_word, channels) in [
            (0xfff3_80c0u32, Channels::FRONT_CENTRE),
            (0xfff3_8050, Channels::FRONT_LEFT | Channels::FRONT_RIGHT),
        ] {
            let header = parse_frame_header(header_word).unwrap();
            assert_eq!(header.frame_size, 204);
            assert_eq!(header.n_channels() == 2, header.is_intensity_stereo());

            let mut frame = header_word.to_be_bytes().to_vec();
            frame.resize(MPEG_HEADER_LEN + header.frame_size, 0);

            let mut decoder = decoder(&vec![frame; 3], Default::default());

            for _ in 0..3 {
                let block = decoder.decode_next().unwrap().unwrap();

                // A LSF frame is a single granule.
                assert_eq!(block.frames(), 576);
                assert_eq!(block.samples().len(), 576 * header.n_channels());
                assert!(block.samples().iter().all(|&s| s == 0));
            }

            assert!(decoder.decode_next().unwrap().is_none());

            let info = decoder.stream_info().unwrap();
            assert_eq!(info.spec, SignalSpec::new(22050, channels));
            assert_eq!(info.version, MpegVersion::Mpeg2);
        }
    }

    #[test]
    fn verify_last_frame_before_trailing_data() {
        let mut id3v1 = b"TAG".to_vec();
        id3v1.resize(128, 0);

        for tail in [id3v1, vec![0x00, 0x00]] {
            let frames = vec![silent_frame(), silent_frame(), tail];
            let mut decoder = decoder(&frames, Default::default());

            let mut pcm: Vec<i16> = Vec::new();
            assert_eq!(decoder.decode_all(&mut pcm, || false).unwrap(), 2 * 1152);
            assert_eq!(pcm.len(), 2 * 1152);
        }
    }

    #[test]
    fn verify_stop_between_frames() {
        let frames = vec![silent_frame(); 4];
        let mut decoder = decoder(&frames, Default::default());

        let mut n_checks = 0;
        let mut pcm: Vec<i16> = Vec::new();

        let n_frames = decoder
            .decode_all(&mut pcm, || {
                n_checks += 1;
                n_checks > 2
            })
            .unwrap();

        assert_eq!(n_frames, 2 * 1152);
        assert_eq!(pcm.len(), 2 * 1152);
    }

    #[test]
    fn verify_invalid_frames_are_skipped() {
        let frames = vec![invalid_frame(), silent_frame(), invalid_frame(), silent_frame()];
        let mut decoder = decoder(&frames, Default::default());

        assert_eq!(decoder.decode_next().unwrap().unwrap().frames(), 1152);
        assert_eq!(decoder.decode_next().unwrap().unwrap().frames(), 1152);
        assert!(decoder.decode_next().unwrap().is_none());
    }

    #[test]
    fn verify_corrupt_stream() {
        let frames = vec![invalid_frame(); 4];
        let options = DecoderOptions { max_consecutive_errors: 2 };
        let mut decoder = decoder(&frames, options);

        match decoder.decode_next() {
            Err(Error::CorruptStream(n)) => assert_eq!(n, 3),
            _ => panic!("expected a corrupt stream error"),
        }
    }

    #[test]
    fn verify_empty_stream() {
        let mut decoder = decoder(&[], Default::default());

        assert!(decoder.decode_next().unwrap().is_none());
        assert!(decoder.stream_info().is_none());
    }
}
