// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::errors::{decode_error, Result};
use cadenza_core::io::BitReaderLtr;

use log::debug;

use crate::common::*;
use crate::reservoir::{BitReservoir, RESERVOIR_LEN};
use crate::synthesis::{self, SynthesisState};

mod bitstream;
mod huffman;
mod huffman_tables;
mod hybrid_synthesis;
mod requantize;
mod stereo;

/// `FrameData` contains the side_info and main_data portions of a MPEG audio frame.
#[derive(Default, Debug)]
struct FrameData {
    /// The byte offset into the bit resevoir indicating the location of the first bit of main_data.
    /// If 0, main_data begins after the side_info of this frame.
    main_data_begin: u16,
    /// Scale factor selector information, per channel. Each channel has 4 groups of bands that may
    /// be scaled in each granule. Scale factors may optionally be used by both granules to save
    /// bits. Bands that share scale factors for both granules are indicated by a true. Otherwise,
    /// each granule must store its own set of scale factors.
    ///
    /// Mapping of array indicies to bands [0..6, 6..11, 11..16, 16..21].
    scfsi: [[bool; 4]; 2],
    /// The granules.
    granules: [Granule; 2],
}

impl FrameData {
    /// Get a mutable slice to the granule(s) in side_info. For MPEG1, a slice of 2 granules are
    /// returned. For MPEG2/2.5, a single granule slice is returned.
    #[inline(always)]
    fn granules_mut(&mut self, version: MpegVersion) -> &mut [Granule] {
        match version {
            MpegVersion::Mpeg1 => &mut self.granules[..2],
            _ => &mut self.granules[..1],
        }
    }
}

#[derive(Default, Debug)]
struct Granule {
    /// Channels in the granule.
    channels: [GranuleChannel; 2],
}

#[derive(Debug)]
struct GranuleChannel {
    /// Total number of bits used for scale factors (part2) and Huffman encoded data (part3).
    part2_3_length: u16,
    /// HALF the number of samples in the big_values partition (sum of all samples in
    /// `region[0..3]`).
    big_values: u16,
    /// Logarithmic quantization step size.
    global_gain: u8,
    /// Depending on the MPEG version, `scalefac_compress` determines how many bits are allocated
    /// per scale factor.
    ///
    /// - For MPEG1 bitstreams, `scalefac_compress` is a 4-bit index into
    ///   `SCALE_FACTOR_SLEN[0..16]` to obtain a number of bits per scale factor pair.
    ///
    /// - For MPEG2/2.5 bitstreams, `scalefac_compress` is a 9-bit value that decodes into
    ///   `slen[0..3]` for the number of bits per scale factor, and depending on which range the
    ///   value falls into, for which bands.
    scalefac_compress: u16,
    /// Indicates the block type (type of window) for the channel in the granule.
    block_type: BlockType,
    /// Gain factors for each short window. Each gain factor has a maximum value of 7 (3 bits).
    subblock_gain: [u8; 3],
    /// The Huffman table to use for decoding `region[0..3]` of big_values.
    table_select: [u8; 3],
    /// The number of long scale factor bands in region0, minus 1.
    region0_count: u8,
    /// The number of long scale factor bands in region1, minus 1.
    region1_count: u8,
    /// The index of the first sample in region1 of big_values.
    region1_start: usize,
    /// The index of the first sample in region2 of big_values.
    region2_start: usize,
    /// Indicates if the pre-emphasis amount for each scale factor band should be added on to each
    /// scale factor before requantization.
    preflag: bool,
    /// A 0.5x (false) or 1x (true) multiplier for scale factors.
    scalefac_scale: bool,
    /// Use Huffman Quads table A (0) or B (1), for decoding the count1 partition.
    count1table_select: u8,
    /// Long (scalefac_l) and short (scalefac_s) window scale factor bands. Must be interpreted
    /// based on the block type of the granule.
    ///
    /// For `block_type == BlockType::Short { is_mixed: false }`:
    ///   - `scalefac_s[0..36]` -> `scalefacs[0..36]`
    ///
    /// For `block_type == BlockType::Short { is_mixed: true }`:
    ///   - `scalefac_l[0..8]`  -> `scalefacs[0..8]`
    ///   - `scalefac_s[0..27]` -> `scalefacs[8..35]`
    ///
    /// For `block_type != BlockType::Short { .. }`:
    ///   - `scalefac_l[0..21]` -> `scalefacs[0..21]`
    ///
    /// The scale factors of the last band are never transmitted and are always 0.
    scalefacs: [u8; 39],
    /// The starting sample index of the rzero partition, or the count of big_values and count1
    /// samples.
    rzero: usize,
}

impl Default for GranuleChannel {
    fn default() -> Self {
        GranuleChannel {
            part2_3_length: 0,
            big_values: 0,
            global_gain: 0,
            scalefac_compress: 0,
            block_type: BlockType::Long,
            subblock_gain: [0; 3],
            table_select: [0; 3],
            region0_count: 0,
            region1_count: 0,
            region1_start: 0,
            region2_start: 0,
            preflag: false,
            scalefac_scale: false,
            count1table_select: 0,
            scalefacs: [0; 39],
            rzero: 0,
        }
    }
}

/// `Layer3` is the per-stream state of the layer 3 decoder. Apart from the bit reservoir and the
/// synthesis history, every buffer is scratch space that is overwritten by each frame.
pub struct Layer3 {
    reservoir: BitReservoir,
    /// The reservoir byte position of the first main data byte of the current frame.
    frame_start: usize,
    frame_data: FrameData,
    quantized: [[i32; 576]; 2],
    samples: [[f32; 576]; 2],
    overlap: [[[f32; 18]; 32]; 2],
    synthesis: [SynthesisState; 2],
    pcm: [[f32; 2 * 576]; 2],
}

impl Layer3 {
    pub fn new() -> Self {
        Layer3 {
            reservoir: BitReservoir::new(),
            frame_start: 0,
            frame_data: Default::default(),
            quantized: [[0; 576]; 2],
            samples: [[0.0; 576]; 2],
            overlap: [[[0.0; 18]; 32]; 2],
            synthesis: Default::default(),
            pcm: [[0.0; 2 * 576]; 2],
        }
    }

    /// Gets the first `n_frames` PCM samples of a channel decoded by the last call to
    /// `decode_frame`.
    pub fn pcm(&self, ch: usize, n_frames: usize) -> &[f32] {
        &self.pcm[ch][..n_frames]
    }

    /// Appends the main data of a frame to the bit reservoir, and positions the reservoir at the
    /// first bit of the frame's main data. Returns false if the reservoir does not hold all the
    /// main data of the frame.
    fn fill_reservoir(&mut self, main_data: &[u8], main_data_begin: usize) -> bool {
        // The main data of the previous frame ends at the next byte boundary.
        let flush = self.reservoir.bit_count() & 7;

        if flush != 0 {
            self.reservoir.skip_bits(8 - flush);
        }

        let main_data_end = self.reservoir.bit_count() >> 3;

        for &byte in main_data {
            self.reservoir.put_byte(byte);
        }

        let frame_start = self.frame_start;
        self.frame_start += main_data.len();

        // The main data of this frame begins main_data_begin bytes before the frame's own main
        // data. Anything between the end of the previous frame's main data and there is padding.
        if frame_start < main_data_end + main_data_begin {
            return false;
        }

        let discard = frame_start - main_data_end - main_data_begin;

        // Keep the byte positions bounded.
        if main_data_end > RESERVOIR_LEN {
            self.frame_start -= RESERVOIR_LEN;
            self.reservoir.rewind_bytes(RESERVOIR_LEN);
        }

        self.reservoir.skip_bits(8 * discard);

        true
    }

    /// Decodes a layer 3 frame. `body` is the frame following the header word. Returns true if PCM
    /// was produced, or false if the frame's main data was not available.
    pub fn decode_frame(&mut self, header: &FrameHeader, body: &[u8]) -> Result<bool> {
        self.frame_data = Default::default();

        let main_data_start = header.crc_len() + header.side_info_len();

        if body.len() < main_data_start {
            return decode_error("mp3: frame too short for side_info");
        }

        // The CRC is not verified.
        let mut bs = BitReaderLtr::new(&body[header.crc_len()..main_data_start]);

        let side_info = bitstream::read_side_info(&mut bs, header, &mut self.frame_data);

        // The main data is buffered even if the side information is invalid since later frames
        // may reference it.
        let main_data_begin = usize::from(self.frame_data.main_data_begin);
        let is_filled = self.fill_reservoir(&body[main_data_start..], main_data_begin);

        side_info?;

        if !is_filled {
            debug!("mp3: bit reservoir underflow, skipping frame");
            return Ok(false);
        }

        for gr in 0..header.n_granules() {
            for ch in 0..header.n_channels() {
                let part2_start = self.reservoir.bit_count();

                // Read the scale factors (part2) and get the number of bits read.
                let part2_len = if header.is_mpeg1() {
                    bitstream::read_scale_factors_mpeg1(
                        &mut self.reservoir,
                        gr,
                        ch,
                        &mut self.frame_data,
                    )
                }
                else {
                    bitstream::read_scale_factors_mpeg2(
                        &mut self.reservoir,
                        ch > 0 && header.is_intensity_stereo(),
                        &mut self.frame_data.granules[gr].channels[ch],
                    )
                }?;

                let channel = &mut self.frame_data.granules[gr].channels[ch];

                let part2_3_length = usize::from(channel.part2_3_length);

                if part2_len as usize > part2_3_length {
                    return decode_error("mp3: part2_3_length is not valid");
                }

                channel.rzero = huffman::read_huffman_samples(
                    &mut self.reservoir,
                    channel,
                    part2_start + part2_3_length,
                    &mut self.quantized[ch],
                )?;

                requantize::requantize(header, channel, &self.quantized[ch], &mut self.samples[ch]);
            }

            let granule = &mut self.frame_data.granules[gr];

            if header.n_channels() == 2 {
                stereo::stereo(header, granule, &mut self.samples)?;
            }

            for ch in 0..header.n_channels() {
                let channel = &granule.channels[ch];
                let samples = &mut self.samples[ch];

                // Reorder the spectral samples in short blocks into sub-band order.
                hybrid_synthesis::reorder(header, channel, samples);

                hybrid_synthesis::antialias(channel, samples);

                hybrid_synthesis::hybrid_synthesis(channel, &mut self.overlap[ch], samples);

                hybrid_synthesis::frequency_inversion(samples);

                synthesis::synthesis(
                    &mut self.synthesis[ch],
                    18,
                    &samples[..],
                    &mut self.pcm[ch][gr * 576..(gr + 1) * 576],
                );
            }
        }

        Ok(true)
    }
}

impl Default for Layer3 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    // MPEG1, layer 3, 128 kbps, 44.1 kHz, mono. The side information is 17 bytes.
    const MONO: u32 = 0xfffb_90c0;

    /// Packs (value, bit width) fields MSB-first.
    pub(super) fn pack(fields: &[(u32, u32)]) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut acc = 0u64;
        let mut n_bits = 0;

        for &(value, width) in fields {
            acc = (acc << width) | u64::from(value);
            n_bits += width;

            while n_bits >= 8 {
                bytes.push((acc >> (n_bits - 8)) as u8);
                n_bits -= 8;
            }
        }

        if n_bits > 0 {
            bytes.push((acc << (8 - n_bits)) as u8);
        }

        bytes
    }

    /// A mono MPEG1 frame where the first granule holds a single count1 quadruple, (1, 0, 0, 0),
    /// and the second granule is silent.
    fn count1_frame(header: &FrameHeader, is_mixed: bool) -> Vec<u8> {
        // main_data_begin, private, and scfsi.
        let mut fields = vec![(0, 9), (0, 5), (0, 4)];

        // part2_3_length covers the 4 bit table B code word and 1 sign bit. There are no scale
        // factors or big_values.
        fields.extend_from_slice(&[(5, 12), (0, 9), (210, 8), (0, 4)]);

        if is_mixed {
            // window_switching, block_type, mixed_block, table_select[0..2], subblock_gain[0..3].
            fields.extend_from_slice(&[(1, 1), (0b10, 2), (1, 1), (0, 5), (0, 5)]);
            fields.extend_from_slice(&[(0, 3), (0, 3), (0, 3)]);
        }
        else {
            // window_switching, table_select[0..3], region0_count, region1_count.
            fields.extend_from_slice(&[(0, 1), (0, 5), (0, 5), (0, 5), (0, 4), (0, 3)]);
        }

        // preflag, scalefac_scale, count1table_select.
        fields.extend_from_slice(&[(0, 1), (0, 1), (1, 1)]);

        // A silent long block granule.
        fields.extend_from_slice(&[(0, 12), (0, 9), (0, 8), (0, 4), (0, 1), (0, 5), (0, 5)]);
        fields.extend_from_slice(&[(0, 5), (0, 4), (0, 3), (0, 1), (0, 1), (0, 1)]);

        let mut body = pack(&fields);
        assert_eq!(body.len(), header.side_info_len());

        // Table B code word 0111 for (1, 0, 0, 0), then a positive sign bit.
        body.push(0b0111_0000);
        body.resize(header.frame_size, 0);
        body
    }

    /// A frame whose granules have no main data at all.
    fn silent_frame(header: &FrameHeader, main_data_begin: u8) -> Vec<u8> {
        let mut body = vec![0; header.frame_size];
        // The upper 8 bits of the 9-bit main_data_begin.
        body[0] = main_data_begin >> 1;
        body[1] = main_data_begin << 7;
        body
    }

    #[test]
    fn verify_silent_frames() {
        let header = parse_frame_header(MONO).unwrap();
        let mut layer3 = Layer3::new();

        for _ in 0..3 {
            let body = silent_frame(&header, 0);

            assert!(layer3.decode_frame(&header, &body).unwrap());
            assert!(layer3.pcm(0, 1152).iter().all(|&s| s.abs() < 1e-6));
        }
    }

    #[test]
    fn verify_mixed_block_frame() {
        let header = parse_frame_header(MONO).unwrap();

        let mut long = Layer3::new();
        assert!(long.decode_frame(&header, &count1_frame(&header, false)).unwrap());

        let mut mixed = Layer3::new();
        assert!(mixed.decode_frame(&header, &count1_frame(&header, true)).unwrap());

        let channel = &mixed.frame_data.granules[0].channels[0];
        assert_eq!(channel.block_type, BlockType::Short { is_mixed: true });
        assert_eq!(channel.rzero, 4);

        // The only non-zero line is in the first sub-band, which a mixed block transforms like a
        // long block with the normal window.
        let long_pcm = long.pcm(0, 1152);
        let mixed_pcm = mixed.pcm(0, 1152);

        assert!(long_pcm.iter().any(|&s| s.abs() > 1e-4));
        assert!(long_pcm.iter().zip(mixed_pcm).all(|(&a, &b)| (a - b).abs() < 1e-6));
    }

    #[test]
    fn verify_reservoir_underflow() {
        let header = parse_frame_header(MONO).unwrap();
        let mut layer3 = Layer3::new();

        // The first frame can not reference main data from before the stream.
        let body = silent_frame(&header, 20);
        assert!(!layer3.decode_frame(&header, &body).unwrap());

        // The second frame can.
        assert!(layer3.decode_frame(&header, &body).unwrap());
    }

    #[test]
    fn verify_fill_reservoir_discards_padding() {
        let mut layer3 = Layer3::new();

        assert!(layer3.fill_reservoir(&[0x11, 0x22, 0x33, 0x44], 0));

        // Consume 1 byte and 3 bits of the first frame. The rest of the frame is padding.
        layer3.reservoir.skip_bits(11);

        // The second frame's main data begins 1 byte before its own bytes.
        assert!(layer3.fill_reservoir(&[0x55, 0x66], 1));
        assert_eq!(layer3.reservoir.get_bits(16), 0x4455);
    }

    #[test]
    fn verify_fill_reservoir_wraps() {
        let mut layer3 = Layer3::new();

        let main_data = [0xa5u8; 1000];

        // Fill and fully consume enough frames to wrap the reservoir window.
        for _ in 0..10 {
            assert!(layer3.fill_reservoir(&main_data, 0));
            assert_eq!(layer3.reservoir.bit_count() >> 3, layer3.frame_start - 1000);
            layer3.reservoir.skip_bits(8 * 1000);
        }

        assert!(layer3.frame_start <= 2 * RESERVOIR_LEN);
        assert!(layer3.fill_reservoir(&[0x5a, 0xc3], 0));
        assert_eq!(layer3.reservoir.get_bits(16), 0x5ac3);
    }
}
