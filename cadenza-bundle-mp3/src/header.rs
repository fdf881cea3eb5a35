// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::errors::{decode_error, unsupported_error, Result};

use crate::common::*;

/// The length in bytes of a MPEG frame header word.
pub const MPEG_HEADER_LEN: usize = 4;

/// The maximum length in bytes of a MPEG audio frame including the header.
pub const MAX_MPEG_FRAME_SIZE: usize = 2881;

/// Bit-rate lookup table for MPEG version 1 layer 3.
const BIT_RATES_MPEG1_L3: [u32; 15] = [
    0, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000, 128_000, 160_000, 192_000,
    224_000, 256_000, 320_000,
];

/// Bit-rate lookup table for MPEG version 2 & 2.5 audio layer 3.
const BIT_RATES_MPEG2_L3: [u32; 15] = [
    0, 8_000, 16_000, 24_000, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000,
    128_000, 144_000, 160_000,
];

/// The bits of a header word that must stay constant for the remainder of the stream once the
/// first frame is found: sync, version, layer, and sample rate.
const STRICT_SYNC_MASK: u32 = 0xfffe_0c00;

/// How a candidate header word is matched against the stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyncMode {
    /// Only the 11 bit frame sync is required. Used to find the first frame.
    Initial,
    /// The version, layer, sample rate, and channel count must match the first frame.
    Strict { sync_word: u32, is_mono: bool },
}

impl SyncMode {
    /// Derive the strict sync mode from the header word of the first frame.
    pub fn strict(first_header: u32) -> Self {
        SyncMode::Strict {
            sync_word: first_header & STRICT_SYNC_MASK,
            is_mono: first_header & 0xc0 == 0xc0,
        }
    }
}

/// Quickly check if a header word may be valid.
#[inline]
pub fn check_header(header: u32) -> bool {
    // Version (0x1 is not allowed).
    if (header >> 19) & 0x3 == 0x1 {
        return false;
    }
    // Layer (0x0 is not allowed).
    if (header >> 17) & 0x3 == 0x0 {
        return false;
    }
    // Bitrate (0x0, free format, is not supported, and 0xf is not allowed).
    let bitrate_idx = (header >> 12) & 0xf;
    if bitrate_idx == 0x0 || bitrate_idx == 0xf {
        return false;
    }
    // Sample rate (0x3 is not allowed).
    if (header >> 10) & 0x3 == 0x3 {
        return false;
    }
    true
}

/// Returns true if the provided header word is a plausible frame header under the given sync
/// mode.
#[inline]
pub fn is_sync_mark(header: u32, mode: SyncMode) -> bool {
    let synced = match mode {
        SyncMode::Initial => header & 0xffe0_0000 == 0xffe0_0000,
        SyncMode::Strict { sync_word, is_mono } => {
            header & STRICT_SYNC_MASK == sync_word && (header & 0xc0 == 0xc0) == is_mono
        }
    };

    synced && check_header(header)
}

/// Parse a synchronized header word into a `FrameHeader`.
pub fn parse_frame_header(header: u32) -> Result<FrameHeader> {
    // The MPEG audio header is structured as follows:
    //
    // 0b1111_1111 0b111v_vlly 0brrrr_hhpx 0bmmmm_coee
    // where:
    //     vv   = version, ll = layer      , y = crc
    //     rrrr = bitrate, hh = sample rate, p = padding , x  = private bit
    //     mmmm = mode   , c  = copyright  , o = original, ee = emphasis

    let version = match (header & 0x18_0000) >> 19 {
        0b00 => MpegVersion::Mpeg2p5,
        0b10 => MpegVersion::Mpeg2,
        0b11 => MpegVersion::Mpeg1,
        _ => return decode_error("mp3: invalid MPEG version"),
    };

    match (header & 0x6_0000) >> 17 {
        0b01 => (),
        0b00 => return decode_error("mp3: invalid MPEG layer"),
        _ => return unsupported_error("mp3: only layer 3 is supported"),
    }

    let bitrate = match ((header & 0xf000) >> 12, version) {
        // "Free" bit-rate. Note, this is NOT variable bit-rate and is not a mandatory feature of
        // MP3 decoders.
        (0b0000, _) => return unsupported_error("mp3: free bit-rate is not supported"),
        // Invalid bit-rate.
        (0b1111, _) => return decode_error("mp3: invalid bit-rate"),
        (i, MpegVersion::Mpeg1) => BIT_RATES_MPEG1_L3[i as usize],
        (i, _) => BIT_RATES_MPEG2_L3[i as usize],
    };

    let (sample_rate, sample_rate_idx) = match ((header & 0xc00) >> 10, version) {
        (0b00, MpegVersion::Mpeg1) => (44_100, 0),
        (0b01, MpegVersion::Mpeg1) => (48_000, 1),
        (0b10, MpegVersion::Mpeg1) => (32_000, 2),
        (0b00, MpegVersion::Mpeg2) => (22_050, 3),
        (0b01, MpegVersion::Mpeg2) => (24_000, 4),
        (0b10, MpegVersion::Mpeg2) => (16_000, 5),
        (0b00, MpegVersion::Mpeg2p5) => (11_025, 6),
        (0b01, MpegVersion::Mpeg2p5) => (12_000, 7),
        (0b10, MpegVersion::Mpeg2p5) => (8_000, 8),
        _ => return decode_error("mp3: invalid sample rate"),
    };

    let channel_mode = match (header & 0xc0) >> 6 {
        0b00 => ChannelMode::Stereo,
        0b01 => ChannelMode::JointStereo(Mode {
            mid_side: header & 0x20 != 0x0,
            intensity: header & 0x10 != 0x0,
        }),
        0b10 => ChannelMode::DualMono,
        _ => ChannelMode::Mono,
    };

    let emphasis = match header & 0x3 {
        0b01 => Emphasis::Fifty15,
        0b11 => Emphasis::CcitJ17,
        _ => Emphasis::None,
    };

    let is_copyrighted = header & 0x8 != 0x0;
    let is_original = header & 0x4 != 0x0;
    let has_padding = header & 0x200 != 0;

    let has_crc = header & 0x1_0000 == 0;

    // ISO-11172 section 2.4.3.1. LSF frames carry half as many samples as MPEG1 frames.
    let factor = match version {
        MpegVersion::Mpeg1 => 144,
        _ => 72,
    };

    // Calculate the frame size in bytes, excluding the header.
    let frame_size =
        (factor * bitrate / sample_rate) as usize + usize::from(has_padding) - MPEG_HEADER_LEN;

    let header = FrameHeader {
        version,
        bitrate,
        sample_rate,
        sample_rate_idx,
        channel_mode,
        emphasis,
        is_copyrighted,
        is_original,
        has_padding,
        has_crc,
        frame_size,
    };

    if header.frame_size < header.side_info_len() + header.crc_len() {
        return decode_error("mp3: frame is too small for its side information");
    }

    Ok(header)
}

/// A VBR information tag found in the first frame of a stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VbrTag {
    /// A Xing tag. The stream is variable bit-rate.
    Xing,
    /// A Xing tag written by LAME for a constant bit-rate stream.
    Info,
    /// A Fraunhofer VBRI tag. The stream is variable bit-rate.
    Vbri,
}

impl VbrTag {
    /// Returns true if the tag marks a variable bit-rate stream.
    pub fn is_vbr(&self) -> bool {
        !matches!(self, VbrTag::Info)
    }
}

/// Look for a VBR information tag in the body of a frame (the bytes following the header word).
///
/// A Xing or Info tag is placed directly after the CRC and side information, while a VBRI tag is
/// always found 32 bytes after the header.
pub fn detect_vbr_tag(header: &FrameHeader, body: &[u8]) -> Option<VbrTag> {
    let marker_at = |offset: usize| body.get(offset..offset + 4);

    match marker_at(header.crc_len() + header.side_info_len()) {
        Some(b"Xing") => return Some(VbrTag::Xing),
        Some(b"Info") => return Some(VbrTag::Info),
        _ => (),
    }

    match marker_at(32) {
        Some(b"VBRI") => Some(VbrTag::Vbri),
        _ => None,
    }
}
