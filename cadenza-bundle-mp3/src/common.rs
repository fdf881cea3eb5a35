// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::audio::{Channels, SignalSpec};

use lazy_static::lazy_static;

/// The number of spectral lines (and output samples) per granule.
pub const SAMPLES_PER_GRANULE: usize = 576;

/// Starting indicies of each scale factor band at various sampling rates for long blocks.
pub const SFB_LONG_BANDS: [[usize; 23]; 9] = [
    // 44.1 kHz, MPEG version 1, derived from ISO/IEC 11172-3 Table B.8
    [
        0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 52, 62, 74, 90, 110, 134, 162, 196, 238, 288, 342,
        418, 576,
    ],
    // 48 kHz
    [
        0, 4, 8, 12, 16, 20, 24, 30, 36, 42, 50, 60, 72, 88, 106, 128, 156, 190, 230, 276, 330,
        384, 576,
    ],
    // 32 kHz
    [
        0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 54, 66, 82, 102, 126, 156, 194, 240, 296, 364, 448,
        550, 576,
    ],
    // 22.050 kHz, MPEG version 2, derived from ISO/IEC 13818-3 Table B.2
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 24 kHz (some decoders start the band at 332 from 330)
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 114, 136, 162, 194, 232, 278, 332, 394, 464,
        540, 576,
    ],
    // 16 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 11.025 kHz, MPEG version 2.5
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 12 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 8 kHz
    [
        0, 12, 24, 36, 48, 60, 72, 88, 108, 132, 160, 192, 232, 280, 336, 400, 476, 566, 568, 570,
        572, 574, 576,
    ],
];

/// Starting indicies of each scale factor band within a single short window at various sampling
/// rates. A short block stores three such windows, each 192 lines long.
pub const SFB_SHORT_WINDOW_BANDS: [[usize; 14]; 9] = [
    // 44.1 kHz, MPEG version 1
    [0, 4, 8, 12, 16, 22, 30, 40, 52, 66, 84, 106, 136, 192],
    // 48 kHz
    [0, 4, 8, 12, 16, 22, 28, 38, 50, 64, 80, 100, 126, 192],
    // 32 kHz
    [0, 4, 8, 12, 16, 22, 30, 42, 58, 78, 104, 138, 180, 192],
    // 22.050 kHz, MPEG version 2
    [0, 4, 8, 12, 18, 24, 32, 42, 56, 74, 100, 132, 174, 192],
    // 24 kHz
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 136, 180, 192],
    // 16 kHz
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
    // 11.025 kHz, MPEG version 2.5
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
    // 12 kHz
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
    // 8 kHz
    [0, 8, 16, 24, 36, 52, 72, 96, 124, 160, 162, 164, 166, 192],
];

/// The number of long bands preceeding the first short band of a mixed block.
pub const SFB_MIXED_SWITCH_POINT: [usize; 9] = [8, 8, 8, 6, 6, 6, 6, 6, 3];

/// Expands per-window short bands into the stored layout of a short block, where each band holds
/// its three windows back-to-back.
fn expand_short_windows(window_bands: &[usize], bands: &mut Vec<usize>) {
    for pair in window_bands.windows(2) {
        let len = pair[1] - pair[0];

        for win in 0..3 {
            bands.push(3 * pair[0] + win * len);
        }
    }
    bands.push(SAMPLES_PER_GRANULE);
}

lazy_static! {
    /// Starting indicies of each (band, window) pair of a short block at various sampling rates.
    /// Index `3 * sfb + win` is the start of window `win` of scale factor band `sfb`.
    pub static ref SFB_SHORT_BANDS: [Vec<usize>; 9] = {
        let mut bands: [Vec<usize>; 9] = Default::default();

        for (table, window_bands) in bands.iter_mut().zip(SFB_SHORT_WINDOW_BANDS.iter()) {
            expand_short_windows(window_bands, table);
        }

        bands
    };

    /// Starting indicies of each band of a mixed block at various sampling rates. The first
    /// `SFB_MIXED_SWITCH_POINT` bands are long bands covering the two lowest subbands (36 lines).
    /// The remainder are short bands, starting at line 12 of each window.
    ///
    /// There is little consensus on the mixed bands at 8 kHz since the third long band crosses the
    /// 36 line boundary. This construction keeps the long bands up to the switch point and starts
    /// the short bands at line 36, like the other sample rates.
    pub static ref SFB_MIXED_BANDS: [Vec<usize>; 9] = {
        let mut bands: [Vec<usize>; 9] = Default::default();

        for (i, table) in bands.iter_mut().enumerate() {
            table.extend_from_slice(&SFB_LONG_BANDS[i][..SFB_MIXED_SWITCH_POINT[i]]);

            let mut window_bands = vec![12];
            window_bands.extend(SFB_SHORT_WINDOW_BANDS[i].iter().filter(|&&start| start > 12));

            expand_short_windows(&window_bands, table);
        }

        bands
    };
}

/// The MPEG audio version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MpegVersion {
    /// Version 2.5
    Mpeg2p5,
    /// Version 2
    Mpeg2,
    /// Version 1
    Mpeg1,
}

/// For Joint Stereo channel mode, the mode extension describes which stereo codings are enabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mode {
    pub mid_side: bool,
    pub intensity: bool,
}

/// The channel mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    /// Single mono audio channel.
    Mono,
    /// Dual mono audio channels.
    DualMono,
    /// Stereo channels.
    Stereo,
    /// Joint Stereo encoded channels (decodes to Stereo).
    JointStereo(Mode),
}

impl ChannelMode {
    /// Gets the number of channels.
    #[inline(always)]
    pub fn count(&self) -> usize {
        match self {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }

    /// Gets the the channel map.
    #[inline(always)]
    pub fn channels(&self) -> Channels {
        match self {
            ChannelMode::Mono => Channels::FRONT_CENTRE,
            _ => Channels::FRONT_LEFT | Channels::FRONT_RIGHT,
        }
    }
}

/// The emphasis applied during encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// No emphasis
    None,
    /// 50/15us
    Fifty15,
    /// CCIT J.17
    CcitJ17,
}

/// A MPEG 1, 2, or 2.5 layer 3 audio frame header.
#[derive(Clone, Debug)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub bitrate: u32,
    pub sample_rate: u32,
    pub sample_rate_idx: usize,
    pub channel_mode: ChannelMode,
    pub emphasis: Emphasis,
    pub is_copyrighted: bool,
    pub is_original: bool,
    pub has_padding: bool,
    pub has_crc: bool,
    /// The size of the frame in bytes, excluding the 4 byte header.
    pub frame_size: usize,
}

impl FrameHeader {
    /// Returns true if this a MPEG1 frame, false otherwise.
    #[inline(always)]
    pub fn is_mpeg1(&self) -> bool {
        self.version == MpegVersion::Mpeg1
    }

    /// Returns true if this a low sampling frequency (MPEG2 or MPEG2.5) frame, false otherwise.
    #[inline(always)]
    pub fn is_lsf(&self) -> bool {
        self.version != MpegVersion::Mpeg1
    }

    /// Returns a signal specification for the frame.
    pub fn spec(&self) -> SignalSpec {
        SignalSpec::new(self.sample_rate, self.channel_mode.channels())
    }

    /// Returns the number of granules in the frame.
    #[inline(always)]
    pub fn n_granules(&self) -> usize {
        match self.version {
            MpegVersion::Mpeg1 => 2,
            _ => 1,
        }
    }

    /// Returns the number of channels per granule.
    #[inline(always)]
    pub fn n_channels(&self) -> usize {
        self.channel_mode.count()
    }

    /// Returns the number of audio frames (samples per channel) the frame decodes to.
    #[inline(always)]
    pub fn n_frames(&self) -> usize {
        self.n_granules() * SAMPLES_PER_GRANULE
    }

    /// Returns true if Mid-Side stereo coding is enabled, false otherwise.
    #[inline(always)]
    pub fn is_mid_side_stereo(&self) -> bool {
        matches!(self.channel_mode, ChannelMode::JointStereo(Mode { mid_side: true, .. }))
    }

    /// Returns true if Intensity Stereo coding is enabled, false otherwise.
    #[inline(always)]
    pub fn is_intensity_stereo(&self) -> bool {
        matches!(self.channel_mode, ChannelMode::JointStereo(Mode { intensity: true, .. }))
    }

    /// Get the side information length.
    #[inline(always)]
    pub fn side_info_len(&self) -> usize {
        match (self.version, self.channel_mode) {
            (MpegVersion::Mpeg1, ChannelMode::Mono) => 17,
            (MpegVersion::Mpeg1, _) => 32,
            (_, ChannelMode::Mono) => 9,
            (_, _) => 17,
        }
    }

    /// Get the length of the CRC word following the header.
    #[inline(always)]
    pub fn crc_len(&self) -> usize {
        if self.has_crc {
            2
        }
        else {
            0
        }
    }

    /// Get the number of main data bytes (slots) carried by the frame.
    #[inline(always)]
    pub fn main_data_len(&self) -> usize {
        self.frame_size - self.side_info_len() - self.crc_len()
    }
}

/// The block type of a granule channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockType {
    // Default case when window switching is off. Also the normal case when window switching is
    // on. Granule contains one long block.
    Long,
    Start,
    Short { is_mixed: bool },
    End,
}

impl BlockType {
    /// Gets the scale factor band boundaries the spectral lines of a block of this type are
    /// grouped by.
    pub fn bands(&self, sample_rate_idx: usize) -> &'static [usize] {
        match self {
            BlockType::Short { is_mixed: false } => &SFB_SHORT_BANDS[sample_rate_idx],
            BlockType::Short { is_mixed: true } => &SFB_MIXED_BANDS[sample_rate_idx],
            _ => &SFB_LONG_BANDS[sample_rate_idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify_partition(bands: &[usize]) {
        assert_eq!(bands.first(), Some(&0));
        assert_eq!(bands.last(), Some(&SAMPLES_PER_GRANULE));

        for pair in bands.windows(2) {
            assert!(pair[0] < pair[1], "bands {:?} overlap or leave a gap", pair);
        }
    }

    #[test]
    fn verify_long_bands_partition_granule() {
        for bands in SFB_LONG_BANDS.iter() {
            verify_partition(bands);
        }
    }

    #[test]
    fn verify_short_and_mixed_bands_partition_granule() {
        for i in 0..9 {
            verify_partition(&SFB_SHORT_BANDS[i]);
            verify_partition(&SFB_MIXED_BANDS[i]);

            // 13 bands of 3 windows.
            assert_eq!(SFB_SHORT_BANDS[i].len(), 40);

            // The first short band of a mixed block begins at line 36.
            assert_eq!(SFB_MIXED_BANDS[i][SFB_MIXED_SWITCH_POINT[i]], 36);
        }
    }

    #[test]
    fn verify_mixed_bands_44100() {
        let expected = [
            0, 4, 8, 12, 16, 20, 24, 30, 36, 40, 44, 48, 54, 60, 66, 74, 82, 90, 100, 110, 120,
            132, 144, 156, 170, 184, 198, 216, 234, 252, 274, 296, 318, 348, 378, 408, 464, 520,
            576,
        ];

        assert_eq!(SFB_MIXED_BANDS[0][..], expected[..]);
    }

    #[test]
    fn verify_mixed_bands_8000() {
        let expected = [
            0, 12, 24, 36, 40, 44, 48, 56, 64, 72, 84, 96, 108, 124, 140, 156, 176, 196, 216, 240,
            264, 288, 316, 344, 372, 408, 444, 480, 482, 484, 486, 488, 490, 492, 494, 496, 498,
            524, 550, 576,
        ];

        assert_eq!(SFB_MIXED_BANDS[8][..], expected[..]);
    }
}
