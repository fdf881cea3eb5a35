// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::max;
use std::{f32, f64};

use cadenza_core::errors::{decode_error, Result};

use lazy_static::lazy_static;

use crate::common::*;

use super::{Granule, GranuleChannel};

/// The invalid intensity position for MPEG1 bitstreams.
const INTENSITY_INV_POS_MPEG1: u8 = 7;

/// The invalid intensity position for MPEG2 and MPEG2.5 bitstreams.
///
/// Intensity ratios are specified for is_pos < 31 in ISO/IEC 13818-3, so the maximum value of a
/// 5 bit scale factor is the invalid position.
const INTENSITY_INV_POS_MPEG2: u8 = 31;

lazy_static! {
    /// (Left, right) channel coefficients for decoding intensity stereo in MPEG2 bitstreams.
    ///
    /// These coefficients are derived from section 2.4.3.2 of ISO/IEC 13818-3.
    ///
    /// ```text
    /// If...            | k_l                     | k_r
    /// -----------------+-------------------------+-------------------
    /// is_pos     == 0  | 1.0                     | 1.0
    /// is_pos & 1 == 1  | i0 ^ [(is_pos + 1) / 2] | 1.0
    /// is_pos & 1 == 0  | 1.0                     | i0 ^ (is_pos / 2)
    /// ```
    ///
    /// The value of i0 is 1/sqrt(sqrt(2)) if the least significant bit of the right channel's
    /// scalefac_compress is 0, and 1/sqrt(2) otherwise. The first dimension of the table is
    /// indexed by that bit, the second by is_pos.
    static ref INTENSITY_STEREO_RATIOS_MPEG2: [[(f32, f32); 32]; 2] = {
        let is_scale: [f64; 2] = [
            1.0 / f64::sqrt(f64::consts::SQRT_2),
            f64::consts::FRAC_1_SQRT_2,
        ];

        let mut ratios = [[(0.0, 0.0); 32]; 2];

        for (table, &i0) in ratios.iter_mut().zip(is_scale.iter()) {
            for (is_pos, ratio) in table.iter_mut().enumerate() {
                let is_pos = is_pos as f64;

                *ratio = if is_pos as usize & 1 != 0 {
                    (i0.powf((is_pos + 1.0) / 2.0) as f32, 1.0)
                }
                else {
                    (1.0, i0.powf(is_pos / 2.0) as f32)
                };
            }
        }

        ratios
    };

    /// (Left, right) channel coeffcients for decoding intensity stereo in MPEG1 bitstreams.
    ///
    /// These coefficients are derived from section 2.4.3.4.9.3 of ISO/IEC 11172-3.
    ///
    /// ```text
    /// is_ratio = tan(is_pos * PI/12)
    /// k_l = is_ratio / (1 + is_ratio)
    /// k_r =        1 / (1 + is_ratio)
    /// ```
    ///
    /// Indexed by is_pos. The ratio of is_pos == 6 is infinite, so its coefficients are (1, 0).
    static ref INTENSITY_STEREO_RATIOS_MPEG1: [(f32, f32); 7] = {
        const PI_12: f64 = f64::consts::PI / 12.0;

        let mut ratios = [(0.0, 0.0); 7];

        for (is_pos, ratio) in ratios.iter_mut().enumerate() {
            let is_ratio = (PI_12 * is_pos as f64).tan();
            *ratio = ((is_ratio / (1.0 + is_ratio)) as f32, (1.0 / (1.0 + is_ratio)) as f32);
        }

        ratios[6] = (1.0, 0.0);

        ratios
    };
}

/// Decorrelates mid and side channels into left and right channels.
///
/// ```text
///      l[i] = (m[i] + s[i]) / sqrt(2)
///      r[i] = (m[i] - s[i]) / sqrt(2)
/// ```
///
/// The mid channel is transmitted in channel 0 and the side channel in channel 1. They are
/// replaced by the left and right channels, respectively.
fn process_mid_side(mid: &mut [f32], side: &mut [f32]) {
    debug_assert!(mid.len() == side.len());

    for (m, s) in mid.iter_mut().zip(side) {
        let left = (*m + *s) * f32::consts::FRAC_1_SQRT_2;
        let right = (*m - *s) * f32::consts::FRAC_1_SQRT_2;
        *m = left;
        *s = right;
    }
}

/// Splits the intensity coded signal in channel 0 into left and right channels.
///
/// ```text
///      l[i] = ch0[i] * k_l
///      r[i] = ch0[i] * k_r
/// ```
fn process_intensity(ratios: (f32, f32), ch0: &mut [f32], ch1: &mut [f32]) {
    let (ratio_l, ratio_r) = ratios;

    for (l, r) in ch0.iter_mut().zip(ch1) {
        let is = *l;
        *l = ratio_l * is;
        *r = ratio_r * is;
    }
}

/// Intensity stereo parameters of a granule.
struct Intensity {
    table: &'static [(f32, f32)],
    invalid_pos: u8,
}

impl Intensity {
    fn new(header: &FrameHeader, channel: &GranuleChannel) -> Self {
        if header.is_mpeg1() {
            Intensity {
                table: &INTENSITY_STEREO_RATIOS_MPEG1[..],
                invalid_pos: INTENSITY_INV_POS_MPEG1,
            }
        }
        else {
            let is_scale = usize::from(channel.scalefac_compress & 1);
            Intensity {
                table: &INTENSITY_STEREO_RATIOS_MPEG2[is_scale][..],
                invalid_pos: INTENSITY_INV_POS_MPEG2,
            }
        }
    }

    /// Gets the channel coefficients for an intensity position, or `None` if the position is
    /// invalid.
    fn ratios(&self, is_pos: u8) -> Option<(f32, f32)> {
        if is_pos < self.invalid_pos {
            Some(self.table[usize::from(is_pos)])
        }
        else {
            None
        }
    }
}

/// Determines if a band is zeroed. Bands starting at or above rzero are always zero.
#[inline(always)]
fn is_zero_band(band: &[f32], start: usize, rzero: usize) -> bool {
    start >= rzero || band.iter().all(|&x| x == 0.0)
}

/// Decodes the intensity stereo coded bands of a block. Intensity coding applies to the zeroed
/// bands of the right channel above the highest non-zero band. Every other band is mid-side coded
/// if mid-side stereo is enabled.
///
/// Short blocks store the three windows of each scale factor band back-to-back, and each window
/// has its own intensity bound.
///
/// ```text
///      +------+------+------+------+
///      | sfb0 | sfb1 | sfb2 | .... |
///      +------+------+------+------+
///  w0  | 0000 | 0000 | 0000 | 0... |   <- bound at sfb0
///      +-------------+------+------+
///  w1  | abcd | xyzw | 0000 | 0... |   <- bound at sfb2
///      +-------------+------+------+
///  w2  | xyz0 | 0000 | 0000 | 0... |   <- bound at sfb1
///      +------+------+------+------+
/// ```
///
/// The long bands at the start of a mixed block may only be intensity coded if at least one window
/// of the short bands is zero all the way down to the switch point.
fn process_intensity_block(
    header: &FrameHeader,
    channel: &GranuleChannel,
    mid_side: bool,
    ch0: &mut [f32; 576],
    ch1: &mut [f32; 576],
) {
    let intensity = Intensity::new(header, channel);

    let bands = channel.block_type.bands(header.sample_rate_idx);
    let n_bands = bands.len() - 1;

    // The number of long bands at the start of the block.
    let switch = match channel.block_type {
        BlockType::Short { is_mixed: false } => 0,
        BlockType::Short { is_mixed: true } => SFB_MIXED_SWITCH_POINT[header.sample_rate_idx],
        _ => n_bands,
    };

    // The intensity position of the last band (or last three windows) is not transmitted and is
    // copied from the band before it.
    let n_uncoded = if switch == n_bands { 1 } else { 3 };

    let rzero = channel.rzero;

    let mut window_is_zero = [true; 3];
    let mut long_is_zero = true;

    for i in (0..n_bands).rev() {
        let (start, end) = (bands[i], bands[i + 1]);

        let is_zero = if i >= switch {
            let win = (i - switch) % 3;
            window_is_zero[win] =
                window_is_zero[win] && is_zero_band(&ch1[start..end], start, rzero);
            window_is_zero[win]
        }
        else {
            long_is_zero = long_is_zero
                && window_is_zero.iter().any(|&z| z)
                && is_zero_band(&ch1[start..end], start, rzero);
            long_is_zero
        };

        let is_pos = if i + n_uncoded >= n_bands {
            channel.scalefacs[i - n_uncoded]
        }
        else {
            channel.scalefacs[i]
        };

        match intensity.ratios(is_pos) {
            Some(ratios) if is_zero => {
                process_intensity(ratios, &mut ch0[start..end], &mut ch1[start..end])
            }
            _ if mid_side => process_mid_side(&mut ch0[start..end], &mut ch1[start..end]),
            _ => (),
        }
    }
}

/// Perform joint stereo decoding on the channel pair.
pub(super) fn stereo(
    header: &FrameHeader,
    granule: &mut Granule,
    ch: &mut [[f32; 576]; 2],
) -> Result<()> {
    let (mid_side, intensity) = match header.channel_mode {
        ChannelMode::JointStereo(Mode { mid_side, intensity }) => (mid_side, intensity),
        _ => return Ok(()),
    };

    // The block types must be the same.
    if granule.channels[0].block_type != granule.channels[1].block_type {
        return decode_error("mp3: stereo channel pair block_type mismatch");
    }

    let [ch0, ch1] = ch;

    let end = max(granule.channels[0].rzero, granule.channels[1].rzero);

    if intensity {
        process_intensity_block(header, &granule.channels[1], mid_side, ch0, ch1);
    }
    else if mid_side {
        process_mid_side(&mut ch0[..end], &mut ch1[..end]);
    }

    // After joint stereo decoding both channels have the same number of non-zero samples.
    for channel in granule.channels.iter_mut() {
        channel.rzero = end;
    }

    Ok(())
}
