// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::min;

use lazy_static::lazy_static;

use crate::common::*;

use super::GranuleChannel;

/// The largest magnitude a Huffman decoded sample may have: 15 plus 13 linbits.
const MAX_QUANTIZED: usize = 15 + (1 << 13) - 1;

lazy_static! {
    /// Lookup table for computing x(i) = s(i)^(4/3) where s(i) is a decoded Huffman sample. The
    /// value of s(i) is bound between 0..8207.
    static ref REQUANTIZE_POW43: [f32; MAX_QUANTIZED + 1] = {
        let mut pow43 = [0f32; MAX_QUANTIZED + 1];
        for (i, pow) in pow43.iter_mut().enumerate() {
            *pow = f32::powf(i as f32, 4.0 / 3.0);
        }
        pow43
    };
}

/// The pre-emphasis amount added to each long scale factor when preflag is set. From table B.6
/// in ISO/IEC 11172-3.
const PRE_EMPHASIS: [u8; 22] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 3, 3, 3, 2, 0];

/// Dequantizes a single sample: sign(s) * |s|^(4/3) * gain.
#[inline(always)]
fn dequantize(pow43: &[f32], sample: i32, gain: f32) -> f32 {
    let magnitude = pow43[min(sample.unsigned_abs() as usize, MAX_QUANTIZED)] * gain;

    if sample < 0 {
        -magnitude
    }
    else {
        magnitude
    }
}

/// Dequantizes a run of samples with a common gain.
#[inline(always)]
fn dequantize_band(pow43: &[f32], quantized: &[i32], gain: f32, out: &mut [f32]) {
    for (x, &s) in out.iter_mut().zip(quantized) {
        *x = dequantize(pow43, s, gain);
    }
}

/// Computes 2^(0.25 * exponent).
#[inline(always)]
fn pow2_quarter(exponent: i32) -> f32 {
    f64::powf(2.0, 0.25 * f64::from(exponent)) as f32
}

fn requantize_long(
    channel: &GranuleChannel,
    bands: &[usize],
    quantized: &[i32; 576],
    buf: &mut [f32; 576],
) {
    // For long blocks dequantization and scaling is governed by the following equation:
    //
    //                     xr(i) = s(i)^(4/3) * 2^(0.25*A) * 2^(-B)
    // where:
    //       s(i) is the decoded Huffman sample
    //      xr(i) is the dequantized sample
    // and:
    //      A = global_gain[gr] - 210
    //      B = scalefac_multiplier * (scalefacs[gr][ch][sfb] + (preflag[gr] * pretab[sfb]))
    debug_assert!(bands.len() <= 23);

    let pow43: &[f32] = &REQUANTIZE_POW43[..];

    let a = i32::from(channel.global_gain) - 210;

    // The scale factor multiplier is 0.5 or 1. It is folded into the exponent of 2^(0.25*x) by a
    // shift of 1 or 2.
    let scalefac_shift = if channel.scalefac_scale { 2 } else { 1 };

    for (i, (&start, &end)) in bands.iter().zip(&bands[1..]).enumerate() {
        // Bands starting at or after the rzero sample are zeroed by the caller.
        if start >= channel.rzero {
            break;
        }

        let pre_emphasis = if channel.preflag { PRE_EMPHASIS[i] } else { 0 };

        let b = (i32::from(channel.scalefacs[i]) + i32::from(pre_emphasis)) << scalefac_shift;

        let end = min(end, channel.rzero);

        dequantize_band(pow43, &quantized[start..end], pow2_quarter(a - b), &mut buf[start..end]);
    }
}

fn requantize_short(
    channel: &GranuleChannel,
    bands: &[usize],
    switch: usize,
    quantized: &[i32; 576],
    buf: &mut [f32; 576],
) {
    // For short blocks dequantization and scaling is governed by the following equation:
    //
    //                     xr(i) = s(i)^(4/3) * 2^(0.25*A) * 2^(-B)
    // where:
    //       s(i) is the decoded Huffman sample
    //      xr(i) is the dequantized sample
    // and:
    //      A = global_gain[gr] - 210 - (8 * subblock_gain[gr][win])
    //      B = scalefac_multiplier * scalefacs[gr][ch][sfb][win]
    debug_assert!(bands.len() <= 40);

    let pow43: &[f32] = &REQUANTIZE_POW43[..];

    let gain = i32::from(channel.global_gain) - 210;

    let a = [
        gain - 8 * i32::from(channel.subblock_gain[0]),
        gain - 8 * i32::from(channel.subblock_gain[1]),
        gain - 8 * i32::from(channel.subblock_gain[2]),
    ];

    let scalefac_shift = if channel.scalefac_scale { 2 } else { 1 };

    // Each band is one window of a short scale factor band. Windows are stored back-to-back, so the
    // window of a band is its index modulo 3.
    for (i, (&start, &end)) in bands.iter().zip(&bands[1..]).enumerate() {
        if start >= channel.rzero {
            break;
        }

        let b = i32::from(channel.scalefacs[switch + i]) << scalefac_shift;

        let end = min(end, channel.rzero);

        dequantize_band(
            pow43,
            &quantized[start..end],
            pow2_quarter(a[i % 3] - b),
            &mut buf[start..end],
        );
    }
}

/// Requantize the Huffman decoded samples of a channel in a granule into `buf`. Samples at or
/// above the channel's rzero index are set to 0.
pub(super) fn requantize(
    header: &FrameHeader,
    channel: &GranuleChannel,
    quantized: &[i32; 576],
    buf: &mut [f32; 576],
) {
    match channel.block_type {
        BlockType::Short { is_mixed: false } => {
            requantize_short(channel, &SFB_SHORT_BANDS[header.sample_rate_idx], 0, quantized, buf);
        }
        BlockType::Short { is_mixed: true } => {
            // A mixed block is a long block for the first few scale factor bands, followed by
            // short blocks. Requantize each part separately.
            let bands = &SFB_MIXED_BANDS[header.sample_rate_idx];
            let switch = SFB_MIXED_SWITCH_POINT[header.sample_rate_idx];

            requantize_long(channel, &bands[..=switch], quantized, buf);
            requantize_short(channel, &bands[switch..], switch, quantized, buf);
        }
        _ => {
            requantize_long(channel, &SFB_LONG_BANDS[header.sample_rate_idx], quantized, buf);
        }
    }

    buf[min(channel.rzero, SAMPLES_PER_GRANULE)..].fill(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    fn header() -> FrameHeader {
        // MPEG1, layer 3, 128 kbps, 44.1 kHz, stereo.
        parse_frame_header(0xfffb_9000).unwrap()
    }

    #[test]
    fn verify_dequantize_zero() {
        let pow43: &[f32] = &REQUANTIZE_POW43[..];

        for gain in [0, 1, 100, 210, 255] {
            for sf in [0, 1, 7, 15] {
                let exponent = gain - 210 - (sf << 2);
                assert_eq!(dequantize(pow43, 0, pow2_quarter(exponent)), 0.0);
            }
        }
    }

    #[test]
    fn verify_pow43() {
        let pow43: &[f32] = &REQUANTIZE_POW43[..];

        assert_eq!(pow43[0], 0.0);
        assert_eq!(pow43[1], 1.0);
        assert!((pow43[8] - 16.0).abs() < 1e-4);
        assert!((pow43[MAX_QUANTIZED] - (MAX_QUANTIZED as f32).powf(4.0 / 3.0)).abs() < 1.0);
    }

    #[test]
    fn verify_requantize_long() {
        let header = header();

        // A global gain of 210 is unity gain, and the first band has a scale factor of 2 with a
        // multiplier of 0.5 for a total gain of 2^-1.
        let mut channel = GranuleChannel { global_gain: 210, rzero: 6, ..Default::default() };
        channel.scalefacs[0] = 2;

        let mut quantized = [0; 576];
        quantized[..6].copy_from_slice(&[1, -1, 8, 0, 2, -3]);
        // Past rzero, must be ignored.
        quantized[6] = 5;

        let mut buf = [1.0; 576];
        requantize(&header, &channel, &quantized, &mut buf);

        assert_eq!(buf[0], 0.5);
        assert_eq!(buf[1], -0.5);
        assert!((buf[2] - 8.0).abs() < 1e-4);
        assert_eq!(buf[3], 0.0);

        // Band 1 (lines 4..8) has no scale factor, so it is at unity gain.
        assert!((buf[4] - 2f32.powf(4.0 / 3.0)).abs() < 1e-5);
        assert!((buf[5] + 3f32.powf(4.0 / 3.0)).abs() < 1e-5);
        assert!(buf[6..].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn verify_requantize_short_subblock_gain() {
        let header = header();

        let mut channel = GranuleChannel {
            global_gain: 210,
            block_type: BlockType::Short { is_mixed: false },
            subblock_gain: [0, 1, 2],
            rzero: 12,
            ..Default::default()
        };
        channel.scalefacs[2] = 1;

        let mut quantized = [0; 576];
        quantized[..12].fill(1);

        let mut buf = [0.0; 576];
        requantize(&header, &channel, &quantized, &mut buf);

        // The first short band is 4 lines per window. Window 1 is attenuated by 2^-2, and window 2
        // by 2^-4 and a scale factor of 1 (2^-0.5).
        assert!(buf[0..4].iter().all(|&x| x == 1.0));
        assert!(buf[4..8].iter().all(|&x| x == 0.25));
        assert!(buf[8..12].iter().all(|&x| (x - 2f32.powf(-4.5)).abs() < 1e-7));
    }

    #[test]
    fn verify_requantize_mixed_switch_point() {
        // MPEG1 44.1 kHz, MPEG2 22.05 kHz, and MPEG2.5 8 kHz.
        for header_word in [0xfffb_9000, 0xfff3_80c0, 0xffe3_18c0] {
            let header = parse_frame_header(header_word).unwrap();

            let bands = &SFB_MIXED_BANDS[header.sample_rate_idx];
            let switch = SFB_MIXED_SWITCH_POINT[header.sample_rate_idx];

            // The long part always covers the two lowest sub-bands.
            let last_long = bands[switch - 1];
            assert_eq!(bands[switch], 36);

            let mut channel = GranuleChannel {
                global_gain: 210,
                block_type: BlockType::Short { is_mixed: true },
                subblock_gain: [0, 1, 0],
                rzero: bands[switch + 3],
                ..Default::default()
            };
            // The last long band, and window 0 of the first short band.
            channel.scalefacs[switch - 1] = 2;
            channel.scalefacs[switch] = 2;

            let quantized = [1; 576];

            let mut buf = [0.0; 576];
            requantize(&header, &channel, &quantized, &mut buf);

            assert!(buf[..last_long].iter().all(|&x| x == 1.0));
            assert!(buf[last_long..36].iter().all(|&x| x == 0.5));

            // Short windows get their own scale factor and subblock gain past the switch point.
            assert!(buf[36..bands[switch + 1]].iter().all(|&x| x == 0.5));
            assert!(buf[bands[switch + 1]..bands[switch + 2]].iter().all(|&x| x == 0.25));
            assert!(buf[bands[switch + 2]..bands[switch + 3]].iter().all(|&x| x == 1.0));
            assert!(buf[bands[switch + 3]..].iter().all(|&x| x == 0.0));
        }
    }
}
