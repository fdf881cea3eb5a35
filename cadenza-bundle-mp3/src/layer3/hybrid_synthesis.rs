// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Justification: Some loops are better expressed without a range loop.
#![allow(clippy::needless_range_loop)]

use std::f64;

use lazy_static::lazy_static;

use crate::common::*;

use super::GranuleChannel;

lazy_static! {
    /// Hybrid synthesesis IMDCT window coefficients for: Long, Start, Short, and End block, in that
    /// order.
    ///
    /// For long blocks:
    ///
    /// ```text
    /// W[ 0..36] = sin(PI/36.0 * (i + 0.5))
    /// ```
    ///
    /// For start blocks:
    ///
    /// ```text
    /// W[ 0..18] = sin(PI/36.0 * (i + 0.5))
    /// W[18..24] = 1.0
    /// W[24..30] = sin(PI/12.0 * ((i - 18) + 0.5))
    /// W[30..36] = 0.0
    /// ```
    ///
    /// For short blocks (to be applied to each 12 sample window):
    ///
    /// ```text
    /// W[ 0..12] = sin(PI/12.0 * (i + 0.5))
    /// W[12..36] = 0.0
    /// ```
    ///
    /// For end blocks:
    ///
    /// ```text
    /// W[ 0..6 ] = 0.0
    /// W[ 6..12] = sin(PI/12.0 * ((i - 6) + 0.5))
    /// W[12..18] = 1.0
    /// W[18..36] = sin(PI/36.0 * (i + 0.5))
    /// ```
    static ref IMDCT_WINDOWS: [[f32; 36]; 4] = {
        const PI_36: f64 = f64::consts::PI / 36.0;
        const PI_12: f64 = f64::consts::PI / 12.0;

        let long = |i: usize| (PI_36 * (i as f64 + 0.5)).sin() as f32;
        let short = |i: usize| (PI_12 * (i as f64 + 0.5)).sin() as f32;

        let mut windows = [[0f32; 36]; 4];

        for (i, w) in windows[0].iter_mut().enumerate() {
            *w = long(i);
        }

        for (i, w) in windows[1].iter_mut().enumerate() {
            *w = match i {
                0..=17 => long(i),
                18..=23 => 1.0,
                24..=29 => short(i - 18),
                _ => 0.0,
            };
        }

        for (i, w) in windows[2][..12].iter_mut().enumerate() {
            *w = short(i);
        }

        for (i, w) in windows[3].iter_mut().enumerate() {
            *w = match i {
                0..=5 => 0.0,
                6..=11 => short(i - 6),
                12..=17 => 1.0,
                _ => long(i),
            };
        }

        windows
    };

    /// DCT-IV coefficients for the 36-point IMDCT.
    static ref DCT_IV_18: [[f32; 18]; 18] = dct_iv_matrix();

    /// DCT-IV coefficients for the 12-point IMDCT.
    static ref DCT_IV_6: [[f32; 6]; 6] = dct_iv_matrix();

    /// Pair of lookup tables, CS and CA, for alias reduction.
    ///
    /// As per ISO/IEC 11172-3, CS and CA are calculated as follows:
    ///
    /// ```text
    /// cs[i] =  1.0 / sqrt(1.0 + c[i]^2)
    /// ca[i] = c[i] / sqrt(1.0 + c[i]^2)
    /// ```
    ///
    /// where:
    /// ```text
    /// c[i] = [ -0.6, -0.535, -0.33, -0.185, -0.095, -0.041, -0.0142, -0.0037 ]
    /// ```
    static ref ANTIALIAS_CS_CA: ([f32; 8], [f32; 8]) = {
        const C: [f64; 8] = [-0.6, -0.535, -0.33, -0.185, -0.095, -0.041, -0.0142, -0.0037];

        let mut cs = [0f32; 8];
        let mut ca = [0f32; 8];

        for ((cs, ca), c) in cs.iter_mut().zip(ca.iter_mut()).zip(C) {
            let sqrt = f64::sqrt(1.0 + c * c);
            *cs = (1.0 / sqrt) as f32;
            *ca = (c / sqrt) as f32;
        }

        (cs, ca)
    };
}

/// Computes the DCT-IV matrix, `cos(PI/4N * (2n + 1) * (2k + 1))`, for an N-point transform.
fn dct_iv_matrix<const N: usize>() -> [[f32; N]; N] {
    let scale = f64::consts::PI / (4 * N) as f64;

    let mut matrix = [[0f32; N]; N];

    for (n, row) in matrix.iter_mut().enumerate() {
        for (k, c) in row.iter_mut().enumerate() {
            *c = (scale * ((2 * n + 1) * (2 * k + 1)) as f64).cos() as f32;
        }
    }

    matrix
}

/// Computes the DCT-IV of `x` into `y`.
#[inline(always)]
fn dct_iv<const N: usize>(matrix: &[[f32; N]; N], x: &[f32; N], y: &mut [f32; N]) {
    for (y, row) in y.iter_mut().zip(matrix) {
        *y = row.iter().zip(x).map(|(c, x)| c * x).sum();
    }
}

/// Gets output sample `i` of a 2N-point IMDCT given the N-point DCT-IV of its input.
///
/// The IMDCT of N inputs is the DCT-IV shifted by N/2 samples and extended with its symmetries.
///
/// ```text
///  0           N/2                      3N/2         2N
///  +------------+------------------------+------------+
///  | dct[N/2..] | -dct[0..N].rev()       | -dct[..N/2]|
///  +------------+------------------------+------------+
/// ```
#[inline(always)]
fn imdct_sample(dct: &[f32], i: usize) -> f32 {
    let n = dct.len();
    let m = i + n / 2;

    if m < n {
        dct[m]
    }
    else if m < 2 * n {
        -dct[2 * n - 1 - m]
    }
    else {
        -dct[m - 2 * n]
    }
}

/// Performs the 36-point IMDCT and windowing of a sub-band, and then overlap-adds the result.
fn imdct36_win(x: &mut [f32], window: &[f32; 36], overlap: &mut [f32; 18]) {
    let mut input = [0f32; 18];
    input.copy_from_slice(x);

    let matrix: &[[f32; 18]; 18] = &DCT_IV_18;

    let mut dct = [0f32; 18];
    dct_iv(matrix, &input, &mut dct);

    for i in 0..18 {
        x[i] = overlap[i] + imdct_sample(&dct, i) * window[i];
        overlap[i] = imdct_sample(&dct, i + 18) * window[i + 18];
    }
}

/// Performs the 12-point IMDCT and windowing for each of the 3 short windows of a sub-band, and
/// then overlap-adds the result. The coefficients of the windows are interleaved.
///
/// Adjacent windows overlap by half, and the first and last 6 samples are always 0.
///
/// ```text
/// 0             6           12           18           24           30            36
/// +-------------+------------+------------+------------+------------+-------------+
/// |      0      |  y0[..6]   |  y0[6..]   |  y1[6..]   |  y2[6..]   |      0      |
/// |             |            |  + y1[..6] |  + y2[..6] |            |             |
/// +-------------+------------+------------+------------+------------+-------------+
/// ```
fn imdct12_win(x: &mut [f32], window: &[f32; 36], overlap: &mut [f32; 18]) {
    let matrix: &[[f32; 6]; 6] = &DCT_IV_6;

    let mut out = [0f32; 36];

    for w in 0..3 {
        let mut input = [0f32; 6];

        for (k, coef) in input.iter_mut().enumerate() {
            *coef = x[3 * k + w];
        }

        let mut dct = [0f32; 6];
        dct_iv(matrix, &input, &mut dct);

        for i in 0..12 {
            out[6 + 6 * w + i] += imdct_sample(&dct, i) * window[i];
        }
    }

    for i in 0..18 {
        x[i] = out[i] + overlap[i];
        overlap[i] = out[i + 18];
    }
}

/// Reorder samples that are part of short blocks into sub-band order.
///
/// Each short scale factor band stores its 3 windows back-to-back (e.g., for a band 4 lines wide):
///
/// ```text
///    <- Window #1 ->  <- Window #2 ->  <- Window #3 ->
///   [ 0 | 1 | 2 | 3 ][ 4 | 5 | 6 | 7 ][ 8 | 9 | a | b ]
/// ```
///
/// Reordering interleaves the windows like planar audio:
///
/// ```text
///   [ 0 | 4 | 8 | 1 | 5 | 9 | 2 | 6 | a | 3 | 7 | b ]
/// ```
///
/// The long bands of a mixed block are not reordered.
pub(super) fn reorder(header: &FrameHeader, channel: &GranuleChannel, buf: &mut [f32; 576]) {
    let bands = match channel.block_type {
        BlockType::Short { is_mixed: false } => &SFB_SHORT_BANDS[header.sample_rate_idx][..],
        BlockType::Short { is_mixed: true } => {
            let switch = SFB_MIXED_SWITCH_POINT[header.sample_rate_idx];
            &SFB_MIXED_BANDS[header.sample_rate_idx][switch..]
        }
        _ => return,
    };

    let start = bands[0];

    let mut reordered = [0f32; 576];
    let mut i = start;

    // Each group of 4 boundaries is the start of the 3 windows of a band, and the end of the last.
    for band in bands.windows(4).step_by(3) {
        let len = band[1] - band[0];

        for j in 0..len {
            for &win_start in &band[..3] {
                reordered[i] = buf[win_start + j];
                i += 1;
            }
        }
    }

    buf[start..i].copy_from_slice(&reordered[start..i]);
}

/// Applies the anti-aliasing butterflies to the sub-band boundaries of long blocks.
///
/// For the boundary starting sub-band sample j, butterfly i combines the lower sample j-1-i and
/// the upper sample j+i:
///
/// ```text
///   l1 = l0 * cs[i] - u0 * ca[i]
///   u1 = u0 * cs[i] + l0 * ca[i]
/// ```
pub(super) fn antialias(channel: &GranuleChannel, samples: &mut [f32; 576]) {
    let sb_end = match channel.block_type {
        // Short blocks are never anti-aliased.
        BlockType::Short { is_mixed: false } => return,
        // Only the boundary between the two long sub-bands of a mixed block is anti-aliased.
        BlockType::Short { is_mixed: true } => 2 * 18,
        _ => 32 * 18,
    };

    let (cs, ca): &([f32; 8], [f32; 8]) = &ANTIALIAS_CS_CA;

    for sb in (18..sb_end).step_by(18) {
        for i in 0..8 {
            let li = sb - 1 - i;
            let ui = sb + i;
            let lower = samples[li];
            let upper = samples[ui];
            samples[li] = lower * cs[i] - upper * ca[i];
            samples[ui] = upper * cs[i] + lower * ca[i];
        }
    }
}

/// Performs hybrid synthesis (IMDCT and windowing) on each of the 32 sub-bands.
pub(super) fn hybrid_synthesis(
    channel: &GranuleChannel,
    overlap: &mut [[f32; 18]; 32],
    samples: &mut [f32; 576],
) {
    // The number of sub-bands transformed as long blocks. The remaining sub-bands are short.
    let n_long_bands = match channel.block_type {
        BlockType::Short { is_mixed: false } => 0,
        BlockType::Short { is_mixed: true } => 2,
        _ => 32,
    };

    let long_window: &[f32; 36] = match channel.block_type {
        BlockType::Start => &IMDCT_WINDOWS[1],
        BlockType::End => &IMDCT_WINDOWS[3],
        _ => &IMDCT_WINDOWS[0],
    };

    let short_window: &[f32; 36] = &IMDCT_WINDOWS[2];

    let sub_bands = samples.chunks_exact_mut(18).zip(overlap.iter_mut());

    for (sb, (sub_band, overlap)) in sub_bands.enumerate() {
        if sb < n_long_bands {
            imdct36_win(sub_band, long_window, overlap);
        }
        else {
            imdct12_win(sub_band, short_window, overlap);
        }
    }
}

/// Negates the odd samples of the odd sub-bands to undo the frequency inversion of the polyphase
/// filterbank.
pub(super) fn frequency_inversion(samples: &mut [f32; 576]) {
    for sub_band in samples.chunks_exact_mut(18).skip(1).step_by(2) {
        for s in sub_band.iter_mut().skip(1).step_by(2) {
            *s = -*s;
        }
    }
}
