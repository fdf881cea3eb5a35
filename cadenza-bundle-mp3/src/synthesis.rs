// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `synthesis` module implements the polyphase synthesis filterbank of the MPEG audio standard.

use std::f64;

use lazy_static::lazy_static;

/// Synthesis window D[i], defined in Table B.3 of ISO/IEC 11172-3.
#[allow(clippy::unreadable_literal)]
#[rustfmt::skip]
const SYNTHESIS_D: [f32; 512] = [
     0.000000000, -0.000015259, -0.000015259, -0.000015259,
    -0.000015259, -0.000015259, -0.000015259, -0.000030518,
    -0.000030518, -0.000030518, -0.000030518, -0.000045776,
    -0.000045776, -0.000061035, -0.000061035, -0.000076294,
    -0.000076294, -0.000091553, -0.000106812, -0.000106812,
    -0.000122070, -0.000137329, -0.000152588, -0.000167847,
    -0.000198364, -0.000213623, -0.000244141, -0.000259399,
    -0.000289917, -0.000320435, -0.000366211, -0.000396729,
    -0.000442505, -0.000473022, -0.000534058, -0.000579834,
    -0.000625610, -0.000686646, -0.000747681, -0.000808716,
    -0.000885010, -0.000961304, -0.001037598, -0.001113892,
    -0.001205444, -0.001296997, -0.001388550, -0.001480103,
    -0.001586914, -0.001693726, -0.001785278, -0.001907349,
    -0.002014160, -0.002120972, -0.002243042, -0.002349854,
    -0.002456665, -0.002578735, -0.002685547, -0.002792358,
    -0.002899170, -0.002990723, -0.003082275, -0.003173828,
     0.003250122,  0.003326416,  0.003387451,  0.003433228,
     0.003463745,  0.003479004,  0.003479004,  0.003463745,
     0.003417969,  0.003372192,  0.003280640,  0.003173828,
     0.003051758,  0.002883911,  0.002700806,  0.002487183,
     0.002227783,  0.001937866,  0.001617432,  0.001266479,
     0.000869751,  0.000442505, -0.000030518, -0.000549316,
    -0.001098633, -0.001693726, -0.002334595, -0.003005981,
    -0.003723145, -0.004486084, -0.005294800, -0.006118774,
    -0.007003784, -0.007919312, -0.008865356, -0.009841919,
    -0.010848999, -0.011886597, -0.012939453, -0.014022827,
    -0.015121460, -0.016235352, -0.017349243, -0.018463135,
    -0.019577026, -0.020690918, -0.021789551, -0.022857666,
    -0.023910522, -0.024932861, -0.025909424, -0.026840210,
    -0.027725220, -0.028533936, -0.029281616, -0.029937744,
    -0.030532837, -0.031005859, -0.031387329, -0.031661987,
    -0.031814575, -0.031845093, -0.031738281, -0.031478882,
     0.031082153,  0.030517578,  0.029785156,  0.028884888,
     0.027801514,  0.026535034,  0.025085449,  0.023422241,
     0.021575928,  0.019531250,  0.017257690,  0.014801025,
     0.012115479,  0.009231567,  0.006134033,  0.002822876,
    -0.000686646, -0.004394531, -0.008316040, -0.012420654,
    -0.016708374, -0.021179199, -0.025817871, -0.030609131,
    -0.035552979, -0.040634155, -0.045837402, -0.051132202,
    -0.056533813, -0.061996460, -0.067520142, -0.073059082,
    -0.078628540, -0.084182739, -0.089706421, -0.095169067,
    -0.100540161, -0.105819702, -0.110946655, -0.115921021,
    -0.120697021, -0.125259399, -0.129562378, -0.133590698,
    -0.137298584, -0.140670776, -0.143676758, -0.146255493,
    -0.148422241, -0.150115967, -0.151306152, -0.151962280,
    -0.152069092, -0.151596069, -0.150497437, -0.148773193,
    -0.146362305, -0.143264771, -0.139450073, -0.134887695,
    -0.129577637, -0.123474121, -0.116577148, -0.108856201,
     0.100311279,  0.090927124,  0.080688477,  0.069595337,
     0.057617187,  0.044784546,  0.031082153,  0.016510010,
     0.001068115, -0.015228271, -0.032379150, -0.050354004,
    -0.069168091, -0.088775635, -0.109161377, -0.130310059,
    -0.152206421, -0.174789429, -0.198059082, -0.221984863,
    -0.246505737, -0.271591187, -0.297210693, -0.323318481,
    -0.349868774, -0.376800537, -0.404083252, -0.431655884,
    -0.459472656, -0.487472534, -0.515609741, -0.543823242,
    -0.572036743, -0.600219727, -0.628295898, -0.656219482,
    -0.683914185, -0.711318970, -0.738372803, -0.765029907,
    -0.791213989, -0.816864014, -0.841949463, -0.866363525,
    -0.890090942, -0.913055420, -0.935195923, -0.956481934,
    -0.976852417, -0.996246338, -1.014617920, -1.031936646,
    -1.048156738, -1.063217163, -1.077117920, -1.089782715,
    -1.101211548, -1.111373901, -1.120223999, -1.127746582,
    -1.133926392, -1.138763428, -1.142211914, -1.144287109,
     1.144989014,  1.144287109,  1.142211914,  1.138763428,
     1.133926392,  1.127746582,  1.120223999,  1.111373901,
     1.101211548,  1.089782715,  1.077117920,  1.063217163,
     1.048156738,  1.031936646,  1.014617920,  0.996246338,
     0.976852417,  0.956481934,  0.935195923,  0.913055420,
     0.890090942,  0.866363525,  0.841949463,  0.816864014,
     0.791213989,  0.765029907,  0.738372803,  0.711318970,
     0.683914185,  0.656219482,  0.628295898,  0.600219727,
     0.572036743,  0.543823242,  0.515609741,  0.487472534,
     0.459472656,  0.431655884,  0.404083252,  0.376800537,
     0.349868774,  0.323318481,  0.297210693,  0.271591187,
     0.246505737,  0.221984863,  0.198059082,  0.174789429,
     0.152206421,  0.130310059,  0.109161377,  0.088775635,
     0.069168091,  0.050354004,  0.032379150,  0.015228271,
    -0.001068115, -0.016510010, -0.031082153, -0.044784546,
    -0.057617187, -0.069595337, -0.080688477, -0.090927124,
     0.100311279,  0.108856201,  0.116577148,  0.123474121,
     0.129577637,  0.134887695,  0.139450073,  0.143264771,
     0.146362305,  0.148773193,  0.150497437,  0.151596069,
     0.152069092,  0.151962280,  0.151306152,  0.150115967,
     0.148422241,  0.146255493,  0.143676758,  0.140670776,
     0.137298584,  0.133590698,  0.129562378,  0.125259399,
     0.120697021,  0.115921021,  0.110946655,  0.105819702,
     0.100540161,  0.095169067,  0.089706421,  0.084182739,
     0.078628540,  0.073059082,  0.067520142,  0.061996460,
     0.056533813,  0.051132202,  0.045837402,  0.040634155,
     0.035552979,  0.030609131,  0.025817871,  0.021179199,
     0.016708374,  0.012420654,  0.008316040,  0.004394531,
     0.000686646, -0.002822876, -0.006134033, -0.009231567,
    -0.012115479, -0.014801025, -0.017257690, -0.019531250,
    -0.021575928, -0.023422241, -0.025085449, -0.026535034,
    -0.027801514, -0.028884888, -0.029785156, -0.030517578,
     0.031082153,  0.031478882,  0.031738281,  0.031845093,
     0.031814575,  0.031661987,  0.031387329,  0.031005859,
     0.030532837,  0.029937744,  0.029281616,  0.028533936,
     0.027725220,  0.026840210,  0.025909424,  0.024932861,
     0.023910522,  0.022857666,  0.021789551,  0.020690918,
     0.019577026,  0.018463135,  0.017349243,  0.016235352,
     0.015121460,  0.014022827,  0.012939453,  0.011886597,
     0.010848999,  0.009841919,  0.008865356,  0.007919312,
     0.007003784,  0.006118774,  0.005294800,  0.004486084,
     0.003723145,  0.003005981,  0.002334595,  0.001693726,
     0.001098633,  0.000549316,  0.000030518, -0.000442505,
    -0.000869751, -0.001266479, -0.001617432, -0.001937866,
    -0.002227783, -0.002487183, -0.002700806, -0.002883911,
    -0.003051758, -0.003173828, -0.003280640, -0.003372192,
    -0.003417969, -0.003463745, -0.003479004, -0.003479004,
    -0.003463745, -0.003433228, -0.003387451, -0.003326416,
     0.003250122,  0.003173828,  0.003082275,  0.002990723,
     0.002899170,  0.002792358,  0.002685547,  0.002578735,
     0.002456665,  0.002349854,  0.002243042,  0.002120972,
     0.002014160,  0.001907349,  0.001785278,  0.001693726,
     0.001586914,  0.001480103,  0.001388550,  0.001296997,
     0.001205444,  0.001113892,  0.001037598,  0.000961304,
     0.000885010,  0.000808716,  0.000747681,  0.000686646,
     0.000625610,  0.000579834,  0.000534058,  0.000473022,
     0.000442505,  0.000396729,  0.000366211,  0.000320435,
     0.000289917,  0.000259399,  0.000244141,  0.000213623,
     0.000198364,  0.000167847,  0.000152588,  0.000137329,
     0.000122070,  0.000106812,  0.000106812,  0.000091553,
     0.000076294,  0.000076294,  0.000061035,  0.000061035,
     0.000045776,  0.000045776,  0.000030518,  0.000030518,
     0.000030518,  0.000030518,  0.000015259,  0.000015259,
     0.000015259,  0.000015259,  0.000015259,  0.000015259,
];

lazy_static! {
    /// Butterfly scale factors of each stage of the recursive 32-point DCT. The factors of an
    /// N-point stage begin at index `32 - N`.
    ///
    /// ```text
    /// c[i] = 1.0 / [2.0 * cos((PI / 2N) * (2*i + 1))]    for i = 0..N/2
    /// ```
    static ref DCT32_SCALE: [f32; 31] = {
        let mut scale = [0f32; 31];

        for n in [32, 16, 8, 4, 2] {
            for (i, c) in scale[32 - n..32 - n / 2].iter_mut().enumerate() {
                let angle = f64::consts::PI / (2 * n) as f64 * (2 * i + 1) as f64;
                *c = (1.0 / (2.0 * angle.cos())) as f32;
            }
        }

        scale
    };
}

/// `SynthesisState` maintains the persistant state of sub-band synthesis for one channel.
///
/// Matrixing produces a 64 sample V vector for each block of 32 sub-band samples, and the
/// filterbank needs the 16 most recent V vectors. The first and second halves of the V vectors are
/// kept in separate banks. Sample `j` of a half is stored at `16 * j + slot`, where the slot of
/// each new V vector rotates through 0..16, so the history never needs to be shifted.
pub struct SynthesisState {
    banks: [[f32; 512]; 2],
    slot: usize,
}

impl Default for SynthesisState {
    fn default() -> Self {
        SynthesisState { banks: [[0f32; 512]; 2], slot: 0 }
    }
}

/// Gets sample `i` of the 64 sample matrixing output, V, given the 32-point DCT of the sub-band
/// samples.
///
/// Matrixing as per the standard is `V[i] = SUM { S[k] * cos((16 + i) * (2k + 1) * PI/64) }`,
/// which is the DCT-II evaluated at `i + 16`. Using the symmetries of the cosine, only the 32
/// points of the DCT are required.
///
/// ```text
/// V[ 0..16] =  d[16..32]
/// V[16]     =  0
/// V[17..49] = -d[31..=0]
/// V[49..64] = -d[1..16]
/// ```
#[inline(always)]
fn matrix_sample(d: &[f32; 32], i: usize) -> f32 {
    match i {
        0..=15 => d[i + 16],
        16 => 0.0,
        17..=48 => -d[48 - i],
        _ => -d[i - 48],
    }
}

/// Sub-band synthesis transforms 32 sub-band blocks containing `n_frames` time-domain samples each
/// into `n_frames` blocks of 32 PCM audio samples.
pub fn synthesis(state: &mut SynthesisState, n_frames: usize, in_samples: &[f32], out: &mut [f32]) {
    debug_assert!(in_samples.len() == 32 * n_frames);
    debug_assert!(out.len() == 32 * n_frames);

    let mut s_vec = [0f32; 32];
    let mut d_vec = [0f32; 32];

    for (b, pcm) in out.chunks_exact_mut(32).enumerate().take(n_frames) {
        // Select the b-th sample of each sub-band.
        for (i, s) in s_vec.iter_mut().enumerate() {
            *s = in_samples[n_frames * i + b];
        }

        // Matrixing.
        dct32(&s_vec, &mut d_vec);

        let slot = state.slot;

        for j in 0..32 {
            state.banks[0][16 * j + slot] = matrix_sample(&d_vec, j);
            state.banks[1][16 * j + slot] = matrix_sample(&d_vec, 32 + j);
        }

        // As per the standard, the windowed U vector is built from the first half of even-aged V
        // vectors and the second half of odd-aged V vectors:
        //
        //         15
        // s[j] = SUM { V[t - a][32 * (a & 1) + j] * D[32 * a + j] }    for j = 0..32
        //        a=0
        //
        // where V[t - a] is the V vector of the a-th previous block. It is stored in slot
        // (slot - a) mod 16.
        for (j, pcm) in pcm.iter_mut().enumerate() {
            let mut sum = 0.0;

            for a in 0..16 {
                let v = state.banks[a & 1][16 * j + ((slot + 16 - a) & 0xf)];
                sum += v * SYNTHESIS_D[32 * a + j];
            }

            *pcm = sum.clamp(-1.0, 1.0);
        }

        state.slot = (slot + 1) & 0xf;
    }
}

/// Performs a 32-point Discrete Cosine Transform (DCT-II) using Byeong Gi Lee's fast algorithm
/// published in article [1] without inverse square-root 2 scaling.
///
/// [1] B.G. Lee, "A new algorithm to compute the discrete cosine transform", IEEE Transactions
/// on Acoustics, Speech, and Signal Processing, vol. 32, no. 6, pp. 1243-1245, 1984.
///
/// https://ieeexplore.ieee.org/document/1164443
fn dct32(x: &[f32; 32], y: &mut [f32; 32]) {
    let scale: &[f32; 31] = &DCT32_SCALE;
    dct_lee(scale, x, y);
}

/// One stage of Lee's algorithm. An N-point DCT is split into two N/2-point DCTs of the sum and
/// scaled difference of the mirrored inputs.
///
/// ```text
/// a[i] = x[i] + x[N-1-i]
/// b[i] = (x[i] - x[N-1-i]) * c[i]
///
/// y[2k]   = DCT(a)[k]
/// y[2k+1] = DCT(b)[k] + DCT(b)[k+1]
/// ```
fn dct_lee(scale: &[f32; 31], x: &[f32], y: &mut [f32]) {
    let n = x.len();

    if n == 1 {
        y[0] = x[0];
        return;
    }

    let half = n / 2;
    let c = &scale[32 - n..];

    let mut a = [0f32; 16];
    let mut b = [0f32; 16];

    for i in 0..half {
        a[i] = x[i] + x[n - 1 - i];
        b[i] = (x[i] - x[n - 1 - i]) * c[i];
    }

    let mut ya = [0f32; 16];
    let mut yb = [0f32; 16];

    dct_lee(scale, &a[..half], &mut ya[..half]);
    dct_lee(scale, &b[..half], &mut yb[..half]);

    for k in 0..half {
        y[2 * k] = ya[k];
        y[2 * k + 1] = yb[k] + if k + 1 < half { yb[k + 1] } else { 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pseudo-random samples in the range [-amplitude, amplitude].
    fn noise(seed: u32, amplitude: f32, buf: &mut [f32]) {
        let mut state = seed;

        for s in buf.iter_mut() {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            *s = amplitude * ((state >> 8) as f32 / (1 << 23) as f32 - 1.0);
        }
    }

    fn dct32_analytical(x: &[f32; 32]) -> [f32; 32] {
        const PI_32: f64 = f64::consts::PI / 32.0;

        let mut result = [0f32; 32];

        for (i, y) in result.iter_mut().enumerate() {
            let sum: f64 = x
                .iter()
                .enumerate()
                .map(|(j, &x)| f64::from(x) * (PI_32 * i as f64 * (j as f64 + 0.5)).cos())
                .sum();

            *y = sum as f32;
        }

        result
    }

    /// The synthesis filterbank exactly as flowcharted in ISO/IEC 11172-3 (Figure A.2).
    struct ReferenceSynthesis {
        v: Vec<f64>,
    }

    impl ReferenceSynthesis {
        fn new() -> Self {
            ReferenceSynthesis { v: vec![0.0; 1024] }
        }

        fn synthesize(&mut self, s: &[f32; 32]) -> [f32; 32] {
            const PI_64: f64 = f64::consts::PI / 64.0;

            self.v.copy_within(0..960, 64);

            for i in 0..64 {
                self.v[i] = s
                    .iter()
                    .enumerate()
                    .map(|(k, &s)| f64::from(s) * (PI_64 * ((16 + i) * (2 * k + 1)) as f64).cos())
                    .sum();
            }

            let mut out = [0f32; 32];

            for (j, out) in out.iter_mut().enumerate() {
                let mut sum = 0.0;

                for i in 0..8 {
                    sum += self.v[128 * i + j] * f64::from(SYNTHESIS_D[64 * i + j]);
                    sum += self.v[128 * i + 96 + j] * f64::from(SYNTHESIS_D[64 * i + 32 + j]);
                }

                *out = sum.clamp(-1.0, 1.0) as f32;
            }

            out
        }
    }

    #[test]
    fn verify_dct32() {
        let mut x = [0f32; 32];
        noise(7, 1.0, &mut x);

        let mut actual = [0f32; 32];
        dct32(&x, &mut actual);

        let expected = dct32_analytical(&x);

        for i in 0..32 {
            assert!((expected[i] - actual[i]).abs() < 0.00001, "y[{}]", i);
        }
    }

    #[test]
    fn verify_synthesis_matches_reference() {
        const N_FRAMES: usize = 18;

        let mut state = SynthesisState::default();
        let mut reference = ReferenceSynthesis::new();

        // Enough granules to wrap the history several times.
        for granule in 0..4 {
            let mut in_samples = [0f32; 32 * N_FRAMES];
            noise(granule + 1, 0.02, &mut in_samples);

            let mut out = [0f32; 32 * N_FRAMES];
            synthesis(&mut state, N_FRAMES, &in_samples, &mut out);

            for b in 0..N_FRAMES {
                let mut s = [0f32; 32];
                for (i, s) in s.iter_mut().enumerate() {
                    *s = in_samples[N_FRAMES * i + b];
                }

                let expected = reference.synthesize(&s);

                for j in 0..32 {
                    let actual = out[32 * b + j];
                    assert!(
                        (expected[j] - actual).abs() < 0.00001,
                        "granule {}, block {}, sample {}: {} != {}",
                        granule,
                        b,
                        j,
                        expected[j],
                        actual
                    );
                }
            }
        }
    }

    #[test]
    fn verify_silence() {
        let mut state = SynthesisState::default();

        let in_samples = [0f32; 32 * 18];
        let mut out = [1f32; 32 * 18];

        synthesis(&mut state, 18, &in_samples, &mut out);

        assert!(out.iter().all(|&s| s == 0.0));
    }
}
