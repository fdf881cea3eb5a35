// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::errors::{decode_error, Result};
use cadenza_core::io::ReadBitsLtr;

use crate::common::*;

use super::{FrameData, Granule, GranuleChannel};

/// Pairs of bit lengths for MPEG version 1 scale factors. For MPEG version 1, there are two
/// possible bit lengths for scale factors: slen1 and slen2. The first N of bands have scale factors
/// of bit length slen1, while the remaining bands have length slen2. The value of the switch point,
/// N, is determined by block type.
///
/// This table is indexed by scalefac_compress.
const SCALE_FACTOR_SLEN: [(u32, u32); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (3, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (4, 3),
];

/// For MPEG version 2, the scale factors are divided into four partitions. The length in bits of
/// each scale factor in a partition, slen[0..4], is calculated from scalefac_compress. The values
/// in this table indicate the number of scale factors in each partition.
///
/// This table is indexed by the scalefac_compress range (intensity stereo ranges first), and block
/// type (long, short, mixed).
const SCALE_FACTOR_MPEG2_NSFB: [[[usize; 4]; 3]; 6] = [
    // Intensity stereo right channel.
    [[7, 7, 7, 0], [12, 12, 12, 0], [6, 15, 12, 0]],
    [[6, 6, 6, 3], [12, 9, 9, 6], [6, 12, 9, 6]],
    [[8, 8, 5, 0], [15, 12, 9, 0], [6, 18, 9, 0]],
    // All other channels.
    [[6, 5, 5, 5], [9, 9, 9, 9], [6, 9, 9, 9]],
    [[6, 5, 7, 3], [9, 9, 12, 6], [6, 9, 12, 6]],
    [[11, 10, 0, 0], [18, 18, 0, 0], [15, 18, 0, 0]],
];

/// Reads the side_info for a single channel in a granule.
fn read_granule_channel_side_info<B: ReadBitsLtr>(
    bs: &mut B,
    channel: &mut GranuleChannel,
    header: &FrameHeader,
) -> Result<()> {
    channel.part2_3_length = bs.read_bits_leq32(12)? as u16;
    channel.big_values = bs.read_bits_leq32(9)? as u16;

    // The maximum number of samples in a granule is 576. One big_value decodes to 2 samples,
    // therefore there can be no more than 288 (576/2) big_values.
    if channel.big_values > 288 {
        return decode_error("mp3: granule big_values > 288");
    }

    channel.global_gain = bs.read_bits_leq32(8)? as u8;

    channel.scalefac_compress =
        if header.is_mpeg1() { bs.read_bits_leq32(4) } else { bs.read_bits_leq32(9) }? as u16;

    let bands = &SFB_LONG_BANDS[header.sample_rate_idx];

    let window_switching = bs.read_bit()?;

    if window_switching {
        let block_type_enc = bs.read_bits_leq32(2)?;
        let is_mixed = bs.read_bit()?;

        channel.block_type = match block_type_enc {
            // Only transitional Long blocks (Start, End) are allowed with window switching.
            0b00 => return decode_error("mp3: invalid block_type"),
            0b01 => BlockType::Start,
            0b10 => BlockType::Short { is_mixed },
            _ => BlockType::End,
        };

        // When window switching is used, there are only two regions, therefore there are only
        // two table selectors.
        for table_select in &mut channel.table_select[..2] {
            *table_select = bs.read_bits_leq32(5)? as u8;
        }
        channel.table_select[2] = 0;

        for subblock_gain in &mut channel.subblock_gain {
            *subblock_gain = bs.read_bits_leq32(3)? as u8;
        }

        // The region counts are implicit. Region1 always spans the remainder of the big_values
        // partition.
        channel.region0_count = match channel.block_type {
            BlockType::Short { is_mixed: false } => 8,
            _ => 7,
        };
        channel.region1_count = 20 - channel.region0_count;

        // For short blocks, region0 covers the first 3 short bands of each window (36 lines, or 72
        // lines at 8 kHz). For transitional long blocks, it covers the first 8 long bands.
        channel.region1_start = match channel.block_type {
            BlockType::Short { .. } => 3 * SFB_SHORT_WINDOW_BANDS[header.sample_rate_idx][3],
            _ => bands[usize::from(channel.region0_count) + 1],
        };
        channel.region2_start = SAMPLES_PER_GRANULE;
    }
    else {
        // If window switching is not used, the block type is always Long.
        channel.block_type = BlockType::Long;
        channel.subblock_gain = [0; 3];

        for table_select in &mut channel.table_select {
            *table_select = bs.read_bits_leq32(5)? as u8;
        }

        // The number of long bands in region0 and region1. The stored values are 1 less than the
        // actual value.
        channel.region0_count = bs.read_bits_leq32(4)? as u8;
        channel.region1_count = bs.read_bits_leq32(3)? as u8;

        let region0_end = usize::from(channel.region0_count) + 1;
        let region1_end = region0_end + usize::from(channel.region1_count) + 1;

        channel.region1_start = bands[region0_end];

        // The combined count may exceed the last band (22) in the long bands table.
        channel.region2_start = bands[region1_end.min(22)];
    }

    // For MPEG2, preflag is determined implicitly when reading the scale factors.
    channel.preflag = if header.is_mpeg1() { bs.read_bit()? } else { false };

    channel.scalefac_scale = bs.read_bit()?;
    channel.count1table_select = bs.read_bit()? as u8;

    Ok(())
}

/// Reads the side_info for all channels in a granule.
fn read_granule_side_info<B: ReadBitsLtr>(
    bs: &mut B,
    granule: &mut Granule,
    header: &FrameHeader,
) -> Result<()> {
    for channel in &mut granule.channels[..header.n_channels()] {
        read_granule_channel_side_info(bs, channel, header)?;
    }
    Ok(())
}

/// Reads the side_info of a MPEG audio frame into `FrameData`. Returns the length of the side
/// information in bytes.
pub(super) fn read_side_info<B: ReadBitsLtr>(
    bs: &mut B,
    header: &FrameHeader,
    frame_data: &mut FrameData,
) -> Result<usize> {
    // For MPEG version 1...
    if header.is_mpeg1() {
        // First 9 bits is main_data_begin.
        frame_data.main_data_begin = bs.read_bits_leq32(9)? as u16;

        // Next 3 (>1 channel) or 5 (1 channel) bits are private and should be ignored.
        match header.channel_mode {
            ChannelMode::Mono => bs.ignore_bits(5)?,
            _ => bs.ignore_bits(3)?,
        };

        // Next four (or 8, if more than one channel) are the SCFSI bits.
        for scfsi in &mut frame_data.scfsi[..header.n_channels()] {
            for band in scfsi.iter_mut() {
                *band = bs.read_bit()?;
            }
        }
    }
    // For MPEG version 2...
    else {
        // First 8 bits is main_data_begin.
        frame_data.main_data_begin = bs.read_bits_leq32(8)? as u16;

        // Next 1 (1 channel) or 2 (>1 channel) bits are private and should be ignored.
        match header.channel_mode {
            ChannelMode::Mono => bs.ignore_bits(1)?,
            _ => bs.ignore_bits(2)?,
        }
    }

    // Read the side_info for each granule.
    for granule in frame_data.granules_mut(header.version) {
        read_granule_side_info(bs, granule, header)?;
    }

    Ok(header.side_info_len())
}

/// Reads the scale factors for a single channel in a granule in a MPEG version 1 audio frame.
/// Returns the number of bits read.
pub(super) fn read_scale_factors_mpeg1<B: ReadBitsLtr>(
    bs: &mut B,
    gr: usize,
    ch: usize,
    frame_data: &mut FrameData,
) -> Result<u32> {
    let mut bits_read = 0;

    let scfsi = frame_data.scfsi[ch];
    let (granule0, granule1) = frame_data.granules.split_at_mut(1);

    let (channel, prev_channel) = if gr == 0 {
        (&mut granule0[0].channels[ch], None)
    }
    else {
        (&mut granule1[0].channels[ch], Some(&granule0[0].channels[ch]))
    };

    // For MPEG1, scalefac_compress is a 4-bit index into a scale factor bit length lookup table.
    let (slen1, slen2) = SCALE_FACTOR_SLEN[usize::from(channel.scalefac_compress)];

    // Short or Mixed windows...
    if let BlockType::Short { is_mixed } = channel.block_type {
        // If the block is mixed, the first partition holds 8 long scale factors and the short
        // scale factors of bands 3..6, all slen1 bits long. Otherwise, it holds the short scale
        // factors of bands 0..6. The second partition holds the short scale factors of bands
        // 6..12, each slen2 bits long.
        let n_sfb = if is_mixed { 8 + 3 * 3 } else { 6 * 3 };

        if slen1 > 0 {
            for sf in &mut channel.scalefacs[..n_sfb] {
                *sf = bs.read_bits_leq32(slen1)? as u8;
            }
            bits_read += n_sfb as u32 * slen1;
        }

        if slen2 > 0 {
            for sf in &mut channel.scalefacs[n_sfb..n_sfb + 6 * 3] {
                *sf = bs.read_bits_leq32(slen2)? as u8;
            }
            bits_read += 6 * 3 * slen2;
        }
    }
    // Normal (long, start, end) windows...
    else {
        // For normal windows there are 21 scale factor bands divided into four groups. The first
        // two groups have slen1 bit scale factors, and the last two have slen2 bit scale factors.
        const SCALE_FACTOR_BANDS: [(usize, usize); 4] = [(0, 6), (6, 11), (11, 16), (16, 21)];

        for (i, &(start, end)) in SCALE_FACTOR_BANDS.iter().enumerate() {
            let slen = if i < 2 { slen1 } else { slen2 };

            match prev_channel {
                // The second granule may reuse the scale factors of the first granule.
                Some(prev) if scfsi[i] => {
                    channel.scalefacs[start..end].copy_from_slice(&prev.scalefacs[start..end]);
                }
                // Scale factors are already zeroed, so there is nothing to read if slen is 0.
                _ if slen > 0 => {
                    for sf in &mut channel.scalefacs[start..end] {
                        *sf = bs.read_bits_leq32(slen)? as u8;
                    }
                    bits_read += slen * (end - start) as u32;
                }
                _ => (),
            }
        }
    }

    Ok(bits_read)
}

/// Reads the scale factors for a single channel in a granule in a MPEG version 2 or 2.5 audio
/// frame. Returns the number of bits read.
pub(super) fn read_scale_factors_mpeg2<B: ReadBitsLtr>(
    bs: &mut B,
    is_intensity_stereo: bool,
    channel: &mut GranuleChannel,
) -> Result<u32> {
    let mut bits_read = 0;

    let block_index = match channel.block_type {
        BlockType::Short { is_mixed: true } => 2,
        BlockType::Short { is_mixed: false } => 1,
        _ => 0,
    };

    let (slen_table, nsfb_table) = if is_intensity_stereo {
        // The intensity stereo channel uses half of the 9-bit scalefac_compress (0..256).
        let sfc = u32::from(channel.scalefac_compress) >> 1;

        match sfc {
            0..=179 => (
                [sfc / 36, (sfc % 36) / 6, (sfc % 36) % 6, 0],
                &SCALE_FACTOR_MPEG2_NSFB[0][block_index],
            ),
            180..=243 => (
                [((sfc - 180) % 64) >> 4, ((sfc - 180) % 16) >> 2, (sfc - 180) % 4, 0],
                &SCALE_FACTOR_MPEG2_NSFB[1][block_index],
            ),
            _ => (
                [(sfc - 244) / 3, (sfc - 244) % 3, 0, 0],
                &SCALE_FACTOR_MPEG2_NSFB[2][block_index],
            ),
        }
    }
    else {
        let sfc = u32::from(channel.scalefac_compress);

        // Preflag is set only if scalefac_compress >= 500 and this is not the intensity stereo
        // channel. See ISO/IEC 13818-3 section 2.4.3.4.
        channel.preflag = sfc >= 500;

        match sfc {
            0..=399 => (
                [(sfc >> 4) / 5, (sfc >> 4) % 5, (sfc % 16) >> 2, sfc % 4],
                &SCALE_FACTOR_MPEG2_NSFB[3][block_index],
            ),
            400..=499 => (
                [((sfc - 400) >> 2) / 5, ((sfc - 400) >> 2) % 5, (sfc - 400) % 4, 0],
                &SCALE_FACTOR_MPEG2_NSFB[4][block_index],
            ),
            _ => (
                [(sfc - 500) / 3, (sfc - 500) % 3, 0, 0],
                &SCALE_FACTOR_MPEG2_NSFB[5][block_index],
            ),
        }
    };

    let mut start = 0;

    for (&slen, &n_sfb) in slen_table.iter().zip(nsfb_table.iter()) {
        // If slen is 0, the scale factors in the partition are 0. Since all scale factors are
        // preinitialized to 0, they may be skipped.
        if slen > 0 {
            for sf in &mut channel.scalefacs[start..start + n_sfb] {
                *sf = bs.read_bits_leq32(slen)? as u8;
            }
            bits_read += slen * n_sfb as u32;
        }

        start += n_sfb;
    }

    Ok(bits_read)
}
