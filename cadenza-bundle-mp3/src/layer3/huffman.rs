// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cadenza_core::errors::{decode_error, Result};

use crate::common::SAMPLES_PER_GRANULE;
use crate::reservoir::BitReservoir;

use super::huffman_tables::*;
use super::GranuleChannel;

/// The maximum number of bits a code word may be before the stream is considered corrupt.
const MAX_CODE_LEN: usize = 32;

/// An offset at or above this value in a flattened tree is a relay (see `huffman_tables`).
const RELAY_OFFSET: u8 = 250;

/// A Huffman table for the big_values partition.
#[derive(Copy, Clone)]
struct HuffmanTable {
    /// The flattened code tree. An empty tree decodes to (0, 0) without reading any bits.
    tree: &'static [[u8; 2]],
    /// The number of distinct values of x (and y). The largest value is the escape value if the
    /// table has linbits.
    xlen: u32,
    /// The number of extra bits appended to an escaped value.
    linbits: u32,
}

const fn table(tree: &'static [[u8; 2]], xlen: u32, linbits: u32) -> HuffmanTable {
    HuffmanTable { tree, xlen, linbits }
}

/// The big_values Huffman tables indexed by table_select. Tables 4 and 14 are not used by the
/// standard.
const BIG_VALUES_TABLES: [HuffmanTable; 32] = [
    table(&[], 0, 0),
    table(&TREE_1, 2, 0),
    table(&TREE_2, 3, 0),
    table(&TREE_3, 3, 0),
    table(&[], 0, 0),
    table(&TREE_5, 4, 0),
    table(&TREE_6, 4, 0),
    table(&TREE_7, 6, 0),
    table(&TREE_8, 6, 0),
    table(&TREE_9, 6, 0),
    table(&TREE_10, 8, 0),
    table(&TREE_11, 8, 0),
    table(&TREE_12, 8, 0),
    table(&TREE_13, 16, 0),
    table(&[], 0, 0),
    table(&TREE_15, 16, 0),
    table(&TREE_16, 16, 1),
    table(&TREE_16, 16, 2),
    table(&TREE_16, 16, 3),
    table(&TREE_16, 16, 4),
    table(&TREE_16, 16, 6),
    table(&TREE_16, 16, 8),
    table(&TREE_16, 16, 10),
    table(&TREE_16, 16, 13),
    table(&TREE_24, 16, 4),
    table(&TREE_24, 16, 5),
    table(&TREE_24, 16, 6),
    table(&TREE_24, 16, 7),
    table(&TREE_24, 16, 8),
    table(&TREE_24, 16, 9),
    table(&TREE_24, 16, 11),
    table(&TREE_24, 16, 13),
];

/// The count1 (quadruples) Huffman tables indexed by count1table_select.
const COUNT1_TABLES: [&[[u8; 2]]; 2] = [&TREE_A, &TREE_B];

/// Walk a flattened code tree one bit at a time until a leaf is found, and return the packed leaf
/// value.
fn decode_code_word(reservoir: &mut BitReservoir, tree: &[[u8; 2]]) -> Result<u8> {
    let mut node = 0;

    for _ in 0..=MAX_CODE_LEN {
        if tree[node][0] == 0 {
            return Ok(tree[node][1]);
        }

        let bit = reservoir.get_one_bit() as usize;

        while tree[node][bit] >= RELAY_OFFSET {
            node += usize::from(tree[node][bit]);
        }
        node += usize::from(tree[node][bit]);
    }

    decode_error("mp3: huffman code word too long")
}

/// Applies the sign bit that follows a non-zero value.
#[inline(always)]
fn read_signed(reservoir: &mut BitReservoir, value: u32) -> i32 {
    if value != 0 && reservoir.get_one_bit() == 1 {
        -(value as i32)
    }
    else {
        value as i32
    }
}

/// Decodes one big_values pair, (x, y), including the escape extension and the sign of each value.
fn decode_pair(reservoir: &mut BitReservoir, table: &HuffmanTable) -> Result<(i32, i32)> {
    if table.tree.is_empty() {
        return Ok((0, 0));
    }

    let value = decode_code_word(reservoir, table.tree)?;

    let mut x = u32::from(value >> 4);
    let mut y = u32::from(value & 0xf);

    if table.linbits > 0 && x == table.xlen - 1 {
        x += reservoir.get_bits(table.linbits);
    }
    let x = read_signed(reservoir, x);

    if table.linbits > 0 && y == table.xlen - 1 {
        y += reservoir.get_bits(table.linbits);
    }
    let y = read_signed(reservoir, y);

    Ok((x, y))
}

/// Decodes one count1 quadruple, (v, w, x, y), including the sign of each value.
fn decode_quad(reservoir: &mut BitReservoir, tree: &[[u8; 2]]) -> Result<[i32; 4]> {
    let value = decode_code_word(reservoir, tree)?;

    let mut quad = [0; 4];

    for (i, q) in quad.iter_mut().enumerate() {
        *q = read_signed(reservoir, u32::from(value >> (3 - i)) & 1);
    }

    Ok(quad)
}

/// Reads the Huffman coded spectral samples for a single channel in a granule into `buf`, and
/// returns the index of the first sample of the rzero partition. `part3_end` is the reservoir bit
/// count at which the channel's main data ends.
pub(super) fn read_huffman_samples(
    reservoir: &mut BitReservoir,
    channel: &GranuleChannel,
    part3_end: usize,
    buf: &mut [i32; 576],
) -> Result<usize> {
    let big_values_len = 2 * usize::from(channel.big_values);

    // The big_values partition is split into up to three regions. Each region has its own table.
    let regions = [
        channel.region1_start.min(big_values_len),
        channel.region2_start.min(big_values_len),
        big_values_len,
    ];

    let mut i = 0;

    for (&region_end, &table_select) in regions.iter().zip(&channel.table_select) {
        let table = &BIG_VALUES_TABLES[usize::from(table_select)];

        while i < region_end && reservoir.bit_count() < part3_end {
            let (x, y) = decode_pair(reservoir, table)?;
            buf[i] = x;
            buf[i + 1] = y;
            i += 2;
        }
    }

    // The count1 partition follows until the channel's bits are exhausted.
    let count1_table = COUNT1_TABLES[usize::from(channel.count1table_select)];

    while i + 4 <= SAMPLES_PER_GRANULE && reservoir.bit_count() < part3_end {
        let quad = decode_quad(reservoir, count1_table)?;
        buf[i..i + 4].copy_from_slice(&quad);
        i += 4;
    }

    let bits_read = reservoir.bit_count();

    if bits_read > part3_end {
        // The last quadruple overran the channel's bits. Discard it and rewind to the end of the
        // channel's main data.
        reservoir.rewind_bits(bits_read - part3_end);

        if i > big_values_len {
            i -= 4;
        }
    }
    else {
        // Skip any stuffing bits.
        reservoir.skip_bits(part3_end - bits_read);
    }

    buf[i..].fill(0);

    Ok(i)
}

/// An explicit form of the flattened Huffman code trees. The flattened trees used for decoding are
/// parsed into this form so that their structure may be validated independently of the decoder.
#[cfg(test)]
mod tree {
    use super::RELAY_OFFSET;

    #[derive(Debug)]
    pub enum Node {
        Leaf { x: u8, y: u8 },
        Branch(Box<Node>, Box<Node>),
    }

    /// Parses a flattened tree, marking every slot used.
    fn parse(flat: &[[u8; 2]], pos: usize, used: &mut [bool]) -> Result<Node, String> {
        let node = flat.get(pos).ok_or_else(|| format!("node {} out of bounds", pos))?;
        used[pos] = true;

        if node[0] == 0 {
            return Ok(Node::Leaf { x: node[1] >> 4, y: node[1] & 0xf });
        }

        let mut children = Vec::with_capacity(2);

        for bit in 0..2 {
            let mut next = pos;

            // Follow relays until a regular offset is found.
            let child = loop {
                let relay =
                    flat.get(next).ok_or_else(|| format!("relay {} out of bounds", next))?;
                let offset = relay[bit];
                used[next] = true;

                match offset {
                    0 => return Err(format!("branch at {} has a zero offset", next)),
                    offset if offset < RELAY_OFFSET => break next + usize::from(offset),
                    offset => next += usize::from(offset),
                }
            };

            children.push(parse(flat, child, used)?);
        }

        let one = children.pop().ok_or("missing child")?;
        let zero = children.pop().ok_or("missing child")?;

        Ok(Node::Branch(Box::new(zero), Box::new(one)))
    }

    /// Parses a flattened tree into an explicit tree. Every slot of the flattened tree must be
    /// part of the tree.
    pub fn from_flat(flat: &[[u8; 2]]) -> Result<Node, String> {
        let mut used = vec![false; flat.len()];

        let root = parse(flat, 0, &mut used)?;

        match used.iter().position(|&used| !used) {
            Some(pos) => Err(format!("slot {} is unused", pos)),
            None => Ok(root),
        }
    }

    /// A code word for a leaf: the code bits (right-aligned), the code length, and the leaf value.
    #[derive(Copy, Clone, Debug)]
    pub struct CodeWord {
        pub code: u32,
        pub len: u32,
        pub x: u8,
        pub y: u8,
    }

    /// Enumerates the code word of every leaf.
    pub fn code_words(node: &Node) -> Vec<CodeWord> {
        fn walk(node: &Node, code: u32, len: u32, words: &mut Vec<CodeWord>) {
            match node {
                Node::Leaf { x, y } => words.push(CodeWord { code, len, x: *x, y: *y }),
                Node::Branch(zero, one) => {
                    walk(zero, code << 1, len + 1, words);
                    walk(one, (code << 1) | 1, len + 1, words);
                }
            }
        }

        let mut words = Vec::new();
        walk(node, 0, 0, &mut words);
        words
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::tree::{code_words, from_flat, CodeWord};
    use super::*;

    /// Writes (value, bit width) fields MSB-first into a fresh reservoir.
    fn reservoir_with(fields: &[(u32, u32)]) -> BitReservoir {
        let mut reservoir = BitReservoir::new();
        let mut acc = 0u64;
        let mut n_bits = 0;

        for &(value, width) in fields {
            acc = (acc << width) | u64::from(value);
            n_bits += width;

            while n_bits >= 8 {
                reservoir.put_byte((acc >> (n_bits - 8)) as u8);
                n_bits -= 8;
            }
        }

        if n_bits > 0 {
            reservoir.put_byte((acc << (8 - n_bits)) as u8);
        }

        reservoir
    }

    fn verify_tree(flat: &[[u8; 2]], expected: &HashSet<(u8, u8)>) -> Vec<CodeWord> {
        let root = from_flat(flat).unwrap();
        let words = code_words(&root);

        // The leaves are exactly the expected values.
        let values: HashSet<(u8, u8)> = words.iter().map(|w| (w.x, w.y)).collect();
        assert_eq!(values.len(), words.len(), "duplicate leaves");
        assert_eq!(&values, expected);

        // The code is complete (Kraft sum of 1).
        let kraft: u64 = words.iter().map(|w| 1u64 << (32 - w.len)).sum();
        assert_eq!(kraft, 1 << 32);

        words
    }

    #[test]
    fn verify_big_values_tables() {
        for (index, table) in BIG_VALUES_TABLES.iter().enumerate() {
            if table.tree.is_empty() {
                assert!(matches!(index, 0 | 4 | 14));
                continue;
            }

            let expected = (0..table.xlen as u8)
                .flat_map(|x| (0..table.xlen as u8).map(move |y| (x, y)))
                .collect();

            let words = verify_tree(table.tree, &expected);

            for (i, word) in words.iter().enumerate() {
                let mut fields = vec![(word.code, word.len)];
                let mut expected = [0i32; 2];

                for (value, out) in [word.x, word.y].iter().zip(expected.iter_mut()) {
                    let mut value = u32::from(*value);

                    if table.linbits > 0 && value == table.xlen - 1 {
                        let ext = (i as u32 * 7919) & ((1 << table.linbits) - 1);
                        fields.push((ext, table.linbits));
                        value += ext;
                    }

                    *out = value as i32;

                    if value != 0 {
                        let negative = (i + usize::from(word.x)) % 2 == 1;
                        fields.push((u32::from(negative), 1));

                        if negative {
                            *out = -*out;
                        }
                    }
                }

                let bits: u32 = fields.iter().map(|&(_, width)| width).sum();

                let mut reservoir = reservoir_with(&fields);
                let (x, y) = decode_pair(&mut reservoir, table).unwrap();

                assert_eq!([x, y], expected, "table {}", index);
                assert_eq!(reservoir.bit_count(), bits as usize, "table {}", index);
            }
        }
    }

    #[test]
    fn verify_count1_tables() {
        let expected = (0..16).map(|v| (0, v)).collect();

        for tree in COUNT1_TABLES.iter() {
            let words = verify_tree(tree, &expected);

            for word in words {
                let mut fields = vec![(word.code, word.len)];
                let mut expected = [0i32; 4];

                for (i, out) in expected.iter_mut().enumerate() {
                    if (word.y >> (3 - i)) & 1 == 1 {
                        // Alternate signs.
                        let negative = i % 2 == 0;
                        fields.push((u32::from(negative), 1));
                        *out = if negative { -1 } else { 1 };
                    }
                }

                let mut reservoir = reservoir_with(&fields);
                assert_eq!(decode_quad(&mut reservoir, tree).unwrap(), expected);
            }
        }
    }

    #[test]
    fn verify_count1_overrun_is_discarded() {
        // Table A codes the quadruple (0, 0, 0, 0) as the single bit 1.
        let channel = GranuleChannel { part2_3_length: 0, ..Default::default() };

        let mut fields = vec![(1, 1); 5];
        // (0, 0, 0, 1) is coded as 0101 and is followed by a sign bit.
        fields.push((0b0101, 4));
        fields.push((0, 1));

        let mut reservoir = reservoir_with(&fields);
        let mut buf = [9; 576];

        // The channel ends in the middle of the last quadruple's code word.
        let rzero = read_huffman_samples(&mut reservoir, &channel, 7, &mut buf).unwrap();

        assert_eq!(rzero, 20);
        assert_eq!(reservoir.bit_count(), 7);
        assert!(buf.iter().all(|&s| s == 0));
    }

    #[test]
    fn verify_big_values_and_stuffing() {
        // Table 1: (0, 0) = 1, (1, 1) = 000 followed by two sign bits.
        let channel = GranuleChannel {
            big_values: 2,
            table_select: [1, 1, 1],
            region1_start: 576,
            region2_start: 576,
            ..Default::default()
        };

        let fields = [(0b1, 1), (0b000, 3), (0b10, 2), (0b1111, 4)];

        let mut reservoir = reservoir_with(&fields);
        let mut buf = [0; 576];

        // 6 bits of big_values, followed by 4 stuffing bits. There is no room for count1 values.
        let rzero = read_huffman_samples(&mut reservoir, &channel, 6, &mut buf).unwrap();

        assert_eq!(rzero, 4);
        assert_eq!(buf[..4], [0, 0, -1, 1]);
        assert_eq!(reservoir.bit_count(), 6);
    }
}
