// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io;

use cadenza_core::io::ReadBitsLtr;

/// The size of the reservoir window in bytes.
pub const RESERVOIR_LEN: usize = 4096;

const RESERVOIR_BITS: usize = 8 * RESERVOIR_LEN;

/// `BitReservoir` implements the bit reservoir mechanism for main data. Since frames have a
/// deterministic length based on the bit-rate, low-complexity portions of the audio may not need
/// every byte allocated to the frame. The bit reservoir mechanism allows these unused portions of
/// frames to be used by future frames.
///
/// The reservoir is a circular buffer of 32768 bits. Bytes are written at a byte-aligned write
/// position and bits are read MSB-first from an independent read position. Both positions wrap
/// modulo the window. A cumulative counter tracks the number of bits read so that the decoder can
/// locate the start of each frame's main data relative to the read position.
pub struct BitReservoir {
    buf: Box<[u8; RESERVOIR_LEN]>,
    /// Bit position of the next bit to read.
    read_pos: usize,
    /// Byte position of the next byte to write.
    write_pos: usize,
    /// Total number of bits read.
    bit_count: usize,
}

impl BitReservoir {
    pub fn new() -> Self {
        BitReservoir { buf: Box::new([0; RESERVOIR_LEN]), read_pos: 0, write_pos: 0, bit_count: 0 }
    }

    /// Gets the cumulative number of bits read from the reservoir.
    #[inline(always)]
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Appends a byte to the reservoir.
    #[inline(always)]
    pub fn put_byte(&mut self, byte: u8) {
        self.buf[self.write_pos] = byte;
        self.write_pos = (self.write_pos + 1) % RESERVOIR_LEN;
    }

    /// Reads a single bit.
    #[inline(always)]
    pub fn get_one_bit(&mut self) -> u32 {
        let byte = self.buf[self.read_pos >> 3];
        let bit = (byte >> (7 - (self.read_pos & 7))) & 1;

        self.read_pos = (self.read_pos + 1) % RESERVOIR_BITS;
        self.bit_count += 1;

        u32::from(bit)
    }

    /// Reads `n` bits, most-significant bit first. `n` must be <= 32.
    pub fn get_bits(&mut self, n: u32) -> u32 {
        debug_assert!(n <= 32);

        let mut value = 0u64;
        let mut remaining = n as usize;

        while remaining > 0 {
            // Take as many bits as are left in the current byte.
            let bit_offset = self.read_pos & 7;
            let take = remaining.min(8 - bit_offset);

            let byte = u64::from(self.buf[self.read_pos >> 3]);
            let bits = (byte >> (8 - bit_offset - take)) & ((1 << take) - 1);

            value = (value << take) | bits;

            self.read_pos = (self.read_pos + take) % RESERVOIR_BITS;
            remaining -= take;
        }

        self.bit_count += n as usize;

        value as u32
    }

    /// Skips `n` bits.
    pub fn skip_bits(&mut self, n: usize) {
        self.read_pos = (self.read_pos + n) % RESERVOIR_BITS;
        self.bit_count += n;
    }

    /// Moves the read position back by `n` bits.
    pub fn rewind_bits(&mut self, n: usize) {
        debug_assert!(n <= self.bit_count);

        self.read_pos = (self.read_pos + RESERVOIR_BITS - n % RESERVOIR_BITS) % RESERVOIR_BITS;
        self.bit_count -= n;
    }

    /// Moves the read position back by `n` bytes.
    pub fn rewind_bytes(&mut self, n: usize) {
        self.rewind_bits(8 * n);
    }
}

/// Reading main data through `ReadBitsLtr` never fails. Reading past the last byte written returns
/// stale reservoir contents, which the decoder guards against with the part2_3 length.
impl ReadBitsLtr for BitReservoir {
    #[inline(always)]
    fn read_bit(&mut self) -> io::Result<bool> {
        Ok(self.get_one_bit() == 1)
    }

    #[inline(always)]
    fn read_bits_leq32(&mut self, bit_width: u32) -> io::Result<u32> {
        Ok(self.get_bits(bit_width))
    }

    fn ignore_bits(&mut self, num_bits: u32) -> io::Result<()> {
        self.skip_bits(num_bits as usize);
        Ok(())
    }

    fn realign(&mut self) {
        let skip = (8 - (self.bit_count & 7)) & 7;
        self.skip_bits(skip);
    }
}

impl Default for BitReservoir {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(bytes: &[u8]) -> BitReservoir {
        let mut reservoir = BitReservoir::new();

        for &byte in bytes {
            reservoir.put_byte(byte);
        }

        reservoir
    }

    #[test]
    fn verify_get_bits() {
        let mut reservoir = filled(&[0b1010_0101, 0b1100_0011, 0xff, 0x00, 0x12, 0x34, 0x56, 0x78]);

        assert_eq!(reservoir.get_one_bit(), 1);
        assert_eq!(reservoir.get_one_bit(), 0);
        assert_eq!(reservoir.get_bits(4), 0b1001);
        assert_eq!(reservoir.get_bits(6), 0b01_1100);
        assert_eq!(reservoir.get_bits(4), 0b0011);
        assert_eq!(reservoir.bit_count(), 16);
        assert_eq!(reservoir.get_bits(0), 0);
        assert_eq!(reservoir.get_bits(16), 0xff00);
        assert_eq!(reservoir.get_bits(32), 0x1234_5678);
        assert_eq!(reservoir.bit_count(), 64);
    }

    #[test]
    fn verify_rewind_law() {
        let bytes: Vec<u8> = (0..64u32).map(|i| (i * 37 + 11) as u8).collect();

        for n in 1..=32 {
            for offset in [0, 3, 7, 13] {
                let mut reservoir = filled(&bytes);
                reservoir.skip_bits(offset);

                let first = reservoir.get_bits(n);
                reservoir.rewind_bits(n as usize);
                let second = reservoir.get_bits(n);

                assert_eq!(first, second, "n = {}, offset = {}", n, offset);
                assert_eq!(reservoir.bit_count(), offset + n as usize);
            }
        }
    }

    #[test]
    fn verify_wrap_around() {
        let mut reservoir = BitReservoir::new();

        // Fill and consume all but the last two bytes of the window.
        for _ in 0..RESERVOIR_LEN - 2 {
            reservoir.put_byte(0);
        }
        reservoir.skip_bits(8 * (RESERVOIR_LEN - 2));

        // These bytes straddle the end of the window.
        for &byte in &[0xde, 0xad, 0xbe, 0xef] {
            reservoir.put_byte(byte);
        }

        assert_eq!(reservoir.get_bits(32), 0xdead_beef);

        reservoir.rewind_bytes(3);
        assert_eq!(reservoir.get_bits(24), 0xad_beef);
        assert_eq!(reservoir.bit_count(), 8 * (RESERVOIR_LEN + 2));
    }
}
