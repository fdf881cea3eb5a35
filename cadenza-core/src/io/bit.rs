// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::min;
use std::io;

fn end_of_bitstream_error<T>() -> io::Result<T> {
    Err(io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of bitstream"))
}

/// A `FiniteBitStream` is a bit stream that has a known length in bits.
pub trait FiniteBitStream {
    /// Gets the number of bits left unread.
    fn bits_left(&self) -> u64;
}

/// `ReadBitsLtr` reads bits from most-significant to least-significant.
pub trait ReadBitsLtr {
    /// Read a single bit as a boolean value or returns an error.
    fn read_bit(&mut self) -> io::Result<bool>;

    /// Reads up to 32-bits and interprets them as an unsigned integer or returns an error. The
    /// first bit read is the most-significant bit of the result.
    fn read_bits_leq32(&mut self, bit_width: u32) -> io::Result<u32>;

    /// Ignores the specified number of bits from the stream or returns an error.
    fn ignore_bits(&mut self, num_bits: u32) -> io::Result<()>;

    /// Discards bits until the stream is at a byte boundary.
    fn realign(&mut self);
}

/// `BitReaderLtr` reads bits from most-significant to least-significant from any `&[u8]`.
///
/// Stated another way, if N-bits are read from a `BitReaderLtr` then bit 0, the first bit read,
/// is the most-significant bit, and bit N-1, the last bit read, is the least-significant.
pub struct BitReaderLtr<'a> {
    buf: &'a [u8],
    /// Cached bits, left-aligned.
    bits: u64,
    n_bits_left: u32,
}

impl<'a> BitReaderLtr<'a> {
    /// Instantiate a new `BitReaderLtr` with the given buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        BitReaderLtr { buf, bits: 0, n_bits_left: 0 }
    }

    /// Refill the bit cache. Only called when the cache is empty.
    fn fetch_bits(&mut self) -> io::Result<()> {
        let read_len = min(self.buf.len(), std::mem::size_of::<u64>());

        if read_len == 0 {
            return end_of_bitstream_error();
        }

        let mut bytes = [0u8; std::mem::size_of::<u64>()];
        bytes[..read_len].copy_from_slice(&self.buf[..read_len]);

        self.buf = &self.buf[read_len..];

        self.bits = u64::from_be_bytes(bytes);
        self.n_bits_left = (read_len as u32) << 3;

        Ok(())
    }

    #[inline(always)]
    fn consume_bits(&mut self, num: u32) {
        debug_assert!(num < u64::BITS);
        self.n_bits_left -= num;
        self.bits <<= num;
    }
}

impl<'a> ReadBitsLtr for BitReaderLtr<'a> {
    #[inline(always)]
    fn read_bit(&mut self) -> io::Result<bool> {
        if self.n_bits_left < 1 {
            self.fetch_bits()?;
        }

        let bit = self.bits & (1 << 63) != 0;

        self.consume_bits(1);
        Ok(bit)
    }

    fn read_bits_leq32(&mut self, bit_width: u32) -> io::Result<u32> {
        debug_assert!(bit_width <= u32::BITS);

        let mut value = 0u64;
        let mut bits_needed = bit_width;

        while bits_needed > 0 {
            if self.n_bits_left == 0 {
                self.fetch_bits()?;
            }

            // At most 32 bits are taken per iteration so none of the shifts below can overflow.
            let take = min(bits_needed, self.n_bits_left);

            value = (value << take) | (self.bits >> (u64::BITS - take));

            self.consume_bits(take);
            bits_needed -= take;
        }

        Ok(value as u32)
    }

    fn ignore_bits(&mut self, mut num_bits: u32) -> io::Result<()> {
        while num_bits > 0 {
            if self.n_bits_left == 0 {
                self.fetch_bits()?;
            }

            let take = min(num_bits, min(self.n_bits_left, 32));
            self.consume_bits(take);
            num_bits -= take;
        }
        Ok(())
    }

    #[inline(always)]
    fn realign(&mut self) {
        let skip = self.n_bits_left & 0x7;
        self.consume_bits(skip);
    }
}

impl<'a> FiniteBitStream for BitReaderLtr<'a> {
    fn bits_left(&self) -> u64 {
        (8 * self.buf.len() as u64) + u64::from(self.n_bits_left)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitReaderLtr, FiniteBitStream, ReadBitsLtr};

    #[test]
    fn verify_bitstreamltr_read_bit() {
        // General tests.
        let mut bs = BitReaderLtr::new(&[0b1010_1010]);

        assert_eq!(bs.read_bit().unwrap(), true);
        assert_eq!(bs.read_bit().unwrap(), false);
        assert_eq!(bs.read_bit().unwrap(), true);
        assert_eq!(bs.read_bit().unwrap(), false);
        assert_eq!(bs.read_bit().unwrap(), true);
        assert_eq!(bs.read_bit().unwrap(), false);
        assert_eq!(bs.read_bit().unwrap(), true);
        assert_eq!(bs.read_bit().unwrap(), false);

        // Error test.
        assert!(bs.read_bit().is_err());
    }

    #[test]
    fn verify_bitstreamltr_read_bits_leq32() {
        let mut bs = BitReaderLtr::new(&[
            0b1010_0101, 0b0111_1110, 0b1101_0011, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
        ]);

        assert_eq!(bs.read_bits_leq32(0).unwrap(), 0);
        assert_eq!(bs.read_bits_leq32(4).unwrap(), 0b1010);
        assert_eq!(bs.read_bits_leq32(4).unwrap(), 0b0101);
        assert_eq!(bs.read_bits_leq32(9).unwrap(), 0b0_1111_1101);
        assert_eq!(bs.read_bits_leq32(7).unwrap(), 0b101_0011);
        assert_eq!(bs.bits_left(), 64);

        // A 32-bit read spanning the cache boundary.
        assert_eq!(bs.read_bits_leq32(32).unwrap(), 0x0102_0304);
        assert_eq!(bs.read_bits_leq32(32).unwrap(), 0x0506_0708);
        assert_eq!(bs.bits_left(), 0);

        assert!(bs.read_bits_leq32(1).is_err());
    }

    #[test]
    fn verify_bitstreamltr_ignore_and_realign() {
        let mut bs = BitReaderLtr::new(&[0xff, 0x00, 0b1100_0000, 0xaa]);

        bs.ignore_bits(3).unwrap();
        bs.realign();
        assert_eq!(bs.read_bits_leq32(8).unwrap(), 0x00);

        bs.ignore_bits(2).unwrap();
        assert_eq!(bs.read_bits_leq32(6).unwrap(), 0);
        assert_eq!(bs.read_bits_leq32(8).unwrap(), 0xaa);

        assert!(bs.ignore_bits(1).is_err());
    }
}
