/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{CursorError, check_range};
use crate::traits::*;

/// A bounds-checked bit cursor over a backend implementing `AsRef<[u8]>`.
///
/// Bits are read most significant first: the first bit of the stream is bit
/// 7 of the first byte. Positions and sizes are in bits and relative to the
/// start of the visible window, exactly as in
/// [`ByteReader`](crate::impls::ByteReader), from which bit readers are
/// usually obtained through [`sub_bits`](crate::impls::ByteReader::sub_bits)
/// and friends.
///
/// This implementation accesses memory directly, without any buffering.
/// Reads of more than 64 bits at once are a programming error and panic.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut reader = BitReader::new(&[0b1011_0010_u8, 0xFF][..]);
/// assert_eq!(reader.size(), 16);
/// assert!(reader.read_bit().unwrap());
/// assert_eq!(reader.read(3).unwrap(), 0b011);
/// assert_eq!(reader.peek(8).unwrap(), 0b0010_1111);
/// assert_eq!(reader.pread(12, 4).unwrap(), 0xF);
/// assert!(reader.read(13).is_err());
/// assert_eq!(reader.position(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<B: AsRef<[u8]>> {
    data: B,
    /// The index of the first byte of the visible window in `data`.
    start: usize,
    /// The number of visible bits.
    length: usize,
    /// The index of the current bit, relative to `start`.
    bit_index: usize,
}

impl<B: AsRef<[u8]>> BitReader<B> {
    /// Create a new [`BitReader`] covering all of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        let length = data.as_ref().len() * 8;
        Self::from_window(data, 0, length)
    }

    /// Create a new [`BitReader`] covering all of `data`, positioned at
    /// bit `bit_offset`.
    pub fn with_offset(data: B, bit_offset: usize) -> Result<Self, CursorError> {
        let mut reader = Self::new(data);
        reader.go(bit_offset)?;
        Ok(reader)
    }

    /// `bits` bits starting at byte `start` of `data`. The caller guarantees
    /// that the window lies within `data`.
    pub(crate) fn from_window(data: B, start: usize, bits: usize) -> Self {
        Self {
            data,
            start,
            length: bits,
            bit_index: 0,
        }
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    /// The index of the current bit.
    #[inline(always)]
    #[must_use]
    pub fn position(&self) -> usize {
        self.bit_index
    }

    /// The number of visible bits.
    #[inline(always)]
    #[must_use]
    pub fn size(&self) -> usize {
        self.length
    }

    /// The number of bits between the current position and the end.
    #[inline(always)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.length - self.bit_index
    }

    #[inline(always)]
    #[must_use]
    pub fn eof(&self) -> bool {
        self.bit_index == self.length
    }

    /// Move to bit `bit_offset`, which may be equal to the size of the
    /// reader.
    pub fn go(&mut self, bit_offset: usize) -> Result<(), CursorError> {
        check_range(bit_offset, 0, self.length)?;
        self.bit_index = bit_offset;
        Ok(())
    }

    /// Advance by `bits` bits.
    pub fn skip(&mut self, bits: usize) -> Result<(), CursorError> {
        check_range(self.bit_index, bits, self.length)?;
        self.bit_index += bits;
        Ok(())
    }

    /// Shrink the visible window to `new_size` bits.
    ///
    /// If the current position is beyond the new end, it is moved to the end.
    pub fn truncate(&mut self, new_size: usize) -> Result<(), CursorError> {
        if new_size > self.length {
            return Err(CursorError::out_of_range(0, new_size, self.length));
        }
        self.length = new_size;
        self.bit_index = self.bit_index.min(new_size);
        Ok(())
    }

    /// Extract `width` bits at `bit_offset`. The range must have been
    /// checked.
    #[inline]
    fn extract(&self, bit_offset: usize, width: usize) -> u64 {
        let bytes = &self.data.as_ref()[self.start..];
        let mut pos = bit_offset;
        let mut left = width;
        let mut value = 0_u64;
        while left > 0 {
            let in_byte = pos % 8;
            let take = (8 - in_byte).min(left);
            let bits = (bytes[pos / 8] << in_byte) >> (8 - take);
            value = (value << take) | bits as u64;
            pos += take;
            left -= take;
        }
        value
    }

    /// Return the `width` bits at `bit_offset` in the lowest bits of the
    /// result, without moving.
    ///
    /// # Panics
    ///
    /// If `width` is greater than 64.
    #[inline]
    pub fn pread(&self, bit_offset: usize, width: usize) -> Result<u64, CursorError> {
        assert!(width <= 64, "cannot read {} bits at once", width);
        check_range(bit_offset, width, self.length)?;
        Ok(self.extract(bit_offset, width))
    }

    /// Return the next `width` bits without advancing.
    ///
    /// # Panics
    ///
    /// If `width` is greater than 64.
    #[inline]
    pub fn peek(&self, width: usize) -> Result<u64, CursorError> {
        self.pread(self.bit_index, width)
    }

    /// Return the next `width` bits and advance past them.
    ///
    /// # Panics
    ///
    /// If `width` is greater than 64.
    #[inline]
    pub fn read(&mut self, width: usize) -> Result<u64, CursorError> {
        let value = self.peek(width)?;
        self.bit_index += width;
        Ok(value)
    }

    #[inline]
    pub fn read_bit(&mut self) -> Result<bool, CursorError> {
        Ok(self.read(1)? != 0)
    }
}

impl<B: AsRef<[u8]>> BitRead for BitReader<B> {
    type Error = CursorError;

    #[inline]
    fn read_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        self.read(n)
    }

    #[inline]
    fn peek_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        self.peek(n)
    }

    #[inline]
    fn skip_bits(&mut self, n: usize) -> Result<(), Self::Error> {
        self.skip(n)
    }
}

impl<B: AsRef<[u8]>> BitSeek for BitReader<B> {
    type Error = CursorError;

    fn bit_pos(&mut self) -> Result<u64, Self::Error> {
        Ok(self.bit_index as u64)
    }

    fn set_bit_pos(&mut self, bit_pos: u64) -> Result<(), Self::Error> {
        self.go(usize::try_from(bit_pos).unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_across_bytes() {
        let data = [0x12_u8, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11];
        let mut reader = BitReader::new(&data[..]);
        assert_eq!(reader.read(4).unwrap(), 0x1);
        assert_eq!(reader.read(8).unwrap(), 0x23);
        assert_eq!(reader.read(0).unwrap(), 0);
        assert_eq!(reader.read(12).unwrap(), 0x456);
        reader.go(4).unwrap();
        assert_eq!(reader.read(64).unwrap(), 0x23456789ABCDEF01);
        assert_eq!(reader.remaining(), 4);
        assert_eq!(reader.pread(0, 64).unwrap(), 0x123456789ABCDEF0);
    }

    #[test]
    fn test_bounds() {
        let mut reader = BitReader::new(&[0xFF_u8][..]);
        assert!(reader.read(9).is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read(8).unwrap(), 0xFF);
        assert!(reader.eof());
        assert!(reader.read_bit().is_err());
        assert_eq!(reader.peek(0).unwrap(), 0);
        assert!(reader.go(9).is_err());
        assert!(reader.skip(1).is_err());
        assert!(BitReader::with_offset(&[0_u8][..], 9).is_err());
    }

    #[test]
    #[should_panic]
    fn test_too_wide() {
        let reader = BitReader::new(&[0_u8; 16][..]);
        let _ = reader.peek(65);
    }

    #[test]
    fn test_truncate() {
        let mut reader = BitReader::with_offset(&[0xAA_u8, 0xAA][..], 12).unwrap();
        assert!(reader.truncate(17).is_err());
        reader.truncate(10).unwrap();
        assert_eq!(reader.size(), 10);
        assert!(reader.eof());
        reader.go(6).unwrap();
        assert_eq!(reader.read(4).unwrap(), 0b1010);
        assert!(reader.read_bit().is_err());
    }

    #[test]
    fn test_seek() {
        let mut reader = BitReader::new(&[0x0F_u8][..]);
        reader.set_bit_pos(4).unwrap();
        assert_eq!(reader.bit_pos().unwrap(), 4);
        assert_eq!(reader.read_bits(4).unwrap(), 0xF);
        assert!(reader.set_bit_pos(9).is_err());
        assert!(reader.set_bit_pos(u64::MAX).is_err());
        reader.set_bit_pos(0).unwrap();
        reader.skip_bits(2).unwrap();
        assert_eq!(reader.peek_bits(4).unwrap(), 0b0011);
    }
}
