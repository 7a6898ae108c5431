/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::CursorError;
use crate::traits::*;
use alloc::vec::Vec;
use core::convert::Infallible;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An append-only bit writer packing bits into a contiguous byte buffer.
///
/// Bits are written most significant first, mirroring
/// [`BitReader`](crate::impls::BitReader). The bytes written so far are
/// always directly usable: the bits of the last byte that have not been
/// written yet are zero.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut writer = BitWriter::new();
/// writer.write(true);
/// writer.write_bits(0b011, 3);
/// assert_eq!(writer.size(), 4);
/// assert_eq!(writer.as_bytes(), &[0b1011_0000]);
///
/// writer.write_bits(0xABC, 12);
/// assert_eq!(writer.as_bytes(), &[0b1011_1010, 0xBC]);
///
/// writer.truncate(6).unwrap();
/// assert_eq!(writer.as_bytes(), &[0b1011_1000]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitWriter {
    data: Vec<u8>,
    /// The number of bits of the last byte not written yet, in `0..8`.
    last_byte_unset_bits: u8,
}

impl BitWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of bits written.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len() * 8 - self.last_byte_unset_bits as usize
    }

    /// Discard all the bits written.
    pub fn reset(&mut self) {
        self.data.clear();
        self.last_byte_unset_bits = 0;
    }

    /// Keep only the first `bits` bits.
    pub fn truncate(&mut self, bits: usize) -> Result<(), CursorError> {
        if bits > self.size() {
            return Err(CursorError::out_of_range(0, bits, self.size()));
        }
        let len = bits.div_ceil(8);
        self.data.truncate(len);
        self.last_byte_unset_bits = (len * 8 - bits) as u8;
        if let Some(last) = self.data.last_mut() {
            *last &= 0xFF << self.last_byte_unset_bits;
        }
        Ok(())
    }

    /// Append a bit.
    #[inline]
    pub fn write(&mut self, bit: bool) {
        self.write_bits(bit as u64, 1);
    }

    /// Append the lowest `n` bits of `value`, most significant first.
    ///
    /// # Panics
    ///
    /// If `n` is greater than 64.
    pub fn write_bits(&mut self, value: u64, n: usize) {
        assert!(n <= 64, "cannot write {} bits at once", n);
        let mut left = n;
        while left > 0 {
            if self.last_byte_unset_bits == 0 {
                self.data.push(0);
                self.last_byte_unset_bits = 8;
            }
            let free = self.last_byte_unset_bits as usize;
            let take = free.min(left);
            left -= take;
            let bits = ((value >> left) & ((1 << take) - 1)) as u8;
            let last = self.data.len() - 1;
            self.data[last] |= bits << (free - take);
            self.last_byte_unset_bits = (free - take) as u8;
        }
    }

    /// The packed bytes; unwritten bits of the last byte are zero.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl BitWrite for BitWriter {
    type Error = Infallible;

    #[inline]
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize, Self::Error> {
        BitWriter::write_bits(self, value, n);
        Ok(n)
    }
}
