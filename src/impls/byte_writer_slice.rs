/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::Scalar;
use crate::error::{CursorError, check_range};
use crate::traits::*;

/// A fixed-capacity byte writer over caller-supplied memory.
///
/// The capacity is the length of the backend and never changes. Every write
/// is checked against it and fails with [`CursorError::OutOfRange`] before
/// touching the buffer, so a failed write leaves both the content and the
/// position unchanged.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut buffer = [0_u8; 4];
/// let mut writer = ByteWriterSlice::new(&mut buffer);
/// writer.put_u16b(0x0102).unwrap();
/// writer.put_u8(3).unwrap();
/// assert_eq!(writer.remaining(), 1);
///
/// // Does not fit: nothing is written
/// assert!(writer.put_u16l(0xFFFF).is_err());
/// assert_eq!(writer.position(), 3);
///
/// writer.pput_u8(3, 4).unwrap();
/// assert_eq!(buffer, [1, 2, 3, 4]);
/// ```
#[derive(Debug, PartialEq)]
pub struct ByteWriterSlice<B: AsMut<[u8]>> {
    data: B,
    offset: usize,
}

impl<B: AsMut<[u8]>> ByteWriterSlice<B> {
    /// Create a new [`ByteWriterSlice`] writing from the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, offset: 0 }
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    /// The offset of the next sequential write.
    #[inline(always)]
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Copy `bytes` at `offset`.
    pub fn pwrite(&mut self, offset: usize, bytes: &[u8]) -> Result<(), CursorError> {
        let data = self.data.as_mut();
        check_range(offset, bytes.len(), data.len())?;
        data[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Copy `bytes` at the current position and advance past them.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), CursorError> {
        self.pwrite(self.offset, bytes)?;
        self.offset += bytes.len();
        Ok(())
    }
}

impl<B: AsMut<[u8]> + AsRef<[u8]>> ByteWriterSlice<B> {
    #[inline(always)]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.as_ref().len()
    }

    /// The number of bytes that can still be written sequentially.
    #[inline(always)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset
    }
}

impl<B: AsMut<[u8]>> ScalarWrite for ByteWriterSlice<B> {
    type Error = CursorError;

    #[inline]
    fn put<E: Endianness, T: Scalar>(&mut self, value: T::Value) -> Result<(), CursorError> {
        self.write(T::encode::<E>(value).as_ref())
    }
}

impl<B: AsMut<[u8]>> ScalarWriteAt for ByteWriterSlice<B> {
    type Error = CursorError;

    #[inline]
    fn pput<E: Endianness, T: Scalar>(
        &mut self,
        offset: usize,
        value: T::Value,
    ) -> Result<(), CursorError> {
        self.pwrite(offset, T::encode::<E>(value).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::U48;

    #[test]
    fn test_capacity() {
        let mut writer = ByteWriterSlice::new([0_u8; 3]);
        assert_eq!(writer.capacity(), 3);
        writer.write(b"ab").unwrap();
        assert_eq!(
            writer.write(b"cd"),
            Err(CursorError::OutOfRange {
                offset: 2,
                size: 2,
                length: 3
            })
        );
        assert_eq!(writer.position(), 2);
        writer.write(b"c").unwrap();
        assert_eq!(writer.remaining(), 0);
        writer.write(b"").unwrap();
        assert!(writer.write(b"d").is_err());
        assert_eq!(writer.into_inner(), *b"abc");
    }

    #[test]
    fn test_one_past_capacity() {
        let mut buffer = [0xAA_u8; 6];
        let mut writer = ByteWriterSlice::new(&mut buffer[..]);
        assert!(writer.pput::<BE, U48>(1, 0x010203040506).is_err());
        assert!(writer.pput_u8(6, 0).is_err());
        assert!(writer.pwrite(usize::MAX, b"x").is_err());
        writer.pput::<BE, U48>(0, 0x010203040506).unwrap();
        assert_eq!(writer.position(), 0);
        assert!(writer.pput_u32l(3, 0).is_err());
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_scalars() {
        let mut buffer = [0_u8; 10];
        let mut writer = ByteWriterSlice::new(&mut buffer);
        writer.put_s8(-1).unwrap();
        writer.put_u24l(0x0A0B0C).unwrap();
        writer.put_s32b(-2).unwrap();
        writer.put_u16r(0x1234).unwrap();
        assert!(writer.put_u8(0).is_err());
        let swapped = 0x1234_u16.swap_bytes().to_ne_bytes();
        assert_eq!(buffer, [
            0xFF, 0x0C, 0x0B, 0x0A, 0xFF, 0xFF, 0xFF, 0xFE, swapped[0], swapped[1]
        ]);
    }
}
