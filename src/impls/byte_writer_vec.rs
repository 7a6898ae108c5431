/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::Scalar;
use crate::traits::*;
use alloc::vec::Vec;
use core::convert::Infallible;

/// A growable byte writer backed by anything implementing `AsMut<Vec<u8>>`.
///
/// Sequential writes always append. Positional writes overwrite in place
/// and, if they end past the current end, extend the buffer with zeros
/// first, so they never fail: both [`ScalarWrite`] and [`ScalarWriteAt`] use
/// [`Infallible`] as error type.
///
/// The backend can be an owned `Vec<u8>` (the default) or a `&mut Vec<u8>`,
/// in which case bytes are appended to the existing content.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut writer = ByteWriterVec::default();
/// writer.put_u24b(0x010203).unwrap();
/// writer.put_s16l(-5).unwrap();
/// assert_eq!(writer.as_bytes(), &[1, 2, 3, 0xFB, 0xFF]);
///
/// // Positional writes past the end grow the buffer
/// writer.pput_u16b(7, 0xABCD).unwrap();
/// assert_eq!(writer.as_bytes(), &[1, 2, 3, 0xFB, 0xFF, 0, 0, 0xAB, 0xCD]);
///
/// let mut buffer = vec![0xEE_u8];
/// let mut writer = ByteWriterVec::new(&mut buffer);
/// writer.put_u8(1).unwrap();
/// assert_eq!(buffer, vec![0xEE, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteWriterVec<B: AsMut<Vec<u8>> = Vec<u8>> {
    data: B,
}

impl ByteWriterVec<Vec<u8>> {
    /// Create a new empty writer whose buffer can hold `capacity` bytes
    /// without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }
}

impl Default for ByteWriterVec<Vec<u8>> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<B: AsMut<Vec<u8>>> ByteWriterVec<B> {
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    /// Append `bytes`.
    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        self.data.as_mut().extend_from_slice(bytes);
    }

    /// Copy `bytes` at `offset`, zero-extending the buffer if needed.
    pub fn pwrite(&mut self, offset: usize, bytes: &[u8]) {
        let end = offset + bytes.len();
        let data = self.data.as_mut();
        if end > data.len() {
            data.resize(end, 0);
        }
        data[offset..end].copy_from_slice(bytes);
    }

    /// Pad with `fill` until the buffer is `size` bytes long.
    ///
    /// Does nothing if the buffer is already at least `size` bytes long.
    pub fn extend_to(&mut self, size: usize, fill: u8) {
        let data = self.data.as_mut();
        if size > data.len() {
            data.resize(size, fill);
        }
    }

    /// Append `count` copies of `fill`.
    pub fn extend_by(&mut self, count: usize, fill: u8) {
        let data = self.data.as_mut();
        data.resize(data.len() + count, fill);
    }

    /// Discard all the bytes written.
    pub fn reset(&mut self) {
        self.data.as_mut().clear();
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }
}

impl<B: AsMut<Vec<u8>> + AsRef<Vec<u8>>> ByteWriterVec<B> {
    /// The number of bytes in the buffer.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.as_ref().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_ref()
    }
}

impl<B: AsMut<Vec<u8>>> ScalarWrite for ByteWriterVec<B> {
    type Error = Infallible;

    #[inline]
    fn put<E: Endianness, T: Scalar>(&mut self, value: T::Value) -> Result<(), Infallible> {
        self.write(T::encode::<E>(value).as_ref());
        Ok(())
    }
}

impl<B: AsMut<Vec<u8>>> ScalarWriteAt for ByteWriterVec<B> {
    type Error = Infallible;

    #[inline]
    fn pput<E: Endianness, T: Scalar>(
        &mut self,
        offset: usize,
        value: T::Value,
    ) -> Result<(), Infallible> {
        self.pwrite(offset, T::encode::<E>(value).as_ref());
        Ok(())
    }
}

impl<B: AsMut<Vec<u8>>> core::fmt::Write for ByteWriterVec<B> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{I48, U24};
    use alloc::vec;
    use core::fmt::Write;

    #[test]
    fn test_append_and_overwrite() {
        let mut writer = ByteWriterVec::with_capacity(16);
        assert!(writer.is_empty());
        writer.write(b"abc");
        writer.pwrite(1, b"XY");
        assert_eq!(writer.as_bytes(), b"aXY");
        writer.pwrite(2, b"123");
        assert_eq!(writer.as_bytes(), b"aX123");
        writer.pwrite(7, b"!");
        assert_eq!(writer.as_bytes(), b"aX123\0\0!");
        assert_eq!(writer.size(), 8);
        writer.as_bytes_mut()[0] = b'A';
        assert_eq!(writer.into_inner(), b"AX123\0\0!".to_vec());
    }

    #[test]
    fn test_extend() {
        let mut writer = ByteWriterVec::default();
        writer.extend_to(3, 0xAA);
        writer.extend_by(2, 0x55);
        writer.extend_to(1, 0xFF);
        assert_eq!(writer.as_bytes(), &[0xAA, 0xAA, 0xAA, 0x55, 0x55]);
        writer.reset();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_scalars() {
        let mut writer = ByteWriterVec::default();
        writer.put_u8(0xFF).unwrap();
        writer.put_s16b(-2).unwrap();
        writer.put::<LE, U24>(0x010203).unwrap();
        writer.put::<BE, I48>(-1).unwrap();
        writer.put_f32l(1.0).unwrap();
        assert_eq!(writer.as_bytes(), &[
            0xFF, 0xFF, 0xFE, 3, 2, 1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0x80, 0x3F
        ]);

        let mut writer = ByteWriterVec::default();
        writer.pput_u32b(2, 0x01020304).unwrap();
        writer.pput_u8(0, 9).unwrap();
        assert_eq!(writer.as_bytes(), &[9, 0, 1, 2, 3, 4]);
        writer.pput_u16l(4, 0xAABB).unwrap();
        assert_eq!(writer.as_bytes(), &[9, 0, 1, 2, 0xBB, 0xAA]);
    }

    #[test]
    fn test_borrowed_backend() {
        let mut buffer = vec![1_u8, 2];
        {
            let mut writer = ByteWriterVec::new(&mut buffer);
            writer.put_u16b(0x0304).unwrap();
            write!(writer, "{}", 5).unwrap();
        }
        assert_eq!(buffer, vec![1, 2, 3, 4, b'5']);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let mut writer = ByteWriterVec::default();
        writer.write(&[1, 2]);
        let json = serde_json::to_string(&writer).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);
        let back: ByteWriterVec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, writer);
    }
}
