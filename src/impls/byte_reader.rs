/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::Scalar;
use crate::error::{CursorError, check_range};
use crate::impls::BitReader;
use crate::traits::*;
use alloc::vec::Vec;

/// A bounds-checked byte cursor over a backend implementing `AsRef<[u8]>`.
///
/// The backend decides the ownership model: a `&[u8]` gives a view
/// borrowed for the lifetime of the reader, whereas a reference-counted
/// buffer such as `Arc<[u8]>` or `Rc<[u8]>` gives views that keep the data
/// alive on their own. Sub-views created by [`sub`](ByteReader::sub) and
/// friends clone the backend, so they remain valid after their parent is
/// dropped.
///
/// A reader sees a window of its backend; all offsets passed to its methods
/// are relative to the start of the window, and the window can only shrink.
///
/// Operations come in two flavors. Strict operations (those with an `x` in
/// their name, and all typed accessors) fail with
/// [`CursorError::OutOfRange`] if the requested range is not entirely
/// available. Tolerant operations clamp the request to the available data
/// and never fail, which is convenient when scanning data of unknown
/// length. No operation modifies the reader when it fails.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
/// use std::sync::Arc;
///
/// let data: Arc<[u8]> = Arc::from(&b"\x00\x2A\xFF\xFEhi\0rest"[..]);
/// let mut reader = ByteReader::new(data);
///
/// assert_eq!(reader.get_u16b().unwrap(), 42);
/// assert_eq!(reader.get_s16b().unwrap(), -2);
/// assert_eq!(reader.get_cstr().unwrap(), b"hi");
///
/// // Sub-views share the buffer and outlive the parent
/// let tail = reader.subx_tail(reader.position()).unwrap();
/// drop(reader);
/// assert_eq!(tail.as_slice(), b"rest");
///
/// // Reading past the end fails and leaves the cursor untouched
/// let mut reader = ByteReader::new(&[1_u8, 2, 3][..]);
/// assert!(reader.get_u32l().is_err());
/// assert_eq!(reader.position(), 0);
/// assert_eq!(reader.read(8), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ByteReader<B: AsRef<[u8]>> {
    data: B,
    /// Start of the visible window in `data`.
    start: usize,
    /// Length of the visible window.
    length: usize,
    /// Current position, relative to `start`.
    offset: usize,
}

impl<B: AsRef<[u8]>> ByteReader<B> {
    /// Create a new [`ByteReader`] covering all of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        let length = data.as_ref().len();
        Self {
            data,
            start: 0,
            length,
            offset: 0,
        }
    }

    /// Create a new [`ByteReader`] covering all of `data`, positioned at
    /// `offset`.
    pub fn with_offset(data: B, offset: usize) -> Result<Self, CursorError> {
        let mut reader = Self::new(data);
        reader.go(offset)?;
        Ok(reader)
    }

    pub fn into_inner(self) -> B {
        self.data
    }

    /// The bytes visible through this reader.
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data.as_ref()[self.start..self.start + self.length]
    }

    /// A copy of the bytes visible through this reader.
    #[must_use]
    pub fn all(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// The current position.
    #[inline(always)]
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The number of visible bytes.
    #[inline(always)]
    #[must_use]
    pub fn size(&self) -> usize {
        self.length
    }

    /// The number of bytes between the current position and the end.
    #[inline(always)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.length - self.offset
    }

    #[inline(always)]
    #[must_use]
    pub fn eof(&self) -> bool {
        self.offset == self.length
    }

    /// Move to `offset`, which may be equal to the size of the reader.
    pub fn go(&mut self, offset: usize) -> Result<(), CursorError> {
        check_range(offset, 0, self.length)?;
        self.offset = offset;
        Ok(())
    }

    /// Advance by `bytes`.
    pub fn skip(&mut self, bytes: usize) -> Result<(), CursorError> {
        check_range(self.offset, bytes, self.length)?;
        self.offset += bytes;
        Ok(())
    }

    /// Advance past `prefix` if the data at the current position starts
    /// with it, and return whether it did.
    pub fn skip_if(&mut self, prefix: &[u8]) -> bool {
        if self.as_slice()[self.offset..].starts_with(prefix) {
            self.offset += prefix.len();
            true
        } else {
            false
        }
    }

    /// Shrink the visible window to `new_size` bytes.
    ///
    /// If the current position is beyond the new end, it is moved to the end.
    pub fn truncate(&mut self, new_size: usize) -> Result<(), CursorError> {
        if new_size > self.length {
            return Err(CursorError::out_of_range(0, new_size, self.length));
        }
        self.length = new_size;
        self.offset = self.offset.min(new_size);
        Ok(())
    }

    /// Clamp a request to the visible window.
    #[inline(always)]
    fn clamp(&self, offset: usize, size: usize) -> (usize, usize) {
        let offset = offset.min(self.length);
        (offset, size.min(self.length - offset))
    }

    /// Return a view of `size` bytes at `offset`.
    #[inline(always)]
    pub fn pgetv(&self, offset: usize, size: usize) -> Result<&[u8], CursorError> {
        check_range(offset, size, self.length)?;
        Ok(&self.as_slice()[offset..offset + size])
    }

    /// Return a view of `size` bytes at the current position and advance
    /// past them.
    #[inline(always)]
    pub fn getv(&mut self, size: usize) -> Result<&[u8], CursorError> {
        let offset = self.offset;
        check_range(offset, size, self.length)?;
        self.offset += size;
        Ok(&self.as_slice()[offset..offset + size])
    }

    /// Return a view of `size` bytes at the current position without
    /// advancing.
    #[inline(always)]
    pub fn peek(&self, size: usize) -> Result<&[u8], CursorError> {
        self.pgetv(self.offset, size)
    }

    /// Copy up to `size` bytes at the current position and advance past
    /// them. Fewer bytes are returned if the reader ends first.
    pub fn read(&mut self, size: usize) -> Vec<u8> {
        let (offset, size) = self.clamp(self.offset, size);
        self.offset = offset + size;
        self.as_slice()[offset..offset + size].to_vec()
    }

    /// Copy exactly `size` bytes at the current position and advance past
    /// them.
    pub fn readx(&mut self, size: usize) -> Result<Vec<u8>, CursorError> {
        self.getv(size).map(<[u8]>::to_vec)
    }

    /// Fill as much of `buf` as possible from the current position, advance
    /// past the bytes copied and return their number.
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let copied = self.pread_into(self.offset, buf);
        self.offset += copied;
        copied
    }

    /// Fill all of `buf` from the current position and advance past it.
    pub fn readx_into(&mut self, buf: &mut [u8]) -> Result<(), CursorError> {
        buf.copy_from_slice(self.getv(buf.len())?);
        Ok(())
    }

    /// Copy up to `size` bytes at `offset`.
    #[must_use]
    pub fn pread(&self, offset: usize, size: usize) -> Vec<u8> {
        let (offset, size) = self.clamp(offset, size);
        self.as_slice()[offset..offset + size].to_vec()
    }

    /// Copy exactly `size` bytes at `offset`.
    pub fn preadx(&self, offset: usize, size: usize) -> Result<Vec<u8>, CursorError> {
        self.pgetv(offset, size).map(<[u8]>::to_vec)
    }

    /// Fill as much of `buf` as possible from `offset` and return the number
    /// of bytes copied.
    pub fn pread_into(&self, offset: usize, buf: &mut [u8]) -> usize {
        let (offset, size) = self.clamp(offset, buf.len());
        buf[..size].copy_from_slice(&self.as_slice()[offset..offset + size]);
        size
    }

    /// Fill all of `buf` from `offset`.
    pub fn preadx_into(&self, offset: usize, buf: &mut [u8]) -> Result<(), CursorError> {
        buf.copy_from_slice(self.pgetv(offset, buf.len())?);
        Ok(())
    }

    /// Decode `count` consecutive scalars at `offset`.
    pub fn pget_array<E: Endianness, T: Scalar>(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<T::Value>, CursorError> {
        let size = count
            .checked_mul(T::BYTES)
            .ok_or_else(|| CursorError::out_of_range(offset, usize::MAX, self.length))?;
        Ok(self
            .pgetv(offset, size)?
            .chunks_exact(T::BYTES)
            .map(T::decode_slice::<E>)
            .collect())
    }

    /// Decode `count` consecutive scalars at the current position and
    /// advance past them.
    pub fn get_array<E: Endianness, T: Scalar>(
        &mut self,
        count: usize,
    ) -> Result<Vec<T::Value>, CursorError> {
        let values = self.pget_array::<E, T>(self.offset, count)?;
        self.offset += count * T::BYTES;
        Ok(values)
    }

    /// Read a NUL-terminated string at `offset`, without the terminator.
    pub fn pget_cstr(&self, offset: usize) -> Result<Vec<u8>, CursorError> {
        let tail = self.pgetv(offset, self.length.saturating_sub(offset))?;
        match tail.iter().position(|&b| b == 0) {
            Some(len) => Ok(tail[..len].to_vec()),
            None => Err(CursorError::malformed(offset, "unterminated string")),
        }
    }

    /// Read a NUL-terminated string at the current position, without the
    /// terminator, and advance past the terminator.
    pub fn get_cstr(&mut self) -> Result<Vec<u8>, CursorError> {
        let s = self.pget_cstr(self.offset)?;
        self.offset += s.len() + 1;
        Ok(s)
    }

    /// Read a line at the current position and advance past its terminator.
    ///
    /// The terminator (`\n` or `\r\n`) is not part of the result. If there
    /// is no terminator the rest of the data is returned. Fails only if the
    /// reader is at its end.
    pub fn get_line(&mut self) -> Result<Vec<u8>, CursorError> {
        if self.eof() {
            return Err(CursorError::out_of_range(self.offset, 1, self.length));
        }
        let tail = &self.as_slice()[self.offset..];
        let (line, consumed) = match tail.iter().position(|&b| b == b'\n') {
            Some(len) => match &tail[..len] {
                [head @ .., b'\r'] => (head, len + 1),
                line => (line, len + 1),
            },
            None => (tail, tail.len()),
        };
        let line = line.to_vec();
        self.offset += consumed;
        Ok(line)
    }
}

impl<B: AsRef<[u8]> + Clone> ByteReader<B> {
    fn window(&self, offset: usize, size: usize) -> Self {
        Self {
            data: self.data.clone(),
            start: self.start + offset,
            length: size,
            offset: 0,
        }
    }

    /// A reader over at most `size` bytes at `offset`, clamped to the
    /// visible window.
    #[must_use]
    pub fn sub(&self, offset: usize, size: usize) -> Self {
        let (offset, size) = self.clamp(offset, size);
        self.window(offset, size)
    }

    /// A reader over the bytes from `offset` to the end, clamped to the
    /// visible window.
    #[must_use]
    pub fn sub_tail(&self, offset: usize) -> Self {
        self.sub(offset, usize::MAX)
    }

    /// A reader over exactly `size` bytes at `offset`.
    pub fn subx(&self, offset: usize, size: usize) -> Result<Self, CursorError> {
        check_range(offset, size, self.length)?;
        Ok(self.window(offset, size))
    }

    /// A reader over the bytes from `offset` to the end.
    pub fn subx_tail(&self, offset: usize) -> Result<Self, CursorError> {
        check_range(offset, 0, self.length)?;
        Ok(self.window(offset, self.length - offset))
    }

    fn bits_window(&self, offset: usize, size: usize) -> BitReader<B> {
        BitReader::from_window(self.data.clone(), self.start + offset, size * 8)
    }

    /// A bit reader over at most `size` bytes at `offset`, clamped to the
    /// visible window.
    #[must_use]
    pub fn sub_bits(&self, offset: usize, size: usize) -> BitReader<B> {
        let (offset, size) = self.clamp(offset, size);
        self.bits_window(offset, size)
    }

    /// A bit reader over the bytes from `offset` to the end, clamped to the
    /// visible window.
    #[must_use]
    pub fn sub_bits_tail(&self, offset: usize) -> BitReader<B> {
        self.sub_bits(offset, usize::MAX)
    }

    /// A bit reader over exactly `size` bytes at `offset`.
    pub fn subx_bits(&self, offset: usize, size: usize) -> Result<BitReader<B>, CursorError> {
        check_range(offset, size, self.length)?;
        Ok(self.bits_window(offset, size))
    }

    /// A bit reader over the bytes from `offset` to the end.
    pub fn subx_bits_tail(&self, offset: usize) -> Result<BitReader<B>, CursorError> {
        check_range(offset, 0, self.length)?;
        Ok(self.bits_window(offset, self.length - offset))
    }
}

impl<B: AsRef<[u8]>> ScalarRead for ByteReader<B> {
    type Error = CursorError;

    #[inline(always)]
    fn get<E: Endianness, T: Scalar>(&mut self) -> Result<T::Value, CursorError> {
        let value = self.pget::<E, T>(self.offset)?;
        self.offset += T::BYTES;
        Ok(value)
    }

    #[inline(always)]
    fn pget<E: Endianness, T: Scalar>(&self, offset: usize) -> Result<T::Value, CursorError> {
        Ok(T::decode_slice::<E>(self.pgetv(offset, T::BYTES)?))
    }
}
