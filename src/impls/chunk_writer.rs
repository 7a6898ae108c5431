/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::Scalar;
use crate::traits::*;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::convert::Infallible;

/// A writer accumulating independently owned chunks, concatenated only
/// when [closed](ChunkWriter::close).
///
/// Appending never moves previously written bytes, so building a large
/// output out of many small writes costs time linear in its size.
///
/// Each call to [`write`](ChunkWriter::write),
/// [`write_owned`](ChunkWriter::write_owned), [`put`](ScalarWrite::put) or
/// [`write!`] adds exactly one chunk; when closing, the separator is placed
/// between consecutive chunks.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
/// use core::fmt::Write;
///
/// let mut writer = ChunkWriter::new();
/// writer.write(b"width");
/// write!(writer, "{}x{}", 640, 480).unwrap();
/// writer.write_owned(b"rgb".to_vec());
/// assert_eq!(writer.len(), 3);
/// assert_eq!(writer.close(b", "), b"width, 640x480, rgb");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkWriter {
    chunks: VecDeque<Vec<u8>>,
    /// Total number of bytes in `chunks`.
    size: usize,
}

impl ChunkWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `bytes` as a new chunk.
    pub fn write(&mut self, bytes: &[u8]) {
        self.write_owned(bytes.to_vec());
    }

    /// Append `bytes` as a new chunk without copying.
    pub fn write_owned(&mut self, bytes: Vec<u8>) {
        self.size += bytes.len();
        self.chunks.push_back(bytes);
    }

    /// The number of chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The total number of bytes in all chunks, separators excluded.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The chunks written so far, in order.
    pub fn chunks(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.chunks.iter().map(Vec::as_slice)
    }

    /// Concatenate all chunks, placing `separator` between consecutive ones.
    #[must_use]
    pub fn close(self, separator: &[u8]) -> Vec<u8> {
        let separators = separator.len() * self.chunks.len().saturating_sub(1);
        let mut result = Vec::with_capacity(self.size + separators);
        for (i, chunk) in self.chunks.into_iter().enumerate() {
            if i > 0 {
                result.extend_from_slice(separator);
            }
            result.extend_from_slice(&chunk);
        }
        result
    }
}

impl ScalarWrite for ChunkWriter {
    type Error = Infallible;

    #[inline]
    fn put<E: Endianness, T: Scalar>(&mut self, value: T::Value) -> Result<(), Infallible> {
        self.write(T::encode::<E>(value).as_ref());
        Ok(())
    }
}

impl core::fmt::Write for ChunkWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write(s.as_bytes());
        Ok(())
    }

    // A formatted write is a single chunk, however many pieces it has.
    fn write_fmt(&mut self, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
        self.write_owned(alloc::fmt::format(args).into_bytes());
        Ok(())
    }
}
