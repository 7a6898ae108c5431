/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error type shared by all cursors.

use thiserror::Error;

/// Errors returned by readers and fixed-capacity writers.
///
/// Every failing operation reports the error before touching the cursor
/// position or the underlying buffer, so a failed call can be retried with
/// different arguments on the same cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The range `offset..offset + size` is not contained in `0..length`.
    ///
    /// Units are bytes for byte cursors and bits for bit cursors. If
    /// `offset + size` overflows `usize`, the error reports the request as
    /// given.
    #[error("range {offset}+{size} is out of range for length {length}")]
    OutOfRange {
        offset: usize,
        size: usize,
        length: usize,
    },

    /// The data at `offset` does not have the expected shape.
    #[error("malformed data at offset {offset}: {reason}")]
    MalformedData { offset: usize, reason: &'static str },
}

impl CursorError {
    #[cold]
    pub(crate) fn out_of_range(offset: usize, size: usize, length: usize) -> Self {
        tracing::trace!(offset, size, length, "access out of range");
        Self::OutOfRange {
            offset,
            size,
            length,
        }
    }

    #[cold]
    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        tracing::trace!(offset, reason, "malformed data");
        Self::MalformedData { offset, reason }
    }
}

/// Checks that `offset..offset + size` lies within `0..length`.
#[inline(always)]
pub(crate) fn check_range(offset: usize, size: usize, length: usize) -> Result<(), CursorError> {
    match offset.checked_add(size) {
        Some(end) if end <= length => Ok(()),
        _ => Err(CursorError::out_of_range(offset, size, length)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(3, 0, 3).is_ok());
        assert!(check_range(1, 2, 3).is_ok());
        assert_eq!(
            check_range(2, 2, 3),
            Err(CursorError::OutOfRange {
                offset: 2,
                size: 2,
                length: 3
            })
        );
        assert!(check_range(4, 0, 3).is_err());
        assert!(check_range(usize::MAX, 2, 3).is_err());
    }

    #[test]
    fn test_display() {
        let err = CursorError::malformed(7, "unterminated string");
        assert_eq!(
            err.to_string(),
            "malformed data at offset 7: unterminated string"
        );
    }
}
