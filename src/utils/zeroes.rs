/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Counts the zero bytes among those at positions `0`, `stride`,
/// `2 * stride`, and so on.
///
/// With a stride of one this is the number of zero bytes in `data`; larger
/// strides sample a single byte out of records of `stride` bytes, which is
/// handy to guess whether a column of a table is mostly empty.
///
/// # Panics
///
/// If `stride` is zero.
///
/// # Examples
///
/// ```
/// use bincursor::utils::count_zeroes;
///
/// assert_eq!(count_zeroes(&[0, 1, 0, 0, 2], 1), 3);
/// assert_eq!(count_zeroes(&[0, 1, 0, 0, 2], 2), 2);
/// assert_eq!(count_zeroes(&[], 4), 0);
/// ```
#[must_use]
pub fn count_zeroes(data: &[u8], stride: usize) -> usize {
    assert!(stride > 0, "the stride must be positive");
    data.iter().step_by(stride).filter(|&&b| b == 0).count()
}
