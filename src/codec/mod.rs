/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Endian codec.

This module contains the byte-swap primitives and the [`Scalar`] trait,
which describes how a value of a given width and kind is laid out in
memory. A scalar is always decoded with an explicit byte order, given
by one of the [selector types](crate::traits::Endianness), so that the
result does not depend on the byte order of the host.

Besides the primitive integer and floating-point types, [`U24`], [`I24`],
[`U48`] and [`I48`] describe integers three and six bytes wide. They have
no native counterpart, so they are assembled byte by byte and, when signed,
sign-extended from their top bit.

[`Endian`] stores the on-wire bytes of a scalar together with its
byte order, in the same way a field of a packed on-disk structure would.

*/

use crate::traits::ByteOrder;
use num_traits::PrimInt;

mod scalar;
pub use scalar::*;

mod endian;
pub use endian::*;

/// Reverse the byte order of a 16-bit value.
#[inline(always)]
#[must_use]
pub const fn swap16(x: u16) -> u16 {
    x.swap_bytes()
}

/// Reverse the byte order of a 32-bit value.
#[inline(always)]
#[must_use]
pub const fn swap32(x: u32) -> u32 {
    x.swap_bytes()
}

/// Reverse the byte order of a 64-bit value.
#[inline(always)]
#[must_use]
pub const fn swap64(x: u64) -> u64 {
    x.swap_bytes()
}

/// Reverse the byte order of any primitive integer.
#[inline(always)]
#[must_use]
pub fn bswap<T: PrimInt>(x: T) -> T {
    x.swap_bytes()
}

/// Sign-extend the lowest `bits` bits of `value`.
///
/// # Panics
///
/// If `bits` is zero or greater than 64.
#[inline(always)]
#[must_use]
pub const fn sign_extend(value: u64, bits: u32) -> i64 {
    assert!(bits > 0 && bits <= 64);
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

/// Sign-extend a 24-bit value stored in the low bits of a `u32`.
#[inline(always)]
#[must_use]
pub const fn sign_extend24(value: u32) -> i32 {
    ((value << 8) as i32) >> 8
}

/// Sign-extend a 48-bit value stored in the low bits of a `u64`.
#[inline(always)]
#[must_use]
pub const fn sign_extend48(value: u64) -> i64 {
    ((value << 16) as i64) >> 16
}

/// Assemble an unsigned integer from up to eight bytes in the given order.
///
/// # Panics
///
/// If `bytes` is longer than eight bytes.
#[inline]
#[must_use]
pub fn decode_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    assert!(bytes.len() <= 8, "cannot decode {} bytes", bytes.len());
    match order {
        ByteOrder::Big => bytes.iter().fold(0, |acc, &b| (acc << 8) | b as u64),
        ByteOrder::Little => bytes.iter().rev().fold(0, |acc, &b| (acc << 8) | b as u64),
    }
}

/// Assemble a signed integer from up to eight bytes in the given order,
/// sign-extending from the top bit of the last byte read.
///
/// # Panics
///
/// If `bytes` is empty or longer than eight bytes.
#[inline]
#[must_use]
pub fn decode_int(bytes: &[u8], order: ByteOrder) -> i64 {
    assert!(!bytes.is_empty(), "cannot decode an empty integer");
    sign_extend(decode_uint(bytes, order), bytes.len() as u32 * 8)
}

/// Disassemble the low `out.len()` bytes of `value` into `out` in the
/// given order; higher bytes of `value` are discarded.
///
/// # Panics
///
/// If `out` is longer than eight bytes.
#[inline]
pub fn encode_uint(value: u64, order: ByteOrder, out: &mut [u8]) {
    assert!(out.len() <= 8, "cannot encode {} bytes", out.len());
    let mut value = value;
    match order {
        ByteOrder::Big => {
            for b in out.iter_mut().rev() {
                *b = value as u8;
                value >>= 8;
            }
        }
        ByteOrder::Little => {
            for b in out.iter_mut() {
                *b = value as u8;
                value >>= 8;
            }
        }
    }
}
