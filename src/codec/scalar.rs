/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{bswap, decode_uint, encode_uint, sign_extend24, sign_extend48};
use crate::traits::Endianness;

/// The in-memory layout of a scalar of fixed width and kind.
///
/// `Self` is only a tag: the value it describes has type
/// [`Scalar::Value`]. For the primitive types the two coincide, whereas
/// the odd-width tags [`U24`], [`I24`], [`U48`] and [`I48`] are uninhabited
/// and describe values of type `u32`, `i32`, `u64` and `i64`, respectively.
///
/// Decoding and encoding are total: for every byte order `E`,
/// `decode::<E>(encode::<E>(v)) == v` for every `v` representable in
/// [`Scalar::BYTES`] bytes (bit-for-bit for floating-point values).
pub trait Scalar {
    /// The type of decoded values.
    type Value: Copy + core::fmt::Debug;
    /// The on-wire representation, an array of [`Scalar::BYTES`] bytes.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + Eq + core::fmt::Debug;
    /// The width of the scalar in bytes.
    const BYTES: usize;

    /// Interpret `bytes` as a value stored in byte order `E`.
    fn decode<E: Endianness>(bytes: Self::Bytes) -> Self::Value;

    /// Lay out `value` in byte order `E`.
    fn encode<E: Endianness>(value: Self::Value) -> Self::Bytes;

    /// Decode the first [`Scalar::BYTES`] bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than [`Scalar::BYTES`].
    #[inline(always)]
    fn decode_slice<E: Endianness>(bytes: &[u8]) -> Self::Value {
        let mut raw = Self::Bytes::default();
        raw.as_mut().copy_from_slice(&bytes[..Self::BYTES]);
        Self::decode::<E>(raw)
    }

    /// Encode `value` into the first [`Scalar::BYTES`] bytes of `out`.
    ///
    /// # Panics
    ///
    /// If `out` is shorter than [`Scalar::BYTES`].
    #[inline(always)]
    fn encode_slice<E: Endianness>(value: Self::Value, out: &mut [u8]) {
        out[..Self::BYTES].copy_from_slice(Self::encode::<E>(value).as_ref());
    }
}

macro_rules! impl_int_scalar {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            type Value = $ty;
            type Bytes = [u8; core::mem::size_of::<$ty>()];
            const BYTES: usize = core::mem::size_of::<$ty>();

            #[inline(always)]
            fn decode<E: Endianness>(bytes: Self::Bytes) -> $ty {
                let value = <$ty>::from_ne_bytes(bytes);
                if E::SWAP { bswap(value) } else { value }
            }

            #[inline(always)]
            fn encode<E: Endianness>(value: $ty) -> Self::Bytes {
                let value = if E::SWAP { bswap(value) } else { value };
                value.to_ne_bytes()
            }
        }
    )*};
}

impl_int_scalar!(u8, i8, u16, i16, u32, i32, u64, i64);

// Floating-point values go through the integer with the same bit pattern.
macro_rules! impl_float_scalar {
    ($($ty:ty => $bits:ty),*) => {$(
        impl Scalar for $ty {
            type Value = $ty;
            type Bytes = [u8; core::mem::size_of::<$ty>()];
            const BYTES: usize = core::mem::size_of::<$ty>();

            #[inline(always)]
            fn decode<E: Endianness>(bytes: Self::Bytes) -> $ty {
                <$ty>::from_bits(<$bits as Scalar>::decode::<E>(bytes))
            }

            #[inline(always)]
            fn encode<E: Endianness>(value: $ty) -> Self::Bytes {
                <$bits as Scalar>::encode::<E>(value.to_bits())
            }
        }
    )*};
}

impl_float_scalar!(f32 => u32, f64 => u64);

/// Tag for an unsigned 24-bit integer, decoded as a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum U24 {}

/// Tag for a signed 24-bit integer, decoded as an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I24 {}

/// Tag for an unsigned 48-bit integer, decoded as a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum U48 {}

/// Tag for a signed 48-bit integer, decoded as an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I48 {}

impl U24 {
    /// The largest value representable in 24 bits.
    pub const MAX: u32 = (1 << 24) - 1;
}

impl I24 {
    /// The smallest value representable in 24 bits.
    pub const MIN: i32 = -(1 << 23);
    /// The largest value representable in 24 bits.
    pub const MAX: i32 = (1 << 23) - 1;
}

impl U48 {
    /// The largest value representable in 48 bits.
    pub const MAX: u64 = (1 << 48) - 1;
}

impl I48 {
    /// The smallest value representable in 48 bits.
    pub const MIN: i64 = -(1 << 47);
    /// The largest value representable in 48 bits.
    pub const MAX: i64 = (1 << 47) - 1;
}

impl Scalar for U24 {
    type Value = u32;
    type Bytes = [u8; 3];
    const BYTES: usize = 3;

    #[inline(always)]
    fn decode<E: Endianness>(bytes: [u8; 3]) -> u32 {
        decode_uint(&bytes, E::ORDER) as u32
    }

    #[inline(always)]
    fn encode<E: Endianness>(value: u32) -> [u8; 3] {
        let mut bytes = [0; 3];
        encode_uint(value as u64, E::ORDER, &mut bytes);
        bytes
    }
}

impl Scalar for I24 {
    type Value = i32;
    type Bytes = [u8; 3];
    const BYTES: usize = 3;

    #[inline(always)]
    fn decode<E: Endianness>(bytes: [u8; 3]) -> i32 {
        sign_extend24(U24::decode::<E>(bytes))
    }

    #[inline(always)]
    fn encode<E: Endianness>(value: i32) -> [u8; 3] {
        U24::encode::<E>(value as u32)
    }
}

impl Scalar for U48 {
    type Value = u64;
    type Bytes = [u8; 6];
    const BYTES: usize = 6;

    #[inline(always)]
    fn decode<E: Endianness>(bytes: [u8; 6]) -> u64 {
        decode_uint(&bytes, E::ORDER)
    }

    #[inline(always)]
    fn encode<E: Endianness>(value: u64) -> [u8; 6] {
        let mut bytes = [0; 6];
        encode_uint(value, E::ORDER, &mut bytes);
        bytes
    }
}

impl Scalar for I48 {
    type Value = i64;
    type Bytes = [u8; 6];
    const BYTES: usize = 6;

    #[inline(always)]
    fn decode<E: Endianness>(bytes: [u8; 6]) -> i64 {
        sign_extend48(U48::decode::<E>(bytes))
    }

    #[inline(always)]
    fn encode<E: Endianness>(value: i64) -> [u8; 6] {
        U48::encode::<E>(value as u64)
    }
}
