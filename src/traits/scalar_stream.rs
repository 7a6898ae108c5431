/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for typed scalar access.

Each trait has a pair of generic methods parameterized by a
[byte-order selector](crate::traits::Endianness) and a [`Scalar`] tag,
and a family of provided accessors whose names spell out the on-wire type,
so that call sites document the exact layout they expect:

- `u`/`s` followed by the width in bits selects an unsigned or signed
  integer (8, 16, 24, 32, 48 or 64 bits), `f32`/`f64` a floating-point value;
- the suffix selects the byte order: `b` for big endian, `l` for little
  endian, `r` for the reverse of the native order, and no suffix for the
  native order.

For example, [`ScalarRead::get_u24b`] reads an unsigned big-endian 24-bit
integer, and [`ScalarWriteAt::pput_f64r`] writes a byte-swapped `f64` at a
given offset.

*/

use crate::codec::{I24, I48, Scalar, U24, U48};
use crate::traits::{BE, Endianness, LE, NE, RE};
use core::error::Error;

macro_rules! getters {
    ($($get:ident, $pget:ident: $e:ty, $t:ty;)*) => {$(
        #[doc = concat!("Read a `", stringify!($t), "` (", stringify!($e), ") and advance past it.")]
        #[inline(always)]
        fn $get(&mut self) -> Result<<$t as Scalar>::Value, Self::Error> {
            self.get::<$e, $t>()
        }

        #[doc = concat!("Read a `", stringify!($t), "` (", stringify!($e), ") at `offset`.")]
        #[inline(always)]
        fn $pget(&self, offset: usize) -> Result<<$t as Scalar>::Value, Self::Error> {
            self.pget::<$e, $t>(offset)
        }
    )*};
}

macro_rules! putters {
    ($($put:ident: $e:ty, $t:ty;)*) => {$(
        #[doc = concat!("Append a `", stringify!($t), "` (", stringify!($e), ").")]
        #[inline(always)]
        fn $put(&mut self, value: <$t as Scalar>::Value) -> Result<(), Self::Error> {
            self.put::<$e, $t>(value)
        }
    )*};
}

macro_rules! pputters {
    ($($pput:ident: $e:ty, $t:ty;)*) => {$(
        #[doc = concat!("Write a `", stringify!($t), "` (", stringify!($e), ") at `offset`.")]
        #[inline(always)]
        fn $pput(&mut self, offset: usize, value: <$t as Scalar>::Value) -> Result<(), Self::Error> {
            self.pput::<$e, $t>(offset, value)
        }
    )*};
}

/// Typed reads, sequential and positional.
pub trait ScalarRead {
    type Error: Error + Send + Sync + 'static;

    /// Decode a scalar at the current position and advance past it.
    fn get<E: Endianness, T: Scalar>(&mut self) -> Result<T::Value, Self::Error>;

    /// Decode a scalar at `offset` without moving the current position.
    fn pget<E: Endianness, T: Scalar>(&self, offset: usize) -> Result<T::Value, Self::Error>;

    getters! {
        get_u8, pget_u8: NE, u8;
        get_s8, pget_s8: NE, i8;
        get_u16, pget_u16: NE, u16;
        get_u16r, pget_u16r: RE, u16;
        get_u16b, pget_u16b: BE, u16;
        get_u16l, pget_u16l: LE, u16;
        get_s16, pget_s16: NE, i16;
        get_s16r, pget_s16r: RE, i16;
        get_s16b, pget_s16b: BE, i16;
        get_s16l, pget_s16l: LE, i16;
        get_u24, pget_u24: NE, U24;
        get_u24r, pget_u24r: RE, U24;
        get_u24b, pget_u24b: BE, U24;
        get_u24l, pget_u24l: LE, U24;
        get_s24, pget_s24: NE, I24;
        get_s24r, pget_s24r: RE, I24;
        get_s24b, pget_s24b: BE, I24;
        get_s24l, pget_s24l: LE, I24;
        get_u32, pget_u32: NE, u32;
        get_u32r, pget_u32r: RE, u32;
        get_u32b, pget_u32b: BE, u32;
        get_u32l, pget_u32l: LE, u32;
        get_s32, pget_s32: NE, i32;
        get_s32r, pget_s32r: RE, i32;
        get_s32b, pget_s32b: BE, i32;
        get_s32l, pget_s32l: LE, i32;
        get_u48, pget_u48: NE, U48;
        get_u48r, pget_u48r: RE, U48;
        get_u48b, pget_u48b: BE, U48;
        get_u48l, pget_u48l: LE, U48;
        get_s48, pget_s48: NE, I48;
        get_s48r, pget_s48r: RE, I48;
        get_s48b, pget_s48b: BE, I48;
        get_s48l, pget_s48l: LE, I48;
        get_u64, pget_u64: NE, u64;
        get_u64r, pget_u64r: RE, u64;
        get_u64b, pget_u64b: BE, u64;
        get_u64l, pget_u64l: LE, u64;
        get_s64, pget_s64: NE, i64;
        get_s64r, pget_s64r: RE, i64;
        get_s64b, pget_s64b: BE, i64;
        get_s64l, pget_s64l: LE, i64;
        get_f32, pget_f32: NE, f32;
        get_f32r, pget_f32r: RE, f32;
        get_f32b, pget_f32b: BE, f32;
        get_f32l, pget_f32l: LE, f32;
        get_f64, pget_f64: NE, f64;
        get_f64r, pget_f64r: RE, f64;
        get_f64b, pget_f64b: BE, f64;
        get_f64l, pget_f64l: LE, f64;
    }
}

/// Typed sequential writes.
pub trait ScalarWrite {
    type Error: Error + Send + Sync + 'static;

    /// Encode a scalar at the current position and advance past it.
    fn put<E: Endianness, T: Scalar>(&mut self, value: T::Value) -> Result<(), Self::Error>;

    putters! {
        put_u8: NE, u8;
        put_s8: NE, i8;
        put_u16: NE, u16;
        put_u16r: RE, u16;
        put_u16b: BE, u16;
        put_u16l: LE, u16;
        put_s16: NE, i16;
        put_s16r: RE, i16;
        put_s16b: BE, i16;
        put_s16l: LE, i16;
        put_u24: NE, U24;
        put_u24r: RE, U24;
        put_u24b: BE, U24;
        put_u24l: LE, U24;
        put_s24: NE, I24;
        put_s24r: RE, I24;
        put_s24b: BE, I24;
        put_s24l: LE, I24;
        put_u32: NE, u32;
        put_u32r: RE, u32;
        put_u32b: BE, u32;
        put_u32l: LE, u32;
        put_s32: NE, i32;
        put_s32r: RE, i32;
        put_s32b: BE, i32;
        put_s32l: LE, i32;
        put_u48: NE, U48;
        put_u48r: RE, U48;
        put_u48b: BE, U48;
        put_u48l: LE, U48;
        put_s48: NE, I48;
        put_s48r: RE, I48;
        put_s48b: BE, I48;
        put_s48l: LE, I48;
        put_u64: NE, u64;
        put_u64r: RE, u64;
        put_u64b: BE, u64;
        put_u64l: LE, u64;
        put_s64: NE, i64;
        put_s64r: RE, i64;
        put_s64b: BE, i64;
        put_s64l: LE, i64;
        put_f32: NE, f32;
        put_f32r: RE, f32;
        put_f32b: BE, f32;
        put_f32l: LE, f32;
        put_f64: NE, f64;
        put_f64r: RE, f64;
        put_f64b: BE, f64;
        put_f64l: LE, f64;
    }
}

/// Typed positional writes.
pub trait ScalarWriteAt {
    type Error: Error + Send + Sync + 'static;

    /// Encode a scalar at `offset` without moving the current position.
    fn pput<E: Endianness, T: Scalar>(
        &mut self,
        offset: usize,
        value: T::Value,
    ) -> Result<(), Self::Error>;

    pputters! {
        pput_u8: NE, u8;
        pput_s8: NE, i8;
        pput_u16: NE, u16;
        pput_u16r: RE, u16;
        pput_u16b: BE, u16;
        pput_u16l: LE, u16;
        pput_s16: NE, i16;
        pput_s16r: RE, i16;
        pput_s16b: BE, i16;
        pput_s16l: LE, i16;
        pput_u24: NE, U24;
        pput_u24r: RE, U24;
        pput_u24b: BE, U24;
        pput_u24l: LE, U24;
        pput_s24: NE, I24;
        pput_s24r: RE, I24;
        pput_s24b: BE, I24;
        pput_s24l: LE, I24;
        pput_u32: NE, u32;
        pput_u32r: RE, u32;
        pput_u32b: BE, u32;
        pput_u32l: LE, u32;
        pput_s32: NE, i32;
        pput_s32r: RE, i32;
        pput_s32b: BE, i32;
        pput_s32l: LE, i32;
        pput_u48: NE, U48;
        pput_u48r: RE, U48;
        pput_u48b: BE, U48;
        pput_u48l: LE, U48;
        pput_s48: NE, I48;
        pput_s48r: RE, I48;
        pput_s48b: BE, I48;
        pput_s48l: LE, I48;
        pput_u64: NE, u64;
        pput_u64r: RE, u64;
        pput_u64b: BE, u64;
        pput_u64l: LE, u64;
        pput_s64: NE, i64;
        pput_s64r: RE, i64;
        pput_s64b: BE, i64;
        pput_s64l: LE, i64;
        pput_f32: NE, f32;
        pput_f32r: RE, f32;
        pput_f32b: BE, f32;
        pput_f32l: LE, f32;
        pput_f64: NE, f64;
        pput_f64r: RE, f64;
        pput_f64b: BE, f64;
        pput_f64l: LE, f64;
    }
}
