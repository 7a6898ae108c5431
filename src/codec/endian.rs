/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{I24, I48, Scalar, U24, U48};
use crate::traits::{BE, Endianness, LE, RE};
use core::marker::PhantomData;

/// The on-wire bytes of a scalar, tagged with their byte order.
///
/// An `Endian<E, T>` is exactly [`T::BYTES`](Scalar::BYTES) bytes wide and
/// can be used as a field of a structure mirroring a binary layout. Values
/// are converted only when they are [set](Endian::set) or
/// [read](Endian::get).
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let v = BeU32::new(0x01020304);
/// assert_eq!(v.as_bytes(), &[1, 2, 3, 4]);
/// assert_eq!(v.get(), 0x01020304);
///
/// let w = LeI24::from_bytes([0xFE, 0xFF, 0xFF]);
/// assert_eq!(w.get(), -2);
/// ```
#[repr(transparent)]
pub struct Endian<E: Endianness, T: Scalar> {
    bytes: T::Bytes,
    _marker: PhantomData<E>,
}

impl<E: Endianness, T: Scalar> Endian<E, T> {
    /// Encode `value`.
    #[inline(always)]
    #[must_use]
    pub fn new(value: T::Value) -> Self {
        Self::from_bytes(T::encode::<E>(value))
    }

    /// Wrap bytes already in byte order `E`.
    #[inline(always)]
    #[must_use]
    pub fn from_bytes(bytes: T::Bytes) -> Self {
        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// Wrap the first [`T::BYTES`](Scalar::BYTES) bytes of `bytes`, or
    /// return `None` if `bytes` is too short.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let src = bytes.get(..T::BYTES)?;
        let mut raw = T::Bytes::default();
        raw.as_mut().copy_from_slice(src);
        Some(Self::from_bytes(raw))
    }

    /// Decode the stored value.
    #[inline(always)]
    #[must_use]
    pub fn get(&self) -> T::Value {
        T::decode::<E>(self.bytes)
    }

    /// Replace the stored value.
    #[inline(always)]
    pub fn set(&mut self, value: T::Value) {
        self.bytes = T::encode::<E>(value);
    }

    #[inline(always)]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    #[inline(always)]
    #[must_use]
    pub fn into_bytes(self) -> T::Bytes {
        self.bytes
    }
}

impl<E: Endianness, T: Scalar> Clone for Endian<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Endianness, T: Scalar> Copy for Endian<E, T> {}

impl<E: Endianness, T: Scalar> PartialEq for Endian<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<E: Endianness, T: Scalar> Eq for Endian<E, T> {}

impl<E: Endianness, T: Scalar> Default for Endian<E, T> {
    fn default() -> Self {
        Self::from_bytes(T::Bytes::default())
    }
}

impl<E: Endianness, T: Scalar> core::fmt::Debug for Endian<E, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({:?})", E::NAME, self.get())
    }
}

macro_rules! endian_aliases {
    ($e:ty => $($alias:ident = $ty:ty),* $(,)?) => {$(
        #[doc = concat!("A `", stringify!($ty), "` stored in ", stringify!($e), " order.")]
        pub type $alias = Endian<$e, $ty>;
    )*};
}

endian_aliases!(BE =>
    BeU16 = u16, BeI16 = i16, BeU24 = U24, BeI24 = I24, BeU32 = u32, BeI32 = i32,
    BeU48 = U48, BeI48 = I48, BeU64 = u64, BeI64 = i64, BeF32 = f32, BeF64 = f64,
);

endian_aliases!(LE =>
    LeU16 = u16, LeI16 = i16, LeU24 = U24, LeI24 = I24, LeU32 = u32, LeI32 = i32,
    LeU48 = U48, LeI48 = I48, LeU64 = u64, LeI64 = i64, LeF32 = f32, LeF64 = f64,
);

endian_aliases!(RE =>
    ReU16 = u16, ReI16 = i16, ReU24 = U24, ReI24 = I24, ReU32 = u32, ReI32 = i32,
    ReU48 = U48, ReI48 = I48, ReU64 = u64, ReI64 = i64, ReF32 = f32, ReF64 = f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(core::mem::size_of::<BeU16>(), 2);
        assert_eq!(core::mem::size_of::<LeU24>(), 3);
        assert_eq!(core::mem::size_of::<ReI48>(), 6);
        assert_eq!(core::mem::size_of::<BeF64>(), 8);
    }

    #[test]
    fn test_set_get() {
        let mut v = LeU16::default();
        assert_eq!(v.get(), 0);
        v.set(0xABCD);
        assert_eq!(v.as_bytes(), &[0xCD, 0xAB]);
        assert_eq!(v.into_bytes(), [0xCD, 0xAB]);

        let r = ReU32::new(0x01020304);
        assert_eq!(r.get(), 0x01020304);
        assert_eq!(r.into_bytes(), 0x01020304_u32.swap_bytes().to_ne_bytes());
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(BeU24::from_slice(&[1, 2, 3, 4]).map(|v| v.get()), Some(0x010203));
        assert!(BeU48::from_slice(&[1, 2, 3]).is_none());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", BeI16::new(-5)), "BE(-5)");
    }
}
