/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Sealed {}
}

/// Runtime representation of a byte order.
///
/// The native and reversed orders are not separate variants: they are
/// resolved at compile time to [`ByteOrder::Big`] or [`ByteOrder::Little`]
/// through [`ByteOrder::NATIVE`] and [`ByteOrder::REVERSED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// The byte order of the target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    /// The byte order of the target.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// The opposite of the byte order of the target.
    pub const REVERSED: ByteOrder = Self::NATIVE.reverse();

    /// Returns the opposite byte order.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }

    /// Whether values in this order must be byte-swapped to be used natively.
    #[must_use]
    pub const fn is_swapped(self) -> bool {
        !matches!(
            (self, Self::NATIVE),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }
}

/// Marker trait for byte-order selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`];
/// [`NativeEndian`] and [`ReversedEndian`] are aliases of one of them chosen
/// at compile time, so the decision to swap bytes is always a constant.
///
/// Note that in principle marker traits are not necessary to use
/// selector types, but they are useful to avoid that the user specifies
/// a nonsensical type, and to document the meaning of type parameters.
pub trait Endianness: private::Sealed + Copy + Default + core::fmt::Debug + 'static {
    /// The runtime counterpart of this selector.
    const ORDER: ByteOrder;
    /// Whether scalars must be byte-swapped to convert from native order.
    const SWAP: bool = Self::ORDER.is_swapped();
    /// Short name used in debug output.
    const NAME: &'static str;
}

/// Selector type for little-endian data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Selector type for big-endian data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

/// The byte order of the target.
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;
/// The byte order of the target.
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

/// The opposite of the byte order of the target.
#[cfg(target_endian = "little")]
pub type ReversedEndian = BigEndian;
/// The opposite of the byte order of the target.
#[cfg(target_endian = "big")]
pub type ReversedEndian = LittleEndian;

/// Alias for [`NativeEndian`]
pub type NE = NativeEndian;

/// Alias for [`ReversedEndian`]
pub type RE = ReversedEndian;

impl private::Sealed for LittleEndian {}
impl private::Sealed for BigEndian {}

impl Endianness for LittleEndian {
    const ORDER: ByteOrder = ByteOrder::Little;
    const NAME: &'static str = "LE";
}

impl Endianness for BigEndian {
    const ORDER: ByteOrder = ByteOrder::Big;
    const NAME: &'static str = "BE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_flags() {
        assert!(!NE::SWAP);
        assert!(RE::SWAP);
        assert_eq!(BE::SWAP, cfg!(target_endian = "little"));
        assert_eq!(LE::SWAP, cfg!(target_endian = "big"));
        assert_eq!(ByteOrder::REVERSED.reverse(), ByteOrder::NATIVE);
        assert_eq!(NE::ORDER, ByteOrder::NATIVE);
        assert_eq!(RE::ORDER, ByteOrder::REVERSED);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ByteOrder::Big).unwrap();
        assert_eq!(json, "\"Big\"");
        let order: ByteOrder = serde_json::from_str("\"Little\"").unwrap();
        assert_eq!(order, ByteOrder::Little);
    }
}
