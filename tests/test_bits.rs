/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bincursor::prelude::*;
use proptest::prelude::*;

fn mask(value: u64, width: usize) -> u64 {
    if width == 64 { value } else { value & ((1 << width) - 1) }
}

proptest! {
    #[test]
    fn test_write_then_read(fields in prop::collection::vec((any::<u64>(), 0..=64_usize), 0..100)) {
        let mut writer = BitWriter::new();
        for &(value, width) in &fields {
            writer.write_bits(value, width);
        }
        let total: usize = fields.iter().map(|&(_, width)| width).sum();
        prop_assert_eq!(writer.size(), total);
        prop_assert_eq!(writer.as_bytes().len(), total.div_ceil(8));
        if total % 8 != 0 {
            let last = *writer.as_bytes().last().unwrap();
            prop_assert_eq!(last & (0xFF >> (total % 8)), 0);
        }

        let mut reader = BitReader::new(writer.as_bytes());
        let mut pos = 0;
        for &(value, width) in &fields {
            prop_assert_eq!(reader.pread(pos, width).unwrap(), mask(value, width));
            prop_assert_eq!(reader.read(width).unwrap(), mask(value, width));
            pos += width;
        }
        prop_assert_eq!(reader.remaining(), writer.as_bytes().len() * 8 - total);
    }

    #[test]
    fn test_truncate(bits in prop::collection::vec(any::<bool>(), 0..200), keep in 0..200_usize) {
        let mut writer = BitWriter::new();
        for &bit in &bits {
            writer.write(bit);
        }
        let result = writer.truncate(keep);
        prop_assert_eq!(result.is_ok(), keep <= bits.len());
        let kept = keep.min(bits.len());
        prop_assert_eq!(writer.size(), kept);

        let mut fresh = BitWriter::new();
        for &bit in &bits[..kept] {
            fresh.write(bit);
        }
        prop_assert_eq!(writer.as_bytes(), fresh.as_bytes());
    }

    #[test]
    fn test_byte_and_bit_views_agree(data in prop::collection::vec(any::<u8>(), 1..64), offset in 0..64_usize) {
        let reader = ByteReader::new(data.as_slice());
        let mut bits = reader.sub_bits_tail(offset);
        let offset = offset.min(data.len());
        for &byte in &data[offset..] {
            prop_assert_eq!(bits.read(8).unwrap(), byte as u64);
        }
        prop_assert!(bits.eof());
    }
}
