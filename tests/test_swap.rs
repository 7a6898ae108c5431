/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bincursor::codec::{bswap, swap16, swap32, swap64};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_bit_patterns() {
    assert_eq!(swap16(-1_i16 as u16) as i16, -1);
    assert_eq!(swap32(-1_i32 as u32) as i32, -1);
    assert_eq!(swap64(-1_i64 as u64) as i64, -1);

    assert_eq!(swap16(-2_i16 as u16) as i16, -257);
    assert_eq!(swap32(-2_i32 as u32) as i32, -16777217);
    assert_eq!(swap64(-2_i64 as u64) as i64, -72057594037927937);
    assert_eq!(swap32(-2_i32 as u32), 4294967295 - 16777216);
}

#[test]
fn test_involution() {
    let mut r = SmallRng::seed_from_u64(0);
    for _ in 0..10_000 {
        let (a, b, c) = (r.random::<u16>(), r.random::<u32>(), r.random::<u64>());
        assert_eq!(swap16(swap16(a)), a);
        assert_eq!(swap32(swap32(b)), b);
        assert_eq!(swap64(swap64(c)), c);
        assert_eq!(swap32(b), b.swap_bytes());
        assert_eq!(bswap(c as i64), swap64(c) as i64);
    }
}
