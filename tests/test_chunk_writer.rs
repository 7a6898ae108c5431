/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bincursor::prelude::*;
use std::fmt::Write;

#[test]
fn test_separators() {
    let mut writer = ChunkWriter::new();
    writer.write(b"ab");
    writer.write_owned(b"cd".to_vec());
    assert_eq!(writer.clone().close(b"-"), b"ab-cd");
    assert_eq!(writer.close(b""), b"abcd");
}

#[test]
fn test_many_small_writes() {
    let mut writer = ChunkWriter::new();
    for i in 0..10_000 {
        write!(writer, "{i}").unwrap();
    }
    assert_eq!(writer.len(), 10_000);
    let expected = (0..10_000).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
    assert_eq!(writer.size(), expected.len() - 9_999);
    assert_eq!(writer.close(b","), expected.into_bytes());
}

#[test]
fn test_typed_chunks() {
    let mut writer = ChunkWriter::new();
    writer.put_u32b(0x01020304).unwrap();
    writer.put_f32l(-0.0).unwrap();
    writer.put_s24b(-1).unwrap();
    let chunks: Vec<&[u8]> = writer.chunks().collect();
    assert_eq!(chunks, [&[1_u8, 2, 3, 4][..], &[0, 0, 0, 0x80], &[0xFF; 3]]);
}
