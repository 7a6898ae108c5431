/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use bincursor::prelude::*;
use std::sync::Arc;

fn check(bytes: &[u8]) {
    assert_eq!(bytes, &[0x01, 0x02, 0x03, 0xFB, 0xFF]);
    let mut reader = ByteReader::new(bytes);
    assert_eq!(reader.get_u24b().unwrap(), 0x010203);
    assert_eq!(reader.get_s16l().unwrap(), -5);
    assert!(reader.eof());
}

#[test]
fn test_growable() {
    let mut writer = ByteWriterVec::default();
    writer.put_u24b(0x010203).unwrap();
    writer.put_s16l(-5).unwrap();
    check(&writer.into_inner());
}

#[test]
fn test_fixed_capacity() {
    let mut buffer = [0_u8; 5];
    let mut writer = ByteWriterSlice::new(&mut buffer);
    writer.put_u24b(0x010203).unwrap();
    writer.put_s16l(-5).unwrap();
    assert!(writer.put_u8(0).is_err());
    check(&buffer);
}

#[test]
fn test_chunked() {
    let mut writer = ChunkWriter::new();
    writer.put_u24b(0x010203).unwrap();
    writer.put_s16l(-5).unwrap();
    check(&writer.close(b""));
}

/// A small length-prefixed record layout, parsed from a shared buffer.
#[test]
fn test_records() {
    let mut writer = ByteWriterVec::default();
    writer.write(b"HDR\0");
    // Record count, patched once known
    writer.put_u16b(0).unwrap();
    let names: [&[u8]; 3] = [b"alpha", b"", b"gamma"];
    for (i, name) in names.iter().enumerate() {
        writer.put_u32l(i as u32 * 1000).unwrap();
        writer.put_u8(name.len() as u8).unwrap();
        writer.write(name);
    }
    writer.pput_u16b(4, names.len() as u16).unwrap();

    let data: Arc<[u8]> = writer.into_inner().into();
    let mut reader = ByteReader::new(data);
    assert_eq!(reader.get_cstr().unwrap(), b"HDR");
    let count = reader.get_u16b().unwrap();
    assert_eq!(count, 3);
    let mut records = vec![];
    for _ in 0..count {
        let id = reader.get_u32l().unwrap();
        let len = reader.get_u8().unwrap() as usize;
        let name = reader.subx(reader.position(), len).unwrap();
        reader.skip(len).unwrap();
        records.push((id, name));
    }
    assert!(reader.eof());
    drop(reader);

    assert_eq!(records[0].0, 0);
    assert_eq!(records[0].1.as_slice(), b"alpha");
    assert_eq!(records[1].1.size(), 0);
    assert_eq!(records[2].0, 2000);
    assert_eq!(records[2].1.all(), b"gamma");
}

#[test]
fn test_lines_and_prefixes() {
    let mut reader = ByteReader::new(&b"MAGIC\r\nkey=1\nlast"[..]);
    assert!(reader.skip_if(b"MAGIC"));
    assert_eq!(reader.get_line().unwrap(), b"");
    assert_eq!(reader.get_line().unwrap(), b"key=1");
    assert_eq!(reader.get_line().unwrap(), b"last");
    assert!(reader.get_line().is_err());
}
