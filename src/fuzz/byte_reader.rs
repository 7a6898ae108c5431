/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    data: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Go(usize),
    Skip(usize),
    Truncate(usize),
    Read(usize),
    Readx(usize),
    Pread(usize, usize),
    Preadx(usize, usize),
    GetU16b,
    GetU24l,
    GetS48b,
    PgetU32l(usize),
    GetCstr,
    GetLine,
    Sub(usize, usize),
    SubBits(usize, u8),
}

/// Checks a [`ByteReader`] against a plain slice and an explicit position.
pub fn harness(data: FuzzCase) {
    let mut reader = ByteReader::new(data.data.as_slice());
    let mut len = data.data.len();
    let mut pos = 0_usize;

    for command in data.commands {
        let model = &data.data[..len];
        match command {
            RandomCommand::Go(offset) => {
                assert_eq!(reader.go(offset).is_ok(), offset <= len);
                if offset <= len {
                    pos = offset;
                }
            }
            RandomCommand::Skip(n) => {
                let ok = pos.checked_add(n).is_some_and(|end| end <= len);
                assert_eq!(reader.skip(n).is_ok(), ok);
                if ok {
                    pos += n;
                }
            }
            RandomCommand::Truncate(new_len) => {
                assert_eq!(reader.truncate(new_len).is_ok(), new_len <= len);
                if new_len <= len {
                    len = new_len;
                    pos = pos.min(len);
                }
            }
            RandomCommand::Read(n) => {
                let end = pos + n.min(len - pos);
                assert_eq!(reader.read(n), &model[pos..end]);
                pos = end;
            }
            RandomCommand::Readx(n) => match pos.checked_add(n).and_then(|end| model.get(pos..end)) {
                Some(expected) => {
                    assert_eq!(reader.readx(n).unwrap(), expected);
                    pos += n;
                }
                None => assert!(reader.readx(n).is_err()),
            },
            RandomCommand::Pread(offset, n) => {
                let start = offset.min(len);
                let end = start + n.min(len - start);
                assert_eq!(reader.pread(offset, n), &model[start..end]);
            }
            RandomCommand::Preadx(offset, n) => {
                match offset.checked_add(n).and_then(|end| model.get(offset..end)) {
                    Some(expected) => assert_eq!(reader.preadx(offset, n).unwrap(), expected),
                    None => assert!(reader.preadx(offset, n).is_err()),
                }
            }
            RandomCommand::GetU16b => match model.get(pos..pos + 2) {
                Some(b) => {
                    assert_eq!(reader.get_u16b().unwrap(), u16::from_be_bytes([b[0], b[1]]));
                    pos += 2;
                }
                None => assert!(reader.get_u16b().is_err()),
            },
            RandomCommand::GetU24l => match model.get(pos..pos + 3) {
                Some(b) => {
                    let expected = b[0] as u32 | (b[1] as u32) << 8 | (b[2] as u32) << 16;
                    assert_eq!(reader.get_u24l().unwrap(), expected);
                    pos += 3;
                }
                None => assert!(reader.get_u24l().is_err()),
            },
            RandomCommand::GetS48b => match model.get(pos..pos + 6) {
                Some(b) => {
                    let mut raw = [0; 8];
                    raw[..6].copy_from_slice(b);
                    let expected = i64::from_be_bytes(raw) >> 16;
                    assert_eq!(reader.get_s48b().unwrap(), expected);
                    pos += 6;
                }
                None => assert!(reader.get_s48b().is_err()),
            },
            RandomCommand::PgetU32l(offset) => {
                match offset.checked_add(4).and_then(|end| model.get(offset..end)) {
                    Some(b) => {
                        let expected = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
                        assert_eq!(reader.pget_u32l(offset).unwrap(), expected);
                    }
                    None => assert!(reader.pget_u32l(offset).is_err()),
                }
            }
            RandomCommand::GetCstr => match model[pos..].iter().position(|&b| b == 0) {
                Some(n) => {
                    assert_eq!(reader.get_cstr().unwrap(), &model[pos..pos + n]);
                    pos += n + 1;
                }
                None => assert!(reader.get_cstr().is_err()),
            },
            RandomCommand::GetLine => {
                if pos == len {
                    assert!(reader.get_line().is_err());
                } else {
                    let tail = &model[pos..];
                    let (line, consumed) = match tail.iter().position(|&b| b == b'\n') {
                        Some(n) if n > 0 && tail[n - 1] == b'\r' => (&tail[..n - 1], n + 1),
                        Some(n) => (&tail[..n], n + 1),
                        None => (tail, tail.len()),
                    };
                    assert_eq!(reader.get_line().unwrap(), line);
                    pos += consumed;
                }
            }
            RandomCommand::Sub(offset, n) => {
                let strict = reader.subx(offset, n);
                if offset.checked_add(n).is_some_and(|end| end <= len) {
                    let sub = strict.unwrap();
                    assert_eq!(sub.as_slice(), &model[offset..offset + n]);
                    assert_eq!(sub.remaining(), n);
                } else {
                    assert!(strict.is_err());
                }
                let start = offset.min(len);
                let end = start + n.min(len - start);
                assert_eq!(reader.sub(offset, n).as_slice(), &model[start..end]);
            }
            RandomCommand::SubBits(offset, width) => {
                let width = width as usize % 65;
                let start = offset.min(len);
                let bits = reader.sub_bits_tail(offset);
                assert_eq!(bits.size(), (len - start) * 8);
                if width <= bits.size() {
                    let expected = (0..width).fold(0_u64, |acc, i| {
                        (acc << 1) | ((model[start + i / 8] >> (7 - i % 8)) & 1) as u64
                    });
                    assert_eq!(bits.peek(width).unwrap(), expected);
                } else {
                    assert!(bits.peek(width).is_err());
                }
            }
        };

        assert_eq!(reader.position(), pos);
        assert_eq!(reader.size(), len);
        assert_eq!(reader.eof(), pos == len);
    }
}
