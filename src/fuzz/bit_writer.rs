/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Bit(bool),
    Bits(u64, u8),
    Truncate(usize),
    Reset,
}

/// Checks a [`BitWriter`] against a vector of booleans, and reads the
/// result back with a [`BitReader`].
pub fn harness(data: FuzzCase) {
    let mut writer = BitWriter::new();
    let mut model: Vec<bool> = vec![];

    for command in data.commands {
        match command {
            RandomCommand::Bit(bit) => {
                writer.write(bit);
                model.push(bit);
            }
            RandomCommand::Bits(value, n) => {
                let n = n as usize % 65;
                writer.write_bits(value, n);
                model.extend((0..n).rev().map(|i| (value >> i) & 1 == 1));
            }
            RandomCommand::Truncate(bits) => {
                assert_eq!(writer.truncate(bits).is_ok(), bits <= model.len());
                model.truncate(bits);
            }
            RandomCommand::Reset => {
                writer.reset();
                model.clear();
            }
        }
        assert_eq!(writer.size(), model.len());
    }

    let mut expected = vec![0_u8; model.len().div_ceil(8)];
    for (i, _) in model.iter().enumerate().filter(|(_, bit)| **bit) {
        expected[i / 8] |= 0x80 >> (i % 8);
    }
    assert_eq!(writer.as_bytes(), expected.as_slice());

    let mut reader = BitReader::new(writer.as_bytes());
    for &bit in &model {
        assert_eq!(reader.read_bit().unwrap(), bit);
    }
    assert_eq!(reader.remaining(), expected.len() * 8 - model.len());
}
