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
    capacity: u8,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Write(Vec<u8>),
    Pwrite(usize, Vec<u8>),
    PutU32b(u32),
    PputS24l(usize, i32),
}

/// Checks that a [`ByteWriterSlice`] writes exactly what fits and leaves
/// everything untouched otherwise.
pub fn harness(data: FuzzCase) {
    let capacity = data.capacity as usize;
    let mut model = vec![0_u8; capacity];
    let mut pos = 0_usize;
    let mut buffer = vec![0_u8; capacity];
    let mut writer = ByteWriterSlice::new(&mut buffer);

    for command in data.commands {
        // Where the command writes, what, and whether it is sequential
        let (offset, bytes, sequential, ok) = match command {
            RandomCommand::Write(bytes) => {
                let ok = writer.write(&bytes).is_ok();
                (pos, bytes, true, ok)
            }
            RandomCommand::Pwrite(offset, bytes) => {
                let ok = writer.pwrite(offset, &bytes).is_ok();
                (offset, bytes, false, ok)
            }
            RandomCommand::PutU32b(value) => {
                let ok = writer.put_u32b(value).is_ok();
                (pos, value.to_be_bytes().to_vec(), true, ok)
            }
            RandomCommand::PputS24l(offset, value) => {
                let ok = writer.pput_s24l(offset, value).is_ok();
                (offset, value.to_le_bytes()[..3].to_vec(), false, ok)
            }
        };
        let fits = offset
            .checked_add(bytes.len())
            .is_some_and(|end| end <= capacity);
        assert_eq!(ok, fits);
        if fits {
            model[offset..offset + bytes.len()].copy_from_slice(&bytes);
            if sequential {
                pos += bytes.len();
            }
        }
        assert_eq!(writer.position(), pos);
        assert_eq!(writer.remaining(), capacity - pos);
    }

    drop(writer);
    assert_eq!(buffer, model);
}
