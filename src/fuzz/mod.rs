/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fuzzing harnesses, checking cursors against straightforward models.
//!
//! Each submodule exposes an [`Arbitrary`](arbitrary::Arbitrary)
//! `FuzzCase` and a `harness` function panicking on any discrepancy; the
//! targets of the `fuzz` crate just forward their input to it.

pub mod bit_writer;
pub mod byte_reader;
pub mod byte_writer_slice;
