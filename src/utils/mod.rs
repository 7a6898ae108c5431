/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers and statistics.

[`CountBitReader`] and [`CountBitWriter`] keep track of the number
of bits read or written to a [`BitRead`](crate::traits::BitRead)
and [`BitWrite`](crate::traits::BitWrite), respectively,
optionally logging the operations performed on the stream.

[`DbgBitReader`] and [`DbgScalarReader`] log through [`tracing`] all the
operations performed by a [`BitRead`](crate::traits::BitRead) or a
[`ScalarRead`](crate::traits::ScalarRead), at the `debug` level.

*/

mod count;
pub use count::*;

mod dbg;
pub use dbg::*;

mod zeroes;
pub use zeroes::*;
