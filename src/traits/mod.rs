/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

*/

mod endianness;
pub use endianness::*;

mod scalar_stream;
pub use scalar_stream::*;

mod bit_stream;
pub use bit_stream::*;
