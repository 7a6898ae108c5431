/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of byte and bit cursors.

Readers are generic over a backend implementing `AsRef<[u8]>`. A borrowed
slice gives cursors that live as long as the borrow; a reference-counted
buffer such as `Arc<[u8]>` gives cursors, and sub-views, that keep the data
alive by themselves. [`ByteReader`] provides typed access through
[`ScalarRead`](crate::traits::ScalarRead), and can hand out [`BitReader`]s
over any of its byte ranges.

There are three byte writers, sharing the typed
[`ScalarWrite`](crate::traits::ScalarWrite) surface and differing in how
they store data:

- [`ByteWriterVec`] appends to a growable vector, and its positional writes
  extend the vector when needed;
- [`ByteWriterSlice`] writes into caller-supplied memory of fixed size, and
  fails rather than growing;
- [`ChunkWriter`] keeps a list of independently owned chunks, and
  concatenates them only when closed.

Finally, [`BitWriter`] packs bits into a byte vector.

*/

mod byte_reader;
pub use byte_reader::ByteReader;

mod bit_reader;
pub use bit_reader::BitReader;

mod byte_writer_vec;
pub use byte_writer_vec::ByteWriterVec;

mod byte_writer_slice;
pub use byte_writer_slice::ByteWriterSlice;

mod chunk_writer;
pub use chunk_writer::ChunkWriter;

mod bit_writer;
pub use bit_writer::BitWriter;
