/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Wrapping struct that keeps track of written bits. Optionally, emits a
/// `debug` event for each write.
#[derive(Debug, Clone)]
pub struct CountBitWriter<BW: BitWrite, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: usize,
}

impl<BW: BitWrite, const PRINT: bool> CountBitWriter<BW, PRINT> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<BW: BitWrite, const PRINT: bool> BitWrite for CountBitWriter<BW, PRINT> {
    type Error = BW::Error;

    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize, Self::Error> {
        self.bit_write.write_bits(value, n).map(|x| {
            self.bits_written += x;
            if PRINT {
                tracing::debug!(
                    "write_bits({:#016x}, {}) = {} (total = {})",
                    value,
                    n,
                    x,
                    self.bits_written
                );
            }
            x
        })
    }
}

/// Wrapping struct that keeps track of read bits. Optionally, emits a
/// `debug` event for each read.
#[derive(Debug, Clone)]
pub struct CountBitReader<BR: BitRead, const PRINT: bool = false> {
    bit_read: BR,
    /// The number of bits read (or skipped) so far from the underlying
    /// [`BitRead`].
    pub bits_read: usize,
}

impl<BR: BitRead, const PRINT: bool> CountBitReader<BR, PRINT> {
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<BR: BitRead, const PRINT: bool> BitRead for CountBitReader<BR, PRINT> {
    type Error = BR::Error;

    fn read_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        self.bit_read.read_bits(n).map(|x| {
            self.bits_read += n;
            if PRINT {
                tracing::debug!(
                    "read_bits({}) = {:#016x} (total = {})",
                    n,
                    x,
                    self.bits_read
                );
            }
            x
        })
    }

    fn peek_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        self.bit_read.peek_bits(n)
    }

    fn skip_bits(&mut self, n: usize) -> Result<(), Self::Error> {
        self.bit_read.skip_bits(n)?;
        self.bits_read += n;
        if PRINT {
            tracing::debug!("skip_bits({}) (total = {})", n, self.bits_read);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{BitReader, BitWriter};

    #[test]
    fn test_count() -> Result<(), Box<dyn core::error::Error>> {
        let mut count_bit_write = CountBitWriter::<_, true>::new(BitWriter::new());
        count_bit_write.write_bits(5, 3)?;
        assert_eq!(count_bit_write.bits_written, 3);
        count_bit_write.write_bits(1, 20)?;
        assert_eq!(count_bit_write.bits_written, 23);
        count_bit_write.write_bits(1, 33)?;
        assert_eq!(count_bit_write.bits_written, 56);
        let buffer = count_bit_write.into_inner().into_inner();
        assert_eq!(buffer.len(), 7);

        let mut count_bit_read = CountBitReader::<_, true>::new(BitReader::new(&buffer[..]));
        assert_eq!(count_bit_read.peek_bits(3)?, 5);
        assert_eq!(count_bit_read.bits_read, 0);
        assert_eq!(count_bit_read.read_bits(3)?, 5);
        assert_eq!(count_bit_read.read_bits(20)?, 1);
        assert_eq!(count_bit_read.bits_read, 23);
        count_bit_read.skip_bits(32)?;
        assert_eq!(count_bit_read.bits_read, 55);
        assert_eq!(count_bit_read.read_bits(1)?, 1);
        // Failed operations are not counted
        assert!(count_bit_read.skip_bits(1).is_err());
        assert_eq!(count_bit_read.bits_read, 56);

        Ok(())
    }
}
