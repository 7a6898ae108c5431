/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codec::Scalar;
use crate::traits::*;
use core::any::type_name;

/// A wrapper over a bit reader that emits a `debug` event for every
/// operation.
#[derive(Debug, Clone)]
pub struct DbgBitReader<BR: BitRead> {
    reader: BR,
}

impl<BR: BitRead> DbgBitReader<BR> {
    pub fn new(reader: BR) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> BR {
        self.reader
    }
}

impl<BR: BitRead> BitRead for DbgBitReader<BR> {
    type Error = BR::Error;

    fn read_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        let value = self.reader.read_bits(n);
        tracing::debug!("read_bits({}): {:?}", n, value);
        value
    }

    fn peek_bits(&mut self, n: usize) -> Result<u64, Self::Error> {
        let value = self.reader.peek_bits(n);
        tracing::debug!("peek_bits({}): {:?}", n, value);
        value
    }

    fn skip_bits(&mut self, n: usize) -> Result<(), Self::Error> {
        tracing::debug!("skip_bits({})", n);
        self.reader.skip_bits(n)
    }
}

/// A wrapper over a scalar reader that emits a `debug` event for every
/// value read.
///
/// Values are logged with their byte order and type tag, e.g.,
/// `get<BE, bincursor::codec::U24>(): Ok(66051)`.
#[derive(Debug, Clone)]
pub struct DbgScalarReader<SR: ScalarRead> {
    reader: SR,
}

impl<SR: ScalarRead> DbgScalarReader<SR> {
    pub fn new(reader: SR) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> SR {
        self.reader
    }
}

impl<SR: ScalarRead> ScalarRead for DbgScalarReader<SR> {
    type Error = SR::Error;

    fn get<E: Endianness, T: Scalar>(&mut self) -> Result<T::Value, Self::Error> {
        let value = self.reader.get::<E, T>();
        tracing::debug!("get<{}, {}>(): {:?}", E::NAME, type_name::<T>(), value);
        value
    }

    fn pget<E: Endianness, T: Scalar>(&self, offset: usize) -> Result<T::Value, Self::Error> {
        let value = self.reader.pget::<E, T>(offset);
        tracing::debug!(
            "pget<{}, {}>({}): {:?}",
            E::NAME,
            type_name::<T>(),
            offset,
            value
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{BitReader, ByteReader};

    #[test]
    fn test_transparent() {
        let data = [0x01_u8, 0x02, 0x03, 0xF0];
        let mut reader = DbgScalarReader::new(ByteReader::new(&data[..]));
        assert_eq!(reader.get_u24b().unwrap(), 0x010203);
        assert_eq!(reader.pget_u16l(2).unwrap(), 0xF003);
        assert!(reader.get_u16b().is_err());
        assert_eq!(reader.into_inner().position(), 3);

        let mut reader = DbgBitReader::new(BitReader::new(&data[3..]));
        assert_eq!(reader.peek_bits(4).unwrap(), 0xF);
        reader.skip_bits(4).unwrap();
        assert_eq!(reader.read_bits(4).unwrap(), 0);
        assert!(reader.read_bits(1).is_err());
    }
}
