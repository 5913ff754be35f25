//! Reading and writing fixed endian values on streams

#![deny(missing_docs)]

use crate::endian::Endianness;
use crate::generic::FixedEndian;
use crate::primitive::Unsigned;
use crate::{Result, Wire};

use std::io::{Read, Write};

/// A fixed endian value is written as its stored bytes, whatever the host order
impl<T: Unsigned, E: Endianness> Wire for FixedEndian<T, E> {
    fn size_at_rest(&self) -> usize {
        core::mem::size_of::<T>()
    }

    fn read_from<R: Read>(from: &mut R) -> Result<Self> {
        let mut buffer = T::Bytes::default();
        from.read_exact(buffer.as_mut())?;
        Ok(Self::from_bytes(buffer))
    }

    fn write_to<W: Write>(&self, to: &mut W) -> Result<()> {
        to.write_all(self.to_bytes().as_ref())
    }
}

// single bytes have no byte order
impl Wire for u8 {
    fn size_at_rest(&self) -> usize {
        1
    }

    fn read_from<R: Read>(from: &mut R) -> Result<Self> {
        let mut buffer = [0_u8];
        from.read_exact(&mut buffer)?;
        Ok(buffer[0])
    }

    fn write_to<W: Write>(&self, to: &mut W) -> Result<()> {
        to.write_all(&[*self])
    }
}

/// Opaque byte strings (uuids, names, padding)
impl<const N: usize> Wire for [u8; N] {
    fn size_at_rest(&self) -> usize {
        N
    }

    fn read_from<R: Read>(from: &mut R) -> Result<Self> {
        let mut buffer = [0_u8; N];
        from.read_exact(&mut buffer)?;
        Ok(buffer)
    }

    fn write_to<W: Write>(&self, to: &mut W) -> Result<()> {
        to.write_all(self)
    }
}

/// Error reported when a structure does not start with its magic value
pub fn magic_mismatch<M: std::fmt::LowerHex>(expected: M, found: M) -> std::io::Error {
    let message = format!("magic value {expected:#x} expected, found {found:#x}");
    log::debug!("{message}");
    std::io::Error::new(std::io::ErrorKind::InvalidData, message)
}
