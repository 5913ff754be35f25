//! # Fixed endian integers
//!
//! [`FixedEndian<T, E>`] holds an unsigned integer (`u16`, `u32` or `u64`) whose bytes are
//! always in the `E` order ([`LittleEndian`] or [`BigEndian`]), whatever the machine is.
//! It has the exact layout of a `T` so it can be used directly as a field of structures
//! shared with foreign code, device memory or network buffers.
//!
//! Reading gives back a native integer, writing takes one; all computation happens on
//! native integers:
//!
//! ```
//! use fixendian::{U32Be, U32Le};
//!
//! let mut length = U32Be::new(40);
//! let extra = U32Le::new(2);
//! length.set(length.get() + extra.get());
//! assert_eq!(length, 42_u32);
//! assert_eq!(length.to_bytes(), [0, 0, 0, 42]);
//! ```
//!
//! Structures made of fixed endian fields can be read from and written to streams
//! with `#[derive(Wire)]`:
//!
//! ```
//! use fixendian::{U16Be, U32Be, Wire};
//!
//! #[derive(Wire, Debug, PartialEq)]
//! #[wire(magic(U16Be = 0xabcd))]
//! struct Header {
//!     version: U16Be,
//!     length: U32Be,
//! }
//!
//! let header = Header { version: U16Be::new(1), length: U32Be::new(12) };
//! let mut memory = Vec::new();
//! header.write_to(&mut memory).unwrap();
//! assert_eq!(memory, [0xab, 0xcd, 0, 1, 0, 0, 0, 12]);
//! assert_eq!(Header::read_from(&mut memory.as_slice()).unwrap(), header);
//! ```

#![deny(missing_docs)]

pub mod endian;
pub mod generic;
pub mod primitive;
pub mod stream;

pub use endian::{BigEndian, Endianness, LittleEndian, NativeEndian, NetworkEndian};
pub use generic::{Be, FixedEndian, Le, U16Be, U16Le, U32Be, U32Le, U64Be, U64Le};
pub use primitive::{transform, Unsigned};

pub use fixendian_derive::Wire;

use std::io::{Read, Write};

/// Result of wire operations
pub type Result<T> = std::io::Result<T>;

/// Wire is implemented by values with a fixed representation on a stream.
///
/// Only fields can be skipped, not a whole structure:
///
/// ```compile_fail
/// use fixendian::{U16Be, Wire};
///
/// #[derive(Wire)]
/// #[wire(skip)]
/// struct Skipped {
///     value: U16Be,
/// }
/// ```
pub trait Wire: Sized {
    /// Size on the wire
    fn size_at_rest(&self) -> usize;
    /// Read one value
    fn read_from<R: Read>(from: &mut R) -> Result<Self>;
    /// Write one value
    fn write_to<W: Write>(&self, to: &mut W) -> Result<()>;
}
