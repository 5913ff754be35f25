//! Supported widths and the byte order transform

#![deny(missing_docs)]

use crate::endian::Endianness;
use core::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned is the set of native integers a fixed endian value can be made of.
///
/// Only `u16`, `u32` and `u64` implement it: signed integers, floats and single bytes
/// are rejected at compile time.
///
/// ```
/// use fixendian::{Be, Le};
/// fn header(_length: Le<u32>, _tag: Be<u16>, _offset: Le<u64>) {}
/// ```
///
/// ```compile_fail
/// use fixendian::{FixedEndian, LittleEndian};
/// fn field(_signed: FixedEndian<i32, LittleEndian>) {}
/// ```
///
/// ```compile_fail
/// use fixendian::Le;
/// fn field(_byte: Le<u8>) {}
/// ```
///
/// ```compile_fail
/// use fixendian::Be;
/// fn field(_wide: Be<u128>) {}
/// ```
///
/// ```compile_fail
/// use fixendian::Le;
/// fn field(_float: Le<f32>) {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be stored in a fixed byte order",
    label = "only u16, u32 and u64 are supported",
    note = "signed and non integer types have no fixed endian representation"
)]
pub trait Unsigned:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + LowerHex
    + UpperHex
    + Binary
    + Octal
    + Send
    + Sync
    + 'static
{
    /// The zero value, its own byte swap
    const ZERO: Self;
    /// Byte array with the same size as Self
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + Debug + Eq;

    /// Reverse byte order, byte i moves to position `size - 1 - i`
    fn reverse_bytes(self) -> Self;
    /// Memory representation, untouched
    fn to_memory_bytes(self) -> Self::Bytes;
    /// Reinterpret a memory representation, untouched
    fn from_memory_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_unsigned {
    ($ty:ty, $size:expr) => {
        impl sealed::Sealed for $ty {}

        impl Unsigned for $ty {
            const ZERO: Self = 0;
            type Bytes = [u8; $size];

            #[inline(always)]
            fn reverse_bytes(self) -> Self {
                self.swap_bytes()
            }

            #[inline(always)]
            fn to_memory_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline(always)]
            fn from_memory_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }
        }
    };
}

impl_unsigned!(u64, 8);
impl_unsigned!(u32, 4);
impl_unsigned!(u16, 2);

/// Convert between native order and the `E` order.
///
/// This is the identity when `E` is the native order and a byte reversal otherwise,
/// so the same function is used in both directions. `E::IS_NATIVE` is a constant,
/// the branch does not survive compilation.
#[inline(always)]
pub fn transform<T: Unsigned, E: Endianness>(value: T) -> T {
    if E::IS_NATIVE {
        value
    } else {
        value.reverse_bytes()
    }
}
