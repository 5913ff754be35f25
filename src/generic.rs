//! The fixed endian value type

#![deny(missing_docs)]

use crate::endian::{BigEndian, Endianness, LittleEndian};
use crate::primitive::{transform, Unsigned};

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// An unsigned integer stored in the `E` byte order.
///
/// The in memory representation is exactly a `T` holding the value in `E` order,
/// nothing else: it can be embedded in `#[repr(C)]` structures shared with foreign
/// code, mapped onto device registers or network buffers.
///
/// There are no arithmetic operators, read the native value with [`get`](Self::get)
/// (or `T::from`), compute with it and store the result back with
/// [`set`](Self::set). Values of different orders interoperate through their
/// native values.
///
/// ```
/// use fixendian::{U16Be, U16Le};
///
/// let le = U16Le::new(0x1234);
/// let be = U16Be::new(0x1234);
/// assert_eq!(le.to_bytes(), [0x34, 0x12]);
/// assert_eq!(be.to_bytes(), [0x12, 0x34]);
/// assert_eq!(le, be);
/// assert_eq!(le.get() + be.get(), 0x2468);
/// ```
#[repr(transparent)]
pub struct FixedEndian<T: Unsigned, E: Endianness> {
    raw: T,
    order: PhantomData<E>,
}

/// A little endian value
pub type Le<T> = FixedEndian<T, LittleEndian>;
/// A big endian value
pub type Be<T> = FixedEndian<T, BigEndian>;

/// 16 bits little endian
pub type U16Le = Le<u16>;
/// 16 bits big endian
pub type U16Be = Be<u16>;
/// 32 bits little endian
pub type U32Le = Le<u32>;
/// 32 bits big endian
pub type U32Be = Be<u32>;
/// 64 bits little endian
pub type U64Le = Le<u64>;
/// 64 bits big endian
pub type U64Be = Be<u64>;

// layout must stay the one of the plain integer
macro_rules! assert_layout {
    ($($alias:ty => $ty:ty),*) => {
        $(
            const _: () = assert!(core::mem::size_of::<$alias>() == core::mem::size_of::<$ty>());
            const _: () = assert!(core::mem::align_of::<$alias>() == core::mem::align_of::<$ty>());
        )*
    };
}
assert_layout!(U16Le => u16, U16Be => u16, U32Le => u32, U32Be => u32, U64Le => u64, U64Be => u64);

impl<T: Unsigned, E: Endianness> FixedEndian<T, E> {
    /// Reinterpret a value that is already in `E` order, no byte is moved
    #[inline]
    pub const fn from_raw(raw: T) -> Self {
        FixedEndian {
            raw,
            order: PhantomData,
        }
    }

    /// The stored bit pattern, in `E` order
    #[inline]
    pub const fn to_raw(self) -> T {
        self.raw
    }

    /// Assign a native value
    #[inline]
    pub fn set(&mut self, value: T) {
        self.raw = transform::<T, E>(value);
    }

    /// Stored bytes, as they are in memory (and on the wire)
    #[inline]
    pub fn to_bytes(self) -> T::Bytes {
        self.raw.to_memory_bytes()
    }

    /// Build from bytes laid out in `E` order
    #[inline]
    pub fn from_bytes(bytes: T::Bytes) -> Self {
        Self::from_raw(T::from_memory_bytes(bytes))
    }

    #[inline(always)]
    fn native(self) -> T {
        transform::<T, E>(self.raw)
    }
}

// Generic trait methods cannot be const, so construction and read back are
// written once per width.
macro_rules! impl_width {
    ($ty:ty) => {
        impl<E: Endianness> FixedEndian<$ty, E> {
            /// Construct from a native value
            #[inline]
            pub const fn new(value: $ty) -> Self {
                Self::from_raw(if E::IS_NATIVE { value } else { value.swap_bytes() })
            }

            /// Read back the native value
            #[inline]
            pub const fn get(self) -> $ty {
                if E::IS_NATIVE {
                    self.raw
                } else {
                    self.raw.swap_bytes()
                }
            }
        }

        impl<E: Endianness> From<FixedEndian<$ty, E>> for $ty {
            #[inline]
            fn from(value: FixedEndian<$ty, E>) -> $ty {
                value.get()
            }
        }

        impl<E: Endianness> PartialEq<$ty> for FixedEndian<$ty, E> {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                self.get() == *other
            }
        }

        impl<E: Endianness> PartialEq<FixedEndian<$ty, E>> for $ty {
            #[inline]
            fn eq(&self, other: &FixedEndian<$ty, E>) -> bool {
                *self == other.get()
            }
        }

        impl<E: Endianness> PartialOrd<$ty> for FixedEndian<$ty, E> {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                self.get().partial_cmp(other)
            }
        }

        impl<E: Endianness> PartialOrd<FixedEndian<$ty, E>> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &FixedEndian<$ty, E>) -> Option<Ordering> {
                self.partial_cmp(&other.get())
            }
        }
    };
}

impl_width!(u64);
impl_width!(u32);
impl_width!(u16);

impl<T: Unsigned, E: Endianness> From<T> for FixedEndian<T, E> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_raw(transform::<T, E>(value))
    }
}

// Derive would require bounds on E
impl<T: Unsigned, E: Endianness> Clone for FixedEndian<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Unsigned, E: Endianness> Copy for FixedEndian<T, E> {}

impl<T: Unsigned, E: Endianness> Default for FixedEndian<T, E> {
    #[inline]
    fn default() -> Self {
        Self::from_raw(T::ZERO)
    }
}

impl<T: Unsigned, E1: Endianness, E2: Endianness> PartialEq<FixedEndian<T, E2>>
    for FixedEndian<T, E1>
{
    #[inline]
    fn eq(&self, other: &FixedEndian<T, E2>) -> bool {
        self.native() == other.native()
    }
}

impl<T: Unsigned, E: Endianness> Eq for FixedEndian<T, E> {}

impl<T: Unsigned, E1: Endianness, E2: Endianness> PartialOrd<FixedEndian<T, E2>>
    for FixedEndian<T, E1>
{
    #[inline]
    fn partial_cmp(&self, other: &FixedEndian<T, E2>) -> Option<Ordering> {
        Some(self.native().cmp(&other.native()))
    }
}

impl<T: Unsigned, E: Endianness> Ord for FixedEndian<T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.native().cmp(&other.native())
    }
}

impl<T: Unsigned, E: Endianness> Hash for FixedEndian<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.native().hash(state)
    }
}

macro_rules! impl_fmt {
    ($($fmt:ident),*) => {
        $(
            impl<T: Unsigned, E: Endianness> fmt::$fmt for FixedEndian<T, E> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$fmt::fmt(&self.native(), f)
                }
            }
        )*
    };
}

impl_fmt!(Debug, Display, LowerHex, UpperHex, Binary, Octal);

#[cfg(feature = "bytemuck")]
// SAFETY: repr(transparent) over T, the all zero pattern is the value 0
unsafe impl<T: Unsigned + bytemuck::Zeroable, E: Endianness> bytemuck::Zeroable
    for FixedEndian<T, E>
{
}

#[cfg(feature = "bytemuck")]
// SAFETY: repr(transparent) over a Pod integer, every bit pattern is a valid value
unsafe impl<T: Unsigned + bytemuck::Pod, E: Endianness> bytemuck::Pod for FixedEndian<T, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(h: H) -> u64 {
        let mut hasher = DefaultHasher::new();
        h.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(U32Be::default().get(), 0);
        assert_eq!(U64Le::default().to_raw(), 0);
    }

    #[test]
    fn set_overwrites_storage() {
        let mut v = U32Be::new(1);
        v.set(0x0102_0304);
        assert_eq!(v.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(v.get(), 0x0102_0304);
    }

    #[test]
    fn const_construction() {
        const MAGIC: U32Be = U32Be::new(0xcafe_babe);
        const VALUE: u32 = MAGIC.get();
        assert_eq!(VALUE, 0xcafe_babe);
        assert_eq!(MAGIC.to_bytes(), [0xca, 0xfe, 0xba, 0xbe]);
    }

    #[test]
    fn ordering_uses_native_value() {
        // 0x0100 > 0x00ff natively but not in foreign stored bits
        let a = U16Be::new(0x0100);
        let b = U16Le::new(0x00ff);
        assert!(a > b);
        assert!(U16Be::new(0x00ff) < U16Be::new(0x0100));
        assert!(U16Le::new(0x00ff) < U16Le::new(0x0100));
        assert!(a > 0x00ff_u16);
        assert!(0x00ff_u16 < a);
    }

    #[test]
    fn hash_matches_native() {
        assert_eq!(hash_of(U64Be::new(42)), hash_of(42_u64));
        assert_eq!(hash_of(U64Le::new(42)), hash_of(U64Be::new(42)));
    }

    #[test]
    fn formatting_uses_native_value() {
        let v = U16Be::new(0x1234);
        assert_eq!(format!("{v}"), "4660");
        assert_eq!(format!("{v:?}"), "4660");
        assert_eq!(format!("{v:#x}"), "0x1234");
        assert_eq!(format!("{v:X}"), "1234");
        assert_eq!(format!("{:b}", U16Le::new(5)), "101");
        assert_eq!(format!("{:o}", U16Le::new(8)), "10");
    }

    #[test]
    fn raw_access_does_not_transform() {
        let v = U32Be::from_raw(0x0102_0304);
        assert_eq!(v.to_raw(), 0x0102_0304);
        assert_eq!(v.to_bytes(), 0x0102_0304_u32.to_ne_bytes());
        assert_eq!(U32Be::from_bytes([0, 0, 1, 0]).get(), 256);
        assert_eq!(U32Le::from_bytes([0, 1, 0, 0]).get(), 256);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn bytemuck_casts() {
        let buffer: [u8; 4] = [0x12, 0x34, 0x56, 0x78];
        let fields: [U16Be; 2] = bytemuck::cast(buffer);
        assert_eq!(fields[0], 0x1234_u16);
        assert_eq!(fields[1], 0x5678_u16);
        let zero: U64Le = bytemuck::Zeroable::zeroed();
        assert_eq!(zero.get(), 0);
        assert_eq!(bytemuck::bytes_of(&U16Le::new(0x1234)), &[0x34, 0x12]);
    }
}
