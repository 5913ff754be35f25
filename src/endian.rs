//! Target byte orders

#![deny(missing_docs)]

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("fixendian only supports targets that are strictly little endian or strictly big endian");

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::LittleEndian {}
    impl Sealed for super::BigEndian {}
}

/// Endianness is the target byte order of a fixed endian value.
/// It is only implemented by [`LittleEndian`] and [`BigEndian`], and is resolved at
/// compile time, there is no runtime selectable order.
pub trait Endianness: sealed::Sealed + Copy + Default + 'static {
    /// true when this order is the byte order of the machine we are compiled for
    const IS_NATIVE: bool;
}

/// Little Endian byte order marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;
impl Endianness for LittleEndian {
    const IS_NATIVE: bool = cfg!(target_endian = "little");
}

/// Big Endian byte order marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;
impl Endianness for BigEndian {
    const IS_NATIVE: bool = cfg!(target_endian = "big");
}

/// Byte order of the compilation target
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;
/// Byte order of the compilation target
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

/// Byte order used by internet protocols
pub type NetworkEndian = BigEndian;
