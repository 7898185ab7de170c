//! Low-level byte order and safe reading utilities for SMBIOS parsing.
//!
//! Provides bounds-checked, little-endian reads of primitive types from byte
//! buffers. Every multi-byte field in the SMBIOS entry point and structure
//! table is little-endian, so no big-endian support is carried here.
//!
//! All functions return [`crate::Result`] and fail with
//! [`crate::Error::OutOfBounds`] when the buffer holds fewer bytes than the
//! requested type needs, which keeps parsing of truncated firmware data safe.

use crate::{Error::OutOfBounds, Result};

/// Trait for implementing type-specific safe binary data reading operations.
///
/// Abstracts the conversion from a fixed-size byte array to a typed value so
/// the reading functions below can be generic over the primitive types used
/// in SMBIOS parsing (`u8`, `u16`, `u32`, `u64`).
///
/// The `Bytes` associated type is the fixed-size array required for the
/// implementing type (e.g. `[u8; 2]` for `u16`).
pub trait DmiIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

// Implement DmiIO support for u8
impl DmiIO for u8 {
    type Bytes = [u8; 1];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u8::from_le_bytes(bytes)
    }
}

// Implement DmiIO support for u16
impl DmiIO for u16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u16::from_le_bytes(bytes)
    }
}

// Implement DmiIO support for u32
impl DmiIO for u32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }
}

// Implement DmiIO support for u64
impl DmiIO for u64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u64::from_le_bytes(bytes)
    }
}

/// Safely reads a value of type `T` in little-endian byte order at a specific
/// offset, advancing the offset by the number of bytes read.
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the offset position (advanced after reading)
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le_at<T: DmiIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    if (type_len + *offset) > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..*offset + type_len].try_into() else {
        return Err(OutOfBounds);
    };

    *offset += type_len;

    Ok(T::from_le_bytes(read))
}
