//! SMBIOS 32-bit entry point record.
//!
//! This module defines the [`EntryPoint`] struct, the fixed-layout record a
//! host's firmware places in front of the DMI structure table. It anchors the
//! table (length, physical address, structure count) and carries the SMBIOS
//! version the firmware implements.
//!
//! # Example
//!
//! ```rust,no_run
//! use dmiscope::EntryPoint;
//! # let buffer: Vec<u8> = Vec::new();
//! let ep = EntryPoint::read(&buffer)?;
//! println!("SMBIOS {}.{}", ep.major_version, ep.minor_version);
//! println!("table: {} bytes, {} structures", ep.structure_table_length, ep.number_structures);
//! # Ok::<(), dmiscope::Error>(())
//! ```
//!
//! # Reference
//!
//! - [DMTF DSP0134 3.2.0, section 5.2.1](https://www.dmtf.org/sites/default/files/standards/documents/DSP0134_3.2.0.pdf)

use crate::{parser::Parser, Error, Result};

/// The anchor tag every 32-bit entry point begins with.
pub const ANCHOR: [u8; 4] = *b"_SM_";

/// The expected intermediate anchor tag at offset 16.
pub const INTERMEDIATE_ANCHOR: [u8; 5] = *b"_DMI_";

/// Size in bytes of the fixed entry point layout.
pub const ENTRY_POINT_LEN: usize = 31;

/// Compute the wrapping byte-sum of `data`.
///
/// A valid entry point sums to zero over its whole buffer, checksum byte
/// included; firmware picks the checksum byte to compensate for everything
/// else. The same helper lets tests craft valid images.
#[must_use]
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0_u8, |sum, byte| sum.wrapping_add(*byte))
}

/// The SMBIOS entry point, providing the location, size and version of the
/// DMI structure table.
///
/// Both anchors are modeled as fixed-length byte arrays rather than text:
/// they are tags compared for exact equality, with no guarantee of being
/// meaningful in any encoding beyond the ASCII tag value. The
/// `structure_table_address` is a physical address and purely informational
/// here, since the table is always supplied as its own buffer.
///
/// Decoded once per invocation from a caller-supplied buffer; never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    /// Anchor tag, `_SM_`
    pub anchor: [u8; 4],
    /// Checksum byte chosen so the whole buffer sums to zero
    pub checksum: u8,
    /// Total entry point size in bytes
    pub length: u8,
    /// Major version of the implemented SMBIOS specification
    pub major_version: u8,
    /// Minor version of the implemented SMBIOS specification
    pub minor_version: u8,
    /// Size of the largest structure in the table
    pub max_structure_size: u16,
    /// Entry point revision; 0 means the formatted area is reserved and zero
    pub entry_point_revision: u8,
    /// Revision-specific bytes, zero when `entry_point_revision` is 0
    pub formatted_area: [u8; 5],
    /// Intermediate anchor tag, expected `_DMI_`
    pub intermediate_anchor: [u8; 5],
    /// Checksum over the intermediate portion of the entry point
    pub intermediate_checksum: u8,
    /// Byte length of the structure table region
    pub structure_table_length: u16,
    /// Physical address of the structure table (informational only)
    pub structure_table_address: u32,
    /// Number of structures the firmware claims the table contains
    pub number_structures: u16,
    /// SMBIOS BCD revision
    pub bcd_revision: u8,
}

impl EntryPoint {
    /// Reads an [`EntryPoint`] from a byte slice.
    ///
    /// Validation order: the buffer must begin with the `_SM_` anchor, the
    /// wrapping sum of every byte (checksum included) must be zero, and only
    /// then are fields extracted at their fixed offsets. A buffer shorter
    /// than the 31-byte layout fails at the first inaccessible field.
    ///
    /// Buffers longer than 31 bytes are accepted: the checksum covers the
    /// whole buffer as supplied, and trailing bytes of future entry point
    /// revisions are ignored.
    ///
    /// # Arguments
    /// * `data` - The byte slice from which this object shall be read
    ///
    /// # Errors
    /// Returns [`Error::AnchorMismatch`] if the anchor tag is absent,
    /// [`Error::ChecksumMismatch`] if the buffer does not sum to zero and
    /// [`Error::OutOfBounds`] if the buffer is shorter than the fixed layout.
    pub fn read(data: &[u8]) -> Result<EntryPoint> {
        if data.is_empty() {
            return Err(Error::Empty);
        }

        if !data.starts_with(&ANCHOR) {
            return Err(Error::AnchorMismatch);
        }

        let sum = checksum(data);
        if sum != 0 {
            return Err(Error::ChecksumMismatch { sum });
        }

        let mut parser = Parser::new(data);

        let mut anchor = [0_u8; 4];
        anchor.copy_from_slice(parser.read_bytes(4)?);

        let checksum = parser.read_le::<u8>()?;
        let length = parser.read_le::<u8>()?;
        let major_version = parser.read_le::<u8>()?;
        let minor_version = parser.read_le::<u8>()?;
        let max_structure_size = parser.read_le::<u16>()?;
        let entry_point_revision = parser.read_le::<u8>()?;

        let mut formatted_area = [0_u8; 5];
        formatted_area.copy_from_slice(parser.read_bytes(5)?);

        let mut intermediate_anchor = [0_u8; 5];
        intermediate_anchor.copy_from_slice(parser.read_bytes(5)?);
        if intermediate_anchor != INTERMEDIATE_ANCHOR {
            log::warn!(
                "unexpected intermediate anchor {:02X?} at offset 16",
                intermediate_anchor
            );
        }

        Ok(EntryPoint {
            anchor,
            checksum,
            length,
            major_version,
            minor_version,
            max_structure_size,
            entry_point_revision,
            formatted_area,
            intermediate_anchor,
            intermediate_checksum: parser.read_le::<u8>()?,
            structure_table_length: parser.read_le::<u16>()?,
            structure_table_address: parser.read_le::<u32>()?,
            number_structures: parser.read_le::<u16>()?,
            bcd_revision: parser.read_le::<u8>()?,
        })
    }

    /// Encode this entry point back into its 31-byte fixed layout.
    ///
    /// The stored `checksum` byte is written as-is, not recomputed, so a
    /// caller controls whether the image is valid. [`checksum`] computes the
    /// compensating byte when a valid image is wanted.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ENTRY_POINT_LEN] {
        let mut data = [0_u8; ENTRY_POINT_LEN];

        data[0..4].copy_from_slice(&self.anchor);
        data[4] = self.checksum;
        data[5] = self.length;
        data[6] = self.major_version;
        data[7] = self.minor_version;
        data[8..10].copy_from_slice(&self.max_structure_size.to_le_bytes());
        data[10] = self.entry_point_revision;
        data[11..16].copy_from_slice(&self.formatted_area);
        data[16..21].copy_from_slice(&self.intermediate_anchor);
        data[21] = self.intermediate_checksum;
        data[22..24].copy_from_slice(&self.structure_table_length.to_le_bytes());
        data[24..28].copy_from_slice(&self.structure_table_address.to_le_bytes());
        data[28..30].copy_from_slice(&self.number_structures.to_le_bytes());
        data[30] = self.bcd_revision;

        data
    }
}
