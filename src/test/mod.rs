//! Shared helpers for crafting synthetic firmware images in unit tests.

use crate::smbios::{
    entrypoint::{checksum, EntryPoint, ANCHOR, ENTRY_POINT_LEN, INTERMEDIATE_ANCHOR},
    structure::HEADER_LEN,
};

/// Build a checksum-correct 31-byte entry point image with the given fields.
///
/// The checksum byte is computed so the whole image wraps to zero; every
/// other field not listed is zeroed (BCD revision is set to a plausible
/// `0x32`).
pub fn entry_point_image(
    major: u8,
    minor: u8,
    max_structure_size: u16,
    table_length: u16,
    table_address: u32,
    number_structures: u16,
) -> [u8; ENTRY_POINT_LEN] {
    let entry_point = EntryPoint {
        anchor: ANCHOR,
        checksum: 0,
        length: ENTRY_POINT_LEN as u8,
        major_version: major,
        minor_version: minor,
        max_structure_size,
        entry_point_revision: 0,
        formatted_area: [0; 5],
        intermediate_anchor: INTERMEDIATE_ANCHOR,
        intermediate_checksum: 0,
        structure_table_length: table_length,
        structure_table_address: table_address,
        number_structures,
        bcd_revision: 0x32,
    };

    let mut image = entry_point.to_bytes();
    image[4] = 0_u8.wrapping_sub(checksum(&image));
    image
}

/// Append one complete structure to `out`: header, formatted region, strings
/// and the section terminator.
///
/// An empty `strings` slice is encoded as an immediate double-null.
pub fn push_structure(
    out: &mut Vec<u8>,
    structure_type: u8,
    handle: u16,
    formatted: &[u8],
    strings: &[&str],
) {
    out.push(structure_type);
    out.push((HEADER_LEN + formatted.len()) as u8);
    out.extend_from_slice(&handle.to_le_bytes());
    out.extend_from_slice(formatted);

    if strings.is_empty() {
        out.extend_from_slice(&[0x00, 0x00]);
    } else {
        for string in strings {
            out.extend_from_slice(string.as_bytes());
            out.push(0x00);
        }
        out.push(0x00);
    }
}
