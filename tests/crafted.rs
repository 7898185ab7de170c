//! End-to-end decoding of crafted firmware images through the public API.

use dmiscope::prelude::*;

/// Build a checksum-correct entry point image.
fn entry_point_image(table_length: u16, number_structures: u16) -> [u8; ENTRY_POINT_LEN] {
    let entry_point = EntryPoint {
        anchor: ANCHOR,
        checksum: 0,
        length: ENTRY_POINT_LEN as u8,
        major_version: 3,
        minor_version: 2,
        max_structure_size: 0x0100,
        entry_point_revision: 0,
        formatted_area: [0; 5],
        intermediate_anchor: INTERMEDIATE_ANCHOR,
        intermediate_checksum: 0,
        structure_table_length: table_length,
        structure_table_address: 0x000F_0000,
        number_structures,
        bcd_revision: 0x32,
    };

    let mut image = entry_point.to_bytes();
    image[4] = 0u8.wrapping_sub(checksum(&image));
    image
}

/// Append one structure to the table buffer.
fn push_structure(out: &mut Vec<u8>, structure_type: u8, handle: u16, formatted: &[u8], strings: &[&str]) {
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

#[test]
fn full_decode() {
    let mut table = Vec::new();
    push_structure(
        &mut table,
        0,
        0x0000,
        &[0x01, 0x02],
        &["American Megatrends Inc.", "F.42", "08/06/2025"],
    );
    push_structure(&mut table, 1, 0x0001, &[0x01], &["Example Corp", "Model X"]);
    push_structure(&mut table, 4, 0x0004, &[0xAA; 20], &["Socket 0"]);
    push_structure(&mut table, 127, 0x007F, &[], &[]);

    let entry_point = entry_point_image(table.len() as u16, 4);

    let smbios = Smbios::from_bytes(&entry_point, &table).unwrap();

    let ep = smbios.entry_point();
    assert_eq!((ep.major_version, ep.minor_version), (3, 2));
    assert_eq!(ep.number_structures, 4);

    let structures = smbios.structures();
    assert_eq!(structures.len(), 4);

    assert_eq!(structures[0].strings[0], "American Megatrends Inc.");
    assert_eq!(structures[1].header.handle, 0x0001);
    assert_eq!(structures[2].formatted.len(), 20);
    assert_eq!(structures[3].header.structure_type, 127);
    assert!(structures[3].strings.is_empty());

    let board = smbios.structure_by_handle(0x0001).unwrap();
    assert_eq!(board.strings, vec!["Example Corp", "Model X"]);
}

#[test]
fn lazy_and_eager_decoding_agree() {
    let mut table = Vec::new();
    push_structure(&mut table, 2, 0x0010, &[0x01], &["Baseboard"]);
    push_structure(&mut table, 3, 0x0011, &[0x03], &[]);

    let eager = StructureTable::read(&table).unwrap();
    let lazy: Vec<Structure> = StructureIter::new(&table)
        .collect::<Result<Vec<_>>>()
        .unwrap();

    assert_eq!(eager.len(), lazy.len());
    for (a, b) in eager.structures.iter().zip(&lazy) {
        assert_eq!(a.header.handle, b.header.handle);
        assert_eq!(a.header.structure_type, b.header.structure_type);
        assert_eq!(a.formatted, b.formatted);
        assert_eq!(a.strings, b.strings);
    }
}

#[test]
fn entry_point_round_trip() {
    let image = entry_point_image(100, 5);
    let decoded = EntryPoint::read(&image).unwrap();

    assert_eq!(decoded.to_bytes(), image);
}

#[test]
fn single_byte_mutation_breaks_checksum() {
    let image = entry_point_image(100, 5);

    // Mutating any byte after the anchor (other than compensating pairs)
    // must be rejected; mutating the anchor itself fails earlier.
    for index in 4..ENTRY_POINT_LEN {
        let mut corrupt = image;
        corrupt[index] = corrupt[index].wrapping_add(0x21);

        match EntryPoint::read(&corrupt) {
            Err(Error::ChecksumMismatch { sum }) => assert_eq!(sum, 0x21),
            other => panic!("index {index}: expected checksum mismatch, got {other:?}"),
        }
    }
}
