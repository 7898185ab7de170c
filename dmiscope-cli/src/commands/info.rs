use serde::Serialize;

use crate::{app::GlobalOptions, commands::load_smbios, output::print_output};

#[derive(Debug, Serialize)]
struct EntryPointInfo {
    smbios_version: String,
    entry_point_revision: u8,
    bcd_revision: String,
    max_structure_size: u16,
    structure_table_length: u16,
    structure_table_address: String,
    declared_structures: u16,
    decoded_structures: usize,
    total_strings: usize,
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let smbios = load_smbios(opts)?;
    let ep = smbios.entry_point();

    let info = EntryPointInfo {
        smbios_version: format!("{}.{}", ep.major_version, ep.minor_version),
        entry_point_revision: ep.entry_point_revision,
        bcd_revision: format!("{:#04X}", ep.bcd_revision),
        max_structure_size: ep.max_structure_size,
        structure_table_length: ep.structure_table_length,
        structure_table_address: format!("{:#010X}", ep.structure_table_address),
        declared_structures: ep.number_structures,
        decoded_structures: smbios.structures().len(),
        total_strings: smbios
            .structures()
            .iter()
            .map(|s| s.strings.len())
            .sum(),
    };

    print_output(&info, opts, |info| {
        println!("SMBIOS version:        {}", info.smbios_version);
        println!("Entry point revision:  {}", info.entry_point_revision);
        println!("BCD revision:          {}", info.bcd_revision);
        println!("Max structure size:    {} bytes", info.max_structure_size);
        println!("Table length:          {} bytes", info.structure_table_length);
        println!("Table address:         {}", info.structure_table_address);
        println!("Declared structures:   {}", info.declared_structures);
        println!("Decoded structures:    {}", info.decoded_structures);
        println!("Total strings:         {}", info.total_strings);
    })
}
