use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::load_smbios,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct StructureEntry {
    handle: String,
    structure_type: u8,
    length: u8,
    strings: usize,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    structures: Vec<StructureEntry>,
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let smbios = load_smbios(opts)?;

    let structures: Vec<StructureEntry> = smbios
        .structures()
        .iter()
        .map(|structure| StructureEntry {
            handle: format!("{:#06X}", structure.header.handle),
            structure_type: structure.header.structure_type,
            length: structure.header.length,
            strings: structure.strings.len(),
        })
        .collect();

    let output = ListOutput { structures };

    print_output(&output, opts, |output| {
        let mut writer = TabWriter::new(vec![
            ("HANDLE", Align::Left),
            ("TYPE", Align::Right),
            ("LENGTH", Align::Right),
            ("STRINGS", Align::Right),
        ]);
        for entry in &output.structures {
            writer.row(vec![
                entry.handle.clone(),
                entry.structure_type.to_string(),
                entry.length.to_string(),
                entry.strings.to_string(),
            ]);
        }
        writer.print();
        println!("\n{} structures", output.structures.len());
    })
}
