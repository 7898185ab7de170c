use anyhow::bail;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::{load_smbios, parse_handle},
    output::print_output,
};

#[derive(Debug, Serialize)]
struct StringsOutput {
    handle: String,
    structure_type: u8,
    strings: Vec<String>,
}

pub fn run(raw_handle: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let handle = parse_handle(raw_handle)?;
    let smbios = load_smbios(opts)?;

    let Some(structure) = smbios.structure_by_handle(handle) else {
        bail!("no structure with handle {handle:#06X}");
    };

    let output = StringsOutput {
        handle: format!("{:#06X}", structure.header.handle),
        structure_type: structure.header.structure_type,
        strings: structure.strings.clone(),
    };

    print_output(&output, opts, |output| {
        println!(
            "Structure {} (type {}):",
            output.handle, output.structure_type
        );
        if output.strings.is_empty() {
            println!("  (no strings)");
        } else {
            // Strings are referenced 1-based from the formatted region
            for (index, string) in output.strings.iter().enumerate() {
                println!("  {}: {string}", index + 1);
            }
        }
    })
}
