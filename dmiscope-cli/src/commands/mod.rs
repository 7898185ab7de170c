pub mod info;
pub mod list;
pub mod strings;

use anyhow::Context;
use dmiscope::{Smbios, SysfsSource};

use crate::app::GlobalOptions;

/// Load and decode the firmware tables, honoring any path overrides.
pub fn load_smbios(opts: &GlobalOptions) -> anyhow::Result<Smbios> {
    let mut source = SysfsSource::default();
    if let Some(entry_point) = &opts.entry_point {
        source.entry_point = entry_point.clone();
    }
    if let Some(table) = &opts.table {
        source.table = table.clone();
    }

    Smbios::from_source(&source).with_context(|| {
        format!(
            "failed to decode SMBIOS data from {} and {}",
            source.entry_point.display(),
            source.table.display()
        )
    })
}

/// Parse a structure handle given as decimal or 0x-prefixed hex.
pub fn parse_handle(raw: &str) -> anyhow::Result<u16> {
    let handle = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };

    handle.with_context(|| format!("invalid structure handle: {raw}"))
}
