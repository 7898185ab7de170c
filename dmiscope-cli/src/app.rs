use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dmiscope - SMBIOS/DMI firmware table inspection
#[derive(Debug, Parser)]
#[command(name = "dmiscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Read the entry point from this file instead of the sysfs location.
    #[arg(long, global = true, value_name = "FILE")]
    pub entry_point: Option<PathBuf>,

    /// Read the structure table from this file instead of the sysfs location.
    #[arg(long, global = true, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display entry point overview: version, table size, address and counts.
    Info,

    /// List decoded structures: handle, type, length and string count.
    List,

    /// Dump the text strings attached to one structure.
    Strings {
        /// Handle of the structure (decimal or 0x-prefixed hex).
        #[arg(value_name = "HANDLE")]
        handle: String,
    },
}
