//! Convenient re-exports of the most commonly used types.
//!
//! # Example
//!
//! ```rust,no_run
//! use dmiscope::prelude::*;
//!
//! let smbios = Smbios::from_source(&SysfsSource::default())?;
//! println!("{} structures", smbios.structures().len());
//! # Ok::<(), dmiscope::Error>(())
//! ```

pub use crate::error::Error;
pub use crate::parser::Parser;
pub use crate::smbios::entrypoint::{checksum, EntryPoint, ANCHOR, ENTRY_POINT_LEN, INTERMEDIATE_ANCHOR};
pub use crate::smbios::object::Smbios;
pub use crate::smbios::source::{SysfsSource, SYSFS_DMI, SYSFS_ENTRY_POINT};
pub use crate::smbios::structure::{Header, Structure, HEADER_LEN};
pub use crate::smbios::table::{StructureIter, StructureTable};
pub use crate::Result;
