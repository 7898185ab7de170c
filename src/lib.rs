// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # dmiscope
//!
//! A cross-platform decoder for SMBIOS/DMI firmware tables, built in pure Rust.
//! `dmiscope` parses the two binary regions a host's firmware exposes (the
//! fixed-layout entry point and the variable-length DMI structure table) into
//! structured records suitable for hardware-inventory reporting, without
//! shelling out to `dmidecode` or requiring root-only ioctls.
//!
//! ## Features
//!
//! - **Validated entry point parsing** - anchor tag and whole-buffer checksum
//!   verification before any field is trusted
//! - **Self-terminating table decoding** - walks the structure stream using
//!   only its own header/double-null conventions
//! - **Bounds-checked throughout** - malformed or truncated firmware data
//!   yields a classified error, never a panic or an out-of-range read
//! - **Source-agnostic** - decodes any pair of byte buffers; sysfs paths are
//!   configuration, not baked-in constants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dmiscope::{Smbios, SysfsSource};
//!
//! // Read and decode the firmware tables from the standard sysfs locations
//! let smbios = Smbios::from_source(&SysfsSource::default())?;
//!
//! let ep = smbios.entry_point();
//! println!("SMBIOS {}.{}", ep.major_version, ep.minor_version);
//!
//! for structure in smbios.structures() {
//!     println!(
//!         "handle {:#06X}: type {} ({} strings)",
//!         structure.header.handle,
//!         structure.header.structure_type,
//!         structure.strings.len()
//!     );
//! }
//! # Ok::<(), dmiscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`smbios::entrypoint`] - the 31-byte SMBIOS entry point record
//! - [`smbios::table`] - lazy and eager decoding of the DMI structure stream
//! - [`smbios::source`] - configured byte sources (sysfs by default)
//! - [`Smbios`] - aggregate of one entry point plus its decoded structures
//! - [`Parser`] - low-level bounds-checked cursor over a byte slice
//! - [`Error`] and [`Result`] - the crate-wide error taxonomy
//!
//! Structure *types* are deliberately left uninterpreted: the decoder reports
//! the type byte, the raw formatted region, and the trailing strings, and
//! leaves "type 17 is a memory device" semantics to consumers.
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use dmiscope::{Error, Smbios, SysfsSource};
//!
//! match Smbios::from_source(&SysfsSource::default()) {
//!     Ok(smbios) => println!("{} structures", smbios.structures().len()),
//!     Err(Error::AnchorMismatch) => println!("not an SMBIOS entry point"),
//!     Err(Error::ChecksumMismatch { sum }) => println!("corrupt entry point (sum {sum:#04X})"),
//!     Err(Error::Malformed { message, .. }) => println!("malformed table: {message}"),
//!     Err(e) => println!("error: {e}"),
//! }
//! ```

#[macro_use]
pub(crate) mod error;
pub(crate) mod io;
pub(crate) mod parser;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
pub mod prelude;

/// Definitions and parsing of the SMBIOS entry point and DMI structure table.
///
/// This module contains everything tied to the SMBIOS binary layout:
///
/// - [`smbios::entrypoint::EntryPoint`] - the fixed 31-byte entry point record
/// - [`smbios::structure::Structure`] - one typed record from the table stream
/// - [`smbios::table::StructureTable`] - the decoded, ordered structure list
/// - [`smbios::source::SysfsSource`] - configured paths to the firmware blobs
/// - [`smbios::object::Smbios`] - the high-level aggregate of all of the above
pub mod smbios;

/// `dmiscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`], used for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// `dmiscope` Error type
///
/// Classifies every failure this crate can signal, from anchor/checksum
/// violations to truncated structure data. See [`error`](crate::Error) for
/// the individual variants.
pub use error::Error;

/// Main entry point for working with decoded firmware tables.
///
/// See [`smbios::object::Smbios`] for loading and access methods.
pub use smbios::object::Smbios;

/// Configured byte source for the two firmware blobs.
pub use smbios::source::SysfsSource;

/// The SMBIOS entry point record and the structure-table records.
pub use smbios::{
    entrypoint::EntryPoint,
    structure::{Header, Structure},
    table::{StructureIter, StructureTable},
};

/// Low-level bounds-checked cursor over a byte slice.
///
/// # Example
///
/// ```rust
/// use dmiscope::Parser;
/// let data = [0x11, 0x22, 0x33, 0x44];
/// let mut parser = Parser::new(&data);
/// let handle: u16 = parser.read_le()?;
/// assert_eq!(handle, 0x2211);
/// # Ok::<(), dmiscope::Error>(())
/// ```
pub use parser::Parser;
