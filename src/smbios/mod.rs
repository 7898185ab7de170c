//! SMBIOS entry point and DMI structure table decoding.
//!
//! The firmware exposes two independent binary regions, and this module
//! mirrors that split:
//!
//! - [`entrypoint`] - the fixed 31-byte entry point record, validated by
//!   anchor tag and whole-buffer checksum
//! - [`structure`] / [`table`] - the variable-length structure stream with
//!   its embedded, double-null-terminated string sections
//! - [`source`] - where the two byte buffers come from (sysfs by default)
//! - [`object`] - the [`object::Smbios`] aggregate combining both decodes
//!
//! The decoders consume plain byte buffers and produce owned records; neither
//! retains a reference to its input after returning, and the two may be used
//! independently.

pub mod entrypoint;
pub mod object;
pub mod source;
pub mod structure;
pub mod table;
