//! High-level aggregate of a decoded SMBIOS data set.
//!
//! [`Smbios`] ties the two independent decodes together: one entry point, one
//! structure table, loaded from a [`SysfsSource`] or from caller-supplied
//! buffers. It is the usual entry point for consumers that want "all the
//! firmware told us" rather than driving the two decoders by hand.

use crate::{
    smbios::{entrypoint::EntryPoint, source::SysfsSource, structure::Structure, table::StructureTable},
    Result,
};

/// A decoded SMBIOS data set: the entry point and every structure from the
/// table, in stream order.
///
/// # Examples
///
/// ```rust,no_run
/// use dmiscope::{Smbios, SysfsSource};
///
/// let smbios = Smbios::from_source(&SysfsSource::default())?;
///
/// let ep = smbios.entry_point();
/// println!("SMBIOS {}.{}, {} structures", ep.major_version, ep.minor_version, smbios.structures().len());
/// # Ok::<(), dmiscope::Error>(())
/// ```
#[derive(Debug)]
pub struct Smbios {
    entry_point: EntryPoint,
    structures: Vec<Structure>,
}

impl Smbios {
    /// Load and decode both firmware blobs from the given source.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if a blob cannot be read, and any
    /// error of [`Smbios::from_bytes`] for the decode itself.
    pub fn from_source(source: &SysfsSource) -> Result<Smbios> {
        let (entry_point, table) = source.load()?;
        Smbios::from_bytes(&entry_point, &table)
    }

    /// Decode an SMBIOS data set from two in-memory buffers.
    ///
    /// The entry point's `number_structures` and `structure_table_length`
    /// never bound the table decode; the stream's own conventions are
    /// authoritative. They are compared against the decoded results after the
    /// fact, and a mismatch logs a warning without failing the decode, since
    /// real firmware gets these fields wrong more often than it corrupts the
    /// table itself.
    ///
    /// # Arguments
    /// * `entry_point` - The raw entry point blob
    /// * `table` - The raw structure table blob
    ///
    /// # Errors
    /// Returns any error of [`EntryPoint::read`] or
    /// [`StructureTable::read`].
    pub fn from_bytes(entry_point: &[u8], table: &[u8]) -> Result<Smbios> {
        let entry_point = EntryPoint::read(entry_point)?;
        let table_bytes = table.len();
        let table = StructureTable::read(table)?;

        if table.len() != entry_point.number_structures as usize {
            log::warn!(
                "entry point declares {} structures, table decoded to {}",
                entry_point.number_structures,
                table.len()
            );
        }
        if table_bytes != entry_point.structure_table_length as usize {
            log::warn!(
                "entry point declares a {} byte table, {} bytes were supplied",
                entry_point.structure_table_length,
                table_bytes
            );
        }

        Ok(Smbios {
            entry_point,
            structures: table.structures,
        })
    }

    /// The decoded entry point record.
    #[must_use]
    pub fn entry_point(&self) -> &EntryPoint {
        &self.entry_point
    }

    /// The decoded structures, in the order they appear in the table.
    #[must_use]
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Find a structure by its handle.
    #[must_use]
    pub fn structure_by_handle(&self, handle: u16) -> Option<&Structure> {
        self.structures
            .iter()
            .find(|structure| structure.header.handle == handle)
    }
}
