//! Configured byte sources for the two firmware blobs.
//!
//! The decoders themselves consume plain byte buffers; this module is the
//! collaborator that supplies them. The standard sysfs locations are only
//! defaults on a [`SysfsSource`], never constants baked into decoding logic,
//! which keeps the decoders portable across dump files, test fixtures and
//! other byte sources.

use std::{fs, path::PathBuf};

use crate::Result;

/// Default sysfs path of the SMBIOS entry point blob.
pub const SYSFS_ENTRY_POINT: &str = "/sys/firmware/dmi/tables/smbios_entry_point";

/// Default sysfs path of the raw DMI structure table blob.
pub const SYSFS_DMI: &str = "/sys/firmware/dmi/tables/DMI";

/// Filesystem locations of the entry point and structure table blobs.
///
/// `Default` points at the standard sysfs locations exposed by the kernel's
/// dmi-sysfs support; both paths can be overridden to read saved dumps.
///
/// # Examples
///
/// ```rust,no_run
/// use dmiscope::SysfsSource;
///
/// let (entry_point, table) = SysfsSource::default().load()?;
/// # Ok::<(), dmiscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SysfsSource {
    /// Path of the entry point blob
    pub entry_point: PathBuf,
    /// Path of the structure table blob
    pub table: PathBuf,
}

impl Default for SysfsSource {
    fn default() -> Self {
        SysfsSource {
            entry_point: PathBuf::from(SYSFS_ENTRY_POINT),
            table: PathBuf::from(SYSFS_DMI),
        }
    }
}

impl SysfsSource {
    /// Create a source reading from two explicit paths.
    pub fn new(entry_point: impl Into<PathBuf>, table: impl Into<PathBuf>) -> Self {
        SysfsSource {
            entry_point: entry_point.into(),
            table: table.into(),
        }
    }

    /// Read both blobs in full.
    ///
    /// Plain `fs::read` on purpose: the blobs are small and sysfs binary
    /// attributes do not support memory mapping.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if either file cannot be read.
    pub fn load(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let entry_point = fs::read(&self.entry_point)?;
        let table = fs::read(&self.table)?;

        Ok((entry_point, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_points_at_sysfs() {
        let source = SysfsSource::default();
        assert_eq!(source.entry_point, PathBuf::from(SYSFS_ENTRY_POINT));
        assert_eq!(source.table, PathBuf::from(SYSFS_DMI));
    }

    #[test]
    fn load_missing_file() {
        let source = SysfsSource::new(
            "/nonexistent/path/smbios_entry_point",
            "/nonexistent/path/DMI",
        );

        match source.load() {
            Err(Error::FileError(io_error)) => {
                assert_eq!(io_error.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected FileError"),
        }
    }
}
