use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is terminal for the decode call that produced it: there is no
/// partial-result recovery, and the caller receives exactly one classified
/// failure value.
///
/// # Error Categories
///
/// ## Entry Point Validation
/// - [`Error::AnchorMismatch`] - The buffer does not begin with the `_SM_` tag
/// - [`Error::ChecksumMismatch`] - The whole-buffer checksum invariant is violated
///
/// ## Structure Table Decoding
/// - [`Error::Malformed`] - A structure declares an impossible layout
/// - [`Error::OutOfBounds`] - The data ended while more bytes were expected
///
/// ## I/O and Input
/// - [`Error::FileError`] - Reading a firmware blob from disk failed
/// - [`Error::Empty`] - Empty input provided where firmware data was expected
///
/// # Examples
///
/// ```rust,no_run
/// use dmiscope::{Error, Smbios, SysfsSource};
///
/// match Smbios::from_source(&SysfsSource::default()) {
///     Ok(smbios) => println!("decoded {} structures", smbios.structures().len()),
///     Err(Error::AnchorMismatch) => eprintln!("entry point anchor not found"),
///     Err(Error::ChecksumMismatch { sum }) => eprintln!("bad checksum, sum {sum:#04X}"),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("malformed table: {message} ({file}:{line})");
///     }
///     Err(e) => eprintln!("error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The entry point buffer does not begin with the `_SM_` anchor tag.
    ///
    /// Nothing else in the buffer is inspected once this check fails; the
    /// input is simply not an SMBIOS entry point.
    #[error("SMBIOS anchor tag not found")]
    AnchorMismatch,

    /// The entry point checksum invariant is violated.
    ///
    /// The byte-wise sum of the entire buffer, checksum byte included, must
    /// wrap to zero modulo 256. `sum` carries the residual for diagnostics.
    #[error("Invalid entry point checksum - buffer sums to {sum:#04X}")]
    ChecksumMismatch {
        /// The non-zero wrapping sum of the rejected buffer
        sum: u8,
    },

    /// The data is damaged and could not be parsed.
    ///
    /// Signalled when a structure header declares a layout that cannot exist,
    /// such as a total length smaller than the header itself. The source
    /// location where the malformation was detected is included for debugging.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing the data.
    ///
    /// This covers every truncation case: an entry point shorter than its
    /// fixed layout, a formatted region cut short, or string data ending
    /// before its terminator.
    #[error("Out of bound read would have occurred!")]
    OutOfBounds,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors raised while reading a firmware blob from
    /// sysfs or from a dump file on disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,
}
