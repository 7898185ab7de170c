//! Decoding of the DMI structure table stream.
//!
//! The table is a back-to-back sequence of variable-size structures with no
//! outer framing: termination is driven entirely by the stream itself. Fewer
//! than four bytes remaining before the next header is the normal end of the
//! table; every other shortfall is an error. The entry point's declared
//! structure count and table length are deliberately not consulted here (see
//! [`crate::Smbios`] for the soft cross-check).
//!
//! [`StructureIter`] decodes lazily, one structure per `next()` call;
//! [`StructureTable::read`] collects eagerly. External behavior is identical,
//! only the memory profile differs.

use crate::{
    parser::Parser,
    smbios::structure::{Structure, HEADER_LEN},
    Result,
};

/// Lazy decoder over a structure table buffer.
///
/// Yields `Result<Structure>` in stream order. After the first error the
/// iterator is exhausted: a decode failure is terminal for the whole table,
/// there is no resynchronization with the stream.
///
/// # Examples
///
/// ```rust
/// use dmiscope::StructureIter;
///
/// let table = [0x7F, 0x04, 0x00, 0x00, 0x00, 0x00]; // one end-of-table structure
/// let mut count = 0;
/// for structure in StructureIter::new(&table) {
///     structure?;
///     count += 1;
/// }
/// assert_eq!(count, 1);
/// # Ok::<(), dmiscope::Error>(())
/// ```
pub struct StructureIter<'a> {
    parser: Parser<'a>,
    failed: bool,
}

impl<'a> StructureIter<'a> {
    /// Create a lazy structure decoder over `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> StructureIter<'a> {
        StructureIter {
            parser: Parser::new(data),
            failed: false,
        }
    }
}

impl Iterator for StructureIter<'_> {
    type Item = Result<Structure>;

    fn next(&mut self) -> Option<Self::Item> {
        // Not enough bytes left for another header: normal end of table.
        if self.failed || self.parser.remaining() < HEADER_LEN {
            return None;
        }

        match Structure::read(&mut self.parser) {
            Ok(structure) => Some(Ok(structure)),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// The fully decoded structure table: an ordered list of [`Structure`]
/// records, in stream order.
#[derive(Debug)]
pub struct StructureTable {
    /// The decoded structures, in the order they appear in the table
    pub structures: Vec<Structure>,
}

impl StructureTable {
    /// Eagerly decode an entire structure table buffer.
    ///
    /// An empty buffer, or one whose final structure ends with up to three
    /// leftover bytes, decodes successfully; the leftovers are padding from
    /// the stream's point of view.
    ///
    /// # Arguments
    /// * `data` - The byte slice holding the raw structure table
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for an impossible structure header
    /// and [`crate::Error::OutOfBounds`] when the data ends inside a
    /// structure.
    pub fn read(data: &[u8]) -> Result<StructureTable> {
        let mut structures = Vec::new();
        for structure in StructureIter::new(data) {
            structures.push(structure?);
        }

        Ok(StructureTable { structures })
    }

    /// Number of decoded structures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Returns `true` if the table decoded to no structures at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}
