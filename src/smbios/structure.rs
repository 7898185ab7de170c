//! A single typed record from the DMI structure stream.
//!
//! Each structure is a 4-byte [`Header`], a formatted region of
//! `header.length - 4` raw bytes, and a string section terminated by two
//! consecutive null bytes. Structure types are left uninterpreted: consumers
//! get the type byte and the raw bytes, not "type 17 is a memory device"
//! semantics.
//!
//! # Reference
//!
//! - [DMTF DSP0134 3.2.0, section 6.1](https://www.dmtf.org/sites/default/files/standards/documents/DSP0134_3.2.0.pdf)

use crate::{parser::Parser, Result};

/// Number of bytes occupied by a structure header; `Header::length` includes
/// these four bytes but never the trailing strings.
pub const HEADER_LEN: usize = 4;

/// Header of one DMI structure: type, declared length and handle.
#[derive(Debug, Clone)]
pub struct Header {
    /// Identifies the kind of structure; uninterpreted by this crate
    pub structure_type: u8,
    /// Total size of header plus formatted region, excluding strings
    pub length: u8,
    /// Identifier unique to this structure within its table
    pub handle: u16,
}

impl Header {
    /// Read a [`Header`] from the parser's current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than four bytes remain.
    pub(crate) fn read(parser: &mut Parser) -> Result<Header> {
        Ok(Header {
            structure_type: parser.read_le::<u8>()?,
            length: parser.read_le::<u8>()?,
            handle: parser.read_le::<u16>()?,
        })
    }
}

/// One decoded structure: header, raw formatted region and its strings.
///
/// The strings keep their stream order, since the formatted region refers to
/// them by 1-based index; resolving those references is up to the consumer.
/// A structure owns its bytes outright; nothing borrows from the table
/// buffer after decoding.
#[derive(Debug, Clone)]
pub struct Structure {
    /// The structure header
    pub header: Header,
    /// Raw bytes of the formatted region, exactly `header.length - 4` of them
    pub formatted: Vec<u8>,
    /// Trailing strings in stream order; empty for an immediate double-null
    pub strings: Vec<String>,
}

impl Structure {
    /// Read one complete structure from the parser's current position.
    ///
    /// The string section is walked byte-at-a-time: a null ends the current
    /// string, and a second consecutive null ends the whole section. An
    /// immediate double-null is the valid encoding of "no strings".
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the header declares a length
    /// smaller than the header itself and [`crate::Error::OutOfBounds`] if
    /// the data ends inside the formatted region or the string section.
    pub(crate) fn read(parser: &mut Parser) -> Result<Structure> {
        let header = Header::read(parser)?;

        // A declared length below the header size cannot exist; reject it
        // instead of wrapping the subtraction below.
        if (header.length as usize) < HEADER_LEN {
            return Err(malformed_error!(
                "Structure with handle {:#06X} declares length {}, smaller than its own header",
                header.handle,
                header.length
            ));
        }

        let formatted = parser
            .read_bytes(header.length as usize - HEADER_LEN)?
            .to_vec();

        let mut strings = Vec::new();
        loop {
            if parser.peek_byte()? == 0 && parser.peek_byte_at(1)? == 0 {
                parser.advance_by(2)?;
                break;
            }

            strings.push(parser.read_string_lossy()?);

            // The string's own terminator is consumed; a second null here
            // closes the section.
            if parser.peek_byte()? == 0 {
                parser.advance_by(1)?;
                break;
            }
        }

        Ok(Structure {
            header,
            formatted,
            strings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn crafted() {
        #[rustfmt::skip]
        let data = [
            0x01, 0x06, 0x00, 0x00,                 // type 1, length 6, handle 0
            0xAA, 0xBB,                             // formatted region
            b'H', b'e', b'l', b'l', b'o', 0x00,
            b'W', b'o', b'r', b'l', b'd', 0x00,
            0x00,
        ];

        let mut parser = Parser::new(&data);
        let structure = Structure::read(&mut parser).unwrap();

        assert_eq!(structure.header.structure_type, 1);
        assert_eq!(structure.header.length, 6);
        assert_eq!(structure.header.handle, 0);
        assert_eq!(structure.formatted, vec![0xAA, 0xBB]);
        assert_eq!(structure.strings, vec!["Hello", "World"]);
        assert!(!parser.has_more_data());
    }

    #[test]
    fn zero_strings() {
        let data = [0x7F, 0x04, 0x34, 0x12, 0x00, 0x00];

        let mut parser = Parser::new(&data);
        let structure = Structure::read(&mut parser).unwrap();

        assert_eq!(structure.header.structure_type, 0x7F);
        assert_eq!(structure.header.handle, 0x1234);
        assert!(structure.formatted.is_empty());
        assert!(structure.strings.is_empty());
        assert!(!parser.has_more_data());
    }

    #[test]
    fn length_below_header() {
        let data = [0x01, 0x03, 0x00, 0x00, 0x00, 0x00];

        let mut parser = Parser::new(&data);
        assert!(matches!(
            Structure::read(&mut parser),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn truncated_formatted_region() {
        // Declares 8 formatted bytes but only 2 follow
        let data = [0x01, 0x0C, 0x00, 0x00, 0xAA, 0xBB];

        let mut parser = Parser::new(&data);
        assert!(matches!(
            Structure::read(&mut parser),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn truncated_string_section() {
        // String data ends without any terminator
        let data = [0x01, 0x04, 0x00, 0x00, b'A', b'B'];

        let mut parser = Parser::new(&data);
        assert!(matches!(
            Structure::read(&mut parser),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn truncated_terminator() {
        // Single null at end of data where the double-null belongs
        let data = [0x01, 0x04, 0x00, 0x00, 0x00];

        let mut parser = Parser::new(&data);
        assert!(matches!(
            Structure::read(&mut parser),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn missing_section_entirely() {
        // Formatted region consumes all remaining bytes
        let data = [0x01, 0x06, 0x00, 0x00, 0xAA, 0xBB];

        let mut parser = Parser::new(&data);
        assert!(matches!(
            Structure::read(&mut parser),
            Err(Error::OutOfBounds)
        ));
    }
}
