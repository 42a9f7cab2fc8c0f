//! Datagram decoding modules.
//!
//! Each datagram type follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `reader`: safe byte access over the datagram body
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; the `source` layer handles file
//! access and framing, handing each parser a complete datagram body with the
//! length prefix and trailing length repeat already stripped.

use std::fmt;

pub mod config;
pub mod filetime;
pub mod sample;

pub(crate) mod common;

/// Known EK60 datagram type tags, with a fallback for tags this crate does
/// not decode. Adding support for a new datagram type is a variant addition
/// here plus a decoder module, not a rewrite of the dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatagramType {
    /// "CON0": survey metadata and per-transceiver configuration.
    Configuration,
    /// "RAW0": per-channel acoustic sample data.
    Sample,
    /// "NME0": embedded NMEA sentence.
    Nmea,
    /// "TAG0": operator annotation.
    Annotation,
    /// Any other tag, retained verbatim.
    Unknown([u8; 4]),
}

impl DatagramType {
    pub fn from_tag(tag: [u8; 4]) -> Self {
        match &tag {
            b"CON0" => DatagramType::Configuration,
            b"RAW0" => DatagramType::Sample,
            b"NME0" => DatagramType::Nmea,
            b"TAG0" => DatagramType::Annotation,
            _ => DatagramType::Unknown(tag),
        }
    }

    /// Classify a datagram body by its leading 4-byte tag.
    pub fn of(body: &[u8]) -> Option<Self> {
        let tag: [u8; 4] = body.get(0..4)?.try_into().ok()?;
        Some(Self::from_tag(tag))
    }

    pub fn tag(&self) -> [u8; 4] {
        match self {
            DatagramType::Configuration => *b"CON0",
            DatagramType::Sample => *b"RAW0",
            DatagramType::Nmea => *b"NME0",
            DatagramType::Annotation => *b"TAG0",
            DatagramType::Unknown(tag) => *tag,
        }
    }
}

impl fmt::Display for DatagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.tag() {
            // Tags are ASCII in well-formed files; anything else is shown
            // escaped so diagnostics stay printable.
            if byte.is_ascii_graphic() {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// Decoded datagram header: the 4-character type tag and the FILETIME
/// timestamp, both as Unix-epoch seconds and as display text.
#[derive(Debug, Clone, PartialEq)]
pub struct DatagramHeader {
    pub datagram_type: DatagramType,
    /// Unix-epoch seconds with sub-second precision.
    pub timestamp: f64,
    /// RFC 3339 display text; informational only, never compared.
    pub timestamp_text: String,
}

impl DatagramHeader {
    pub(crate) fn from_words(datagram_type: DatagramType, low: u32, high: u32) -> Self {
        Self {
            datagram_type,
            timestamp: filetime::unix_seconds(low, high),
            timestamp_text: filetime::display_string(low, high).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DatagramType;

    #[test]
    fn known_tags_round_trip() {
        for tag in [*b"CON0", *b"RAW0", *b"NME0", *b"TAG0"] {
            let parsed = DatagramType::from_tag(tag);
            assert_eq!(parsed.tag(), tag);
            assert!(!matches!(parsed, DatagramType::Unknown(_)));
        }
    }

    #[test]
    fn unknown_tag_is_retained() {
        let parsed = DatagramType::from_tag(*b"XYZ0");
        assert_eq!(parsed, DatagramType::Unknown(*b"XYZ0"));
        assert_eq!(parsed.to_string(), "XYZ0");
    }

    #[test]
    fn classify_requires_four_bytes() {
        assert_eq!(DatagramType::of(b"RAW"), None);
        assert_eq!(DatagramType::of(b"RAW0rest"), Some(DatagramType::Sample));
    }

    #[test]
    fn non_printable_tag_bytes_are_escaped() {
        let parsed = DatagramType::from_tag([b'A', 0x00, b'B', 0xff]);
        assert_eq!(parsed.to_string(), "A\\x00B\\xff");
    }
}
