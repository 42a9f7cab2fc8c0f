use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;

use super::layout;
use super::reader::{read_body, read_length_field, read_trailing_repeat, validate_declared_len};
use crate::source::{DatagramEvent, DatagramSource, SourceError};

/// A raw file opened for framed datagram reads. Owns the file handle
/// exclusively; after any framing error the stream position is undefined
/// and callers must re-seek before reading again.
pub struct RawFileSource {
    file: Option<File>,
    file_len: u64,
    position: u64,
}

impl RawFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound {
                path: path.display().to_string(),
            });
        }
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        Ok(Self {
            file: Some(file),
            file_len,
            position: 0,
        })
    }

    /// Position the stream `byte_offset` bytes past the start of the file.
    /// Fails when the file is shorter than the requested offset.
    pub fn skip_to(&mut self, byte_offset: u64) -> Result<(), SourceError> {
        if byte_offset > self.file_len {
            return Err(SourceError::Truncated {
                offset: 0,
                needed: byte_offset as usize,
                actual: self.file_len as usize,
            });
        }
        let file = self.file.as_mut().ok_or(SourceError::Closed)?;
        file.seek(SeekFrom::Start(byte_offset))?;
        self.position = byte_offset;
        Ok(())
    }

    /// Current byte position, i.e. the offset of the next length field.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Release the file handle. Idempotent; further reads fail.
    pub fn close(&mut self) {
        self.file = None;
    }
}

impl DatagramSource for RawFileSource {
    fn next_datagram(&mut self) -> Result<Option<DatagramEvent>, SourceError> {
        let offset = self.position;
        let file = self.file.as_mut().ok_or(SourceError::Closed)?;

        let Some(declared) = read_length_field(file, offset)? else {
            return Ok(None);
        };
        let len = validate_declared_len(declared, offset)?;
        let body = read_body(file, len, offset)?;
        let trailing = read_trailing_repeat(file, declared, offset)?;

        self.position = offset + (layout::LENGTH_FIELD_LEN + len + trailing) as u64;
        Ok(Some(DatagramEvent { offset, body }))
    }
}
