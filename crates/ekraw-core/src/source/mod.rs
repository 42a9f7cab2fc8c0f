use std::path::Path;

use thiserror::Error;

mod raw;

pub use raw::RawFileSource;

/// One framed datagram: the body bytes with the length prefix and trailing
/// length repeat stripped, plus the byte offset of the leading length field
/// for diagnostics.
#[derive(Debug, Clone)]
pub struct DatagramEvent {
    pub offset: u64,
    pub body: Vec<u8>,
}

pub trait DatagramSource {
    fn next_datagram(&mut self) -> Result<Option<DatagramEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {path}")]
    NotFound { path: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source is closed")]
    Closed,
    #[error("truncated datagram at offset {offset}: need {needed} bytes, got {actual}")]
    Truncated {
        offset: u64,
        needed: usize,
        actual: usize,
    },
    #[error("invalid datagram length {length} at offset {offset}")]
    InvalidLength { offset: u64, length: i32 },
    #[error(
        "frame length mismatch at offset {offset}: leading field {declared}, trailing repeat {trailing}"
    )]
    FrameLengthMismatch {
        offset: u64,
        declared: i32,
        trailing: i32,
    },
}

/// Open a raw file positioned `start_byte` bytes in, ready for sample
/// datagram reads past an already-decoded configuration datagram.
pub fn open_sample_stream(path: &Path, start_byte: u64) -> Result<RawFileSource, SourceError> {
    let mut source = RawFileSource::open(path)?;
    source.skip_to(start_byte)?;
    Ok(source)
}
