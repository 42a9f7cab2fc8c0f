use std::io::Read;

use super::layout;
use crate::source::SourceError;

/// Read a 4-byte little-endian length field. A clean end of stream (zero
/// bytes read) yields `None`; a partial field is a truncation.
pub(crate) fn read_length_field<R: Read>(
    reader: &mut R,
    offset: u64,
) -> Result<Option<i32>, SourceError> {
    let mut buf = [0u8; layout::LENGTH_FIELD_LEN];
    let filled = fill(reader, &mut buf)?;
    match filled {
        0 => Ok(None),
        n if n < buf.len() => Err(SourceError::Truncated {
            offset,
            needed: buf.len(),
            actual: n,
        }),
        _ => Ok(Some(i32::from_le_bytes(buf))),
    }
}

/// Bound a declared body length before allocating for it.
pub(crate) fn validate_declared_len(length: i32, offset: u64) -> Result<usize, SourceError> {
    if !(layout::MIN_DATAGRAM_LEN..=layout::MAX_DATAGRAM_LEN).contains(&length) {
        return Err(SourceError::InvalidLength { offset, length });
    }
    Ok(length as usize)
}

/// Read exactly `len` body bytes.
pub(crate) fn read_body<R: Read>(
    reader: &mut R,
    len: usize,
    offset: u64,
) -> Result<Vec<u8>, SourceError> {
    let mut body = vec![0u8; len];
    let filled = fill(reader, &mut body)?;
    if filled < len {
        return Err(SourceError::Truncated {
            offset,
            needed: len,
            actual: filled,
        });
    }
    Ok(body)
}

/// Consume the trailing length repeat and check it against the leading
/// field. A stream that ends flush after the body carries no repeat and is
/// accepted; returns the number of bytes consumed.
pub(crate) fn read_trailing_repeat<R: Read>(
    reader: &mut R,
    declared: i32,
    offset: u64,
) -> Result<usize, SourceError> {
    let mut buf = [0u8; layout::LENGTH_FIELD_LEN];
    let filled = fill(reader, &mut buf)?;
    match filled {
        0 => Ok(0),
        n if n < buf.len() => Err(SourceError::Truncated {
            offset,
            needed: buf.len(),
            actual: n,
        }),
        n => {
            let trailing = i32::from_le_bytes(buf);
            if trailing != declared {
                return Err(SourceError::FrameLengthMismatch {
                    offset,
                    declared,
                    trailing,
                });
            }
            Ok(n)
        }
    }
}

fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, std::io::Error> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
