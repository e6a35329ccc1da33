//! Record chunk encoding and the read side of the log file.
//!
//! The log file is a concatenation of gzip members. Each member holds one
//! chunk: a big-endian `u16` byte length followed by that many UTF-8 bytes.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::LoggerError;

pub const MAX_CHUNK_LEN: usize = u16::MAX as usize;

/// Write `text` as one length-prefixed chunk, truncated to `MAX_CHUNK_LEN` bytes.
pub fn write_chunk<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let text = truncate_to_boundary(text, MAX_CHUNK_LEN);
    out.write_all(&(text.len() as u16).to_be_bytes())?;
    out.write_all(text.as_bytes())
}

pub(crate) fn truncate_to_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Decode every record in a stream of gzip members.
pub fn decode_records<R: Read>(mut reader: R) -> Result<Vec<String>, LoggerError> {
    let mut compressed = Vec::new();
    reader
        .read_to_end(&mut compressed)
        .map_err(|e| LoggerError::Decode(e.to_string()))?;
    // A freshly created log file holds no gzip member yet.
    if compressed.is_empty() {
        return Ok(Vec::new());
    }

    let mut raw = Vec::new();
    MultiGzDecoder::new(compressed.as_slice())
        .read_to_end(&mut raw)
        .map_err(|e| LoggerError::Decode(e.to_string()))?;

    let mut records = Vec::new();
    let mut rest = raw.as_slice();
    while !rest.is_empty() {
        if rest.len() < 2 {
            return Err(LoggerError::Decode("truncated length prefix".into()));
        }
        let len = u16::from_be_bytes([rest[0], rest[1]]) as usize;
        rest = &rest[2..];
        if rest.len() < len {
            return Err(LoggerError::Decode(format!(
                "record declares {} bytes, {} remain",
                len,
                rest.len()
            )));
        }
        let text = std::str::from_utf8(&rest[..len])
            .map_err(|e| LoggerError::Decode(e.to_string()))?;
        records.push(text.to_owned());
        rest = &rest[len..];
    }
    Ok(records)
}

/// Read every record in the log file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<String>, LoggerError> {
    let file = File::open(path).map_err(|e| LoggerError::Decode(format!("{:?}: {e}", path)))?;
    decode_records(BufReader::new(file))
}
