//! Catalog file loading and text decoding.
//!
//! Vendor catalogs come as UTF-16 (with a byte-order mark), UTF-8 or
//! Latin-1 text. Everything is decoded to a `String` before parsing.

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and decode an AGF catalog file.
pub fn read_catalog_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let content = decode_catalog(&bytes);

    if content.trim().is_empty() {
        return Err(ConvertError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

/// Decode catalog bytes, honouring a UTF-16 or UTF-8 byte-order mark.
pub fn decode_catalog(bytes: &[u8]) -> String {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                debug!("Catalog is not valid UTF-8, decoding as Latin-1");
                bytes.iter().map(|&b| b as char).collect()
            }
        },
    }
}

fn decode_utf16(bytes: &[u8], word: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| word([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
