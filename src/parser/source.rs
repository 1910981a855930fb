//! Reading DDL scripts from disk

use std::path::Path;

use encoding_rs::GB18030;

use crate::error::DdlMetaError;

/// Read a DDL file, trying UTF-8 first, then GB18030 as fallback.
///
/// A leading UTF-8 byte order mark is removed.
pub fn read_ddl_file(path: &Path) -> Result<String, DdlMetaError> {
    let bytes = std::fs::read(path).map_err(|e| DdlMetaError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    decode_ddl_bytes(bytes).ok_or_else(|| DdlMetaError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Decode raw script bytes, `None` if neither UTF-8 nor GB18030 fits
pub fn decode_ddl_bytes(bytes: Vec<u8>) -> Option<String> {
    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, had_errors) = GB18030.decode(&bytes);
            if had_errors {
                return None;
            }
            decoded.into_owned()
        }
    };

    Some(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}
