use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Reads the whole document. Bytes that are not valid UTF-8 are replaced
/// rather than rejected; older generated docs are often Latin-1.
pub fn load_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// NFKC plus LF line endings.
pub fn normalize(text: &str) -> String {
    let text: String = text.nfkc().collect();
    text.replace("\r\n", "\n").replace('\r', "\n")
}
