use base64::Engine;
use log::debug;
use std::{fs, path::Path};

use crate::error::AssetError;

pub const DATA_URI_PREFIX: &str = "data:image/webp;base64,";

pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

pub fn favicon_declaration(encoded: &str) -> String {
    format!("const char* favicon_base64 = \"{DATA_URI_PREFIX}{encoded}\";")
}

/// Reads `source` whole and returns the C declaration embedding it.
pub fn embed_favicon(source: &Path) -> Result<String, AssetError> {
    let bytes = fs::read(source).map_err(|e| AssetError::reading(source, e))?;
    debug!("Read {} bytes from {}", bytes.len(), source.display());
    Ok(favicon_declaration(&encode_base64(&bytes)))
}
