//! # Manifest Loading
//!
//! Reads `manifest.yaml`, reports byte-order marks, and parses the YAML
//! into a generic [`serde_yaml::Value`] tree. Mappings keep their source
//! order, which the schema checker relies on when listing extra keys.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{ManifestError, ManifestResult};

/// A byte-order mark found at the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Bom {
    /// The mark's bytes.
    pub fn bytes(&self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            Self::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
        }
    }
}

impl std::fmt::Display for Bom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf32Le => "UTF-32LE",
            Self::Utf32Be => "UTF-32BE",
        };
        f.write_str(s)
    }
}

/// Detect a byte-order mark. UTF-32LE is tested before UTF-16LE because
/// it shares the same two leading bytes.
pub fn detect_bom(bytes: &[u8]) -> Option<Bom> {
    [Bom::Utf32Le, Bom::Utf32Be, Bom::Utf8, Bom::Utf16Le, Bom::Utf16Be]
        .into_iter()
        .find(|bom| bytes.starts_with(bom.bytes()))
}

/// Read a manifest file's raw bytes.
pub fn read_manifest(path: &Path) -> ManifestResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode and parse manifest bytes.
///
/// A UTF-8 byte-order mark is skipped so the rest of the document can
/// still be checked; any other encoding is rejected.
pub fn parse_manifest(path: &Path, bytes: &[u8]) -> ManifestResult<Value> {
    let body = bytes.strip_prefix(Bom::Utf8.bytes()).unwrap_or(bytes);
    let text = std::str::from_utf8(body).map_err(|_| ManifestError::Encoding {
        path: path.to_path_buf(),
    })?;
    let value: Value = serde_yaml::from_str(text).map_err(|source| ManifestError::YamlParse {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_mapping() {
        return Err(ManifestError::NotAMapping {
            path: path.to_path_buf(),
        });
    }
    Ok(value)
}
