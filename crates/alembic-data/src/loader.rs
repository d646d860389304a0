//! Format detection, file discovery, and deserialization helpers.
//!
//! Every data file (recipe documents, materials, pack manifests) goes
//! through these helpers, so all three formats (RON/JSON/TOML) are accepted
//! everywhere and every parse failure carries the offending file.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Why a pack, materials file, or recipe document could not be loaded.
///
/// Per-element problems inside a recipe document (unknown names, bad
/// numbers) are not errors; the parser skips or defaults them.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// No `pack` or materials file with this base name in the pack directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// Not a `.ron`, `.toml`, or `.json` file.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// e.g. both `pack.ron` and `pack.toml` in one directory.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// The document is not well-formed or does not fit the schema.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A materials group lists an item the file never declares.
    #[error("unresolved {expected_kind} reference '{name}' in {file}")]
    UnresolvedRef {
        file: PathBuf,
        name: String,
        expected_kind: &'static str,
    },

    /// An item or fluid declared twice in a materials file.
    #[error("duplicate name '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Serde formats a pack file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Pick the format from the file extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Locate `{base_name}.ron|toml|json` in a pack directory.
///
/// The manifest and materials file are named without extension, so exactly
/// one of the three may exist; two is `ConflictingFormats`.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut present = ["ron", "toml", "json"]
        .into_iter()
        .map(|ext| dir.join(format!("{base_name}.{ext}")))
        .filter(|candidate| candidate.is_file());

    match (present.next(), present.next()) {
        (Some(a), Some(b)) => Err(DataLoadError::ConflictingFormats { a, b }),
        (found, _) => Ok(found),
    }
}

/// [`find_data_file`] for files a pack cannot do without.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Deserialize a document already held in memory. `origin` only labels errors.
pub fn parse_str<T: DeserializeOwned>(
    content: &str,
    format: Format,
    origin: &Path,
) -> Result<T, DataLoadError> {
    let parse_err = |detail: String| DataLoadError::Parse {
        file: origin.to_path_buf(),
        detail,
    };

    match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
    }
}

/// Read and deserialize a pack file; recipe documents are named with their
/// extension, so this is the usual entry for them.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_str(&content, format, path)
}

// ===========================================================================
// Tests
// ===========================================================================
