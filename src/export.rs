//! Import and export surface
//!
//! Whole-document JSON exchange: a catalog import file is a JSON array of
//! parts, a build export is the slot-to-part object. Export documents are
//! byte-shape compatible with the persisted records, so an exported
//! catalog can be imported back unchanged. Writes go through a temp file
//! and rename so a failed export never leaves a truncated document.

use crate::build::Slots;
use crate::error::ApiError;
use crate::part::Part;
use std::fs;
use std::path::Path;

/// Parse a user-supplied catalog file. Invalid JSON or a shape that is not
/// an array of parts is surfaced as an `ImportError`; callers leave the
/// existing catalog untouched on failure.
pub fn read_catalog_file(path: &Path) -> Result<Vec<Part>, ApiError> {
    let raw = fs::read(path)
        .map_err(|e| ApiError::ImportError(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_slice(&raw)
        .map_err(|e| ApiError::ImportError(format!("{} is not a valid parts file: {}", path.display(), e)))
}

/// Write the catalog as a pretty-printed JSON array.
pub fn write_catalog_file(path: &Path, parts: &[Part]) -> Result<(), ApiError> {
    let doc = serde_json::to_vec_pretty(parts)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize catalog: {}", e)))?;
    write_atomic(path, &doc)
}

/// Write the build as a pretty-printed JSON object of slot to part.
pub fn write_build_file(path: &Path, slots: &Slots) -> Result<(), ApiError> {
    let doc = serde_json::to_vec_pretty(slots)
        .map_err(|e| ApiError::ExportError(format!("cannot serialize build: {}", e)))?;
    write_atomic(path, &doc)
}

fn write_atomic(path: &Path, doc: &[u8]) -> Result<(), ApiError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, doc)
        .map_err(|e| ApiError::ExportError(format!("cannot write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ApiError::ExportError(format!("cannot move export into place: {}", e))
    })?;
    Ok(())
}
