//! Fragment loading — replace a path-valued field with the file it names.
//!
//! A present value is always a path, joined onto the directory of the
//! specification file that declared the piece. There is no inline form.

use super::error::AssembleError;
use super::types::{PieceSpec, FRAGMENT_FIELDS};
use std::path::Path;

/// Read `base_dir/rel` as text. Content must be UTF-8; anything else is a
/// [`AssembleError::FragmentRead`].
pub fn load_fragment(field: &str, base_dir: &Path, rel: &str) -> Result<String, AssembleError> {
    let path = base_dir.join(rel);
    let content = std::fs::read_to_string(&path).map_err(|e| AssembleError::FragmentRead {
        field: field.to_string(),
        path: path.clone(),
        source: e,
    })?;
    tracing::debug!(field, path = %path.display(), bytes = content.len(), "loaded fragment");
    Ok(content)
}

/// Resolve one field of `piece` in place. Absent fields are left absent.
///
/// `header`, `source`, and `license` address the typed fields; any other
/// name addresses the pass-through metadata, which must then hold a string.
/// Only UTF-8 fragment content is accepted.
pub fn resolve(piece: &mut PieceSpec, field: &str, base_dir: &Path) -> Result<(), AssembleError> {
    if !piece.has(field) {
        return Ok(());
    }
    if let Some(slot) = piece.fragment_slot(field) {
        if let Some(rel) = slot.as_deref() {
            let content = load_fragment(field, base_dir, rel)?;
            *slot = Some(content);
        }
        return Ok(());
    }

    let Some(value) = piece.extra.get_mut(field) else {
        return Ok(());
    };
    let rel = match value {
        serde_yaml_ng::Value::Null => return Ok(()),
        serde_yaml_ng::Value::String(rel) => rel.clone(),
        other => {
            return Err(AssembleError::FragmentPath {
                field: field.to_string(),
                reason: format!("expected a string, got {:?}", other),
            })
        }
    };
    let content = load_fragment(field, base_dir, &rel)?;
    *value = serde_yaml_ng::Value::String(content);
    Ok(())
}

/// Resolve `header`, `source`, then `license`.
pub fn resolve_all(piece: &mut PieceSpec, base_dir: &Path) -> Result<(), AssembleError> {
    for field in FRAGMENT_FIELDS {
        resolve(piece, field, base_dir)?;
    }
    Ok(())
}
