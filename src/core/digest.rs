//! BLAKE3 fingerprints for loaded fragments and whole pieces.

use super::types::{PieceSpec, FRAGMENT_FIELDS};

/// Hash a string. Returns `"blake3:{hex}"`.
pub fn hash_string(s: &str) -> String {
    format!("blake3:{}", blake3::hash(s.as_bytes()).to_hex())
}

/// Short form of a digest for tables: the first 12 hex characters.
pub fn short(digest: &str) -> &str {
    let hex = digest.strip_prefix("blake3:").unwrap_or(digest);
    &hex[..hex.len().min(12)]
}

/// Hash every fragment of a piece together.
///
/// Field names are part of the hash, so a header and a source with the same
/// content do not collide. Pass-through metadata is not hashed.
pub fn piece_hash(piece: &PieceSpec) -> String {
    let mut hasher = blake3::Hasher::new();
    for field in FRAGMENT_FIELDS {
        if let Some(text) = piece.text(field) {
            hasher.update(field.as_bytes());
            hasher.update(b"\0");
            hasher.update(hash_string(text).as_bytes());
            hasher.update(b"\n");
        }
    }
    format!("blake3:{}", hasher.finalize().to_hex())
}
