//! The piece registry — cumulative name → resolved piece mapping.
//!
//! Created by the caller, borrowed mutably while recipes load, and handed to
//! whatever composes the output afterwards. Inserting an existing name
//! replaces the whole piece; there is no field-level merge.

use super::types::PieceSpec;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    pieces: IndexMap<String, PieceSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `piece` under `name`, returning the piece it replaced.
    ///
    /// A replaced name keeps its original position in iteration order.
    pub fn insert(&mut self, name: impl Into<String>, piece: PieceSpec) -> Option<PieceSpec> {
        let name = name.into();
        let previous = self.pieces.insert(name.clone(), piece);
        if previous.is_some() {
            tracing::debug!(piece = %name, "replaced earlier definition");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&PieceSpec> {
        self.pieces.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pieces.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pieces.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PieceSpec)> {
        self.pieces.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Hand the pieces to the downstream consumer.
    pub fn into_pieces(self) -> IndexMap<String, PieceSpec> {
        self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(header: &str) -> PieceSpec {
        PieceSpec {
            header: Some(header.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_registry_starts_empty() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(reg.get("foo").is_none());
    }

    #[test]
    fn test_registry_last_write_wins() {
        let mut reg = Registry::new();
        assert!(reg.insert("foo", piece("one")).is_none());
        reg.insert("bar", piece("two"));
        let prev = reg.insert("foo", piece("three"));
        assert_eq!(prev.unwrap().header.as_deref(), Some("one"));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("foo").unwrap().header.as_deref(), Some("three"));
    }

    #[test]
    fn test_registry_overwrite_replaces_whole_piece() {
        let mut reg = Registry::new();
        reg.insert(
            "foo",
            PieceSpec {
                header: Some("H".into()),
                license: Some("L".into()),
                ..Default::default()
            },
        );
        reg.insert(
            "foo",
            PieceSpec {
                source: Some("S".into()),
                ..Default::default()
            },
        );
        let foo = reg.get("foo").unwrap();
        assert!(foo.header.is_none());
        assert!(foo.license.is_none());
        assert_eq!(foo.source.as_deref(), Some("S"));
    }

    #[test]
    fn test_registry_order_keeps_first_position() {
        let mut reg = Registry::new();
        reg.insert("a", piece("1"));
        reg.insert("b", piece("2"));
        reg.insert("a", piece("3"));
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(reg.contains("b"));
    }

    #[test]
    fn test_registry_into_pieces() {
        let mut reg = Registry::new();
        reg.insert("a", piece("1"));
        let pieces = reg.into_pieces();
        assert_eq!(pieces["a"].header.as_deref(), Some("1"));
    }
}
