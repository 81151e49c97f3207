//! Schema types for recipes, specification files, and pieces.
//!
//! A recipe is an ordered list of specification files. A specification file
//! maps piece names to [`PieceSpec`]s. All maps are order-preserving so that
//! iteration follows the file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fragment fields resolved for every piece, in resolution order.
pub const FRAGMENT_FIELDS: [&str; 3] = ["header", "source", "license"];

/// One named piece: three fragments plus pass-through metadata.
///
/// Before loading, each fragment holds a path relative to the directory of
/// the specification file. After loading it holds the file's content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Everything else, untouched, for the downstream consumer.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml_ng::Value>,
}

impl PieceSpec {
    /// Mutable slot for a typed fragment field. `None` for any other name.
    pub fn fragment_slot(&mut self, field: &str) -> Option<&mut Option<String>> {
        match field {
            "header" => Some(&mut self.header),
            "source" => Some(&mut self.source),
            "license" => Some(&mut self.license),
            _ => None,
        }
    }

    /// Text value of a field, typed or extra. Non-string extras yield `None`.
    pub fn text(&self, field: &str) -> Option<&str> {
        match field {
            "header" => self.header.as_deref(),
            "source" => self.source.as_deref(),
            "license" => self.license.as_deref(),
            other => self.extra.get(other).and_then(|v| v.as_str()),
        }
    }

    /// Whether the field is present at all.
    pub fn has(&self, field: &str) -> bool {
        match field {
            "header" => self.header.is_some(),
            "source" => self.source.is_some(),
            "license" => self.license.is_some(),
            other => self.extra.contains_key(other),
        }
    }

    /// Present fragment fields in resolution order.
    pub fn fragments(&self) -> Vec<(&'static str, &str)> {
        FRAGMENT_FIELDS
            .iter()
            .filter_map(|f| self.text(f).map(|t| (*f, t)))
            .collect()
    }
}

/// Piece name → piece, in file order.
pub type SpecificationFile = IndexMap<String, PieceSpec>;

/// Ordered list of specification file paths, used as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    pub files: Vec<String>,
}

impl Recipe {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
