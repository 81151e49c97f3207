//! Error type for recipe and fragment resolution.
//!
//! Only one variant is a user-input error: a recipe whose top level is not a
//! sequence. The CLI maps it to exit status 2. Everything else is fatal and
//! maps to 1.

use std::path::PathBuf;

/// Exit status for a malformed recipe file.
pub const EXIT_RECIPE_SHAPE: i32 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// Recipe top-level value is not a sequence of file names.
    #[error("Recipe file must be an array of file names.")]
    RecipeShape { path: PathBuf },

    /// Recipe or specification file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML, or YAML of the wrong shape.
    #[error("parse error in {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A fragment path could not be loaded.
    #[error("cannot load {field} fragment {}: {source}", path.display())]
    FragmentRead {
        field: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment value is not a path string.
    #[error("{field} fragment is not a path: {reason}")]
    FragmentPath { field: String, reason: String },

    /// The progress trace could not be written.
    #[error("cannot write trace: {0}")]
    Trace(#[source] std::io::Error),

    #[error("unknown piece '{0}'")]
    UnknownPiece(String),

    /// A resolved piece could not be serialized for display.
    #[error("cannot render piece: {0}")]
    Render(String),
}

impl AssembleError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AssembleError::RecipeShape { .. } => EXIT_RECIPE_SHAPE,
            _ => EXIT_FAILURE,
        }
    }
}
