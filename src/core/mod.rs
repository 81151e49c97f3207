//! Core assembly logic — schema, fragment loading, recipe resolution, registry.

pub mod digest;
pub mod error;
pub mod fragment;
pub mod recipe;
pub mod registry;
pub mod types;

pub use error::AssembleError;
pub use recipe::{load_recipe, load_recipe_with_trace, RecipeSummary};
pub use registry::Registry;
pub use types::PieceSpec;
