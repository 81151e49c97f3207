//! Recipe loading and resolution into the registry.
//!
//! A recipe is a YAML sequence of specification file paths, used as given.
//! Each specification file maps piece names to pieces. Pieces are resolved
//! against the specification file's own directory and stored in the
//! registry in order, so a later definition of a name replaces an earlier
//! one.

use super::error::AssembleError;
use super::fragment;
use super::registry::Registry;
use super::types::{Recipe, SpecificationFile};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What one recipe load did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Specification files processed.
    pub files: usize,
    /// Pieces stored (counting replacements).
    pub pieces: usize,
    /// Names that replaced an existing registry entry, in order.
    pub replaced: Vec<String>,
}

/// Load a recipe from disk.
pub fn read_recipe(path: &Path) -> Result<Recipe, AssembleError> {
    let content = std::fs::read_to_string(path).map_err(|e| AssembleError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_recipe(&content, path)
}

/// Parse a recipe from a YAML string. `path` is used for diagnostics.
///
/// A top level that is not a sequence (including an empty document) is
/// [`AssembleError::RecipeShape`]. A sequence entry that is not a string is
/// an ordinary parse error, raised before any entry is traced or loaded.
pub fn parse_recipe(yaml: &str, path: &Path) -> Result<Recipe, AssembleError> {
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml).map_err(|e| {
        AssembleError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let serde_yaml_ng::Value::Sequence(entries) = value else {
        return Err(AssembleError::RecipeShape {
            path: path.to_path_buf(),
        });
    };

    let mut files = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match entry {
            serde_yaml_ng::Value::String(s) => files.push(s),
            other => {
                return Err(AssembleError::Parse {
                    path: path.to_path_buf(),
                    reason: format!("entry {} is not a file name: {:?}", i, other),
                })
            }
        }
    }
    Ok(Recipe { files })
}

/// Load a specification file from disk.
pub fn read_specification(path: &Path) -> Result<SpecificationFile, AssembleError> {
    let content = std::fs::read_to_string(path).map_err(|e| AssembleError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_specification(&content, path)
}

/// Parse a specification file from a YAML string.
///
/// Merge keys (`<<: *defaults`) are applied first, so fragments inherited
/// from an anchored mapping are loaded like any other.
pub fn parse_specification(yaml: &str, path: &Path) -> Result<SpecificationFile, AssembleError> {
    let parse_err = |reason: String| AssembleError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let mut value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(yaml).map_err(|e| parse_err(e.to_string()))?;
    value
        .apply_merge()
        .map_err(|e| parse_err(e.to_string()))?;
    if !value.is_mapping() {
        return Err(parse_err(
            "specification file must map piece names to pieces".to_string(),
        ));
    }
    serde_yaml_ng::from_value(value).map_err(|e| parse_err(e.to_string()))
}

/// Directory that fragment paths in `filename` are relative to.
///
/// A bare file name yields the empty path, which joins as the working
/// directory.
pub fn base_dir(filename: &str) -> PathBuf {
    Path::new(filename)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Resolve every piece of every specification file named by the recipe at
/// `recipe_path` into `registry`, tracing each file name to stdout.
pub fn load_recipe(
    recipe_path: &Path,
    registry: &mut Registry,
) -> Result<RecipeSummary, AssembleError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    load_recipe_with_trace(recipe_path, registry, &mut lock)
}

/// Like [`load_recipe`], writing one line per specification file to `trace`.
///
/// Not transactional: pieces stored before an error stay in the registry.
pub fn load_recipe_with_trace(
    recipe_path: &Path,
    registry: &mut Registry,
    trace: &mut dyn Write,
) -> Result<RecipeSummary, AssembleError> {
    let recipe = read_recipe(recipe_path)?;
    let mut summary = RecipeSummary::default();

    for filename in &recipe.files {
        writeln!(trace, "{}", filename).map_err(AssembleError::Trace)?;
        trace.flush().map_err(AssembleError::Trace)?;

        let spec_file = read_specification(Path::new(filename))?;
        let dir = base_dir(filename);

        for (name, mut piece) in spec_file {
            fragment::resolve_all(&mut piece, &dir)?;
            if registry.insert(name.clone(), piece).is_some() {
                summary.replaced.push(name);
            }
            summary.pieces += 1;
        }
        summary.files += 1;
    }

    tracing::info!(
        recipe = %recipe_path.display(),
        files = summary.files,
        pieces = summary.pieces,
        replaced = summary.replaced.len(),
        "recipe loaded"
    );
    Ok(summary)
}

/// Load several recipes, in order, into one registry.
pub fn load_recipes(
    recipe_paths: &[PathBuf],
    registry: &mut Registry,
    trace: &mut dyn Write,
) -> Result<RecipeSummary, AssembleError> {
    let mut total = RecipeSummary::default();
    for path in recipe_paths {
        let s = load_recipe_with_trace(path, registry, trace)?;
        total.files += s.files;
        total.pieces += s.pieces;
        total.replaced.extend(s.replaced);
    }
    Ok(total)
}
