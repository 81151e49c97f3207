//! CLI subcommands — load, list, show.
//!
//! Every subcommand resolves its recipes into a fresh registry first. The
//! per-file trace goes to stdout ahead of the command's own output.

use crate::core::{digest, recipe, AssembleError, PieceSpec, Registry, RecipeSummary};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve recipes and report what was loaded
    Load {
        /// Recipe file (repeatable; loaded in order into one registry)
        #[arg(short, long = "recipe", required = true)]
        recipe: Vec<PathBuf>,
    },

    /// List resolved pieces with fragment digests
    List {
        /// Recipe file (repeatable; loaded in order into one registry)
        #[arg(short, long = "recipe", required = true)]
        recipe: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one resolved piece
    Show {
        /// Piece name
        name: String,

        /// Recipe file (repeatable; loaded in order into one registry)
        #[arg(short, long = "recipe", required = true)]
        recipe: Vec<PathBuf>,

        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), AssembleError> {
    match cmd {
        Commands::Load { recipe } => cmd_load(&recipe),
        Commands::List { recipe, json } => cmd_list(&recipe, json),
        Commands::Show { name, recipe, json } => cmd_show(&recipe, &name, json),
    }
}

/// Resolve `recipes` in order, tracing each specification file to stdout.
pub fn resolve(recipes: &[PathBuf]) -> Result<(Registry, RecipeSummary), AssembleError> {
    let mut registry = Registry::new();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let summary = recipe::load_recipes(recipes, &mut registry, &mut lock)?;
    Ok((registry, summary))
}

fn cmd_load(recipes: &[PathBuf]) -> Result<(), AssembleError> {
    let (registry, summary) = resolve(recipes)?;
    println!(
        "OK: {} piece(s) from {} specification file(s)",
        registry.len(),
        summary.files
    );
    for name in &summary.replaced {
        println!("  replaced: {}", name);
    }
    Ok(())
}

fn cmd_list(recipes: &[PathBuf], json: bool) -> Result<(), AssembleError> {
    let (registry, _) = resolve(recipes)?;
    if json {
        println!("{}", format_list_json(&registry)?);
    } else {
        print!("{}", format_list(&registry));
    }
    Ok(())
}

fn cmd_show(recipes: &[PathBuf], name: &str, json: bool) -> Result<(), AssembleError> {
    let (registry, _) = resolve(recipes)?;
    let piece = registry
        .get(name)
        .ok_or_else(|| AssembleError::UnknownPiece(name.to_string()))?;
    print!("{}", format_piece(piece, json)?);
    Ok(())
}

/// One line per piece: name, fragment digests, extra keys.
pub fn format_list(registry: &Registry) -> String {
    let width = registry.names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (name, piece) in registry.iter() {
        let mut line = format!("{:<width$}", name, width = width);
        for (field, text) in piece.fragments() {
            line.push_str(&format!(
                "  {}={}",
                field,
                digest::short(&digest::hash_string(text))
            ));
        }
        if !piece.extra.is_empty() {
            let keys: Vec<&str> = piece.extra.keys().map(|k| k.as_str()).collect();
            line.push_str(&format!("  [{}]", keys.join(", ")));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// JSON array of `{name, digest, fragments, extra}` objects.
pub fn format_list_json(registry: &Registry) -> Result<String, AssembleError> {
    let entries: Vec<serde_json::Value> = registry
        .iter()
        .map(|(name, piece)| {
            let fragments: serde_json::Map<String, serde_json::Value> = piece
                .fragments()
                .into_iter()
                .map(|(field, text)| {
                    (
                        field.to_string(),
                        serde_json::json!({
                            "digest": digest::hash_string(text),
                            "bytes": text.len(),
                        }),
                    )
                })
                .collect();
            serde_json::json!({
                "name": name,
                "digest": digest::piece_hash(piece),
                "fragments": fragments,
                "extra": piece.extra.keys().collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&entries).map_err(|e| AssembleError::Render(e.to_string()))
}

/// A resolved piece as YAML, or pretty JSON.
pub fn format_piece(piece: &PieceSpec, json: bool) -> Result<String, AssembleError> {
    if json {
        let mut s =
            serde_json::to_string_pretty(piece).map_err(|e| AssembleError::Render(e.to_string()))?;
        s.push('\n');
        Ok(s)
    } else {
        serde_yaml_ng::to_string(piece).map_err(|e| AssembleError::Render(e.to_string()))
    }
}
