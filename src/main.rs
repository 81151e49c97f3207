//! Piecework CLI — resolve recipes into a piece registry.

use clap::Parser;
use piecework::core::AssembleError;

#[derive(Parser, Debug)]
#[command(
    name = "piecework",
    version,
    about = "Build-time piece assembler — recipe files, path-relative fragments, one registry"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: piecework::cli::Commands,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = piecework::cli::dispatch(cli.command) {
        match e {
            AssembleError::RecipeShape { .. } => eprintln!("{}", e),
            _ => eprintln!("error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}
