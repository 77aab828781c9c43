//! # mdpages CLI
//!
//! Command-line interface for the mdpages converter and page server.

mod commands;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mdpages_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdpages")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "mdpages.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    // Serve flags are also accepted without a subcommand, so a bare
    // `mdpages --port 9000` behaves like `mdpages serve --port 9000`.
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markdown sources into static HTML pages
    Convert(ConvertArgs),

    /// Serve rendered pages over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Clone)]
pub struct ConvertArgs {
    /// Directory containing .md files
    #[arg(long)]
    pub md: Option<PathBuf>,

    /// Output directory for rendered .html pages
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory containing rendered .html pages
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// If set, convert .md files from this directory before serving
    #[arg(long)]
    pub md: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // An absent config file is fine; flags and built-in defaults cover it.
    let config = if cli.config.exists() {
        Config::from_file(&cli.config)
            .with_context(|| format!("Failed to load config from {:?}", cli.config))?
    } else {
        Config::default()
    };

    match cli.command {
        Some(Commands::Convert(args)) => commands::convert_pages(&config, &args),
        Some(Commands::Serve(args)) => commands::serve_pages(&config, args).await,
        None => commands::serve_pages(&config, cli.serve).await,
    }
}
