//! contextlens CLI — the main entry point.
//!
//! Commands:
//! - `show`    — Render the normalized layer view of a snapshot
//! - `styles`  — List the output styles a snapshot declares
//! - `export`  — Print the normalized view as JSON

use clap::{Parser, Subcommand};

mod commands;
mod fetch;
mod render;

#[derive(Parser)]
#[command(
    name = "contextlens",
    about = "contextlens — AI assistant configuration inspector",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the layer view of a configuration snapshot
    Show {
        /// Snapshot JSON source — a file path or an http(s) URL
        input: String,

        /// Recompile the system prompt under this output style
        #[arg(short, long)]
        style: Option<String>,
    },

    /// List the output styles declared by a snapshot
    Styles {
        /// Snapshot JSON source — a file path or an http(s) URL
        input: String,
    },

    /// Print the normalized view as JSON
    Export {
        /// Snapshot JSON source — a file path or an http(s) URL
        input: String,

        /// Recompile the system prompt under this output style
        #[arg(short, long)]
        style: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Show { input, style } => commands::show::run(&input, style.as_deref()).await?,
        Commands::Styles { input } => commands::styles::run(&input).await?,
        Commands::Export { input, style } => {
            commands::export::run(&input, style.as_deref()).await?
        }
    }

    Ok(())
}
