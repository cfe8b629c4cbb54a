//! skygraph CLI
//!
//! Builds the constellation edge and star node artifacts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// skygraph - constellation figures as graph data
#[derive(Parser)]
#[command(name = "skygraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./skygraph.yaml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build edges.json from culture index documents
    Edges {
        /// Directory whose subdirectories are cultures
        #[arg(short, long)]
        root: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build nodes.json from the star catalog
    Nodes {
        /// Star catalog CSV
        #[arg(long)]
        catalog: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: Option<String>,

        /// Look up missing star names online
        #[arg(long)]
        lookup: bool,
    },

    /// Check culture index documents without writing anything
    Validate {
        /// Directory whose subdirectories are cultures
        #[arg(short, long)]
        root: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Edges { root, output } => {
            commands::edges::run(config, root.as_deref(), output.as_deref()).await?;
        }
        Commands::Nodes {
            catalog,
            output,
            lookup,
        } => {
            commands::nodes::run(config, catalog.as_deref(), output.as_deref(), lookup).await?;
        }
        Commands::Validate { root } => {
            commands::validate::run(config, root.as_deref()).await?;
        }
    }

    Ok(())
}
