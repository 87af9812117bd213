//! CLI entry point for article-server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "article-server")]
#[command(version)]
#[command(about = "Serve HTML articles with front-matter from a directory", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List articles, newest first
    List {
        /// Only show articles with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "article_server=debug,tower_http=debug,info"
    } else {
        "article_server=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = article_server::Site::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.ip.clone());
            let port = port.unwrap_or(site.config.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            article_server::server::start(&site, &ip, port).await?;
        }

        Commands::List { tag, json } => {
            let site = article_server::Site::new(&base_dir)?;
            article_server::commands::list::run(&site, tag.as_deref(), json)?;
        }

        Commands::Version => {
            println!("article-server version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
