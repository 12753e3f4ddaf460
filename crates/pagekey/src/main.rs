//! pagekey CLI - site build configuration and IndexNow key file emitter.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagekey_config::{DEFAULT_CONFIG_FILE, KEY_ENV_VAR};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "pagekey")]
#[command(about = "Site build configuration and IndexNow key file emitter")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, global = true, env = "PAGEKEY_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default site.toml and create the public directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Run the build-time steps (writes the IndexNow key file)
    Build {
        /// IndexNow key, overrides the config file
        #[arg(short, long, env = KEY_ENV_VAR)]
        key: Option<String>,

        /// Public directory (defaults to config or "public")
        #[arg(short, long)]
        public_dir: Option<PathBuf>,
    },

    /// Print the resolved configuration
    Config {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Preview the public directory over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to config or "public")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Open the browser
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Build { key, public_dir } => {
            commands::build::run(&cli.config, key, public_dir).await?;
        }
        Commands::Config { json } => {
            commands::config::run(&cli.config, json)?;
        }
        Commands::Serve { port, dir, open } => {
            commands::serve::run(&cli.config, port, dir, open).await?;
        }
    }

    Ok(())
}
