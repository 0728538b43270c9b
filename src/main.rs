use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use asset_compiler::config::{self, Config};
use asset_compiler::error::Result;
use asset_compiler::web;

#[derive(Parser, Debug)]
#[command(name = "asset-compiler")]
#[command(about = "On-demand asset compilation middleware for static file serving", long_about = None)]
struct Args {
    /// Path to configuration file (TOML/JSON/YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Source directory (defaults to the current working directory)
    #[arg(long, value_name = "DIR")]
    src: Option<PathBuf>,

    /// Destination directory (defaults to the source directory)
    #[arg(long, value_name = "DIR")]
    dest: Option<PathBuf>,

    /// Compilers to enable, in priority order (sass, less, coffeescript)
    #[arg(long, value_delimiter = ',')]
    enable: Vec<String>,

    /// Recompile on every request. Ideal for development
    #[arg(long)]
    autocompile: bool,

    /// Strip whitespace and comments from compiled output
    #[arg(long)]
    compress: bool,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("asset_compiler={log_level}").parse().unwrap()),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            match config::load_from_path(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    error!("Failed to load configuration from {}: {}", path.display(), e);
                    return Err(e);
                }
            }
        }
        None => match config::load_from_env_or_file() {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                return Err(e);
            }
        },
    };

    apply_overrides(&mut config, &args);

    if let Err(e) = config::validate(&config) {
        error!("Invalid configuration: {}", e);
        return Err(e);
    }

    info!(
        "Compiling {} -> {} (enabled: {})",
        config.src_dir().display(),
        config.dest_dir().display(),
        config.enable.join(", ")
    );

    web::start_server(config).await
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(src) = &args.src {
        config.src = Some(src.clone());
    }
    if let Some(dest) = &args.dest {
        config.dest = Some(dest.clone());
    }
    if !args.enable.is_empty() {
        config.enable = args.enable.clone();
    }
    if args.autocompile {
        config.autocompile = true;
    }
    if args.compress {
        config.compress = true;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // COMPILER_SRC / COMPILER_DEST win over everything, including flags.
    if let Ok(src) = std::env::var("COMPILER_SRC") {
        config.src = Some(src.into());
    }
    if let Ok(dest) = std::env::var("COMPILER_DEST") {
        config.dest = Some(dest.into());
    }
}
