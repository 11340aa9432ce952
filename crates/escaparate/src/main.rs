//! Escaparate CLI - compiles the asset tree into frontend data files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod generate;

#[derive(Parser)]
#[command(name = "escaparate")]
#[command(about = "Compiles the brand/product asset tree into frontend data files")]
#[command(version)]
pub struct Cli {
    /// Assets directory containing productos/
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Path to the brand credentials config
    #[arg(short, long, default_value = "brands.toml")]
    config: PathBuf,

    /// Frontend directory receiving the generated files
    #[arg(short, long, default_value = "WEB")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    generate::run(&cli.assets, &cli.config, &cli.output)
}
