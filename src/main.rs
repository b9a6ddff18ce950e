use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use convgen_codegen::generate_converter_source;
use convgen_matrix::VariantKey;

/// Generate the general-purpose sample converter family as C++ source
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Destination path for the generated source file
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source = generate_converter_source(env!("CARGO_PKG_NAME"), Local::now())?;

    fs::write(&cli.output, &source).with_context(|| {
        format!(
            "failed to write converter source to {}",
            cli.output.display()
        )
    })?;

    info!(
        "Wrote {} converters ({} bytes) to {}",
        VariantKey::enumerate().len() * 2,
        source.len(),
        cli.output.display()
    );
    Ok(())
}
