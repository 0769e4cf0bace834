use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::args::{Args, OutputFormat};
use crate::analyze::build_api_map;
use crate::config::ScanConfig;
use crate::emit::JsonOutput;
use crate::generate::generate_report;

pub fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)
}

/// Scan and render into `out`. Nothing is written unless the whole scan succeeds.
pub fn run_with_writer<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = ScanConfig::default();
    let root = resolve_root(args.root.as_deref())?;

    let map = build_api_map(&root, &config)?;
    info!(
        "Scanned {} modules under {}",
        map.modules.len(),
        map.sources_root.display()
    );

    match args.format {
        OutputFormat::Markdown => {
            out.write_all(generate_report(&map, config.listing_limit)?.as_bytes())?
        }
        OutputFormat::Json => {
            let output = JsonOutput::from_api_map(&map, config.listing_limit);
            writeln!(out, "{}", output.to_json())?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Absolute form of the requested root, falling back to the working directory.
///
/// A root that cannot be canonicalized (typically because it does not exist)
/// is made absolute lexically so the sources-root check reports a full path.
fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    root.canonicalize()
        .or_else(|_| std::path::absolute(&root))
        .with_context(|| format!("Failed to resolve root: {}", root.display()))
}
