mod scan;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "manifest-builder",
    version,
    about = "Build assets/projects-manifest.json from the project image folders"
)]
struct Cli {
    /// Directory holding one sub-folder per project.
    #[arg(long, env = "ASSETS_DIR", default_value = "./assets")]
    assets_dir: PathBuf,

    /// Where to write the manifest. Defaults to <assets-dir>/projects-manifest.json.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Project folder to scan, in gallery order. Repeatable; defaults to the
    /// published project folders.
    #[arg(long = "folder")]
    folders: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let folders: Vec<String> = if cli.folders.is_empty() {
        scan::DEFAULT_FOLDERS.iter().map(|f| f.to_string()).collect()
    } else {
        cli.folders
    };

    log::info!("Building projects manifest from {}", cli.assets_dir.display());
    let manifest = scan::build_manifest(&cli.assets_dir, &folders, chrono::Utc::now())?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.assets_dir.join("projects-manifest.json"));
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&output, json).with_context(|| format!("writing {}", output.display()))?;

    let (projects, images) = manifest
        .meta
        .as_ref()
        .map(|m| (m.total_projects, m.total_images))
        .unwrap_or_default();
    log::info!(
        "Manifest written to {}: {projects} projects, {images} images",
        output.display()
    );
    Ok(())
}
