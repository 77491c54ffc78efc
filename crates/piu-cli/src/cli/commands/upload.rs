//! `piu upload` – simulate the upload run and write the URL manifest.

use anyhow::Result;
use piu_core::catalog;
use piu_core::config::PiuConfig;
use piu_core::uploader;
use std::path::{Path, PathBuf};

const SEPARATOR_WIDTH: usize = 50;

pub fn run_upload(
    cfg: &PiuConfig,
    work_dir: &Path,
    folder: Option<String>,
    base_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let icons = cfg
        .icons
        .clone()
        .unwrap_or_else(catalog::builtin_catalog);
    let folder = folder.unwrap_or_else(|| cfg.folder.clone());
    let base_url = base_url.unwrap_or_else(|| cfg.base_url.clone());
    let output_path = output.unwrap_or_else(|| work_dir.join(&cfg.output_filename));

    println!(
        "Simulating upload of {} icons to Cloudinary folder: {}",
        icons.len(),
        folder
    );

    let manifest = uploader::simulate_uploads(&icons, &base_url, &folder, work_dir, |icon, url| {
        println!("Uploaded {} to: {}", icon.name, url);
    })?;

    manifest.save(&output_path)?;

    let shown_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_path.display().to_string());
    println!("\nIcon URLs saved to {shown_name}");
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
    println!("{}", manifest.to_json_pretty()?);

    Ok(())
}
