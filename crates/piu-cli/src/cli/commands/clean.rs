//! `piu clean` – remove the manifest and any stray placeholder files.
//!
//! Stray placeholders can only exist after an interrupted run; this is the
//! local counterpart of deleting the remote resources by folder prefix.

use anyhow::{Context, Result};
use piu_core::catalog;
use piu_core::config::PiuConfig;
use std::fs;
use std::path::Path;

pub fn run_clean(cfg: &PiuConfig, work_dir: &Path) -> Result<()> {
    let mut removed = 0usize;

    let manifest_path = work_dir.join(&cfg.output_filename);
    if manifest_path.exists() {
        fs::remove_file(&manifest_path)
            .with_context(|| format!("failed to remove {}", manifest_path.display()))?;
        println!("Removed {}", manifest_path.display());
        removed += 1;
    }

    let icons = cfg
        .icons
        .clone()
        .unwrap_or_else(catalog::builtin_catalog);
    for icon in &icons {
        let path = work_dir.join(icon.asset_filename());
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            println!("Removed stray placeholder {}", path.display());
            removed += 1;
        }
    }

    if removed == 0 {
        println!("Nothing to clean.");
    }
    Ok(())
}
