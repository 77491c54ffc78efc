//! `piu show` – display the manifest written by a previous run.

use anyhow::Result;
use piu_core::config::PiuConfig;
use piu_core::manifest::UrlManifest;
use std::path::Path;

pub fn run_show(cfg: &PiuConfig, work_dir: &Path) -> Result<()> {
    let path = work_dir.join(&cfg.output_filename);
    if !path.exists() {
        println!(
            "No manifest found at {}. Run `piu upload` first.",
            path.display()
        );
        return Ok(());
    }

    let manifest = UrlManifest::load(&path)?;
    if manifest.is_empty() {
        println!("Manifest is empty.");
    } else {
        println!("{:<16} {}", "TYPE", "URL");
        for (kind, url) in manifest.iter() {
            println!("{kind:<16} {url}");
        }
    }
    Ok(())
}
