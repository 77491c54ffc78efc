use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::catalog::IconDescriptor;

/// Base URL prefix of the simulated Cloudinary account.
pub const DEFAULT_BASE_URL: &str =
    "https://res.cloudinary.com/your-cloud-name/image/upload/v1234567890";

/// Remote folder the icons are "uploaded" into.
pub const DEFAULT_FOLDER: &str = "manus-promo-icons";

/// Filename of the JSON manifest written after a run.
pub const DEFAULT_OUTPUT_FILENAME: &str = "cloudinary_promo_icons.json";

/// Global configuration loaded from `~/.config/piu/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiuConfig {
    /// Base URL prefix for generated asset URLs.
    pub base_url: String,
    /// Remote folder name spliced into every generated URL.
    pub folder: String,
    /// Name of the JSON manifest file written to the working directory.
    pub output_filename: String,
    /// Optional icon table override; if missing, the built-in set is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<IconDescriptor>>,
}

impl Default for PiuConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            folder: DEFAULT_FOLDER.to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            icons: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("piu")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PiuConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PiuConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PiuConfig = toml::from_str(&data)?;
    Ok(cfg)
}
