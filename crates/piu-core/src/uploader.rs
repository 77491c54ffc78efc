//! Simulated upload pass: placeholder file per icon, deterministic URL out.
//!
//! No network is involved. Each icon gets a transient placeholder file in the
//! working directory standing in for the asset a real uploader would send,
//! and the "resulting" URL is synthesized from the base URL and folder.

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

use crate::catalog::{self, IconDescriptor};
use crate::manifest::UrlManifest;
use crate::placeholder::PlaceholderFile;

/// Contents written to every placeholder file.
pub const PLACEHOLDER_CONTENTS: &[u8] = b"Simulated PNG content";

/// Run the simulated upload for every icon in `icons`, in order.
///
/// Per icon: create a placeholder file in `work_dir`, synthesize the URL
/// `{base_url}/{folder}/{type}.png`, record it in the manifest, invoke
/// `on_uploaded`, and remove the placeholder before the next icon. The
/// placeholder is guard-scoped, so it is removed even when a later step in
/// the same iteration fails.
///
/// The catalog and base URL are validated before any file is touched.
pub fn simulate_uploads(
    icons: &[IconDescriptor],
    base_url: &str,
    folder: &str,
    work_dir: &Path,
    mut on_uploaded: impl FnMut(&IconDescriptor, &str),
) -> Result<UrlManifest> {
    catalog::validate_catalog(icons)?;
    Url::parse(base_url).with_context(|| format!("invalid base URL: {base_url}"))?;
    let base = base_url.trim_end_matches('/');

    let mut manifest = UrlManifest::new();
    for icon in icons {
        let filename = icon.asset_filename();
        let _placeholder = PlaceholderFile::create(&work_dir.join(&filename), PLACEHOLDER_CONTENTS)?;

        let url = format!("{base}/{folder}/{filename}");
        manifest.insert(&icon.kind, &url)?;
        tracing::info!(name = %icon.name, url = %url, "simulated upload");
        on_uploaded(icon, &url);
    }

    Ok(manifest)
}
