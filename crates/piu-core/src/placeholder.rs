//! Transient placeholder files standing in for the real assets.
//!
//! A simulated upload needs a local file to "send". The guard creates it and
//! removes it again when dropped, so an error anywhere in the surrounding
//! iteration can't leak placeholders into the working directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Scoped placeholder file. Created with fixed contents, removed on drop.
#[derive(Debug)]
pub struct PlaceholderFile {
    path: PathBuf,
}

impl PlaceholderFile {
    /// Create the placeholder at `path`, overwriting any existing file.
    pub fn create(path: &Path, contents: &[u8]) -> Result<Self> {
        fs::write(path, contents)
            .with_context(|| format!("failed to create placeholder file: {}", path.display()))?;
        Ok(PlaceholderFile {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PlaceholderFile {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove placeholder file"
            );
        }
    }
}
