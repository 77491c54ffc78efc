//! The URL manifest: ordered `type → URL` mapping persisted as indented JSON.
//!
//! Key order follows insertion order (descriptor order), both when writing
//! and when loading a previously written manifest back.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("duplicate manifest key `{0}`")]
    DuplicateKey(String),
    #[error("manifest value for `{0}` is not a string")]
    NonStringValue(String),
}

/// Ordered mapping from icon `type` to its generated URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlManifest {
    entries: Vec<(String, String)>,
}

impl UrlManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, url)| url.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, u)| (k.as_str(), u.as_str()))
    }

    /// Append an entry. Keys must be unique; a duplicate is rejected rather
    /// than silently overwritten.
    pub fn insert(&mut self, kind: &str, url: &str) -> Result<(), ManifestError> {
        if self.get(kind).is_some() {
            return Err(ManifestError::DuplicateKey(kind.to_string()));
        }
        self.entries.push((kind.to_string(), url.to_string()));
        Ok(())
    }

    /// Render as a JSON object with 4-space indentation, keys in insertion
    /// order, no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut map = serde_json::Map::with_capacity(self.entries.len());
        for (kind, url) in &self.entries {
            map.insert(kind.clone(), Value::String(url.clone()));
        }
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        map.serialize(&mut ser)
            .context("failed to serialize URL manifest")?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write the manifest to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json)
            .with_context(|| format!("failed to write manifest: {}", path.display()))?;
        Ok(())
    }

    /// Read a manifest previously written by [`save`](Self::save), preserving
    /// the file's key order.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        let map: serde_json::Map<String, Value> = serde_json::from_str(&data)
            .with_context(|| format!("manifest is not a JSON object: {}", path.display()))?;
        let mut entries = Vec::with_capacity(map.len());
        for (kind, value) in map {
            match value {
                Value::String(url) => entries.push((kind, url)),
                _ => return Err(ManifestError::NonStringValue(kind).into()),
            }
        }
        Ok(UrlManifest { entries })
    }
}
