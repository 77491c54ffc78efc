//! The promo icon catalog: which assets get "uploaded" and under what key.
//!
//! Each descriptor pairs a human-readable component name with a semantic
//! `type` slug. The slug becomes both the placeholder filename stem and the
//! key in the URL manifest, so slugs must be distinct and filesystem/URL safe.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File extension for every simulated asset. The icons are SVG components
/// upstream but are simulated as PNG uploads.
pub const ICON_EXTENSION: &str = "png";

/// Descriptor for one promo icon asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Component name the icon comes from (e.g. "TruckIcon").
    pub name: String,
    /// Semantic category; manifest key and asset filename stem.
    #[serde(rename = "type")]
    pub kind: String,
}

impl IconDescriptor {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Filename of the placeholder/asset for this icon (e.g. `free_shipping.png`).
    pub fn asset_filename(&self) -> String {
        format!("{}.{}", self.kind, ICON_EXTENSION)
    }
}

/// Validation failure for a (possibly user-configured) icon catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("icon catalog is empty")]
    Empty,
    #[error("icon `{name}` has an empty type")]
    EmptyKind { name: String },
    #[error("icon type `{kind}` contains invalid characters (allowed: a-z, 0-9, `_`, `-`)")]
    InvalidKind { kind: String },
    #[error("duplicate icon type `{kind}`")]
    DuplicateKind { kind: String },
}

/// The built-in promo icon set.
pub fn builtin_catalog() -> Vec<IconDescriptor> {
    vec![
        IconDescriptor::new("TruckIcon", "free_shipping"),
        IconDescriptor::new("Percent", "percentage"),
        IconDescriptor::new("Gift", "buy_x_get_y"),
        IconDescriptor::new("Tag", "default"),
        IconDescriptor::new("Clock", "time_range"),
    ]
}

fn is_slug(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Checks that a catalog is usable: non-empty, every `type` a non-empty slug,
/// all `type`s distinct. Configured catalogs go through this before any file
/// is touched; the built-in table passes by construction.
pub fn validate_catalog(icons: &[IconDescriptor]) -> Result<(), CatalogError> {
    if icons.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = std::collections::HashSet::new();
    for icon in icons {
        if icon.kind.is_empty() {
            return Err(CatalogError::EmptyKind {
                name: icon.name.clone(),
            });
        }
        if !is_slug(&icon.kind) {
            return Err(CatalogError::InvalidKind {
                kind: icon.kind.clone(),
            });
        }
        if !seen.insert(icon.kind.as_str()) {
            return Err(CatalogError::DuplicateKind {
                kind: icon.kind.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_five_distinct_kinds() {
        let icons = builtin_catalog();
        assert_eq!(icons.len(), 5);
        validate_catalog(&icons).unwrap();
        assert_eq!(icons[0].name, "TruckIcon");
        assert_eq!(icons[0].kind, "free_shipping");
        assert_eq!(icons[4].kind, "time_range");
    }

    #[test]
    fn asset_filename_appends_png() {
        let icon = IconDescriptor::new("TruckIcon", "free_shipping");
        assert_eq!(icon.asset_filename(), "free_shipping.png");
    }

    #[test]
    fn kind_serializes_as_type() {
        let icon = IconDescriptor::new("Gift", "buy_x_get_y");
        let json = serde_json::to_string(&icon).unwrap();
        assert_eq!(json, r#"{"name":"Gift","type":"buy_x_get_y"}"#);
        let back: IconDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, icon);
    }

    #[test]
    fn validate_rejects_empty_catalog() {
        assert_eq!(validate_catalog(&[]), Err(CatalogError::Empty));
    }

    #[test]
    fn validate_rejects_empty_kind() {
        let icons = vec![IconDescriptor::new("Tag", "")];
        assert_eq!(
            validate_catalog(&icons),
            Err(CatalogError::EmptyKind {
                name: "Tag".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_non_slug_kind() {
        for bad in ["Free Shipping", "free/shipping", "FREE", "përcent"] {
            let icons = vec![IconDescriptor::new("X", bad)];
            assert_eq!(
                validate_catalog(&icons),
                Err(CatalogError::InvalidKind {
                    kind: bad.to_string()
                }),
                "kind {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_duplicate_kind() {
        let icons = vec![
            IconDescriptor::new("Tag", "default"),
            IconDescriptor::new("Clock", "default"),
        ];
        assert_eq!(
            validate_catalog(&icons),
            Err(CatalogError::DuplicateKind {
                kind: "default".to_string()
            })
        );
    }
}
