//! Logo items and wall manifests.

use crate::config::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One logo shown on the wall.
///
/// Items are owned by the caller and never mutated by the widget.
/// `name` is an identifier for the caller's benefit and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoItem {
    /// Identifier (not guaranteed unique).
    pub name: String,
    /// Image source URI, resolved by the host's image loaders.
    pub img_url: String,
    /// Accessibility text for the image.
    pub alt_text: String,
}

impl LogoItem {
    /// Create a new logo item.
    pub fn new(
        name: impl Into<String>,
        img_url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            img_url: img_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Manifest loading errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// A complete wall description: the items plus every layout setting.
///
/// All fields are optional in JSON and fall back to the widget defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WallManifest {
    /// Logos in display order.
    pub items: Vec<LogoItem>,
    /// Layout settings, flattened so manifests read like the widget's props.
    #[serde(flatten)]
    pub config: LayoutConfig,
}

impl WallManifest {
    /// Parse a manifest from JSON.
    pub fn from_json(json: &str) -> ManifestResult<Self> {
        serde_json::from_str(json).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Serialize the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> ManifestResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ManifestError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let manifest = Self::from_json(&content)?;
        log::info!(
            "Loaded wall manifest from {} ({} items)",
            path.display(),
            manifest.items.len()
        );
        Ok(manifest)
    }
}
