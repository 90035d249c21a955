//! Swatch appearance configuration
//!
//! Describes the decoration the host builds per color: a fixed-size colored
//! box with a light border, placed just before the literal. Loadable from a
//! YAML file with the usual load-or-default behavior; a broken file warns
//! and falls back rather than failing the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Geometry and border of the rendered swatch box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchStyle {
    /// Box width in pixels
    #[serde(default = "default_size")]
    pub width_px: u32,
    /// Box height in pixels
    #[serde(default = "default_size")]
    pub height_px: u32,
    /// CSS-style border spec
    #[serde(default = "default_border")]
    pub border: String,
    /// CSS-style margin between the box and the literal
    #[serde(default = "default_margin")]
    pub margin: String,
}

fn default_size() -> u32 {
    14
}

fn default_border() -> String {
    "1px solid white".to_string()
}

fn default_margin() -> String {
    "0 2px 0 0".to_string()
}

impl Default for SwatchStyle {
    fn default() -> Self {
        Self {
            width_px: default_size(),
            height_px: default_size(),
            border: default_border(),
            margin: default_margin(),
        }
    }
}

impl SwatchStyle {
    /// Parse from YAML content; warns and returns defaults on failure
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str(content) {
            Ok(style) => style,
            Err(e) => {
                tracing::warn!("Failed to parse swatch style, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load from a YAML file, or return defaults if missing/unreadable
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Swatch style file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!("Failed to read swatch style at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
