//! Centralized scene options with TOML preset support.
//!
//! Every tweakable value (camera, layout, motion, parallax, material,
//! lighting, particles, display) lives here. Options serialize to/from TOML
//! for presets stored in `assets/presets/`, and individual fields can be
//! updated from a JSON value the way a live-editing debug panel sends them.

mod camera;
mod display;
mod layout;
mod lighting;
mod material;
mod motion;
mod parallax;
mod particles;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use layout::LayoutOptions;
pub use lighting::LightingOptions;
pub use material::MaterialOptions;
pub use motion::MotionOptions;
pub use parallax::{ParallaxMode, ParallaxOptions};
pub use particles::ParticleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScrollscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[parallax]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and placement.
    pub camera: CameraOptions,
    /// Section spacing and side offsets.
    pub layout: LayoutOptions,
    /// Mesh rotation rates and section spin.
    pub motion: MotionOptions,
    /// Cursor parallax.
    pub parallax: ParallaxOptions,
    /// Toon material.
    pub material: MaterialOptions,
    /// Directional light.
    pub lighting: LightingOptions,
    /// Particle field.
    pub particles: ParticleOptions,
    /// Output surface.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the panel-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ScrollscapeError> {
        let content =
            std::fs::read_to_string(path).map_err(ScrollscapeError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ScrollscapeError> {
        toml::from_str(content)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ScrollscapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ScrollscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(ScrollscapeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Set a single field: `options[section][field] = value`.
    ///
    /// This is the entry point a debug panel drives. Unknown sections or
    /// fields, and values of the wrong type, are rejected and leave the
    /// options untouched.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), ScrollscapeError> {
        let mut root = serde_json::to_value(&*self)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))?;
        let slot = root
            .get_mut(section)
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| {
                ScrollscapeError::OptionsParse(format!(
                    "unknown option {section}.{field}"
                ))
            })?;
        *slot = value;
        *self = serde_json::from_value(root).map_err(|e| {
            ScrollscapeError::OptionsParse(format!("{section}.{field}: {e}"))
        })?;
        Ok(())
    }

    /// Whether switching from `self` to `other` changes anything baked into
    /// scene geometry (mesh placement or the particle field).
    #[must_use]
    pub fn layout_differs(&self, other: &Self) -> bool {
        self.layout != other.layout || self.particles != other.particles
    }
}
