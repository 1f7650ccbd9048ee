use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color;

/// Toon material shared by the section meshes and the particles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Material", inline)]
#[serde(default)]
pub struct MaterialOptions {
    /// Base color as `#rrggbb`.
    #[schemars(title = "Material Color", extend("format" = "color"))]
    pub color: String,
    /// Number of discrete bands in the toon gradient map.
    #[schemars(title = "Toon Bands", range(min = 2, max = 8))]
    pub gradient_tones: u32,
}

impl MaterialOptions {
    /// Linear RGBA of [`color`](Self::color), falling back to the default
    /// color when the string does not parse.
    #[must_use]
    pub fn linear_rgba(&self) -> [f32; 4] {
        let rgb = color::parse_hex(&self.color).unwrap_or_else(|| {
            log::warn!("invalid material color {:?}", self.color);
            color::parse_hex(DEFAULT_COLOR).unwrap_or([1.0; 3])
        });
        let [r, g, b] = color::srgb_to_linear(rgb);
        [r, g, b, 1.0]
    }
}

const DEFAULT_COLOR: &str = "#ffeded";

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            gradient_tones: 3,
        }
    }
}
