use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// The single directional light plus a flat ambient term.
pub struct LightingOptions {
    /// Direction the light shines from (need not be normalized).
    #[schemars(skip)]
    pub direction: [f32; 3],
    /// Light color as `#rrggbb`.
    #[schemars(title = "Light Color", extend("format" = "color"))]
    pub color: String,
    /// Directional light intensity.
    #[schemars(title = "Intensity", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub intensity: f32,
    /// Flat ambient term added before toon banding.
    #[schemars(title = "Ambient", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub ambient: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            direction: [1.0, 1.0, 0.0],
            color: "#ffffff".to_owned(),
            intensity: 3.0,
            ambient: 0.05,
        }
    }
}
