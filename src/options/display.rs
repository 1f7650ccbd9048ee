use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Clear color as `#rrggbb`.
    #[schemars(title = "Background", extend("format" = "color"))]
    pub background: String,
    /// Upper bound on the device pixel ratio used for the canvas size.
    #[schemars(skip)]
    pub max_pixel_ratio: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            background: "#1e1a20".to_owned(),
            max_pixel_ratio: 2.0,
        }
    }
}
