use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the camera rig follows its cursor-derived target.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ParallaxMode {
    /// Assign the target directly every frame.
    Snap,
    /// Ease toward the target with frame-rate independent smoothing.
    #[default]
    Eased,
}

/// Cursor parallax parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Parallax", inline)]
#[serde(default)]
pub struct ParallaxOptions {
    /// Snap or ease.
    #[schemars(title = "Mode")]
    pub mode: ParallaxMode,
    /// Rig displacement per unit of normalized cursor offset.
    #[schemars(title = "Amplitude", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub amplitude: f32,
    /// Easing rate (1/s) used in [`ParallaxMode::Eased`].
    #[schemars(title = "Smoothing", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub smoothing: f32,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            mode: ParallaxMode::Eased,
            amplitude: 0.5,
            smoothing: 5.0,
        }
    }
}
