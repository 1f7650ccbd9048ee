use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Mesh rotation rates and the optional section-change spin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Rotation about X, in radians per second of elapsed time.
    #[schemars(title = "Spin X", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub rotation_rate_x: f32,
    /// Rotation about Y, in radians per second of elapsed time.
    #[schemars(title = "Spin Y", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub rotation_rate_y: f32,
    /// Give the mesh of a newly entered section an extra eased spin.
    #[schemars(title = "Section Spin")]
    pub section_spin: bool,
    /// Length of the section spin in seconds.
    #[schemars(title = "Spin Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub spin_duration: f32,
    /// Curve the section spin follows.
    #[schemars(title = "Spin Easing")]
    pub spin_easing: EasingFunction,
}

impl MotionOptions {
    /// Rates packed as `(x, y)` for the frame update.
    #[must_use]
    pub fn rotation_rates(&self) -> Vec2 {
        Vec2::new(self.rotation_rate_x, self.rotation_rate_y)
    }
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            rotation_rate_x: 0.1,
            rotation_rate_y: 0.12,
            section_spin: false,
            spin_duration: 1.5,
            spin_easing: EasingFunction::QuadraticInOut,
        }
    }
}
