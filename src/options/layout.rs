use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Vertical stacking of the section meshes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// World-space distance between consecutive section meshes. One
    /// viewport height of scrolling moves the camera by this much.
    #[schemars(title = "Object Spacing", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub object_spacing: f32,
    /// Horizontal offset of each mesh; the sign alternates per section.
    #[schemars(title = "Side Offset", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub side_offset: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            object_spacing: 4.0,
            side_offset: 2.0,
        }
    }
}
