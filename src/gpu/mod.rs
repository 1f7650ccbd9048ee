//! GPU resource management.
//!
//! Provides wgpu device/surface initialization, the light and toon gradient
//! bindings, shared pipeline boilerplate and shader composition.

/// Directional light uniform and toon gradient bind group.
pub mod lighting;
/// Shared wgpu boilerplate for the scene pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Depth and gradient-map textures.
pub mod texture;
