//! Per-frame math. Everything here is a pure function of its arguments.

use glam::Vec2;

/// Rotation about X and Y for a mesh after `elapsed` seconds.
///
/// All meshes share the same rates, so they rotate in lockstep.
#[must_use]
pub fn mesh_rotation(elapsed: f32, rates: Vec2) -> Vec2 {
    Vec2::new(elapsed * rates.x, elapsed * rates.y)
}

/// Camera height for a scroll offset: one viewport height of scrolling
/// moves the camera down by one `spacing`, aligning each section mesh
/// with the viewport in turn.
#[must_use]
pub fn scroll_camera_y(scroll: f32, viewport_height: f32, spacing: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    -scroll / viewport_height * spacing
}

/// Index of the section closest to the current scroll offset.
#[must_use]
pub fn current_section(scroll: f32, viewport_height: f32) -> usize {
    if viewport_height <= 0.0 {
        return 0;
    }
    (scroll / viewport_height).round().max(0.0) as usize
}

/// Rig offset the cursor asks for. Vertical is inverted so moving the
/// cursor up lifts the camera.
#[must_use]
pub fn parallax_target(cursor: Vec2, amplitude: f32) -> Vec2 {
    Vec2::new(cursor.x * amplitude, -cursor.y * amplitude)
}

/// Exponential approach of `current` toward `target`.
///
/// The blend factor `smoothing * delta` is clamped to [0, 1], so a long
/// frame lands on the target instead of overshooting it.
#[must_use]
pub fn ease_toward(current: Vec2, target: Vec2, smoothing: f32, delta: f32) -> Vec2 {
    let factor = (smoothing * delta).clamp(0.0, 1.0);
    current + (target - current) * factor
}
