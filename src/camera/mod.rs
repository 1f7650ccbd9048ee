//! Camera system: a perspective camera carried by a rig that follows the
//! scroll position vertically and the cursor for parallax.

/// Uniform buffer and bind group for the camera.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Composition of rig offset and scroll height into a camera placement.
pub mod rig;
