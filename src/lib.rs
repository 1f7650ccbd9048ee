// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven 3D scene built on wgpu.
//!
//! Three toon-shaded meshes are stacked vertically, one per page section,
//! over a field of particles. Each frame the meshes rotate with elapsed
//! time, the camera follows the scroll position down the stack, and a
//! parallax rig nudges it toward the cursor.
//!
//! # Key entry points
//!
//! - [`frame::FrameLoop`] - the per-frame update, host-agnostic
//! - [`engine::SceneEngine`] - frame loop, input and renderer together
//! - [`options::Options`] - runtime configuration and TOML presets
//! - `Viewer` (feature `viewer`) - a native winit window
//! - `web::start` (feature `web`, wasm32) - attach to a page canvas
//!
//! # Architecture
//!
//! Platform events become [`input::InputEvent`]s that only update
//! [`input::InputState`]. Once per display refresh the host calls
//! [`engine::SceneEngine::frame`], which reads the clock and the input
//! state, computes a [`frame::FrameSnapshot`], renders it and asks the host
//! to schedule the next frame (`request_redraw` natively,
//! `requestAnimationFrame` in the browser).

pub mod camera;
pub mod engine;
pub mod error;
pub mod frame;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use engine::SceneEngine;
pub use error::ScrollscapeError;
pub use frame::{FrameHost, FrameLoop, FrameSnapshot};
pub use input::{InputEvent, InputState};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
