//! Shared helpers: color parsing, easing curves and viewport sizing.

pub mod color;
pub mod easing;
pub mod viewport;
