//! Input handling: platform-agnostic events and the shared scalar state
//! (scroll offset, normalized cursor, viewport size) they update.

/// Platform-agnostic input events.
pub mod event;
/// Latest scroll/cursor/viewport values read by the frame loop.
pub mod state;

pub use event::{InputEvent, LINE_HEIGHT_PX};
pub use state::InputState;
