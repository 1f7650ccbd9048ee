/// Platform-agnostic input events.
///
/// Hosts translate window or DOM events into these and feed them to
/// [`InputState::handle_event`](super::InputState::handle_event).
///
/// # Example
///
/// ```
/// use scrollscape::input::{InputEvent, InputState};
///
/// let mut input = InputState::new(800.0, 600.0, 3);
/// input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 150.0 });
/// assert_eq!(input.cursor().y, -0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute viewport position.
    CursorMoved {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
    },
    /// Relative scroll, for hosts that emulate a scrolling page.
    Scrolled {
        /// Pixels; positive moves toward later sections.
        delta: f32,
    },
    /// Absolute scroll offset reported by a host that owns real scrolling.
    ScrollTo {
        /// Vertical scroll offset in pixels.
        offset: f32,
    },
    /// Viewport size changed.
    Resized {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}

/// Pixels scrolled per wheel "line" when a device reports line deltas.
pub const LINE_HEIGHT_PX: f32 = 100.0;
