use glam::Vec2;

use super::event::InputEvent;

/// Latest values produced by scroll, pointer and resize events.
///
/// The frame loop only ever reads this; event handlers are the only
/// writers, and only scroll events move the scroll offset. Scrolling is modelled as a page of `section_count`
/// viewport-tall sections, so relative scrolling is clamped to
/// `[0, (section_count - 1) * height]`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    scroll_offset: f32,
    cursor: Vec2,
    width: f32,
    height: f32,
    section_count: usize,
}

impl InputState {
    /// State for a viewport of the given size over `section_count` sections.
    #[must_use]
    pub fn new(width: f32, height: f32, section_count: usize) -> Self {
        Self {
            scroll_offset: 0.0,
            cursor: Vec2::ZERO,
            width,
            height,
            section_count,
        }
    }

    /// Apply one event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = normalize_cursor(x, y, self.width, self.height);
            }
            InputEvent::Scrolled { delta } => {
                self.scroll_offset =
                    (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
            }
            InputEvent::ScrollTo { offset } => {
                self.scroll_offset = offset.max(0.0);
            }
            InputEvent::Resized { width, height } => {
                self.width = width;
                self.height = height;
            }
        }
        log::trace!(
            "input: scroll={:.1} cursor=({:.3}, {:.3})",
            self.scroll_offset,
            self.cursor.x,
            self.cursor.y
        );
    }

    /// Current vertical scroll offset in pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Normalized cursor, roughly [-0.5, 0.5] per axis, +y pointing down.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.height
    }

    /// Number of viewport-tall sections in the page.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Largest scroll offset that still shows the last section.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        self.section_count.saturating_sub(1) as f32 * self.height.max(0.0)
    }
}

/// Map a pixel position to [-0.5, 0.5] relative to the viewport center.
#[must_use]
pub fn normalize_cursor(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(x / width - 0.5, y / height - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_normalized_around_center() {
        let mut input = InputState::new(1000.0, 500.0, 3);
        input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 250.0 });
        assert_eq!(input.cursor(), Vec2::ZERO);

        input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 500.0 });
        assert_eq!(input.cursor(), Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn degenerate_viewport_gives_centered_cursor() {
        assert_eq!(normalize_cursor(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn relative_scroll_is_clamped_to_page() {
        let mut input = InputState::new(800.0, 600.0, 3);
        input.handle_event(InputEvent::Scrolled { delta: -50.0 });
        assert_eq!(input.scroll_offset(), 0.0);

        input.handle_event(InputEvent::Scrolled { delta: 5000.0 });
        assert_eq!(input.scroll_offset(), 1200.0);
    }

    #[test]
    fn absolute_scroll_is_taken_as_is() {
        let mut input = InputState::new(800.0, 600.0, 3);
        input.handle_event(InputEvent::ScrollTo { offset: 2500.0 });
        assert_eq!(input.scroll_offset(), 2500.0);
        input.handle_event(InputEvent::ScrollTo { offset: -3.0 });
        assert_eq!(input.scroll_offset(), 0.0);
    }

    #[test]
    fn resize_leaves_scroll_offset_alone() {
        let mut input = InputState::new(800.0, 600.0, 3);
        input.handle_event(InputEvent::Scrolled { delta: 600.0 });
        input.handle_event(InputEvent::Resized {
            width: 800.0,
            height: 300.0,
        });
        assert_eq!(input.scroll_offset(), 600.0);
        assert_eq!(input.viewport_height(), 300.0);
    }
}
