//! Input and resize methods for SceneEngine

use super::SceneEngine;
use crate::input::InputEvent;

impl SceneEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Only updates [`InputState`](crate::input::InputState); the next frame
    /// picks the new values up. A `Resized` event changes the logical
    /// viewport used for scroll and cursor math, not the surface.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Resize the render surface only, in physical pixels.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    /// Resize when logical and physical sizes coincide (native windows):
    /// surface and input viewport together.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.resize_surface(width, height);
        self.handle_input(InputEvent::Resized {
            width: width as f32,
            height: height as f32,
        });
    }
}
