//! Standalone scene window backed by winit.
//!
//! The mouse wheel stands in for page scrolling: each notch moves the
//! camera down the section stack, and the cursor drives the parallax rig.
//!
//! ```no_run
//! # use scrollscape::Viewer;
//! Viewer::builder()
//!     .with_preset_path("assets/presets/calm.toml")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    error::ScrollscapeError,
    input::{InputEvent, InputState, LINE_HEIGHT_PX},
    options::Options,
    SceneEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    preset_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Scrollscape", no
    /// preset, default options).
    fn new() -> Self {
        Self {
            preset_path: None,
            options: None,
            title: "Scrollscape".into(),
        }
    }

    /// Load options from a TOML preset. `KeyR` reloads it while running.
    #[must_use]
    pub fn with_preset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preset_path = Some(path.into());
        self
    }

    /// Override the default options. Ignored when a preset path is set.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            preset_path: self.preset_path,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the scroll scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    preset_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError`] if the preset cannot be loaded or the
    /// event loop fails.
    pub fn run(self) -> Result<(), ScrollscapeError> {
        let options = match &self.preset_path {
            Some(path) => Options::load(path)?,
            None => self.options.unwrap_or_default(),
        };

        let event_loop = EventLoop::new()
            .map_err(|e| ScrollscapeError::Viewer(e.to_string()))?;
        // Frames are driven by request_redraw, one per RedrawRequested.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            preset_path: self.preset_path,
            options: Some(options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ScrollscapeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    preset_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

/// Compute the wgpu surface size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Scroll offset that keeps the current section in view once the emulated
/// page is `new_height` pixels per section. `None` if there is nothing to
/// rescale.
fn aligned_scroll(input: &InputState, new_height: f32) -> Option<f32> {
    let old_height = input.viewport_height();
    if old_height <= 0.0 || new_height <= 0.0 || old_height == new_height {
        return None;
    }
    let max = input.section_count().saturating_sub(1) as f32 * new_height;
    Some((input.scroll_offset() * new_height / old_height).clamp(0.0, max))
}

/// Scroll distance in pixels for a wheel event. Wheel-down is a positive
/// (downward) scroll.
#[allow(clippy::cast_possible_truncation)]
fn wheel_scroll_px(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();

        let engine = match pollster::block_on(SceneEngine::new(
            window.clone(),
            (vp_w, vp_h),
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                let realigned = aligned_scroll(engine.input(), vp_h as f32);
                engine.resize(vp_w, vp_h);
                if let Some(offset) = realigned {
                    engine.handle_input(InputEvent::ScrollTo { offset });
                }
            }

            WindowEvent::RedrawRequested => {
                let _ = engine.frame(&mut || window.request_redraw());
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                engine.handle_input(InputEvent::Scrolled {
                    delta: wheel_scroll_px(delta),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                match code {
                    KeyCode::Escape => event_loop.exit(),
                    KeyCode::KeyR => {
                        if let Some(path) = &self.preset_path {
                            if let Err(e) = engine.load_preset(path) {
                                log::error!("failed to reload preset: {e}");
                            }
                        }
                    }
                    _ => {}
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_down_scrolls_down() {
        let px = wheel_scroll_px(MouseScrollDelta::LineDelta(0.0, -1.0));
        assert_eq!(px, LINE_HEIGHT_PX);
        let px = wheel_scroll_px(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, 40.0),
        ));
        assert_eq!(px, -40.0);
    }

    #[test]
    fn window_resize_keeps_section_in_view() {
        let mut input = InputState::new(800.0, 600.0, 3);
        input.handle_event(InputEvent::Scrolled { delta: 600.0 });
        assert_eq!(aligned_scroll(&input, 300.0), Some(300.0));
        assert_eq!(aligned_scroll(&input, 600.0), None);

        input.handle_event(InputEvent::Scrolled { delta: 600.0 });
        // past the shorter page's end
        assert_eq!(aligned_scroll(&input, 200.0), Some(400.0));
    }
}
