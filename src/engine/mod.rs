//! The scene engine: input, options, frame loop and renderer in one place.
//!
//! Hosts (the winit viewer, the browser bridge) own a [`SceneEngine`],
//! forward platform events to it and call [`SceneEngine::frame`] once per
//! display refresh, passing their own "call me again" primitive.

mod input;
mod options;

use crate::error::ScrollscapeError;
use crate::frame::{FrameHost, FrameLoop, FrameSnapshot};
use crate::gpu::render_context::RenderContext;
use crate::input::InputState;
use crate::options::Options;
use crate::renderer::SceneRenderer;
use crate::scene::SceneLayout;

/// Owns everything needed to turn input into frames.
pub struct SceneEngine {
    renderer: SceneRenderer,
    frame_loop: FrameLoop,
    input: InputState,
    options: Options,
}

/// Borrowed view of the engine handed to [`FrameLoop::tick`]: renders with
/// the engine's renderer and schedules with the host's primitive.
struct EngineHost<'a> {
    renderer: &'a mut SceneRenderer,
    schedule: &'a mut dyn FnMut(),
}

impl FrameHost for EngineHost<'_> {
    fn render(&mut self, snapshot: &FrameSnapshot) {
        render_or_recover(self.renderer, snapshot);
    }

    fn request_next_frame(&mut self) {
        (self.schedule)();
    }
}

/// Render, reconfiguring the surface when it was lost or outdated. Any
/// other failure is logged and the frame skipped.
fn render_or_recover(renderer: &mut SceneRenderer, snapshot: &FrameSnapshot) {
    match renderer.render(snapshot) {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
            log::warn!("surface lost or outdated, reconfiguring");
            renderer.reconfigure();
        }
        Err(e) => {
            log::error!("render error: {e:?}");
        }
    }
}

impl SceneEngine {
    /// Create an engine rendering to `target` at `size` physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError`] if GPU initialization or shader
    /// composition fails.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, ScrollscapeError> {
        let context = RenderContext::new(target, size).await?;
        Self::from_context(context, options)
    }

    /// Create an engine around an existing render context.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Shader`] if shader composition fails.
    pub fn from_context(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, ScrollscapeError> {
        let (width, height) = context.size();
        let layout = SceneLayout::new(&options);
        let renderer = SceneRenderer::new(context, &options, &layout)?;
        let frame_loop = FrameLoop::new(&options, layout.meshes.len());
        let input = InputState::new(
            width as f32,
            height as f32,
            SceneLayout::SECTION_COUNT,
        );
        log::info!("scene engine ready");
        Ok(Self {
            renderer,
            frame_loop,
            input,
            options,
        })
    }

    /// Run one frame: compute, render, then call `schedule` so the host
    /// arranges the next one.
    pub fn frame(&mut self, schedule: &mut dyn FnMut()) -> FrameSnapshot {
        let mut host = EngineHost {
            renderer: &mut self.renderer,
            schedule,
        };
        self.frame_loop.tick(&self.input, &mut host)
    }

    /// Compute the next frame without rendering it.
    pub fn update(&mut self) -> FrameSnapshot {
        self.frame_loop.step(&self.input)
    }

    /// Render a previously computed frame.
    pub fn render(&mut self, snapshot: &FrameSnapshot) {
        render_or_recover(&mut self.renderer, snapshot);
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_loop.fps()
    }

    /// Latest input state.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The renderer's GPU context.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        self.renderer.context()
    }
}
