//! The per-frame update loop.
//!
//! Each tick reads the clock and the latest [`InputState`], computes the
//! mesh rotations, the scroll-driven camera height and the cursor-driven
//! rig offset, then hands the result to a [`FrameHost`] to render and asks
//! the host to schedule the next tick.
//!
//! ```
//! use scrollscape::frame::{FrameLoop, FrameTime};
//! use scrollscape::input::InputState;
//! use scrollscape::options::Options;
//!
//! let mut frame_loop = FrameLoop::new(&Options::default(), 3);
//! let mut input = InputState::new(1280.0, 800.0, 3);
//! input.handle_event(scrollscape::input::InputEvent::ScrollTo { offset: 400.0 });
//!
//! let snapshot = frame_loop.advance(FrameTime::at(0.0, 0.0), &input);
//! assert_eq!(snapshot.camera_y, -2.0);
//! ```

/// Monotonic frame clock.
pub mod clock;
/// Section-change spin.
pub mod spin;
/// Pure per-frame math.
pub mod update;

use glam::{Vec2, Vec3};

pub use self::clock::{Clock, FrameTime};
use self::spin::SectionSpin;
use crate::input::InputState;
use crate::options::{
    MotionOptions, Options, ParallaxMode, ParallaxOptions,
};

/// Frames between debug-level FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

/// Everything one tick computed, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Clock reading this frame was computed for.
    pub time: FrameTime,
    /// Euler XYZ rotation per section mesh, in radians.
    pub mesh_rotations: Vec<Vec3>,
    /// Scroll-driven camera height relative to the rig.
    pub camera_y: f32,
    /// Cursor-driven rig displacement.
    pub rig_offset: Vec2,
    /// Section closest to the current scroll position.
    pub section: usize,
}

/// What a frame loop needs from its environment: somewhere to draw and a
/// way to be called again before the next repaint.
pub trait FrameHost {
    /// Draw the scene as described by `snapshot`.
    fn render(&mut self, snapshot: &FrameSnapshot);

    /// Arrange for the loop to tick again on the next display refresh.
    fn request_next_frame(&mut self);
}

/// Owns the clock and the only state carried between frames: the rig
/// offset and any in-flight section spins.
pub struct FrameLoop {
    clock: Clock,
    rig_offset: Vec2,
    spin: SectionSpin,
    motion: MotionOptions,
    parallax: ParallaxOptions,
    spacing: f32,
    mesh_count: usize,
    frames: u64,
}

impl FrameLoop {
    /// Loop over `mesh_count` rotating meshes, clock started now.
    #[must_use]
    pub fn new(options: &Options, mesh_count: usize) -> Self {
        Self {
            clock: Clock::new(),
            rig_offset: Vec2::ZERO,
            spin: SectionSpin::new(
                mesh_count,
                options.motion.section_spin,
                options.motion.spin_duration,
            )
            .with_easing(options.motion.spin_easing),
            motion: options.motion.clone(),
            parallax: options.parallax.clone(),
            spacing: options.layout.object_spacing,
            mesh_count,
            frames: 0,
        }
    }

    /// Pick up changed options without restarting the clock.
    pub fn set_options(&mut self, options: &Options) {
        self.spin.configure(
            options.motion.section_spin,
            options.motion.spin_duration,
            options.motion.spin_easing,
        );
        self.motion = options.motion.clone();
        self.parallax = options.parallax.clone();
        self.spacing = options.layout.object_spacing;
    }

    /// Current rig offset.
    #[must_use]
    pub fn rig_offset(&self) -> Vec2 {
        self.rig_offset
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Compute the frame for an explicit clock reading.
    ///
    /// Rotations and camera height depend only on `time` and `input`; the
    /// rig offset also depends on where it was last frame when easing.
    pub fn advance(&mut self, time: FrameTime, input: &InputState) -> FrameSnapshot {
        let base = update::mesh_rotation(
            time.elapsed,
            self.motion.rotation_rates(),
        )
        .extend(0.0);

        let section = update::current_section(
            input.scroll_offset(),
            input.viewport_height(),
        );
        self.spin.observe(section, time.elapsed);

        let mesh_rotations = (0..self.mesh_count)
            .map(|i| base + self.spin.offset(i, time.elapsed))
            .collect();

        let camera_y = update::scroll_camera_y(
            input.scroll_offset(),
            input.viewport_height(),
            self.spacing,
        );

        let target =
            update::parallax_target(input.cursor(), self.parallax.amplitude);
        self.rig_offset = match self.parallax.mode {
            ParallaxMode::Snap => target,
            ParallaxMode::Eased => update::ease_toward(
                self.rig_offset,
                target,
                self.parallax.smoothing,
                time.delta,
            ),
        };

        FrameSnapshot {
            time,
            mesh_rotations,
            camera_y,
            rig_offset: self.rig_offset,
            section,
        }
    }

    /// Read the clock and compute the frame, without rendering.
    pub fn step(&mut self, input: &InputState) -> FrameSnapshot {
        let time = self.clock.tick();
        let snapshot = self.advance(time, input);

        self.frames += 1;
        if self.frames % FPS_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: {:.1} fps, section {}",
                self.frames,
                self.clock.fps(),
                snapshot.section
            );
        }
        snapshot
    }

    /// Run one full frame: read the clock, compute, render, reschedule.
    pub fn tick<H: FrameHost + ?Sized>(
        &mut self,
        input: &InputState,
        host: &mut H,
    ) -> FrameSnapshot {
        let snapshot = self.step(input);
        host.render(&snapshot);
        host.request_next_frame();
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    fn input_at(scroll: f32, cursor_px: (f32, f32)) -> InputState {
        let mut input = InputState::new(1000.0, 800.0, 3);
        input.handle_event(InputEvent::ScrollTo { offset: scroll });
        input.handle_event(InputEvent::CursorMoved {
            x: cursor_px.0,
            y: cursor_px.1,
        });
        input
    }

    #[test]
    fn origin_frame_is_all_zero() {
        let mut frame_loop = FrameLoop::new(&Options::default(), 3);
        let snapshot = frame_loop
            .advance(FrameTime::at(0.0, 0.0), &input_at(0.0, (500.0, 400.0)));
        assert!(snapshot.mesh_rotations.iter().all(|r| *r == Vec3::ZERO));
        assert_eq!(snapshot.camera_y, 0.0);
        assert_eq!(snapshot.rig_offset, Vec2::ZERO);
        assert_eq!(snapshot.section, 0);
    }

    #[test]
    fn meshes_rotate_in_lockstep() {
        let mut frame_loop = FrameLoop::new(&Options::default(), 3);
        let snapshot = frame_loop
            .advance(FrameTime::at(7.5, 0.016), &input_at(0.0, (0.0, 0.0)));
        assert_eq!(snapshot.mesh_rotations.len(), 3);
        for r in &snapshot.mesh_rotations {
            assert_eq!(*r, snapshot.mesh_rotations[0]);
            assert!((r.x - 0.75).abs() < 1e-6);
            assert!((r.y - 0.9).abs() < 1e-6);
            assert_eq!(r.z, 0.0);
        }
    }

    #[test]
    fn snap_mode_jumps_to_target() {
        let mut options = Options::default();
        options.parallax.mode = ParallaxMode::Snap;
        let mut frame_loop = FrameLoop::new(&options, 3);
        // cursor at the top-right corner: (0.5, -0.5)
        let snapshot = frame_loop
            .advance(FrameTime::at(1.0, 0.016), &input_at(0.0, (1000.0, 0.0)));
        assert_eq!(snapshot.rig_offset, Vec2::new(0.25, 0.25));
    }

    #[test]
    fn eased_mode_moves_part_way() {
        let mut frame_loop = FrameLoop::new(&Options::default(), 3);
        let snapshot = frame_loop
            .advance(FrameTime::at(0.1, 0.1), &input_at(0.0, (1000.0, 0.0)));
        // factor = 5 * 0.1 = 0.5
        assert!((snapshot.rig_offset - Vec2::new(0.125, 0.125)).length() < 1e-6);
    }

    #[test]
    fn set_options_keeps_rig_offset() {
        let mut frame_loop = FrameLoop::new(&Options::default(), 3);
        let _ = frame_loop
            .advance(FrameTime::at(0.1, 0.1), &input_at(0.0, (1000.0, 0.0)));
        let before = frame_loop.rig_offset();

        let mut options = Options::default();
        options.layout.object_spacing = 8.0;
        frame_loop.set_options(&options);
        assert_eq!(frame_loop.rig_offset(), before);

        let snapshot = frame_loop
            .advance(FrameTime::at(0.1, 0.0), &input_at(400.0, (1000.0, 0.0)));
        assert_eq!(snapshot.camera_y, -4.0);
    }
}
