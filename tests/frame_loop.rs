//! End-to-end behavior of the frame loop driven through a recording host.

use std::path::Path;

use glam::{Vec2, Vec3};
use scrollscape::frame::spin::SPIN_AMOUNT;
use scrollscape::frame::FrameTime;
use scrollscape::options::{Options, ParallaxMode};
use scrollscape::{FrameHost, FrameLoop, FrameSnapshot, InputEvent, InputState};

#[derive(Default)]
struct RecordingHost {
    calls: Vec<&'static str>,
    rendered: Vec<FrameSnapshot>,
}

impl FrameHost for RecordingHost {
    fn render(&mut self, snapshot: &FrameSnapshot) {
        self.calls.push("render");
        self.rendered.push(snapshot.clone());
    }

    fn request_next_frame(&mut self) {
        self.calls.push("schedule");
    }
}

fn viewport(width: f32, height: f32) -> InputState {
    InputState::new(width, height, 3)
}

fn with_cursor(mut input: InputState, x: f32, y: f32) -> InputState {
    input.handle_event(InputEvent::CursorMoved { x, y });
    input
}

fn with_scroll(mut input: InputState, offset: f32) -> InputState {
    input.handle_event(InputEvent::ScrollTo { offset });
    input
}

#[test]
fn each_tick_renders_once_then_schedules_once() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let input = viewport(1280.0, 800.0);
    let mut host = RecordingHost::default();

    for _ in 0..3 {
        let snapshot = frame_loop.tick(&input, &mut host);
        assert_eq!(host.rendered.last(), Some(&snapshot));
    }
    assert_eq!(
        host.calls,
        vec!["render", "schedule", "render", "schedule", "render", "schedule"]
    );
}

#[test]
fn ticks_see_non_decreasing_time() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let input = viewport(1280.0, 800.0);
    let mut host = RecordingHost::default();
    for _ in 0..5 {
        let _ = frame_loop.tick(&input, &mut host);
    }
    for pair in host.rendered.windows(2) {
        assert!(pair[1].time.elapsed >= pair[0].time.elapsed);
        assert!(pair[1].time.delta >= 0.0);
    }
}

#[test]
fn rotation_is_linear_in_elapsed_time() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let input = viewport(1000.0, 800.0);
    for t in [0.0_f32, 0.5, 1.0, 12.25, 600.0] {
        let snapshot = frame_loop.advance(FrameTime::at(t, 0.016), &input);
        for rotation in &snapshot.mesh_rotations {
            assert_eq!(rotation.x, t * 0.1);
            assert_eq!(rotation.y, t * 0.12);
            assert_eq!(*rotation, snapshot.mesh_rotations[0]);
        }
    }
}

#[test]
fn camera_height_tracks_scroll_exactly() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    for (height, scroll) in [(800.0_f32, 400.0_f32), (720.0, 1000.0), (1080.0, 0.0)] {
        let input = with_scroll(viewport(1280.0, height), scroll);
        let snapshot = frame_loop.advance(FrameTime::at(1.0, 0.016), &input);
        assert_eq!(snapshot.camera_y, -scroll / height * 4.0);
    }
}

#[test]
fn half_viewport_scroll_lifts_camera_two_units() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let input = with_scroll(viewport(1280.0, 800.0), 400.0);
    let snapshot = frame_loop.advance(FrameTime::at(0.0, 0.0), &input);
    assert_eq!(snapshot.camera_y, -2.0);
}

#[test]
fn resize_uses_last_observed_scroll() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let mut input = with_scroll(viewport(1280.0, 800.0), 400.0);
    input.handle_event(InputEvent::Resized {
        width: 1280.0,
        height: 400.0,
    });
    assert_eq!(input.scroll_offset(), 400.0);

    let snapshot = frame_loop.advance(FrameTime::at(0.0, 0.0), &input);
    assert_eq!(snapshot.camera_y, -400.0 / 400.0 * 4.0);
}

#[test]
fn origin_frame_is_at_rest() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    // Cursor at the viewport center normalizes to (0, 0).
    let input = with_cursor(viewport(1000.0, 800.0), 500.0, 400.0);
    let snapshot = frame_loop.advance(FrameTime::at(0.0, 0.0), &input);
    assert!(snapshot.mesh_rotations.iter().all(|r| *r == Vec3::ZERO));
    assert_eq!(snapshot.camera_y, 0.0);
    assert_eq!(snapshot.rig_offset, Vec2::ZERO);
}

#[test]
fn eased_rig_converges_without_overshoot() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    // Bottom-left corner: cursor (-0.5, 0.5), target (-0.25, -0.25).
    let input = with_cursor(viewport(1000.0, 800.0), 0.0, 800.0);
    let target = Vec2::new(-0.25, -0.25);

    let mut previous = frame_loop.rig_offset().distance(target);
    let mut t = 0.0;
    for _ in 0..300 {
        t += 1.0 / 60.0;
        let snapshot = frame_loop.advance(FrameTime::at(t, 1.0 / 60.0), &input);
        let distance = snapshot.rig_offset.distance(target);
        assert!(distance <= previous);
        assert!(snapshot.rig_offset.x >= target.x);
        assert!(snapshot.rig_offset.y >= target.y);
        previous = distance;
    }
    assert!(previous < 1e-4);
}

#[test]
fn large_delta_does_not_overshoot() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let input = with_cursor(viewport(1000.0, 800.0), 1000.0, 0.0);
    let snapshot = frame_loop.advance(FrameTime::at(2.0, 2.0), &input);
    assert_eq!(snapshot.rig_offset, Vec2::new(0.25, 0.25));
}

#[test]
fn unchanged_inputs_give_identical_rotation_and_camera() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let input = with_cursor(with_scroll(viewport(1000.0, 800.0), 250.0), 100.0, 700.0);
    let time = FrameTime::at(3.5, 0.016);
    let first = frame_loop.advance(time, &input);
    let second = frame_loop.advance(time, &input);
    assert_eq!(first.mesh_rotations, second.mesh_rotations);
    assert_eq!(first.camera_y, second.camera_y);
}

#[test]
fn snap_mode_is_fully_idempotent() {
    let mut options = Options::default();
    options.parallax.mode = ParallaxMode::Snap;
    let mut frame_loop = FrameLoop::new(&options, 3);
    let input = with_cursor(viewport(1000.0, 800.0), 750.0, 200.0);
    let time = FrameTime::at(3.5, 0.016);
    let first = frame_loop.advance(time, &input);
    assert_eq!(first, frame_loop.advance(time, &input));
    assert_eq!(first.rig_offset, Vec2::new(0.125, 0.125));
}

#[test]
fn scrolling_into_a_section_spins_its_mesh() {
    let mut options = Options::default();
    options.motion.section_spin = true;
    options.motion.spin_duration = 1.0;
    let mut frame_loop = FrameLoop::new(&options, 3);

    let top = viewport(1000.0, 800.0);
    let _ = frame_loop.advance(FrameTime::at(0.0, 0.0), &top);

    let second = with_scroll(viewport(1000.0, 800.0), 800.0);
    let start = frame_loop.advance(FrameTime::at(1.0, 0.016), &second);
    assert_eq!(start.section, 1);

    let done = frame_loop.advance(FrameTime::at(2.5, 0.016), &second);
    let base = Vec3::new(2.5 * 0.1, 2.5 * 0.12, 0.0);
    assert!((done.mesh_rotations[1] - (base + SPIN_AMOUNT)).length() < 1e-5);
    assert!((done.mesh_rotations[0] - base).length() < 1e-5);
    assert!((done.mesh_rotations[2] - base).length() < 1e-5);
}

#[test]
fn shipped_calm_preset_eases_slower() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/presets/calm.toml");
    let calm = Options::load(&path).unwrap();
    assert_eq!(calm.parallax.mode, ParallaxMode::Eased);

    let input = with_cursor(viewport(1000.0, 800.0), 1000.0, 0.0);
    let time = FrameTime::at(0.1, 0.1);
    let slow = FrameLoop::new(&calm, 3).advance(time, &input);
    let fast = FrameLoop::new(&Options::default(), 3).advance(time, &input);
    assert!(slow.rig_offset.length() < fast.rig_offset.length());
}

#[test]
fn relative_scroll_stops_at_last_section() {
    let mut frame_loop = FrameLoop::new(&Options::default(), 3);
    let mut input = viewport(1000.0, 800.0);
    for _ in 0..50 {
        input.handle_event(InputEvent::Scrolled { delta: 100.0 });
    }
    let snapshot = frame_loop.advance(FrameTime::at(0.0, 0.0), &input);
    assert_eq!(snapshot.camera_y, -8.0);
    assert_eq!(snapshot.section, 2);
}
