//! Per-frame CPU cost: the frame update and the one-off scene generation.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scrollscape::frame::{update, FrameTime};
use scrollscape::options::Options;
use scrollscape::scene::geometry::SectionShape;
use scrollscape::scene::SceneLayout;
use scrollscape::{FrameLoop, InputEvent, InputState};

fn ease_benchmark(c: &mut Criterion) {
    let target = glam::Vec2::new(0.25, -0.1);
    c.bench_function("ease_toward", |b| {
        b.iter(|| {
            update::ease_toward(
                black_box(glam::Vec2::ZERO),
                black_box(target),
                5.0,
                black_box(1.0 / 60.0),
            )
        })
    });
}

fn advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_advance");
    for spin in [false, true] {
        let mut options = Options::default();
        options.motion.section_spin = spin;
        let mut frame_loop = FrameLoop::new(&options, 3);
        let mut input = InputState::new(1280.0, 800.0, 3);
        input.handle_event(InputEvent::CursorMoved { x: 900.0, y: 200.0 });
        input.handle_event(InputEvent::ScrollTo { offset: 640.0 });

        let mut t = 0.0_f32;
        let name = if spin { "with_spin" } else { "plain" };
        group.bench_function(name, |b| {
            b.iter(|| {
                t += 1.0 / 60.0;
                black_box(
                    frame_loop.advance(FrameTime::at(t, 1.0 / 60.0), &input),
                )
            })
        });
    }
    group.finish();
}

fn scene_benchmark(c: &mut Criterion) {
    c.bench_function("torus_knot_mesh", |b| {
        b.iter(|| black_box(SectionShape::TorusKnot.mesh()))
    });
    c.bench_function("scene_layout", |b| {
        let options = Options::default();
        b.iter(|| black_box(SceneLayout::new(black_box(&options))))
    });
}

criterion_group!(benches, ease_benchmark, advance_benchmark, scene_benchmark);
criterion_main!(benches);
