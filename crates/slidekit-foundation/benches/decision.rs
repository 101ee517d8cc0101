use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slidekit_foundation::{
    hint_opacity, track_color, AnchorBounds, CommandGate, GestureStateMachine, SlideConfig,
    ThresholdDecision,
};
use slidekit_graphics::Density;

const VELOCITY_SAMPLES: &[f32] = &[0.0, 400.0, 2_500.0, -2_500.0];
const FRAME_NANOS: u64 = 16_666_667;

fn bench_decide(c: &mut Criterion) {
    let decision = ThresholdDecision::new(&SlideConfig::default(), Density::new(2.75));
    let bounds = AnchorBounds::new(0.0, 640.0);

    let mut group = c.benchmark_group("threshold_decide");
    for &velocity in VELOCITY_SAMPLES {
        group.bench_with_input(
            BenchmarkId::from_parameter(velocity),
            &velocity,
            |b, &velocity| {
                b.iter(|| {
                    for step in 0..64 {
                        let offset = step as f32 * 10.0;
                        black_box(decision.decide(black_box(offset), velocity, bounds));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_visuals(c: &mut Criterion) {
    c.bench_function("visuals_sweep", |b| {
        b.iter(|| {
            for step in 0..=100 {
                let progress = step as f32 / 100.0;
                black_box(track_color(black_box(progress)));
                black_box(hint_opacity(black_box(progress)));
            }
        });
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("release_and_settle", |b| {
        b.iter(|| {
            let gate = CommandGate::new(|| {}, || {});
            let mut machine =
                GestureStateMachine::new(SlideConfig::default(), Density::BASELINE, gate, false);
            machine.update_anchors(0.0, 640.0);
            machine.begin_drag();
            machine.update_drag(black_box(420.0));
            machine.end_drag(0.0);
            let mut time = 0;
            while machine.on_frame(time) {
                time += FRAME_NANOS;
            }
            black_box(machine.current_offset())
        });
    });
}

criterion_group!(benches, bench_decide, bench_visuals, bench_settle);
criterion_main!(benches);
