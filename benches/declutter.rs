use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use label_declutter::config::DeclutterConfig;
use label_declutter::declutter::run_pass;
use label_declutter::declutter::Point;
use label_declutter::scene::{BoxExtent, LabelCandidate};
use std::hint::black_box;

fn grid_scene(side: usize, spacing: f64) -> Vec<LabelCandidate> {
    let mut labels = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let x = col as f64 * spacing;
            let y = row as f64 * spacing;
            labels.push(LabelCandidate {
                id: format!("n{row}-{col}"),
                anchor: Point::new(x, y),
                rect: BoxExtent {
                    x,
                    y: y - 2.0,
                    width: 4.0,
                    height: 2.0,
                },
            });
        }
    }
    labels
}

fn bench_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("declutter_pass");
    let config = DeclutterConfig::default();
    for (name, side, spacing) in [
        ("sparse_3x3", 3usize, 20.0),
        ("mid_7x7", 7, 8.0),
        ("dense_12x12", 12, 4.0),
    ] {
        let labels = grid_scene(side, spacing);
        group.bench_with_input(BenchmarkId::from_parameter(name), &labels, |b, labels| {
            b.iter(|| {
                black_box(run_pass(
                    black_box(labels),
                    Point::new(0.0, 0.0),
                    1.0,
                    &config,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pass);
criterion_main!(benches);
