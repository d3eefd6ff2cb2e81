use anyhow::Result;
use chart_core::{Chart, ChartOptions, Dataset, SeededRandom, Size};
use chart_render_skia::{render_to_png_bytes, ChartKind};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).sin().abs() * 140.0 + 2.0).collect();
    Chart::with_random_source(Size::new(800.0, 500.0), Dataset::from_values(&values), ChartOptions::default().with_labels(false), &mut SeededRandom::new(3))
        .expect("valid chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[12usize, 240usize] {
        let ch = build_chart(n);
        for kind in [ChartKind::Bar, ChartKind::Line] {
            group.bench_function(format!("{kind:?}_{n}"), |b| {
                b.iter(|| -> Result<()> {
                    let bytes = render_to_png_bytes(&ch, kind)?;
                    black_box(bytes);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
