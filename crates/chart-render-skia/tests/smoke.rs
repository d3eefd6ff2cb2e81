// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing bar and line PNGs.

use chart_core::{Chart, ChartOptions, Dataset};
use chart_render_skia::{render_to_png, render_to_png_bytes, ChartKind};

fn months() -> Chart {
    let ds = Dataset::from_pairs([("Jan", 50.0), ("Feb", 150.0), ("Mar", 90.0), ("Apr", 120.0)]);
    Chart::new(900.0, 600.0, ds, ChartOptions::default()).expect("valid chart")
}

#[test]
fn render_smoke_png() {
    let chart = months();
    let out = std::path::PathBuf::from("target/test_out/smoke_bar.png");
    render_to_png(&chart, ChartKind::Bar, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&chart, ChartKind::Line).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
