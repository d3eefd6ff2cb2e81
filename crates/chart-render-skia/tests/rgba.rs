// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and bar/background pixels, immediate and animated.

use chart_core::{start, Chart, ChartOptions, Color, Dataset, DrawOptions, Immediate, Renderer};
use chart_render_skia::{render_to_rgba8, ChartKind, SkiaRenderer};

const RED: Color = Color::rgb(200, 0, 0);

fn chart() -> Chart {
    let ds = Dataset::from_pairs([("Jan", 50.0), ("Feb", 150.0), ("Mar", 90.0)]);
    let opts = ChartOptions::default().with_labels(false).with_color(RED);
    Chart::new(900.0, 600.0, ds, opts).expect("valid chart")
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = render_to_rgba8(&chart(), ChartKind::Bar).expect("rgba render");
    assert_eq!((w, h), (900, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // margin is background, middle of the tallest bar is the bar color
    assert_eq!(pixel(&px, stride, 20, 300), [255, 255, 255, 255]);
    assert_eq!(pixel(&px, stride, 450, 300), [200, 0, 0, 255]);
}

#[test]
fn animated_bars_end_filled() {
    let chart = chart();
    let mut renderer = SkiaRenderer::for_chart(&chart).expect("surface");
    let mut anim = chart.draw_bar_chart(&mut renderer, DrawOptions::animated()).expect("animation");

    let (px, _, _, stride) = renderer.rgba8().expect("rgba");
    assert_eq!(pixel(&px, stride, 450, 300), [255, 255, 255, 255]);

    start(&mut anim, &mut renderer, &mut Immediate);
    let (px, _, _, stride) = renderer.rgba8().expect("rgba");
    assert_eq!(pixel(&px, stride, 450, 300), [200, 0, 0, 255]);
}

#[test]
fn clear_rect_restores_background() {
    let mut r = SkiaRenderer::new(40, 40, Color::WHITE).expect("surface");
    r.draw_rect(chart_core::Rect::new(0.0, 40.0, 40.0, -40.0), Some(RED), None);
    r.clear_rect(chart_core::Rect::new(10.0, 30.0, 20.0, -20.0));
    let (px, _, _, stride) = r.rgba8().expect("rgba");
    assert_eq!(pixel(&px, stride, 20, 20), [255, 255, 255, 255]);
    assert_eq!(pixel(&px, stride, 2, 2), [200, 0, 0, 255]);
}
