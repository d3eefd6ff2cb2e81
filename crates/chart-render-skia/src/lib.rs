// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster renderer for chart-core charts; PNG and RGBA8 output.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Chart, Color, DrawOptions, Point, Rect, Renderer, Stroke, TextStyle};
use skia_safe as skia;
use tracing::debug;

pub mod text;

pub use text::TextShaper;

/// Which series a chart is drawn as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    let (a, r, g, b) = c.to_argb();
    skia::Color::from_argb(a, r, g, b)
}

fn to_skia_rect(r: Rect) -> skia::Rect {
    let n = r.normalized();
    skia::Rect::from_xywh(n.x as f32, n.y as f32, n.width as f32, n.height as f32)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia_color(stroke.color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(color));
    paint
}

/// Drawing surface backed by a Skia CPU raster surface.
pub struct SkiaRenderer {
    surface: skia::Surface,
    background: Color,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl SkiaRenderer {
    /// Create a `width` x `height` surface filled with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        let mut renderer = Self { surface, background, shaper: TextShaper::new(), width, height };
        renderer.clear();
        Ok(renderer)
    }

    /// Surface sized to `chart`, painted with its theme background.
    pub fn for_chart(chart: &Chart) -> Result<Self> {
        let size = chart.size();
        Self::new(size.width.ceil() as i32, size.height.ceil() as i32, chart.options().theme.background)
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn clear(&mut self) {
        self.surface.canvas().clear(to_skia_color(self.background));
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels from surface failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Renderer for SkiaRenderer {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let paint = stroke_paint(stroke);
        self.surface
            .canvas()
            .draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
    }

    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<&Stroke>) {
        let r = to_skia_rect(rect);
        let canvas = self.surface.canvas();
        if let Some(color) = fill {
            canvas.draw_rect(r, &fill_paint(color));
        }
        if let Some(stroke) = stroke {
            canvas.draw_rect(r, &stroke_paint(stroke));
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.surface
            .canvas()
            .draw_circle((center.x as f32, center.y as f32), radius as f32, &fill_paint(color));
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at.x as f32, at.y as f32, style);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = fill_paint(self.background);
        paint.set_anti_alias(false);
        paint.set_blend_mode(skia::BlendMode::Src);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }
}

fn draw_final(chart: &Chart, kind: ChartKind) -> Result<SkiaRenderer> {
    let mut renderer = SkiaRenderer::for_chart(chart)?;
    match kind {
        ChartKind::Bar => { chart.draw_bar_chart(&mut renderer, DrawOptions::immediate()); }
        ChartKind::Line => { chart.draw_line_chart(&mut renderer, DrawOptions::immediate()); }
    }
    Ok(renderer)
}

/// Render `chart` (no animation) and encode it as PNG.
pub fn render_to_png_bytes(chart: &Chart, kind: ChartKind) -> Result<Vec<u8>> {
    draw_final(chart, kind)?.png_bytes()
}

/// Render `chart` (no animation) to a PNG at `output_png_path`.
pub fn render_to_png(chart: &Chart, kind: ChartKind, output_png_path: impl AsRef<Path>) -> Result<()> {
    draw_final(chart, kind)?.write_png(output_png_path)
}

/// Render `chart` (no animation) into an RGBA8 buffer.
pub fn render_to_rgba8(chart: &Chart, kind: ChartKind) -> Result<(Vec<u8>, u32, u32, usize)> {
    draw_final(chart, kind)?.rgba8()
}
