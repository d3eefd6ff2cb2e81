// File: crates/chart-core/src/chart.rs
// Summary: Chart struct: validates inputs once, owns the derived layout, and draws bar/line charts through a Renderer.

use tracing::debug;

use crate::animation::{Animation, BarAnimation, LineAnimation};
use crate::color::Color;
use crate::error::Result;
use crate::geometry::{
    compute_bar_descriptors, compute_line_points, horizontal_axis, horizontal_guidelines, horizontal_labels,
    line_origin, marker_radius, vertical_axis, vertical_tick_labels, BarDescriptor, LinePoint,
};
use crate::layout::AxisLayout;
use crate::options::{ChartOptions, DrawOptions};
use crate::random::{RandomSource, ThreadRandom};
use crate::render::{Renderer, Stroke, TextAlign, TextBaseline, TextStyle};
use crate::types::{Dataset, Size};

/// Outline width of each bar.
pub const BAR_BORDER_WIDTH: f64 = 1.0;

pub struct Chart {
    dataset: Dataset,
    options: ChartOptions,
    layout: AxisLayout,
    bars: Vec<BarDescriptor>,
    line_points: Vec<LinePoint>,
}

impl Chart {
    /// Build a chart for a `width` x `height` canvas. Bar colors are drawn from the thread RNG.
    pub fn new(width: f64, height: f64, dataset: Dataset, options: ChartOptions) -> Result<Self> {
        Self::with_random_source(Size::new(width, height), dataset, options, &mut ThreadRandom::new())
    }

    /// Omitted dimensions fall back to the container's measured size.
    pub fn in_container(
        container: Size,
        width: Option<f64>,
        height: Option<f64>,
        dataset: Dataset,
        options: ChartOptions,
    ) -> Result<Self> {
        let size = Size::new(width.unwrap_or(container.width), height.unwrap_or(container.height));
        Self::with_random_source(size, dataset, options, &mut ThreadRandom::new())
    }

    pub fn with_random_source<R: RandomSource + ?Sized>(
        size: Size,
        dataset: Dataset,
        options: ChartOptions,
        random: &mut R,
    ) -> Result<Self> {
        let layout = AxisLayout::compute(&dataset, size, &options)?;
        let bars = compute_bar_descriptors(&dataset, &layout, &options, random);
        let line_points = compute_line_points(&dataset, &layout);
        debug!(width = size.width, height = size.height, items = dataset.len(), "chart constructed");
        Ok(Self { dataset, options, layout, bars, line_points })
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn layout(&self) -> &AxisLayout { &self.layout }
    pub fn bars(&self) -> &[BarDescriptor] { &self.bars }
    pub fn line_points(&self) -> &[LinePoint] { &self.line_points }

    pub fn size(&self) -> Size {
        Size::new(self.layout.width, self.layout.height)
    }

    /// Draw the frame and the bars. With `animation`, the bars are handed to a
    /// [`BarAnimation`] whose first frame is already drawn; drive the rest with
    /// [`crate::animation::start`] or by calling `next_frame` per host tick.
    pub fn draw_bar_chart<R: Renderer>(&self, renderer: &mut R, opts: DrawOptions) -> Option<BarAnimation> {
        self.draw_frame(renderer);
        if opts.animation {
            let mut anim = BarAnimation::new(&self.bars, BAR_BORDER_WIDTH);
            anim.next_frame(renderer);
            Some(anim)
        } else {
            self.draw_bars(renderer);
            None
        }
    }

    /// Draw the frame and the line series; see [`Chart::draw_bar_chart`] for animation.
    pub fn draw_line_chart<R: Renderer>(&self, renderer: &mut R, opts: DrawOptions) -> Option<LineAnimation> {
        self.draw_frame(renderer);
        if opts.animation {
            let mut anim = LineAnimation::new(
                &self.line_points,
                line_origin(&self.layout),
                self.line_stroke(),
                self.marker_color(),
                marker_radius(&self.layout),
            );
            anim.next_frame(renderer);
            Some(anim)
        } else {
            self.draw_lines(renderer);
            None
        }
    }

    fn line_color(&self) -> Color {
        self.options.color.unwrap_or(self.options.theme.line_stroke)
    }

    /// Point markers keep the label color even when the series color is overridden.
    fn marker_color(&self) -> Color {
        self.options.theme.label
    }

    fn line_stroke(&self) -> Stroke {
        Stroke::new(self.line_color(), self.options.theme.line_width())
    }

    fn label_style(&self, align: TextAlign, baseline: TextBaseline) -> TextStyle {
        TextStyle {
            size: self.layout.vertical_font_size,
            color: self.options.theme.label,
            family: self.options.theme.font_family.to_string(),
            align,
            baseline,
        }
    }

    // ---- frame -----------------------------------------------------------------

    fn draw_frame<R: Renderer>(&self, renderer: &mut R) {
        let o = &self.options;
        if o.draw_axis_y { self.draw_vertical_axis(renderer); }
        if o.draw_labels { self.draw_vertical_labels(renderer); }
        if o.draw_axis_x { self.draw_horizontal_axis(renderer); }
        if o.draw_labels { self.draw_horizontal_labels(renderer); }
        if o.draw_guidelines { self.draw_horizontal_guidelines(renderer); }
    }

    fn axis_stroke(&self) -> Stroke {
        Stroke::new(self.options.theme.axis_line, self.options.theme.axis_width)
    }

    fn draw_vertical_axis<R: Renderer>(&self, renderer: &mut R) {
        let s = vertical_axis(&self.layout);
        renderer.draw_line(s.from, s.to, &self.axis_stroke());
    }

    fn draw_horizontal_axis<R: Renderer>(&self, renderer: &mut R) {
        let s = horizontal_axis(&self.layout);
        renderer.draw_line(s.from, s.to, &self.axis_stroke());
    }

    fn draw_vertical_labels<R: Renderer>(&self, renderer: &mut R) {
        let style = self.label_style(TextAlign::Right, TextBaseline::Alphabetic);
        for tick in vertical_tick_labels(&self.layout) {
            renderer.draw_text(&tick.text, tick.at, &style);
        }
    }

    fn draw_horizontal_labels<R: Renderer>(&self, renderer: &mut R) {
        let style = self.label_style(TextAlign::Center, TextBaseline::Top);
        for (text, at) in horizontal_labels(&self.dataset, &self.layout) {
            renderer.draw_text(&text, at, &style);
        }
    }

    fn draw_horizontal_guidelines<R: Renderer>(&self, renderer: &mut R) {
        let theme = &self.options.theme;
        let stroke = Stroke::new(theme.guideline, theme.guideline_width);
        for g in horizontal_guidelines(&self.layout) {
            renderer.draw_line(g.from, g.to, &stroke);
        }
    }

    // ---- series ----------------------------------------------------------------

    fn draw_bars<R: Renderer>(&self, renderer: &mut R) {
        for b in &self.bars {
            let stroke = Stroke::new(b.border, BAR_BORDER_WIDTH);
            renderer.draw_rect(b.rect(), Some(b.fill), Some(&stroke));
        }
    }

    fn draw_lines<R: Renderer>(&self, renderer: &mut R) {
        let stroke = self.line_stroke();
        let color = self.marker_color();
        let radius = marker_radius(&self.layout);
        let mut prev = line_origin(&self.layout);
        for p in &self.line_points {
            let at = p.position();
            renderer.draw_line(prev, at, &stroke);
            renderer.fill_circle(at, radius, color);
            prev = at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use crate::render::CommandRecorder;

    fn chart(options: ChartOptions) -> Chart {
        let ds = Dataset::from_pairs([("Jan", 50.0), ("Feb", 150.0), ("Mar", 90.0)]);
        Chart::with_random_source(Size::new(900.0, 600.0), ds, options, &mut SeededRandom::new(42)).unwrap()
    }

    #[test]
    fn container_size_fills_missing_dimensions() {
        let ds = Dataset::from_values(&[5.0]);
        let c = Chart::in_container(Size::new(400.0, 300.0), None, Some(200.0), ds, ChartOptions::default()).unwrap();
        assert_eq!(c.size(), Size::new(400.0, 200.0));
    }

    #[test]
    fn flags_suppress_frame_parts() {
        let c = chart(ChartOptions::default().with_labels(false).with_guidelines(false).with_axis_y(false));
        let mut rec = CommandRecorder::new();
        c.draw_bar_chart(&mut rec, DrawOptions::immediate());
        assert_eq!(rec.texts().count(), 0);
        // horizontal axis only
        assert_eq!(rec.lines().count(), 1);
        assert_eq!(rec.rects().count(), 3);
    }

    #[test]
    fn full_frame_draw_counts() {
        let c = chart(ChartOptions::default());
        let mut rec = CommandRecorder::new();
        assert!(c.draw_line_chart(&mut rec, DrawOptions::immediate()).is_none());
        // 4 ticks + 3 categories
        assert_eq!(rec.texts().count(), 7);
        // 2 axes + 4 guidelines + 3 segments
        assert_eq!(rec.lines().count(), 9);
        assert_eq!(rec.circles().count(), 3);
    }

    #[test]
    fn immediate_draw_is_idempotent() {
        let c = chart(ChartOptions::default());
        let mut a = CommandRecorder::new();
        let mut b = CommandRecorder::new();
        c.draw_bar_chart(&mut a, DrawOptions::immediate());
        c.draw_bar_chart(&mut b, DrawOptions::immediate());
        assert_eq!(a.commands, b.commands);
    }
}
