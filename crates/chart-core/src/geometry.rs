// File: crates/chart-core/src/geometry.rs
// Summary: Per-element render descriptors (bars, line points, ticks, guidelines, axes) from an AxisLayout.

use tracing::trace;

use crate::color::Color;
use crate::layout::AxisLayout;
use crate::options::ChartOptions;
use crate::random::{random_rgb, RandomSource};
use crate::types::{
    Dataset, Point, Rect, Segment, AXIS_RATIO, BAR_ANIMATION_STEPS, BAR_GUTTER_RATIO,
    LINE_ANIMATION_STEPS, MARKER_RADIUS_DIVISOR,
};

/// Final geometry of one bar, anchored on the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarDescriptor {
    pub x: f64,
    /// Baseline y; the bar extends from here.
    pub y: f64,
    pub width: f64,
    /// Signed; negative extends upward.
    pub height: f64,
    pub fill: Color,
    pub border: Color,
}

impl BarDescriptor {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn rect_with_height(&self, height: f64) -> Rect {
        Rect::new(self.x, self.y, self.width, height)
    }

    /// Empty space on each side of the bar within its slot.
    pub fn slot_gutter(&self) -> f64 {
        self.width * BAR_GUTTER_RATIO / (1.0 - 2.0 * BAR_GUTTER_RATIO)
    }

    /// Height added per animation frame.
    pub fn height_velocity(&self) -> f64 {
        self.height / BAR_ANIMATION_STEPS as f64
    }
}

/// A vertex of the plotted line and the cursor velocity that reaches it
/// from the previous vertex (the baseline origin for the first one).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub x_velocity: f64,
    pub y_velocity: f64,
}

impl LinePoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub value: f64,
    pub text: String,
    pub at: Point,
}

pub fn compute_bar_descriptors<R: RandomSource + ?Sized>(
    dataset: &Dataset,
    layout: &AxisLayout,
    options: &ChartOptions,
    random: &mut R,
) -> Vec<BarDescriptor> {
    let slot = layout.horizontal_label_freq;
    let bars: Vec<BarDescriptor> = dataset
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (fill, border) = match options.color {
                Some(c) => (c, c),
                None => {
                    let c = random_rgb(random);
                    (c.with_opacity(options.theme.bar_fill_opacity), c)
                }
            };
            BarDescriptor {
                x: layout.slot_left(i) + BAR_GUTTER_RATIO * slot,
                y: layout.baseline_y(),
                width: slot - 2.0 * BAR_GUTTER_RATIO * slot,
                height: -layout.scale_value(p.value),
                fill,
                border,
            }
        })
        .collect();
    trace!(count = bars.len(), "bar descriptors");
    bars
}

pub fn compute_line_points(dataset: &Dataset, layout: &AxisLayout) -> Vec<LinePoint> {
    let steps = LINE_ANIMATION_STEPS as f64;
    let mut prev = line_origin(layout);
    dataset
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = layout.slot_center(i);
            let y = layout.baseline_y() - layout.scale_value(p.value);
            let point = LinePoint {
                x,
                y,
                x_velocity: (x - prev.x) / steps,
                y_velocity: (y - prev.y) / steps,
            };
            prev = Point::new(x, y);
            point
        })
        .collect()
}

/// Where the line series starts: the foot of the vertical axis.
pub fn line_origin(layout: &AxisLayout) -> Point {
    Point::new(layout.horizontal_margin, layout.baseline_y())
}

pub fn marker_radius(layout: &AxisLayout) -> f64 {
    layout.horizontal_label_freq / MARKER_RADIUS_DIVISOR
}

/// `items_number + 1` value labels, top (upper bound) to bottom.
pub fn vertical_tick_labels(layout: &AxisLayout) -> Vec<TickLabel> {
    let x = layout.horizontal_margin - layout.horizontal_margin / AXIS_RATIO;
    (0..=layout.items_number)
        .map(|i| {
            // upper * i / n rather than i * freq: the last tick must land on exactly 0
            let step = layout.vertical_upper_bound * i as f64 / layout.items_number as f64;
            let value = (layout.vertical_upper_bound - step).ceil();
            TickLabel {
                value,
                text: format!("{value}"),
                at: Point::new(x, tick_y(layout, i)),
            }
        })
        .collect()
}

/// Category labels centered under each slot.
pub fn horizontal_labels(dataset: &Dataset, layout: &AxisLayout) -> Vec<(String, Point)> {
    let y = layout.baseline_y() + layout.vertical_margin / AXIS_RATIO;
    dataset
        .iter()
        .enumerate()
        .map(|(i, p)| (p.label.to_string(), Point::new(layout.slot_center(i), y)))
        .collect()
}

/// One guideline per value tick, spanning the horizontal axis.
pub fn horizontal_guidelines(layout: &AxisLayout) -> Vec<Segment> {
    let left = layout.horizontal_margin;
    let right = layout.horizontal_margin + layout.horizontal_axis_width;
    (0..=layout.items_number)
        .map(|i| {
            let y = tick_y(layout, i);
            Segment::new(Point::new(left, y), Point::new(right, y))
        })
        .collect()
}

pub fn vertical_axis(layout: &AxisLayout) -> Segment {
    Segment::new(
        Point::new(layout.horizontal_margin, layout.vertical_margin),
        Point::new(layout.horizontal_margin, layout.baseline_y()),
    )
}

pub fn horizontal_axis(layout: &AxisLayout) -> Segment {
    Segment::new(
        Point::new(layout.horizontal_margin, layout.baseline_y()),
        Point::new(layout.width - layout.horizontal_margin, layout.baseline_y()),
    )
}

#[inline]
fn tick_y(layout: &AxisLayout, i: usize) -> f64 {
    layout.vertical_margin + i as f64 * layout.tick_spacing()
}
