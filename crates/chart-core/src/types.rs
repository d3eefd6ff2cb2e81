// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (data points, sizes, layout ratios, animation steps).

use std::fmt;

/// Default surface width in pixels.
pub const WIDTH: f64 = 900.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 600.0;

/// Share of each canvas dimension reserved as axis margin, in percent.
pub const AXIS_RATIO: f64 = 10.0;
/// Label font size as a share of the canvas dimension, in percent.
pub const FONT_RATIO: f64 = 2.5;
/// Gutter on each side of a bar, as a fraction of its slot.
pub const BAR_GUTTER_RATIO: f64 = 2.0 / AXIS_RATIO;
/// Frames a bar needs to grow from zero to its final height.
pub const BAR_ANIMATION_STEPS: usize = 1000;
/// Frames the line cursor needs to travel one segment.
pub const LINE_ANIMATION_STEPS: usize = 50;
/// Marker radius is the slot width divided by this.
pub const MARKER_RADIUS_DIVISOR: f64 = 10.0;

/// Category label shown under a slot on the horizontal axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Index(usize),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(s) => f.write_str(s),
            Label::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self { Label::Text(s.to_string()) }
}

impl From<String> for Label {
    fn from(s: String) -> Self { Label::Text(s) }
}

impl From<usize> for Label {
    fn from(i: usize) -> Self { Label::Index(i) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: Label,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<Label>, value: f64) -> Self {
        Self { label: label.into(), value }
    }

    pub fn indexed(index: usize, value: f64) -> Self {
        Self { label: Label::Index(index), value }
    }
}

/// Ordered data points; order is the left-to-right rendering order.
/// Contract: values are only checked when a layout is computed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Bare values; each label becomes the value's index.
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(values.iter().enumerate().map(|(i, &v)| DataPoint::indexed(i, v)).collect())
    }

    pub fn from_pairs<L: Into<Label>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self::new(pairs.into_iter().map(|(l, v)| DataPoint::new(l, v)).collect())
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> { self.points.iter() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Largest value, or `None` for an empty dataset.
    pub fn max_value(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    pub fn min_value(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }
}

impl FromIterator<DataPoint> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

/// Canvas dimensions, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at (`x`, `y`).
/// `height` may be negative: the rectangle then extends upward from `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Same rectangle with non-negative width and height.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 { (self.x + self.width, -self.width) } else { (self.x, self.width) };
        let (y, height) = if self.height < 0.0 { (self.y + self.height, -self.height) } else { (self.y, self.height) };
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 { self.normalized().x }
    pub fn top(&self) -> f64 { self.normalized().y }
    pub fn right(&self) -> f64 { let n = self.normalized(); n.x + n.width }
    pub fn bottom(&self) -> f64 { let n = self.normalized(); n.y + n.height }
}

/// Straight line between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}
