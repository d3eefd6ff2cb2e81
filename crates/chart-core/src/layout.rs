// File: crates/chart-core/src/layout.rs
// Summary: Axis layout derived once per chart: margins, axis lengths, value ceiling, slot width.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::options::ChartOptions;
use crate::types::{Dataset, Size, AXIS_RATIO, FONT_RATIO};

/// Scalar layout quantities shared by every draw routine.
/// Contract: immutable after [`AxisLayout::compute`]; all fields are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    pub width: f64,
    pub height: f64,
    pub items_number: usize,
    pub vertical_margin: f64,
    pub horizontal_margin: f64,
    pub vertical_axis_width: f64,
    pub horizontal_axis_width: f64,
    pub max_value: f64,
    pub min_value: f64,
    /// Value-axis ceiling: `max_value` rounded up to a multiple of 10.
    pub vertical_upper_bound: f64,
    /// Value step between ticks. Tied to the item count, not the value range.
    pub vertical_label_freq: f64,
    /// Slot width: horizontal space owned by each data point.
    pub horizontal_label_freq: f64,
    /// Used for both label rows.
    pub vertical_font_size: f64,
    /// Width-derived size; computed for hosts that size text by width, not read by the drawing code.
    pub horizontal_font_size: f64,
}

impl AxisLayout {
    pub fn compute(dataset: &Dataset, size: Size, options: &ChartOptions) -> Result<Self> {
        check_dimensions(size)?;
        options.validate()?;

        if dataset.is_empty() {
            return Err(ChartError::DegenerateDataset("dataset is empty".into()));
        }
        if let Some((i, p)) = dataset.iter().enumerate().find(|(_, p)| !p.value.is_finite()) {
            return Err(ChartError::DegenerateDataset(format!(
                "value at index {i} ({}) is not finite: {}",
                p.label, p.value
            )));
        }
        if let Some((i, p)) = dataset.iter().enumerate().find(|(_, p)| p.value < 0.0) {
            return Err(ChartError::Configuration(format!(
                "negative values are not supported (index {i}, {}: {})",
                p.label, p.value
            )));
        }

        // Non-empty and all finite, so both extremes exist.
        let data_max = dataset.max_value().unwrap_or_default();
        let data_min = dataset.min_value().unwrap_or_default();
        let max_value = options.max_value.unwrap_or(data_max);
        let min_value = options.min_value.unwrap_or(data_min);

        if options.max_value.is_some() && max_value <= 0.0 {
            return Err(ChartError::Configuration(format!(
                "maxValue must be positive, got {max_value}"
            )));
        }
        if min_value > max_value {
            return Err(ChartError::Configuration(format!(
                "minValue ({min_value}) is greater than maxValue ({max_value})"
            )));
        }

        let vertical_upper_bound = upper_bound(max_value);
        if vertical_upper_bound <= 0.0 {
            return Err(ChartError::DegenerateDataset(format!(
                "value-axis ceiling resolves to {vertical_upper_bound} (max value {max_value})"
            )));
        }

        let items_number = dataset.len();
        let vertical_margin = size.height * AXIS_RATIO / 100.0;
        let horizontal_margin = size.width * AXIS_RATIO / 100.0;
        let vertical_axis_width = size.height - 2.0 * vertical_margin;
        let horizontal_axis_width = size.width - 2.0 * horizontal_margin;

        let layout = Self {
            width: size.width,
            height: size.height,
            items_number,
            vertical_margin,
            horizontal_margin,
            vertical_axis_width,
            horizontal_axis_width,
            max_value,
            min_value,
            vertical_upper_bound,
            vertical_label_freq: vertical_upper_bound / items_number as f64,
            horizontal_label_freq: horizontal_axis_width / items_number as f64,
            vertical_font_size: size.height * FONT_RATIO / 100.0,
            horizontal_font_size: size.width * FONT_RATIO / 100.0,
        };
        debug!(
            items = layout.items_number,
            upper_bound = layout.vertical_upper_bound,
            slot = layout.horizontal_label_freq,
            "computed axis layout"
        );
        Ok(layout)
    }

    /// Y of the horizontal axis line; bars and the line series grow up from here.
    #[inline]
    pub fn baseline_y(&self) -> f64 {
        self.height - self.vertical_margin
    }

    /// Pixel height of `value` above the baseline.
    #[inline]
    pub fn scale_value(&self, value: f64) -> f64 {
        self.vertical_axis_width * value / self.vertical_upper_bound
    }

    /// Pixel distance between consecutive value ticks.
    #[inline]
    pub fn tick_spacing(&self) -> f64 {
        (self.vertical_axis_width / self.vertical_upper_bound) * self.vertical_label_freq
    }

    #[inline]
    pub fn slot_left(&self, index: usize) -> f64 {
        self.horizontal_margin + index as f64 * self.horizontal_label_freq
    }

    #[inline]
    pub fn slot_center(&self, index: usize) -> f64 {
        self.slot_left(index) + self.horizontal_label_freq / 2.0
    }
}

/// Round `max_value` up to the nearest multiple of 10.
pub fn upper_bound(max_value: f64) -> f64 {
    (max_value / 10.0).ceil() * 10.0
}

fn check_dimensions(size: Size) -> Result<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(())
    } else {
        Err(ChartError::InvalidDimension { width: size.width, height: size.height })
    }
}
