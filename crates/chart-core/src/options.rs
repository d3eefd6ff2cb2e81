// File: crates/chart-core/src/options.rs
// Summary: Chart configuration fixed at construction, and per-draw options.

use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub draw_labels: bool,
    pub draw_guidelines: bool,
    pub draw_axis_x: bool,
    pub draw_axis_y: bool,
    /// Fixed color for every bar and the line series; bars are colored randomly when unset.
    pub color: Option<Color>,
    /// Overrides the dataset maximum when computing the value-axis ceiling.
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            draw_labels: true,
            draw_guidelines: true,
            draw_axis_x: true,
            draw_axis_y: true,
            color: None,
            max_value: None,
            min_value: None,
            theme: Theme::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_labels(mut self, on: bool) -> Self { self.draw_labels = on; self }
    pub fn with_guidelines(mut self, on: bool) -> Self { self.draw_guidelines = on; self }
    pub fn with_axis_x(mut self, on: bool) -> Self { self.draw_axis_x = on; self }
    pub fn with_axis_y(mut self, on: bool) -> Self { self.draw_axis_y = on; self }
    pub fn with_color(mut self, color: Color) -> Self { self.color = Some(color); self }
    pub fn with_max_value(mut self, v: f64) -> Self { self.max_value = Some(v); self }
    pub fn with_min_value(mut self, v: f64) -> Self { self.min_value = Some(v); self }
    pub fn with_theme(mut self, theme: Theme) -> Self { self.theme = theme; self }

    /// Reject overrides that cannot describe a value range.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("maxValue", self.max_value), ("minValue", self.min_value)] {
            if let Some(v) = v {
                if !v.is_finite() {
                    return Err(ChartError::Configuration(format!("{name} must be finite, got {v}")));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ChartError::Configuration(format!(
                    "minValue ({min}) is greater than maxValue ({max})"
                )));
            }
        }
        Ok(())
    }
}

/// Options for a single `draw_bar_chart` / `draw_line_chart` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOptions {
    pub animation: bool,
}

impl DrawOptions {
    pub const fn immediate() -> Self { Self { animation: false } }
    pub const fn animated() -> Self { Self { animation: true } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_draw_everything() {
        let o = ChartOptions::default();
        assert!(o.draw_labels && o.draw_guidelines && o.draw_axis_x && o.draw_axis_y);
        assert!(o.validate().is_ok());
        assert!(!DrawOptions::default().animation);
    }

    #[test]
    fn min_above_max_is_rejected() {
        let o = ChartOptions::default().with_min_value(50.0).with_max_value(10.0);
        assert!(matches!(o.validate(), Err(ChartError::Configuration(_))));
    }

    #[test]
    fn non_finite_override_is_rejected() {
        let o = ChartOptions::default().with_max_value(f64::NAN);
        assert!(matches!(o.validate(), Err(ChartError::Configuration(_))));
    }
}
