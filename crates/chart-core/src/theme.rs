// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for axis, label, guideline and series colors.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_width: f64,
    pub guideline: Color,
    pub guideline_width: f64,
    pub label: Color,
    pub font_family: &'static str,
    /// Line series stroke when no series color is set.
    pub line_stroke: Color,
    /// Opacity applied to randomly colored bar fills.
    pub bar_fill_opacity: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::GREY,
            axis_width: 0.75,
            guideline: Color::LIGHT_GREY,
            guideline_width: 0.5,
            label: Color::LABEL_GREY,
            font_family: "sans-serif",
            line_stroke: Color::LABEL_GREY,
            bar_fill_opacity: 0.5,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_width: 0.75,
            guideline: Color::rgb(40, 40, 45),
            guideline_width: 0.5,
            label: Color::rgb(235, 235, 245),
            font_family: "sans-serif",
            line_stroke: Color::rgb(64, 160, 255),
            bar_fill_opacity: 0.75,
        }
    }

    /// Line width used for the plotted line series.
    pub fn line_width(&self) -> f64 {
        self.axis_width * 2.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
