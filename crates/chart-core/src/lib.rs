// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; chart geometry, animation stepping and the renderer capability.

pub mod animation;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod random;
pub mod render;
pub mod theme;
pub mod types;

pub use animation::{start, Animation, BarAnimation, FixedInterval, FrameBudget, FrameScheduler, FrameState, Immediate, LineAnimation};
pub use chart::Chart;
pub use color::Color;
pub use error::{ChartError, Result};
pub use geometry::{BarDescriptor, LinePoint, TickLabel};
pub use layout::AxisLayout;
pub use options::{ChartOptions, DrawOptions};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use render::{CommandRecorder, DrawCommand, Renderer, Stroke, TextAlign, TextBaseline, TextStyle};
pub use theme::Theme;
pub use types::{DataPoint, Dataset, Label, Point, Rect, Segment, Size};
