// File: crates/chart-core/src/render.rs
// Summary: Narrow drawing capability the chart paints through, plus an in-memory command recorder.

use crate::color::Color;
use crate::types::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of the text relative to the given y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Alphabetic,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub family: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Drawing surface operations. Implementations own the pixels; the chart
/// only describes what goes where.
pub trait Renderer {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    /// Fill and/or outline `rect`. Negative heights extend upward.
    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<&Stroke>);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);
    /// Reset `rect` to the surface background.
    fn clear_rect(&mut self, rect: Rect);
}

/// One recorded [`Renderer`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, stroke: Stroke },
    Rect { rect: Rect, fill: Option<Color>, stroke: Option<Stroke> },
    Circle { center: Point, radius: f64, color: Color },
    Text { text: String, at: Point, style: TextStyle },
    Clear { rect: Rect },
}

/// Headless renderer that keeps every call as a display list.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Drop everything recorded so far and return it.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replay the recorded list onto another renderer.
    pub fn replay<R: Renderer + ?Sized>(&self, target: &mut R) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Line { from, to, stroke } => target.draw_line(*from, *to, stroke),
                DrawCommand::Rect { rect, fill, stroke } => target.draw_rect(*rect, *fill, stroke.as_ref()),
                DrawCommand::Circle { center, radius, color } => target.fill_circle(*center, *radius, *color),
                DrawCommand::Text { text, at, style } => target.draw_text(text, *at, style),
                DrawCommand::Clear { rect } => target.clear_rect(*rect),
            }
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, .. } => Some(*center),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Renderer for CommandRecorder {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }

    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<&Stroke>) {
        self.commands.push(DrawCommand::Rect { rect, fill, stroke: stroke.copied() });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: style.clone() });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear { rect });
    }
}
