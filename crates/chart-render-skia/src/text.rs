// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout; anchors text by alignment and baseline.

use chart_core::{TextAlign, TextBaseline, TextStyle as LabelStyle};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::to_skia_color;

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const SERIF: &[&str] = &["Times New Roman", "Times", "DejaVu Serif", "serif"];
const MONO: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn families(family: &str) -> Vec<&str> {
        match family.to_ascii_lowercase().as_str() {
            "sans-serif" => SANS.to_vec(),
            "serif" | "times" => SERIF.to_vec(),
            "monospace" => MONO.to_vec(),
            _ => std::iter::once(family).chain(SANS.iter().copied()).collect(),
        }
    }

    pub fn layout(&self, text: &str, style: &LabelStyle) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size((style.size as f32).max(1.0));
        ts.set_color(to_skia_color(style.color));
        ts.set_font_families(Self::families(&style.family).as_slice());

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, style: &LabelStyle) -> f32 {
        // width of the longest line
        self.layout(text, style).longest_line()
    }

    /// Paint `text` so that (`x`, `y`) is its anchor under `style.align` / `style.baseline`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle) {
        let p = self.layout(text, style);
        let w = p.longest_line();
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - w * 0.5,
            TextAlign::Right => x - w,
        };
        // Paragraph paints from its top-left corner
        let top = match style.baseline {
            TextBaseline::Top => y,
            TextBaseline::Alphabetic => y - p.alphabetic_baseline(),
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
