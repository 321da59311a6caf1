//! Minimal drawing-surface abstraction.
//!
//! The renderer computes all geometry itself and only needs a handful of
//! primitives, so the chart logic stays unit-testable without a real
//! rendering backend. Production rendering goes through the plotters adapter;
//! tests use [`RecordingSurface`].

use anyhow::Result;

/// Visual role of a drawn element; the adapter maps roles to concrete style.
/// Mirrors the CSS classes (`bar`, `axis`, `grid`) a hosting page would hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Bar,
    Axis,
    Grid,
    Label,
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Drawing primitives the column-chart renderer needs.
pub trait Surface {
    /// Drop any prior content. Called first on every render so a redraw
    /// fully replaces the previous chart.
    fn clear(&mut self) -> Result<()>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink) -> Result<()>;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, ink: Ink) -> Result<()>;

    /// Draw a text run. Empty labels are skipped by callers, so
    /// implementations may assume `text` is non-empty.
    fn text(&mut self, x: f64, y: f64, text: &str, anchor: TextAnchor) -> Result<()>;
}

/// A recorded drawing operation, for asserting renderer output in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        ink: Ink,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        ink: Ink,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
    },
}

/// Surface that records every operation instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self, ink: Ink) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Rect { ink: i, .. } if *i == ink))
            .collect()
    }

    pub fn lines(&self, ink: Ink) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { ink: i, .. } if *i == ink))
            .collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.ops.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink) -> Result<()> {
        self.ops.push(Op::Rect {
            x,
            y,
            width,
            height,
            ink,
        });
        Ok(())
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, ink: Ink) -> Result<()> {
        self.ops.push(Op::Line { x1, y1, x2, y2, ink });
        Ok(())
    }

    fn text(&mut self, x: f64, y: f64, text: &str, anchor: TextAnchor) -> Result<()> {
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
            anchor,
        });
        Ok(())
    }
}
