//! Adapter implementing [`Surface`] on top of a plotters drawing backend.
//!
//! The renderer works in pixel coordinates, so the adapter talks to the raw
//! [`DrawingBackend`] primitives rather than a cartesian chart context. Pair
//! it with `SVGBackend::with_string` to serialize a chart into a standalone
//! SVG document (see [`crate::viz::render_svg`]).

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters_backend::BackendCoord;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{ChartStyle, Rgb8};
use super::surface::{Ink, Surface, TextAnchor};

pub struct PlottersSurface<DB: DrawingBackend> {
    backend: DB,
    style: ChartStyle,
}

fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    pub fn new(backend: DB, style: ChartStyle) -> Self {
        Self { backend, style }
    }

    /// Flush the backend. Must be called once drawing is complete so the
    /// output document is finalized.
    pub fn finish(mut self) -> Result<()> {
        self.backend
            .present()
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }

    fn ink_color(&self, ink: Ink) -> RGBColor {
        match ink {
            Ink::Bar => rgb_color(self.style.bar),
            Ink::Axis => rgb_color(self.style.axis),
            Ink::Grid => rgb_color(self.style.grid),
            Ink::Label => rgb_color(self.style.label),
        }
    }
}

impl<DB: DrawingBackend> Surface for PlottersSurface<DB> {
    fn clear(&mut self) -> Result<()> {
        // Every render targets a freshly created backend document, so there
        // is no prior content to drop here.
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, ink: Ink) -> Result<()> {
        let upper_left: BackendCoord = (px(x), px(y));
        let bottom_right: BackendCoord = (px(x + width), px(y + height));
        self.backend
            .draw_rect(upper_left, bottom_right, &self.ink_color(ink).filled(), true)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, ink: Ink) -> Result<()> {
        let style = self.ink_color(ink).stroke_width(1);
        self.backend
            .draw_line((px(x1), px(y1)), (px(x2), px(y2)), &style)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }

    fn text(&mut self, x: f64, y: f64, text: &str, anchor: TextAnchor) -> Result<()> {
        // X-axis labels hang below their tick (center/top); y-axis labels sit
        // left of theirs (right/center).
        let pos = match anchor {
            TextAnchor::Start => Pos::new(HPos::Left, VPos::Center),
            TextAnchor::Middle => Pos::new(HPos::Center, VPos::Top),
            TextAnchor::End => Pos::new(HPos::Right, VPos::Center),
        };
        let color = self.ink_color(Ink::Label);
        let font = (self.style.font_family.as_str(), self.style.font_px as i32).into_font();
        let style = TextStyle::from(font).color(&color).pos(pos);
        self.backend
            .draw_text(text, &style, (px(x), px(y)))
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }
}
