//! Column-chart rendering.
//!
//! The renderer computes all pixel geometry itself (scales, ticks, bars) and
//! emits it through the small [`Surface`] trait, so the logic is testable
//! without a rendering backend. [`render_svg`] pairs it with the plotters SVG
//! backend to produce a standalone SVG document.

pub mod axis;
pub mod plotters_adapter;
pub mod scale;
pub mod style;
pub mod surface;

pub use plotters_adapter::PlottersSurface;
pub use style::ChartStyle;
pub use surface::{Ink, RecordingSurface, Surface, TextAnchor};

use anyhow::Result;
use plotters_svg::SVGBackend;

use crate::models::{Breakpoint, UNIT_DIVISOR, YearDomain};
use scale::{BandScale, LinearScale};

/// Fixed chart margins (px).
pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_RIGHT: f64 = 5.0;
pub const MARGIN_BOTTOM: f64 = 25.0;
pub const MARGIN_LEFT: f64 = 30.0;

/// Fraction of each band step left as spacing between bars.
const BAND_PADDING: f64 = 0.1;

/// Length of axis tick marks (px).
const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label (px).
const TICK_LABEL_GAP: f64 = 3.0;

/// Everything one chart render needs. Constructed fresh per call, never
/// mutated, discarded after the render.
#[derive(Debug, Clone)]
pub struct ChartConfig<'a> {
    /// Outer pixel width; the height is derived from it via `aspect_ratio`.
    pub width: f64,
    /// Yearly counts in raw units. May be shorter than the year domain, in
    /// which case trailing bars are simply absent.
    pub data: &'a [f64],
    /// Width / height ratio of the outer chart box.
    pub aspect_ratio: f64,
    /// Upper bound of the value scale, in millions.
    pub max: f64,
    /// Explicit y-axis tick values (millions); nothing else gets a tick.
    pub y_ticks: &'a [f64],
    pub years: YearDomain,
    pub breakpoint: Breakpoint,
}

impl ChartConfig<'_> {
    /// Inner drawing width, margins excluded.
    pub fn chart_width(&self) -> f64 {
        self.width - MARGIN_LEFT - MARGIN_RIGHT
    }

    /// Inner drawing height; derived from width and aspect ratio, never
    /// passed independently.
    pub fn chart_height(&self) -> f64 {
        (self.width / self.aspect_ratio).ceil() - MARGIN_TOP - MARGIN_BOTTOM
    }

    pub fn outer_width(&self) -> f64 {
        self.width
    }

    pub fn outer_height(&self) -> f64 {
        (self.width / self.aspect_ratio).ceil()
    }
}

/// Render one column chart onto `surface`.
///
/// The surface is cleared first: a repeat call fully replaces the previous
/// chart, leaving no leaked elements. Draw order is axes, gridlines, bars.
pub fn render_column_chart(config: &ChartConfig<'_>, surface: &mut dyn Surface) -> Result<()> {
    surface.clear()?;

    let chart_w = config.chart_width();
    let chart_h = config.chart_height();

    let x = BandScale::new(config.years.len(), chart_w, BAND_PADDING);
    let y = LinearScale::new((0.0, config.max), (chart_h, 0.0));

    draw_x_axis(config, &x, chart_h, surface)?;
    draw_y_axis(config, &y, surface)?;
    draw_y_grid(config, &y, chart_w, surface)?;
    draw_bars(config, &x, &y, surface)?;

    log::debug!(
        "rendered column chart: {} bars, {:.0}x{:.0} inner px",
        config.data.len().min(config.years.len()),
        chart_w,
        chart_h,
    );
    Ok(())
}

fn draw_x_axis(
    config: &ChartConfig<'_>,
    x: &BandScale,
    chart_h: f64,
    surface: &mut dyn Surface,
) -> Result<()> {
    let baseline = MARGIN_TOP + chart_h;
    surface.line(
        MARGIN_LEFT,
        baseline,
        MARGIN_LEFT + config.chart_width(),
        baseline,
        Ink::Axis,
    )?;

    for (i, tick) in axis::year_ticks(&config.years, config.breakpoint)
        .iter()
        .enumerate()
    {
        let cx = MARGIN_LEFT + x.position(i) + x.band_width() / 2.0;
        surface.line(cx, baseline, cx, baseline + TICK_SIZE, Ink::Axis)?;
        if !tick.label.is_empty() {
            surface.text(
                cx,
                baseline + TICK_SIZE + TICK_LABEL_GAP,
                &tick.label,
                TextAnchor::Middle,
            )?;
        }
    }
    Ok(())
}

fn draw_y_axis(config: &ChartConfig<'_>, y: &LinearScale, surface: &mut dyn Surface) -> Result<()> {
    surface.line(
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        MARGIN_TOP + config.chart_height(),
        Ink::Axis,
    )?;

    for tick in axis::value_ticks(config.y_ticks) {
        let ty = MARGIN_TOP + y.map(tick.value);
        surface.line(MARGIN_LEFT - TICK_SIZE, ty, MARGIN_LEFT, ty, Ink::Axis)?;
        if !tick.label.is_empty() {
            surface.text(
                MARGIN_LEFT - TICK_SIZE - TICK_LABEL_GAP,
                ty,
                &tick.label,
                TextAnchor::End,
            )?;
        }
    }
    Ok(())
}

/// Horizontal reference lines at the y-tick positions, full chart width, no
/// labels. Drawn after the axes.
fn draw_y_grid(
    config: &ChartConfig<'_>,
    y: &LinearScale,
    chart_w: f64,
    surface: &mut dyn Surface,
) -> Result<()> {
    for &value in config.y_ticks {
        let ty = MARGIN_TOP + y.map(value);
        surface.line(MARGIN_LEFT, ty, MARGIN_LEFT + chart_w, ty, Ink::Grid)?;
    }
    Ok(())
}

fn draw_bars(
    config: &ChartConfig<'_>,
    x: &BandScale,
    y: &LinearScale,
    surface: &mut dyn Surface,
) -> Result<()> {
    let slots = config.years.len().min(config.data.len());
    for (i, &raw) in config.data.iter().take(slots).enumerate() {
        let value = raw / UNIT_DIVISOR;
        let top = y.map(value);
        let height = y.map(0.0) - top;
        surface.fill_rect(
            MARGIN_LEFT + x.position(i),
            MARGIN_TOP + top,
            x.band_width(),
            height,
            Ink::Bar,
        )?;
    }
    Ok(())
}

/// Render a chart to a standalone SVG document string.
pub fn render_svg(config: &ChartConfig<'_>, style: &ChartStyle) -> Result<String> {
    let size = (
        config.outer_width().round() as u32,
        config.outer_height().round() as u32,
    );
    let mut document = String::new();
    {
        let backend = SVGBackend::with_string(&mut document, size);
        let mut surface = PlottersSurface::new(backend, style.clone());
        render_column_chart(config, &mut surface)?;
        surface.finish()?;
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breakpoint;

    fn config<'a>(data: &'a [f64], ticks: &'a [f64]) -> ChartConfig<'a> {
        ChartConfig {
            width: 800.0,
            data,
            aspect_ratio: 5.0,
            max: 12.0,
            y_ticks: ticks,
            years: YearDomain::new(1975, 2014),
            breakpoint: Breakpoint::Desktop,
        }
    }

    #[test]
    fn derived_geometry_matches_the_fixed_margins() {
        let cfg = config(&[], &[]);
        assert_eq!(cfg.chart_width(), 800.0 - 30.0 - 5.0);
        assert_eq!(cfg.chart_height(), 160.0 - 10.0 - 25.0);
        assert_eq!(cfg.outer_height(), 160.0);
    }

    #[test]
    fn one_bar_per_year_for_a_full_series() {
        let data = vec![0.0; 40];
        let ticks = [0.0, 3.0, 6.0, 9.0, 12.0];
        let cfg = config(&data, &ticks);
        let mut rec = RecordingSurface::new();
        render_column_chart(&cfg, &mut rec).unwrap();
        assert_eq!(rec.rects(Ink::Bar).len(), 40);
    }

    #[test]
    fn short_series_renders_fewer_bars_without_error() {
        let data = vec![1_000_000.0; 7];
        let ticks = [0.0, 6.0, 12.0];
        let cfg = config(&data, &ticks);
        let mut rec = RecordingSurface::new();
        render_column_chart(&cfg, &mut rec).unwrap();
        assert_eq!(rec.rects(Ink::Bar).len(), 7);
    }

    #[test]
    fn bar_heights_follow_the_value_scale() {
        // All zero except 1,000,000 at index 0: that bar maps to value 1.0 on
        // the [0, 12] scale, every other bar has height 0.
        let mut data = vec![0.0; 40];
        data[0] = 1_000_000.0;
        let ticks = [0.0, 3.0, 6.0, 9.0, 12.0];
        let cfg = config(&data, &ticks);
        let chart_h = cfg.chart_height();

        let mut rec = RecordingSurface::new();
        render_column_chart(&cfg, &mut rec).unwrap();
        let heights: Vec<f64> = rec
            .rects(Ink::Bar)
            .iter()
            .map(|op| match op {
                surface::Op::Rect { height, .. } => *height,
                _ => unreachable!(),
            })
            .collect();
        assert!((heights[0] - chart_h / 12.0).abs() < 1e-9);
        assert!(heights[1..].iter().all(|&h| h == 0.0));
        assert!(heights.iter().all(|&h| h >= 0.0));
    }

    #[test]
    fn rerender_replaces_prior_content() {
        let first = vec![2_000_000.0; 40];
        let second = vec![5_000_000.0; 12];
        let ticks = [0.0, 6.0, 12.0];
        let mut rec = RecordingSurface::new();

        render_column_chart(&config(&first, &ticks), &mut rec).unwrap();
        render_column_chart(&config(&second, &ticks), &mut rec).unwrap();

        // Only the second config's bars survive.
        assert_eq!(rec.rects(Ink::Bar).len(), 12);
    }

    #[test]
    fn gridlines_span_the_chart_width() {
        let data = vec![0.0; 40];
        let ticks = [0.0, 6.0, 12.0];
        let cfg = config(&data, &ticks);
        let mut rec = RecordingSurface::new();
        render_column_chart(&cfg, &mut rec).unwrap();
        let grid = rec.lines(Ink::Grid);
        assert_eq!(grid.len(), 3);
        for op in grid {
            if let surface::Op::Line { x1, x2, y1, y2, .. } = op {
                assert_eq!(*x1, MARGIN_LEFT);
                assert!((*x2 - (MARGIN_LEFT + cfg.chart_width())).abs() < 1e-9);
                assert_eq!(y1, y2);
            }
        }
    }

    #[test]
    fn svg_document_is_self_contained() {
        let data = vec![3_000_000.0; 40];
        let ticks = [0.0, 3.0, 6.0, 9.0, 12.0];
        let cfg = config(&data, &ticks);
        let svg = render_svg(&cfg, &ChartStyle::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("xmlns"));
        assert!(svg.contains("</svg>"));
    }
}
