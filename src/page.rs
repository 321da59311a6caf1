//! One full render pass over the dataset, plus the resize-driven re-render
//! wrapper.
//!
//! A pass classifies the breakpoint once from the measured container width,
//! renders one chart per country (key order, `"total"` excluded), renders the
//! aggregate chart, optionally attaches download links, and finally asks the
//! embedding frame to resize to the new content height. Each pass is
//! synchronous and its output fully replaces the previous one.

use anyhow::Result;
use std::time::Instant;

use crate::download::{DownloadLink, download_link};
use crate::models::{Breakpoint, Dataset, YearDomain};
use crate::slug::slugify;
use crate::throttle::Throttle;
use crate::viz::{ChartConfig, ChartStyle, render_svg};

/// Per-variant layout of the whole page: the year domain, chart proportions,
/// tick sets, and whether charts get download links.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    pub years: YearDomain,
    pub country_aspect: f64,
    pub country_max: f64,
    pub country_ticks_mobile: Vec<f64>,
    pub country_ticks_desktop: Vec<f64>,
    pub total_aspect: f64,
    pub total_max: f64,
    /// Fixed tick list for the aggregate chart, used on every breakpoint.
    pub total_ticks: Vec<f64>,
    pub download_links: bool,
    pub style: ChartStyle,
}

impl PageSpec {
    /// First variant: 1975–2014, wide per-country charts, no download links.
    pub fn since_1975() -> Self {
        Self {
            years: YearDomain::new(1975, 2014),
            country_aspect: 5.0,
            ..Self::base()
        }
    }

    /// Second variant: 1990–2015, squarer per-country charts, each chart
    /// paired with a download link.
    pub fn since_1990() -> Self {
        Self {
            years: YearDomain::new(1990, 2015),
            country_aspect: 2.0,
            download_links: true,
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            years: YearDomain::new(1975, 2014),
            country_aspect: 5.0,
            country_max: 12.0,
            country_ticks_mobile: vec![0.0, 6.0, 12.0],
            country_ticks_desktop: vec![0.0, 3.0, 6.0, 9.0, 12.0],
            total_aspect: 1.0,
            total_max: 60.0,
            total_ticks: vec![0.0, 15.0, 30.0, 45.0, 60.0],
            download_links: false,
            style: ChartStyle::default(),
        }
    }

    pub fn country_ticks(&self, breakpoint: Breakpoint) -> &[f64] {
        if breakpoint.is_mobile() {
            &self.country_ticks_mobile
        } else {
            &self.country_ticks_desktop
        }
    }
}

/// One rendered chart, keyed by the slug of its container element.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub slug: String,
    pub svg: String,
    pub width: f64,
    pub height: f64,
    pub download: Option<DownloadLink>,
}

/// The complete output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRender {
    pub breakpoint: Breakpoint,
    pub charts: Vec<RenderedChart>,
    pub total: RenderedChart,
}

impl PageRender {
    /// Stacked height of all rendered charts; what the hosting iframe is
    /// asked to grow to.
    pub fn content_height(&self) -> f64 {
        self.charts.iter().map(|c| c.height).sum::<f64>() + self.total.height
    }
}

/// Call-out asking the embedding page to resize the hosting iframe. Invoked
/// once per render pass, after all charts are drawn.
pub trait FrameNotifier {
    fn content_resized(&mut self, height: f64);
}

/// Notifier for standalone use (CLI, tests) where no frame is listening.
#[derive(Debug, Default)]
pub struct NoopNotifier;

impl FrameNotifier for NoopNotifier {
    fn content_resized(&mut self, _height: f64) {}
}

/// Run one full render pass at the given container width.
///
/// A missing `"total"` entry renders an empty aggregate chart, consistent
/// with the short-series policy of the renderer.
pub fn render_page(
    dataset: &Dataset,
    width: f64,
    spec: &PageSpec,
    notifier: &mut dyn FrameNotifier,
) -> Result<PageRender> {
    let breakpoint = Breakpoint::classify(width);
    let mut charts = Vec::new();

    for (country, series) in dataset.countries() {
        let config = ChartConfig {
            width,
            data: series,
            aspect_ratio: spec.country_aspect,
            max: spec.country_max,
            y_ticks: spec.country_ticks(breakpoint),
            years: spec.years,
            breakpoint,
        };
        charts.push(render_one(&config, &slugify(country), spec)?);
    }

    let total_series = dataset.total().unwrap_or(&[]);
    let total_config = ChartConfig {
        width,
        data: total_series,
        aspect_ratio: spec.total_aspect,
        max: spec.total_max,
        y_ticks: &spec.total_ticks,
        years: spec.years,
        breakpoint,
    };
    let total = render_one(&total_config, "total", spec)?;

    let render = PageRender {
        breakpoint,
        charts,
        total,
    };
    log::info!(
        "render pass: {} country charts + total at {width:.0}px ({breakpoint:?})",
        render.charts.len(),
    );
    notifier.content_resized(render.content_height());
    Ok(render)
}

fn render_one(config: &ChartConfig<'_>, slug: &str, spec: &PageSpec) -> Result<RenderedChart> {
    let svg = render_svg(config, &spec.style)?;
    let download = if spec.download_links {
        download_link(slug, Some(&svg))
    } else {
        None
    };
    Ok(RenderedChart {
        slug: slug.to_string(),
        svg,
        width: config.outer_width(),
        height: config.outer_height(),
        download,
    })
}

/// Resize-driven re-rendering: a [`Throttle`] gating full passes.
///
/// The container width is measured only when a pass actually runs, so a pass
/// never uses geometry captured at trigger time.
#[derive(Debug, Clone)]
pub struct Responsive {
    spec: PageSpec,
    throttle: Throttle,
}

impl Responsive {
    pub fn new(spec: PageSpec) -> Self {
        Self {
            spec,
            throttle: Throttle::default(),
        }
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    /// Handle a resize event. Returns the new render when the throttle
    /// admits one; a suppressed event stays pending for [`Self::poll`].
    pub fn on_resize(
        &mut self,
        now: Instant,
        measure_width: impl FnOnce() -> f64,
        dataset: &Dataset,
        notifier: &mut dyn FrameNotifier,
    ) -> Result<Option<PageRender>> {
        if !self.throttle.trigger(now) {
            return Ok(None);
        }
        render_page(dataset, measure_width(), &self.spec, notifier).map(Some)
    }

    /// Run a pass deferred by the throttle window, if one is due.
    pub fn poll(
        &mut self,
        now: Instant,
        measure_width: impl FnOnce() -> f64,
        dataset: &Dataset,
        notifier: &mut dyn FrameNotifier,
    ) -> Result<Option<PageRender>> {
        if !self.throttle.poll(now) {
            return Ok(None);
        }
        render_page(dataset, measure_width(), &self.spec, notifier).map(Some)
    }
}
