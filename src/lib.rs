//! refugee_charts
//!
//! A lightweight Rust library for rendering refugee-population column charts
//! as standalone SVG documents. Pairs with the `refugee-charts` CLI.
//!
//! ### Features
//! - One bar per year over a fixed domain (1975–2014 or 1990–2015 presets)
//! - Responsive layout: mobile/desktop tick sets from the container width,
//!   with a throttled resize-driven re-render gate
//! - Download links: charts serialized into percent-encoded `data:` URIs
//! - Renderer geometry behind a small drawing-surface trait, testable
//!   without a rendering backend
//!
//! ### Example
//! ```no_run
//! use refugee_charts::api;
//! use refugee_charts::page::{self, NoopNotifier, PageSpec};
//!
//! let dataset = api::load_dataset("data/refugees.json")?;
//! let render = page::render_page(&dataset, 1000.0, &PageSpec::since_1975(), &mut NoopNotifier)?;
//! for chart in &render.charts {
//!     std::fs::write(format!("{}.svg", chart.slug), &chart.svg)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod download;
pub mod models;
pub mod page;
pub mod slug;
pub mod throttle;
pub mod viz;

pub use api::{Client, DataError, FetchPolicy};
pub use models::{Breakpoint, Dataset, YearDomain};
pub use page::{PageRender, PageSpec};
