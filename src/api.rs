//! Loading the refugee dataset: one JSON document, fetched once at startup
//! (or read from disk), shaped as a mapping from country name to a yearly
//! series plus the reserved `"total"` entry. No other fields are read.
//!
//! The observed page ignored fetch errors and rendered with missing data;
//! here a failed load surfaces as [`DataError::Unavailable`] instead, with
//! [`FetchPolicy::EmptyDataset`] available to opt back into the silent
//! behavior.

use crate::models::Dataset;
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::path::Path;
use std::time::Duration;

/// The dataset could not be loaded; rendering has nothing to show.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("refugee data unavailable: {0}")]
    Unavailable(String),
}

/// What a caller wants when the dataset cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Propagate [`DataError::Unavailable`] (default).
    #[default]
    Fail,
    /// Fall back to an empty dataset, rendering nothing. Matches the
    /// original page's (likely unintentional) behavior.
    EmptyDataset,
}

/// Apply a [`FetchPolicy`] to a load result.
pub fn dataset_or_policy(result: Result<Dataset>, policy: FetchPolicy) -> Result<Dataset> {
    match (result, policy) {
        (Ok(ds), _) => Ok(ds),
        (Err(e), FetchPolicy::Fail) => Err(e),
        (Err(e), FetchPolicy::EmptyDataset) => {
            log::warn!("rendering with empty dataset: {e:#}");
            Ok(Dataset::default())
        }
    }
}

/// Read the dataset JSON from disk.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| DataError::Unavailable(format!("{}: {e}", path.display())))?;
    let dataset: Dataset = serde_json::from_reader(file)
        .with_context(|| format!("decode dataset json: {}", path.display()))?;
    log::info!(
        "loaded {} series from {}",
        dataset.series.len(),
        path.display()
    );
    Ok(dataset)
}

/// Synchronous HTTP client for the one-time dataset fetch.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("refugee_charts/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self { http }
    }
}

impl Client {
    /// Fetch the dataset document from `url`.
    ///
    /// Transient failures (5xx / network errors) get a small fixed backoff
    /// before the load is given up as [`DataError::Unavailable`].
    pub fn fetch_dataset(&self, url: &str) -> Result<Dataset> {
        let get_json = |u: &str| -> Result<Dataset> {
            let mut last_err: Option<anyhow::Error> = None;
            for backoff_ms in [100u64, 300, 700] {
                match self.http.get(u).send() {
                    Ok(r) if r.status().is_success() => {
                        return r.json().context("decode dataset json");
                    }
                    Ok(r) if r.status().is_server_error() => { /* retry */ }
                    Ok(r) => bail!("request failed with HTTP {}", r.status()),
                    Err(e) => last_err = Some(e.into()),
                }
                std::thread::sleep(Duration::from_millis(backoff_ms));
            }
            bail!("network error: {:?}", last_err);
        };

        let dataset = get_json(url)
            .map_err(|e| DataError::Unavailable(format!("GET {url}: {e:#}")))?;
        log::info!("fetched {} series from {url}", dataset.series.len());
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_surfaces_as_unavailable() {
        let err = load_dataset("definitely/not/here.json").unwrap_err();
        assert!(err.downcast_ref::<DataError>().is_some());
    }

    #[test]
    fn empty_dataset_policy_swallows_the_error() {
        let failed: Result<Dataset> = Err(DataError::Unavailable("gone".into()).into());
        let ds = dataset_or_policy(failed, FetchPolicy::EmptyDataset).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn fail_policy_propagates() {
        let failed: Result<Dataset> = Err(DataError::Unavailable("gone".into()).into());
        assert!(dataset_or_policy(failed, FetchPolicy::Fail).is_err());
    }
}
