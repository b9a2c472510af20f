//! Catalog loading.
//!
//! [`read_catalog`] is the fallible layer (read, parse, validate) used by
//! `rescat check` and the CLI's verbose fallback reporting. [`load`] wraps it
//! with the availability contract hosts rely on: it never fails outward and
//! degrades to the built-in table instead.

use std::{fmt, fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::issue::Severity;

use super::{ResolutionCatalog, validate};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on disk.
    Path(PathBuf),
    /// An HTTP(S) endpoint serving the same JSON.
    Url(String),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load a catalog, falling back to the built-in table on any failure.
///
/// This call never fails outward: a missing file, a network error, malformed
/// JSON, or an invariant violation all degrade to
/// [`ResolutionCatalog::default`]. The failure is logged, not surfaced.
pub fn load(source: &CatalogSource) -> ResolutionCatalog {
    match read_catalog(source) {
        Ok(catalog) => {
            info!(source = %source, groups = catalog.len(), "catalog loaded");
            catalog
        }
        Err(err) => {
            warn!(
                source = %source,
                reason = %format!("{:#}", err),
                "catalog load failed, using built-in table"
            );
            ResolutionCatalog::default()
        }
    }
}

/// Read and validate a catalog from `source`. Unlike [`load`], failures are
/// returned to the caller.
pub fn read_catalog(source: &CatalogSource) -> Result<ResolutionCatalog> {
    let raw = match source {
        CatalogSource::Path(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?,
        CatalogSource::Url(url) => fetch_remote(url)?,
    };
    parse_catalog(&raw)
}

/// Parse catalog JSON and enforce the invariants.
pub fn parse_catalog(raw: &str) -> Result<ResolutionCatalog> {
    let catalog: ResolutionCatalog =
        serde_json::from_str(raw).context("failed to parse catalog JSON")?;
    let issues = validate(&catalog);
    if let Some(first) = issues.iter().find(|issue| issue.severity == Severity::Error) {
        bail!("catalog failed validation: {}", first);
    }
    Ok(catalog)
}

fn fetch_remote(url: &str) -> Result<String> {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        tokio::task::block_in_place(|| handle.block_on(fetch_remote_async(url)))
    } else {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to create runtime for catalog download")?;
        runtime.block_on(fetch_remote_async(url))
    }
}

async fn fetch_remote_async(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch catalog from {}", url))?;
    let status = response.status();
    if !status.is_success() {
        bail!("catalog endpoint {} returned {}", url, status);
    }
    response
        .text()
        .await
        .with_context(|| format!("failed to read catalog body from {}", url))
}
