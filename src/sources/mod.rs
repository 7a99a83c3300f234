pub mod builtin;
pub mod json_file;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::CatalogData;
use crate::store::DomainStore;

pub use builtin::SeedSource;
pub use json_file::JsonFileSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Somewhere a full catalog can be fetched from at startup.
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn fetch(&self) -> Result<CatalogData, SourceError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub events: usize,
    pub exhibitors: usize,
    pub news: usize,
}

/// Fetches from `source` and replaces the store's whole catalog.
///
/// On failure the store keeps its previous catalog.
pub fn load_into(
    store: &DomainStore,
    source: &dyn CatalogSource,
) -> Result<LoadSummary, SourceError> {
    let data = source.fetch()?;
    let summary = LoadSummary {
        events: data.events.len(),
        exhibitors: data.exhibitors.len(),
        news: data.news.len(),
    };
    store.load_catalog(data);
    info!(
        source = source.name(),
        events = summary.events,
        exhibitors = summary.exhibitors,
        news = summary.news,
        "catalog loaded"
    );
    Ok(summary)
}

/// The JSON file when one is configured, the built-in seed otherwise.
pub fn select(catalog_path: Option<PathBuf>) -> Box<dyn CatalogSource> {
    match catalog_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource),
    }
}
