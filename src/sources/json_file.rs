use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CatalogSource, SourceError};
use crate::catalog::CatalogData;

/// Reads `{ "events": [...], "exhibitors": [...], "news": [...] }` from disk.
/// Missing keys load as empty collections.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json_file"
    }

    fn fetch(&self) -> Result<CatalogData, SourceError> {
        debug!(path = %self.path.display(), "reading catalog file");
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
