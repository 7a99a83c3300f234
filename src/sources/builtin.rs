use super::{CatalogSource, SourceError};
use crate::catalog::CatalogData;
use crate::seed;

pub struct SeedSource;

impl CatalogSource for SeedSource {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn fetch(&self) -> Result<CatalogData, SourceError> {
        Ok(seed::agroexpo_2025())
    }
}
