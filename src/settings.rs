//! Runtime settings read from environment variables.
//!
//! - `AGROEXPO_DATA_DIR` - where `config.json` lives (default: the platform
//!   data directory joined with `agroexpo-guide`)
//! - `AGROEXPO_CATALOG` - JSON catalog to load instead of the built-in seed
//! - `AGROEXPO_TODAY` - ISO date used as "today" by the home overview
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `RUST_LOG` - log filter (default: `info`)

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::utils;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get("AGROEXPO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(utils::default_data_root);
        let catalog_path = get("AGROEXPO_CATALOG").map(PathBuf::from);
        let today = get("AGROEXPO_TODAY")
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("AGROEXPO_TODAY must be YYYY-MM-DD, got {raw:?}"))
            })
            .transpose()?;
        let log_format = get("LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            catalog_path,
            today,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = settings(&[]).expect("settings");
        assert_eq!(settings.data_dir, utils::default_data_root());
        assert_eq!(settings.catalog_path, None);
        assert_eq!(settings.today, None);
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let settings = settings(&[
            ("AGROEXPO_DATA_DIR", "/tmp/agro"),
            ("AGROEXPO_CATALOG", "catalog.json"),
            ("AGROEXPO_TODAY", "2025-05-23"),
            ("LOG_FORMAT", "JSON"),
        ])
        .expect("settings");
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/agro"));
        assert_eq!(settings.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2025, 5, 23));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_malformed_today() {
        let err = settings(&[("AGROEXPO_TODAY", "23/05/2025")]).unwrap_err();
        assert!(err.to_string().contains("AGROEXPO_TODAY"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let settings = settings(&[("AGROEXPO_CATALOG", "  ")]).expect("settings");
        assert_eq!(settings.catalog_path, None);
    }
}
