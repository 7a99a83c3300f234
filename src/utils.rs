use dirs::data_dir;
use once_cell::sync::Lazy;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const APP_DIR: &str = "agroexpo-guide";

static DEFAULT_DATA_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    let base = data_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    base.join(APP_DIR)
});

pub fn default_data_root() -> PathBuf {
    DEFAULT_DATA_ROOT.clone()
}

pub fn config_path(data_root: &Path) -> PathBuf {
    data_root.join("config.json")
}

pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
