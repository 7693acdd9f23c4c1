use crate::{EdgeError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSettings {
    /// Content root, relative to the target directory.
    pub dir: PathBuf,
    pub pages_dir: Option<PathBuf>,
    pub catalog_dir: Option<PathBuf>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        ContentSettings {
            dir: PathBuf::from("./content/"),
            pages_dir: None,
            catalog_dir: None,
        }
    }
}

impl ContentSettings {
    pub fn pages_path(&self, content_root: &Path) -> PathBuf {
        content_root.join(
            self.pages_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("pages/")),
        )
    }

    pub fn sections_path(&self, content_root: &Path) -> PathBuf {
        content_root.join("sections/")
    }

    pub fn catalog_path(&self, content_root: &Path) -> PathBuf {
        content_root.join(
            self.catalog_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("catalog/")),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub content: Option<ContentSettings>,
}

/// Load settings from `<dir>/settings.toml`.
///
/// A missing file is not an error; every setting has a default.
#[tracing::instrument(skip_all)]
pub fn load(dir: &Path) -> Result<Settings> {
    let path = dir.join("settings.toml");

    if !path.exists() {
        debug!("no settings.toml at {}, using defaults", dir.display());
        return Ok(Settings::default());
    }

    let text = std::fs::read_to_string(&path)
        .map_err(|err| EdgeError::Config(format!("Failed reading {}: {}", path.display(), err)))?;

    let settings = toml::from_str(&text).map_err(|err| {
        EdgeError::Config(format!(
            "Invalid settings.toml at {}: {}",
            path.display(),
            err
        ))
    })?;

    Ok(settings)
}
