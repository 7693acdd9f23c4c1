//! Async content loading. All filesystem access for the pipeline happens
//! here; documents come back as untyped JSON for the schema layer to
//! validate. Files in one directory are read concurrently.

use crate::{EdgeError, Result};
use compose::SectionStore;
use domain::kind::SectionKind;
use futures::future::try_join_all;
use regex::Regex;
use serde_json::Value as Json;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Basename-only match; anything that is not a `.json` file is ignored.
fn json_filename_regex() -> Result<Regex> {
    Ok(Regex::new(r"(?i)^[^/\\]+\.json$")?)
}

#[tracing::instrument(skip_all)]
pub async fn load_json(path: &Path) -> Result<Json> {
    let text = fs::read_to_string(path).await.map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            EdgeError::NotFound(path.to_path_buf())
        } else {
            EdgeError::Io(err)
        }
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Like `load_json` but a missing file is `None`, not an error.
#[tracing::instrument(skip_all)]
pub async fn load_optional_json(path: &Path) -> Result<Option<Json>> {
    match fs::read_to_string(path).await {
        Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Load `sections/<kind>.json` documents into a store, one per kind.
///
/// A missing directory yields an empty store, and a file whose stem names
/// no known kind is skipped; the composer decides later what a missing
/// document means for the page.
#[tracing::instrument(skip_all)]
pub async fn load_sections(sections_dir: &Path) -> Result<SectionStore> {
    let mut store = SectionStore::new();

    let mut entries = match fs::read_dir(sections_dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(store),
        Err(err) => return Err(err.into()),
    };

    let re = json_filename_regex()?;
    let mut targets: Vec<(SectionKind, PathBuf)> = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !re.is_match(&name) {
            continue;
        }
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some(kind) = SectionKind::parse(&stem) else {
            debug!(file = %name, "skipping file that names no section kind");
            continue;
        };
        targets.push((kind, path));
    }

    let docs = try_join_all(targets.iter().map(|(_, path)| load_json(path))).await?;
    for ((kind, _), doc) in targets.iter().zip(docs) {
        store.insert(*kind, doc);
    }

    Ok(store)
}

/// Load every product document in one category directory as
/// `(file_slug, document)` pairs, sorted by slug.
#[tracing::instrument(skip_all)]
pub async fn load_products(category_dir: &Path) -> Result<Vec<(String, Json)>> {
    let mut entries = match fs::read_dir(category_dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let re = json_filename_regex()?;
    let mut targets: Vec<(String, PathBuf)> = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !re.is_match(&name) {
            continue;
        }
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        targets.push((slug, path));
    }

    // Directory order is not stable across filesystems.
    targets.sort_by(|a, b| a.0.cmp(&b.0));

    let docs = try_join_all(targets.iter().map(|(_, path)| load_json(path))).await?;
    Ok(targets
        .into_iter()
        .map(|(slug, _)| slug)
        .zip(docs)
        .collect())
}
