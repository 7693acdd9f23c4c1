//! Brands band. Two historical shapes: a single `title` string, or the
//! split `titleBefore` / `titleHighlight` / `titleAfter` triple. Canonical
//! is the split form; a single title containing the highlight marker is
//! split around it, otherwise it lands wholesale in `titleBefore`.

use super::{optional, require};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Highlight marker recognized inside single-string titles.
const TITLE_HIGHLIGHT_MARKER: &str = "ESTÁNDAR MUNDIAL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarcaLogo {
    pub name: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarcasContent {
    pub title_before: String,
    pub title_highlight: String,
    pub title_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub logos: Vec<MarcaLogo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMarcas {
    kind: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    title_before: String,
    #[serde(default)]
    title_highlight: String,
    #[serde(default)]
    title_after: String,
    #[serde(default)]
    description: Option<String>,
    logos: Vec<MarcaLogo>,
}

pub fn parse(raw: &Json) -> Result<MarcasContent> {
    let doc = RawMarcas::deserialize(raw)?;

    if doc.kind != "marcas" {
        return Err(ContentError::invalid("kind", "expected literal \"marcas\""));
    }
    if doc.logos.is_empty() {
        return Err(ContentError::invalid("logos", "requires at least one logo"));
    }
    for (i, logo) in doc.logos.iter().enumerate() {
        require(&format!("logos[{i}].name"), &logo.name)?;
        require(&format!("logos[{i}].src"), &logo.src)?;
    }

    // Single-title shape wins when present, matching the declared variant
    // order of the content contract. A blank title is equivalent to
    // absent, so the split-title shape still applies.
    let (title_before, title_highlight, title_after) = match optional(doc.title.as_deref()) {
        Some(title) => split_title(&title),
        None => (doc.title_before, doc.title_highlight, doc.title_after),
    };

    Ok(MarcasContent {
        title_before,
        title_highlight,
        title_after,
        description: doc.description,
        logos: doc.logos,
    })
}

fn split_title(full: &str) -> (String, String, String) {
    match full.split_once(TITLE_HIGHLIGHT_MARKER) {
        Some((before, after)) => (
            before.trim_end().to_owned(),
            TITLE_HIGHLIGHT_MARKER.to_owned(),
            after.trim_start().to_owned(),
        ),
        None => (full.to_owned(), String::new(), String::new()),
    }
}
