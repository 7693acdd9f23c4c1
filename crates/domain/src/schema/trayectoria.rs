//! Trajectory/timeline section. The eyebrow accepts a legacy plain string
//! or a `{ logo?, lines }` block; canonical is the block form.

use super::{optional, require};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Canonical eyebrow: a legacy string becomes a single-line block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Eyebrow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrayectoriaCard {
    pub image: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrayectoriaContent {
    pub eyebrow: Eyebrow,
    pub title_before: String,
    pub title_highlight: String,
    pub title_after: String,
    pub cards: Vec<TrayectoriaCard>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEyebrow {
    Text(String),
    Block {
        #[serde(default)]
        logo: Option<String>,
        lines: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrayectoria {
    eyebrow: RawEyebrow,
    title_before: String,
    #[serde(default)]
    title_highlight: String,
    #[serde(default)]
    title_after: String,
    cards: Vec<TrayectoriaCard>,
}

pub fn parse(raw: &Json) -> Result<TrayectoriaContent> {
    let doc = RawTrayectoria::deserialize(raw)?;

    let eyebrow = match doc.eyebrow {
        RawEyebrow::Text(text) => Eyebrow {
            logo: None,
            lines: vec![require("eyebrow", &text)?],
        },
        RawEyebrow::Block { logo, lines } => {
            if lines.is_empty() || lines.len() > 2 {
                return Err(ContentError::invalid(
                    "eyebrow.lines",
                    "requires 1 or 2 lines",
                ));
            }
            for (i, line) in lines.iter().enumerate() {
                require(&format!("eyebrow.lines[{i}]"), line)?;
            }
            Eyebrow {
                logo: optional(logo.as_deref()),
                lines,
            }
        }
    };

    if doc.cards.is_empty() {
        return Err(ContentError::invalid("cards", "requires at least one card"));
    }

    Ok(TrayectoriaContent {
        eyebrow,
        title_before: require("titleBefore", &doc.title_before)?,
        title_highlight: doc.title_highlight,
        title_after: doc.title_after,
        cards: doc.cards,
    })
}
