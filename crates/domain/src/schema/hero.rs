//! Hero section. Accepts two historical shapes: the flat-video form
//! (`videoSrc` at top level) and the legacy form with a nested
//! `media { kind: "video", src, poster }` block. Canonical is flat.

use super::{is_blank, optional, require};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Icon01,
    Icon02,
    Icon03,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoPreload {
    None,
    Metadata,
    Auto,
}

/// Playback hints forwarded to the renderer untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays_inline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<VideoPreload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pill {
    pub label: String,
    pub value: String,
    pub caption: String,
    pub avatars: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub video_src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_props: Option<VideoProps>,
    pub title_before: String,
    pub title_highlight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_after: Option<String>,
    pub description: String,
    pub cta: Cta,
    pub features: Vec<Feature>,
    pub pill: Pill,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHero {
    kind: String,
    #[serde(default)]
    video_src: Option<String>,
    #[serde(default)]
    poster: Option<String>,
    #[serde(default)]
    video_props: Option<VideoProps>,
    #[serde(default)]
    media: Option<RawMedia>,
    title_before: String,
    title_highlight: String,
    #[serde(default)]
    title_after: Option<String>,
    description: String,
    cta: Cta,
    features: Vec<Feature>,
    pill: Pill,
}

#[derive(Debug, Deserialize)]
struct RawMedia {
    kind: String,
    src: String,
    #[serde(default)]
    poster: Option<String>,
}

pub fn parse(raw: &Json) -> Result<HeroContent> {
    let doc = RawHero::deserialize(raw)?;

    if doc.kind != "hero" {
        return Err(ContentError::invalid("kind", "expected literal \"hero\""));
    }

    // Shape selection: the flat form wins when videoSrc carries a value,
    // otherwise fall back to the legacy nested media block.
    let (video_src, poster) = match (&doc.video_src, &doc.media) {
        (Some(src), _) if !is_blank(src) => (src.clone(), optional(doc.poster.as_deref())),
        (_, Some(media)) => {
            if media.kind != "video" {
                return Err(ContentError::invalid(
                    "media.kind",
                    "expected literal \"video\"",
                ));
            }
            (
                require("media.src", &media.src)?,
                optional(media.poster.as_deref()),
            )
        }
        _ => {
            return Err(ContentError::invalid(
                "videoSrc",
                "hero requires `videoSrc` (flat) or `media` (legacy)",
            ))
        }
    };

    if doc.features.is_empty() || doc.features.len() > 3 {
        return Err(ContentError::invalid(
            "features",
            "hero requires between 1 and 3 features",
        ));
    }
    for (i, feature) in doc.features.iter().enumerate() {
        require(&format!("features[{i}].title"), &feature.title)?;
        require(&format!("features[{i}].description"), &feature.description)?;
    }

    if doc.pill.avatars.is_empty() {
        return Err(ContentError::invalid("pill.avatars", "requires at least one avatar"));
    }
    for (i, avatar) in doc.pill.avatars.iter().enumerate() {
        require(&format!("pill.avatars[{i}]"), avatar)?;
    }

    Ok(HeroContent {
        video_src,
        poster,
        video_props: doc.video_props,
        title_before: require("titleBefore", &doc.title_before)?,
        title_highlight: require("titleHighlight", &doc.title_highlight)?,
        title_after: optional(doc.title_after.as_deref()),
        description: require("description", &doc.description)?,
        cta: Cta {
            label: require("cta.label", &doc.cta.label)?,
            href: require("cta.href", &doc.cta.href)?,
        },
        features: doc.features,
        pill: Pill {
            label: require("pill.label", &doc.pill.label)?,
            value: require("pill.value", &doc.pill.value)?,
            caption: require("pill.caption", &doc.pill.caption)?,
            avatars: doc.pill.avatars,
        },
    })
}
