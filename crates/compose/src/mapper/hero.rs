use domain::schema::hero::{Cta, Feature, HeroContent, Pill, VideoProps};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroUiProps {
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

/// Both historical hero shapes arrive here already collapsed to the flat
/// canonical form, so the mapping is a plain rename.
pub fn map_hero(content: HeroContent) -> HeroUiProps {
    HeroUiProps {
        video_src: content.video_src,
        poster: content.poster,
        video_props: content.video_props,
        title_before: content.title_before,
        title_highlight: content.title_highlight,
        title_after: content.title_after,
        description: content.description,
        cta: content.cta,
        features: content.features,
        pill: content.pill,
    }
}
