use domain::schema::trayectoria::{Eyebrow, TrayectoriaCard, TrayectoriaContent};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrayectoriaUiProps {
    pub eyebrow: Eyebrow,
    pub title_before: String,
    pub title_highlight: String,
    pub title_after: String,
    pub cards: Vec<TrayectoriaCard>,
}

pub fn map_trayectoria(content: TrayectoriaContent) -> TrayectoriaUiProps {
    TrayectoriaUiProps {
        eyebrow: content.eyebrow,
        title_before: content.title_before,
        title_highlight: content.title_highlight,
        title_after: content.title_after,
        cards: content.cards,
    }
}
