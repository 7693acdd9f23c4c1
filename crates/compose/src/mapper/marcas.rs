use domain::schema::marcas::{MarcaLogo, MarcasContent};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarcasUiProps {
    pub title_before: String,
    pub title_highlight: String,
    pub title_after: String,
    pub description: String,
    pub logos: Vec<MarcaLogo>,
}

pub fn map_marcas(content: MarcasContent) -> MarcasUiProps {
    MarcasUiProps {
        title_before: content.title_before,
        title_highlight: content.title_highlight,
        title_after: content.title_after,
        description: content.description.unwrap_or_default(),
        logos: content.logos,
    }
}
