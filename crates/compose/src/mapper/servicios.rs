use domain::schema::servicios::{ServicioCard, ServiciosContent};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiciosUiProps {
    pub title_line_a: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_line_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside: Option<String>,
    pub cards: Vec<ServicioCard>,
}

pub fn map_servicios(content: ServiciosContent) -> ServiciosUiProps {
    ServiciosUiProps {
        title_line_a: content.title_line_a,
        title_line_b: content.title_line_b,
        aside: content.aside,
        cards: content.cards,
    }
}
