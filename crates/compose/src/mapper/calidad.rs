use domain::schema::calidad::{CalidadContent, CalidadItem};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalidadUiProps {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<CalidadItem>,
}

pub fn map_calidad(content: CalidadContent) -> CalidadUiProps {
    CalidadUiProps {
        title: content.title,
        subtitle: content.subtitle,
        items: content.items,
    }
}
