use super::require;
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalidadItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalidadContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<CalidadItem>,
}

#[derive(Debug, Deserialize)]
struct RawCalidad {
    title: String,
    subtitle: String,
    items: Vec<CalidadItem>,
}

pub fn parse(raw: &Json) -> Result<CalidadContent> {
    let doc = RawCalidad::deserialize(raw)?;

    if doc.items.is_empty() || doc.items.len() > 4 {
        return Err(ContentError::invalid(
            "items",
            "requires between 1 and 4 quality features",
        ));
    }
    for (i, item) in doc.items.iter().enumerate() {
        require(&format!("items[{i}].icon"), &item.icon)?;
        require(&format!("items[{i}].title"), &item.title)?;
        require(&format!("items[{i}].description"), &item.description)?;
    }

    Ok(CalidadContent {
        title: require("title", &doc.title)?,
        subtitle: require("subtitle", &doc.subtitle)?,
        items: doc.items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> Json {
        json!({ "icon": "shield", "title": "Garantía", "description": "12 meses" })
    }

    #[test]
    fn valid_document_ok() {
        let doc = json!({
            "title": "Calidad",
            "subtitle": "Respaldo total",
            "items": [item(), item()]
        });
        assert_eq!(parse(&doc).expect("parse").items.len(), 2);
    }

    #[test]
    fn five_items_rejected() {
        let doc = json!({
            "title": "t",
            "subtitle": "s",
            "items": [item(), item(), item(), item(), item()]
        });
        assert!(parse(&doc).is_err());
    }

    #[test]
    fn blank_icon_rejected() {
        let doc = json!({
            "title": "t",
            "subtitle": "s",
            "items": [{ "icon": " ", "title": "x", "description": "y" }]
        });
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("items[0].icon"));
    }
}
