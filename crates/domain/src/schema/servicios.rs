use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicioCard {
    pub key: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub label: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiciosContent {
    pub title_line_a: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_line_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside: Option<String>,
    pub cards: Vec<ServicioCard>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServicios {
    /// A 1-or-2 element tuple: heading line and an optional second line.
    title_lines: Vec<Option<String>>,
    #[serde(default)]
    aside: Option<String>,
    cards: Vec<ServicioCard>,
}

pub fn parse(raw: &Json) -> Result<ServiciosContent> {
    let doc = RawServicios::deserialize(raw)?;

    let mut lines = doc.title_lines.into_iter();
    let title_line_a = match lines.next().flatten() {
        Some(line) => line,
        None => {
            return Err(ContentError::invalid(
                "titleLines[0]",
                "first heading line is required",
            ))
        }
    };
    let title_line_b = lines.next().flatten();
    if lines.next().is_some() {
        return Err(ContentError::invalid(
            "titleLines",
            "at most two heading lines",
        ));
    }

    Ok(ServiciosContent {
        title_line_a,
        title_line_b,
        aside: doc.aside,
        cards: doc.cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn two_line_heading_ok() {
        let doc = json!({
            "titleLines": ["Servicio técnico", "especializado"],
            "aside": "Cobertura nacional",
            "cards": [
                { "key": "mant", "image": "/s1.png", "label": "01", "title": "Mantenimiento" }
            ]
        });
        let content = parse(&doc).expect("parse");
        assert_eq!(content.title_line_a, "Servicio técnico");
        assert_eq!(content.title_line_b.as_deref(), Some("especializado"));
        assert_eq!(content.cards[0].key, "mant");
    }

    #[test]
    fn single_line_heading_ok() {
        let doc = json!({ "titleLines": ["Servicios"], "cards": [] });
        let content = parse(&doc).expect("parse");
        assert_eq!(content.title_line_b, None);
    }

    #[test]
    fn card_order_preserved() {
        let doc = json!({
            "titleLines": ["Servicios"],
            "cards": [
                { "key": "c", "image": "/c.png", "label": "3", "title": "C" },
                { "key": "a", "image": "/a.png", "label": "1", "title": "A" },
                { "key": "b", "image": "/b.png", "label": "2", "title": "B" }
            ]
        });
        let content = parse(&doc).expect("parse");
        let keys: Vec<_> = content.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn missing_heading_rejected() {
        let doc = json!({ "titleLines": [], "cards": [] });
        assert!(parse(&doc).is_err());
        let doc = json!({ "titleLines": ["a", "b", "c"], "cards": [] });
        assert!(parse(&doc).is_err());
    }
}
