use super::{optional, require, require_email};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqCta {
    pub label: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqContent {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<FaqItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<FaqCta>,
}

fn default_id() -> String {
    "faq".to_owned()
}

#[derive(Debug, Deserialize)]
struct RawFaq {
    kind: String,
    #[serde(default = "default_id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    items: Vec<FaqItem>,
    #[serde(default)]
    cta: Option<FaqCta>,
}

pub fn parse(raw: &Json) -> Result<FaqContent> {
    let doc = RawFaq::deserialize(raw)?;

    if doc.kind != "faq" {
        return Err(ContentError::invalid("kind", "expected literal \"faq\""));
    }
    if doc.items.is_empty() {
        return Err(ContentError::invalid("items", "requires at least one entry"));
    }
    for (i, item) in doc.items.iter().enumerate() {
        require(&format!("items[{i}].id"), &item.id)?;
        require(&format!("items[{i}].question"), &item.question)?;
        require(&format!("items[{i}].answer"), &item.answer)?;
    }

    let cta = match doc.cta {
        Some(cta) => Some(FaqCta {
            email: require_email("cta.email", &cta.email)?,
            label: cta.label,
        }),
        None => None,
    };

    Ok(FaqContent {
        id: require("id", &doc.id)?,
        title: optional(doc.title.as_deref()),
        subtitle: doc.subtitle,
        items: doc.items,
        cta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Json {
        json!([{ "id": "q1", "question": "¿Envíos?", "answer": "A todo el país." }])
    }

    #[test]
    fn id_defaults_to_faq() {
        let doc = json!({ "kind": "faq", "items": items() });
        let content = parse(&doc).expect("parse");
        assert_eq!(content.id, "faq");
        assert_eq!(content.title, None);
    }

    #[test]
    fn cta_email_validated() {
        let doc = json!({
            "kind": "faq",
            "items": items(),
            "cta": { "label": "Escríbenos", "email": "not-an-email" }
        });
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("cta.email"));
    }

    #[test]
    fn valid_cta_ok() {
        let doc = json!({
            "kind": "faq",
            "title": "Preguntas frecuentes",
            "items": items(),
            "cta": { "label": "Escríbenos", "email": "ventas@example.com" }
        });
        let content = parse(&doc).expect("parse");
        assert_eq!(content.cta.expect("cta").email, "ventas@example.com");
    }

    #[test]
    fn empty_items_rejected() {
        let doc = json!({ "kind": "faq", "items": [] });
        assert!(parse(&doc).is_err());
    }
}
