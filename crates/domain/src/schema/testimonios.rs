use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Must match the clinic logo assets shipped with the site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClinicLogo {
    Auna,
    Aviva,
    Oftalmosur,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonio {
    pub title: String,
    pub rating: u8,
    pub text: String,
    pub author_name: String,
    pub author_role: String,
    pub clinic_logo: ClinicLogo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestimoniosContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonio>,
}

#[derive(Debug, Deserialize)]
struct RawTestimonios {
    kind: String,
    title: String,
    subtitle: String,
    items: Vec<Testimonio>,
}

pub fn parse(raw: &Json) -> Result<TestimoniosContent> {
    let doc = RawTestimonios::deserialize(raw)?;

    if doc.kind != "testimonios" {
        return Err(ContentError::invalid(
            "kind",
            "expected literal \"testimonios\"",
        ));
    }
    if doc.items.is_empty() {
        return Err(ContentError::invalid("items", "requires at least one testimonial"));
    }
    for (i, item) in doc.items.iter().enumerate() {
        if !(1..=5).contains(&item.rating) {
            return Err(ContentError::invalid(
                format!("items[{i}].rating"),
                "rating must be an integer between 1 and 5",
            ));
        }
    }

    Ok(TestimoniosContent {
        title: doc.title,
        subtitle: doc.subtitle,
        items: doc.items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(rating: u8) -> Json {
        json!({
            "title": "Excelente servicio",
            "rating": rating,
            "text": "Equipos de primera.",
            "authorName": "Dra. Rojas",
            "authorRole": "Oftalmóloga",
            "clinicLogo": "auna"
        })
    }

    #[test]
    fn valid_document_ok() {
        let doc = json!({
            "kind": "testimonios",
            "title": "Testimonios",
            "subtitle": "Lo que dicen",
            "items": [item(5), item(4)]
        });
        let content = parse(&doc).expect("parse");
        assert_eq!(content.items[0].clinic_logo, ClinicLogo::Auna);
    }

    #[test]
    fn rating_out_of_range_rejected() {
        let doc = json!({
            "kind": "testimonios",
            "title": "t",
            "subtitle": "s",
            "items": [item(6)]
        });
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("items[0].rating"));
    }

    #[test]
    fn fractional_rating_rejected_at_shape_level() {
        let doc = json!({
            "kind": "testimonios",
            "title": "t",
            "subtitle": "s",
            "items": [{
                "title": "x", "rating": 4.5, "text": "x",
                "authorName": "a", "authorRole": "r", "clinicLogo": "aviva"
            }]
        });
        assert!(matches!(parse(&doc), Err(ContentError::Json(_))));
    }

    #[test]
    fn unknown_clinic_logo_rejected() {
        let doc = json!({
            "kind": "testimonios",
            "title": "t",
            "subtitle": "s",
            "items": [{
                "title": "x", "rating": 4, "text": "x",
                "authorName": "a", "authorRole": "r", "clinicLogo": "otra"
            }]
        });
        assert!(matches!(parse(&doc), Err(ContentError::Json(_))));
    }
}
