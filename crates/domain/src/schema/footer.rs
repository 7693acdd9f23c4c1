use super::{require, require_email};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FooterLogo {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub href: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackToTop {
    pub label: String,
    pub href: String,
}

/// Contact form copy: labels and placeholders only, the form itself is a
/// presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterForm {
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub company_label: String,
    pub company_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub submit_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub logo: FooterLogo,
    pub title: String,
    pub description: String,
    pub email: String,
    pub address: Vec<String>,
    pub socials: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_label: Option<String>,
    pub copyright_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_to_top: Option<BackToTop>,
    pub form: FooterForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFooter {
    logo: FooterLogo,
    title: String,
    description: String,
    email: String,
    address: Vec<String>,
    socials: Vec<SocialLink>,
    #[serde(default)]
    connect_label: Option<String>,
    #[serde(default)]
    visit_label: Option<String>,
    copyright_label: String,
    #[serde(default)]
    back_to_top: Option<BackToTop>,
    form: FooterForm,
}

pub fn parse(raw: &Json) -> Result<FooterContent> {
    let doc = RawFooter::deserialize(raw)?;

    if doc.address.is_empty() {
        return Err(ContentError::invalid("address", "requires at least one line"));
    }
    for (i, line) in doc.address.iter().enumerate() {
        require(&format!("address[{i}]"), line)?;
    }
    if doc.socials.is_empty() {
        return Err(ContentError::invalid("socials", "requires at least one link"));
    }
    for (i, social) in doc.socials.iter().enumerate() {
        require(&format!("socials[{i}].href"), &social.href)?;
        require(&format!("socials[{i}].label"), &social.label)?;
    }
    if let Some(btt) = &doc.back_to_top {
        require("backToTop.label", &btt.label)?;
        require("backToTop.href", &btt.href)?;
    }

    let form_fields = [
        ("form.nameLabel", &doc.form.name_label),
        ("form.namePlaceholder", &doc.form.name_placeholder),
        ("form.emailLabel", &doc.form.email_label),
        ("form.emailPlaceholder", &doc.form.email_placeholder),
        ("form.companyLabel", &doc.form.company_label),
        ("form.companyPlaceholder", &doc.form.company_placeholder),
        ("form.messageLabel", &doc.form.message_label),
        ("form.messagePlaceholder", &doc.form.message_placeholder),
        ("form.submitLabel", &doc.form.submit_label),
    ];
    for (field, value) in form_fields {
        require(field, value)?;
    }

    Ok(FooterContent {
        title: require("title", &doc.title)?,
        description: require("description", &doc.description)?,
        email: require_email("email", &doc.email)?,
        logo: FooterLogo {
            src: require("logo.src", &doc.logo.src)?,
            alt: require("logo.alt", &doc.logo.alt)?,
        },
        address: doc.address,
        socials: doc.socials,
        connect_label: doc.connect_label,
        visit_label: doc.visit_label,
        copyright_label: require("copyrightLabel", &doc.copyright_label)?,
        back_to_top: doc.back_to_top,
        form: doc.form,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn footer_doc() -> Json {
        json!({
            "logo": { "src": "/logo.svg", "alt": "Vitrina" },
            "title": "Hablemos",
            "description": "Distribuidores de equipos oftálmicos.",
            "email": "contacto@example.com",
            "address": ["Av. Principal 123", "Lima, Perú"],
            "socials": [{ "href": "https://instagram.com/x", "label": "Instagram" }],
            "copyrightLabel": "© 2026",
            "form": {
                "nameLabel": "Nombre", "namePlaceholder": "Tu nombre",
                "emailLabel": "Correo", "emailPlaceholder": "tucorreo@x.com",
                "companyLabel": "Empresa", "companyPlaceholder": "Tu empresa",
                "messageLabel": "Mensaje", "messagePlaceholder": "Cuéntanos",
                "submitLabel": "Enviar"
            }
        })
    }

    #[test]
    fn valid_document_ok() {
        let content = parse(&footer_doc()).expect("parse");
        assert_eq!(content.address.len(), 2);
        assert!(content.back_to_top.is_none());
    }

    #[test]
    fn invalid_email_rejected() {
        let mut doc = footer_doc();
        doc["email"] = json!("not-an-email");
        assert!(parse(&doc).is_err());
    }

    #[test]
    fn blank_form_label_rejected() {
        let mut doc = footer_doc();
        doc["form"]["submitLabel"] = json!("  ");
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("form.submitLabel"));
    }

    #[test]
    fn empty_socials_rejected() {
        let mut doc = footer_doc();
        doc["socials"] = json!([]);
        assert!(parse(&doc).is_err());
    }
}
