use super::{optional, require};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderLogo {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmenuImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmenuItem {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<SubmenuImage>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Chevron {
    Down,
    Up,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chevron: Option<Chevron>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SubmenuItem>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Solid,
    Outline,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderCta {
    pub label: String,
    pub href: String,
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderBehavior {
    pub sticky: bool,
    pub container: bool,
}

impl Default for HeaderBehavior {
    fn default() -> Self {
        HeaderBehavior {
            sticky: true,
            container: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderContent {
    pub logo: HeaderLogo,
    pub nav: Vec<NavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<HeaderCta>,
    pub behavior: HeaderBehavior,
}

fn default_cta_variant() -> CtaVariant {
    CtaVariant::Solid
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawHeaderCta {
    label: String,
    href: String,
    #[serde(default = "default_cta_variant")]
    variant: CtaVariant,
}

#[derive(Debug, Deserialize, Default)]
struct RawBehavior {
    #[serde(default = "default_true")]
    sticky: bool,
    #[serde(default = "default_true")]
    container: bool,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    logo: HeaderLogo,
    nav: Vec<NavItem>,
    #[serde(default)]
    cta: Option<RawHeaderCta>,
    #[serde(default)]
    behavior: Option<RawBehavior>,
}

pub fn parse(raw: &Json) -> Result<HeaderContent> {
    let doc = RawHeader::deserialize(raw)?;

    if doc.nav.is_empty() {
        return Err(ContentError::invalid("nav", "requires at least one item"));
    }
    for (i, item) in doc.nav.iter().enumerate() {
        require(&format!("nav[{i}].label"), &item.label)?;
        // Every nav item needs somewhere to go: a direct href or a submenu.
        let has_href = optional(item.href.as_deref()).is_some();
        if !has_href && item.submenu.is_empty() {
            return Err(ContentError::invalid(
                format!("nav[{i}]"),
                "nav item requires href or submenu",
            ));
        }
        for (j, sub) in item.submenu.iter().enumerate() {
            require(&format!("nav[{i}].submenu[{j}].label"), &sub.label)?;
            require(&format!("nav[{i}].submenu[{j}].href"), &sub.href)?;
        }
    }

    let cta = match doc.cta {
        Some(cta) => Some(HeaderCta {
            label: require("cta.label", &cta.label)?,
            href: require("cta.href", &cta.href)?,
            variant: cta.variant,
        }),
        None => None,
    };

    let behavior = doc
        .behavior
        .map(|b| HeaderBehavior {
            sticky: b.sticky,
            container: b.container,
        })
        .unwrap_or_default();

    Ok(HeaderContent {
        logo: HeaderLogo {
            src: require("logo.src", &doc.logo.src)?,
            alt: require("logo.alt", &doc.logo.alt)?,
        },
        nav: doc.nav,
        cta,
        behavior,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header_doc() -> Json {
        json!({
            "logo": { "src": "/logo.svg", "alt": "Vitrina" },
            "nav": [
                { "label": "Inicio", "href": "/" },
                {
                    "label": "Catálogo",
                    "chevron": "down",
                    "submenu": [
                        { "label": "Biseladoras", "href": "/biseladoras" }
                    ]
                }
            ]
        })
    }

    #[test]
    fn behavior_defaults_apply() {
        let content = parse(&header_doc()).expect("parse");
        assert!(content.behavior.sticky);
        assert!(content.behavior.container);
        assert!(content.cta.is_none());
    }

    #[test]
    fn cta_variant_defaults_to_solid() {
        let mut doc = header_doc();
        doc["cta"] = json!({ "label": "Cotiza", "href": "/contacto" });
        let content = parse(&doc).expect("parse");
        assert_eq!(content.cta.expect("cta").variant, CtaVariant::Solid);
    }

    #[test]
    fn nav_item_without_target_rejected() {
        let mut doc = header_doc();
        doc["nav"] = json!([{ "label": "Suelto" }]);
        let err = parse(&doc).unwrap_err();
        assert!(err.to_string().contains("nav[0]"));
    }

    #[test]
    fn partial_behavior_fills_defaults() {
        let mut doc = header_doc();
        doc["behavior"] = json!({ "sticky": false });
        let content = parse(&doc).expect("parse");
        assert!(!content.behavior.sticky);
        assert!(content.behavior.container);
    }
}
