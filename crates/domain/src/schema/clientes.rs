use super::require;
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClienteLogo {
    pub name: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientesContent {
    pub title: String,
    pub subtitle: String,
    pub logos: Vec<ClienteLogo>,
}

#[derive(Debug, Deserialize)]
struct RawClientes {
    kind: String,
    title: String,
    subtitle: String,
    logos: Vec<ClienteLogo>,
}

/// Logo sources must be site-internal paths or absolute http(s) URLs.
fn valid_logo_src(src: &str) -> bool {
    src.starts_with('/') || src.starts_with("http://") || src.starts_with("https://")
}

pub fn parse(raw: &Json) -> Result<ClientesContent> {
    let doc = RawClientes::deserialize(raw)?;

    if doc.kind != "clientes" {
        return Err(ContentError::invalid("kind", "expected literal \"clientes\""));
    }
    if doc.logos.is_empty() {
        return Err(ContentError::invalid("logos", "requires at least one logo"));
    }
    for (i, logo) in doc.logos.iter().enumerate() {
        require(&format!("logos[{i}].name"), &logo.name)?;
        if !valid_logo_src(&logo.src) {
            return Err(ContentError::invalid(
                format!("logos[{i}].src"),
                "src must be an internal path or absolute URL",
            ));
        }
    }

    Ok(ClientesContent {
        title: require("title", &doc.title)?,
        subtitle: require("subtitle", &doc.subtitle)?,
        logos: doc.logos,
    })
}
