use super::require;
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTab {
    pub key: String,
    pub label: String,
    pub category_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreviewCta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrevisualizarContent {
    pub title: String,
    pub tabs: Vec<PreviewTab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<PreviewCta>,
}

#[derive(Debug, Deserialize)]
struct RawPrevisualizar {
    #[serde(default)]
    title: String,
    #[serde(default)]
    tabs: Vec<PreviewTab>,
    #[serde(default)]
    cta: Option<PreviewCta>,
}

pub fn parse(raw: &Json) -> Result<PrevisualizarContent> {
    let doc = RawPrevisualizar::deserialize(raw)?;

    for (i, tab) in doc.tabs.iter().enumerate() {
        require(&format!("tabs[{i}].key"), &tab.key)?;
        require(&format!("tabs[{i}].label"), &tab.label)?;
        require(&format!("tabs[{i}].categoryKey"), &tab.category_key)?;
        if tab.limit == Some(0) {
            return Err(ContentError::invalid(
                format!("tabs[{i}].limit"),
                "limit must be a positive integer",
            ));
        }
    }

    Ok(PrevisualizarContent {
        title: doc.title,
        tabs: doc.tabs,
        cta: doc.cta,
    })
}
