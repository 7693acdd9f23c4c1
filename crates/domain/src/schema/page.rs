//! Page document: the section manifest plus the header, as authored in
//! `pages/home.json`. Section blocks are `{ kind }` declarations whose
//! content lives in per-section documents, except footer, which inlines
//! its payload in the block itself.

use super::footer::{self, FooterContent};
use super::header::{self, HeaderContent};
use crate::kind::SectionKind;
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSection {
    pub kind: SectionKind,
    /// Inline payload, present only when `kind` is `footer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageContent {
    pub header: HeaderContent,
    pub sections: Vec<PageSection>,
}

#[tracing::instrument(skip_all)]
pub fn parse(raw: &Json) -> Result<PageContent> {
    let header_raw = raw
        .get("header")
        .ok_or_else(|| ContentError::invalid("header", "page requires a header"))?;
    let header = header::parse(header_raw)?;

    let blocks = raw
        .get("sections")
        .and_then(Json::as_array)
        .ok_or_else(|| ContentError::invalid("sections", "page requires a sections array"))?;
    if blocks.is_empty() {
        return Err(ContentError::invalid(
            "sections",
            "requires at least one section",
        ));
    }

    let mut sections = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        let tag = block
            .get("kind")
            .and_then(Json::as_str)
            .ok_or_else(|| ContentError::invalid(format!("sections[{i}].kind"), "missing kind tag"))?;

        // The page contract is a closed union: a tag outside the declared
        // set is an authoring error here, even though the composer skips
        // kinds it cannot render.
        let kind = SectionKind::parse(tag).ok_or_else(|| {
            ContentError::invalid(
                format!("sections[{i}].kind"),
                format!("unknown section kind `{tag}`"),
            )
        })?;

        let footer = match kind {
            SectionKind::Footer => Some(footer::parse(block)?),
            _ => None,
        };

        sections.push(PageSection { kind, footer });
    }

    Ok(PageContent { header, sections })
}
