//! One module per content kind: deserialize, validate, and normalize in a
//! single pass. Every `parse` is a pure function from an untyped JSON
//! document to the canonical content type for that kind; legacy shape
//! variance is resolved here and never leaks downstream.

pub mod calidad;
pub mod clientes;
pub mod faq;
pub mod footer;
pub mod header;
pub mod hero;
pub mod marcas;
pub mod page;
pub mod previsualizar;
pub mod servicios;
pub mod testimonios;
pub mod trayectoria;

use crate::kind::SectionKind;
use crate::{ContentError, Result};
use serde_json::Value as Json;

/// Validate one section document against the schema for its kind,
/// discarding the normalized content.
#[tracing::instrument(skip_all, fields(kind = %kind))]
pub fn validate(kind: SectionKind, doc: &Json) -> Result<()> {
    match kind {
        SectionKind::Hero => hero::parse(doc).map(drop),
        SectionKind::Trayectoria => trayectoria::parse(doc).map(drop),
        SectionKind::Clientes => clientes::parse(doc).map(drop),
        SectionKind::Servicios => servicios::parse(doc).map(drop),
        SectionKind::Marcas => marcas::parse(doc).map(drop),
        SectionKind::Testimonios => testimonios::parse(doc).map(drop),
        SectionKind::Previsualizar => previsualizar::parse(doc).map(drop),
        SectionKind::Calidad => calidad::parse(doc).map(drop),
        SectionKind::Faq => faq::parse(doc).map(drop),
        SectionKind::Footer => footer::parse(doc).map(drop),
    }
}

/// Empty and whitespace-only are equivalent to absent everywhere.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Required string field: must be non-blank.
pub(crate) fn require(field: &str, value: &str) -> Result<String> {
    if is_blank(value) {
        return Err(ContentError::invalid(field, "must be a non-empty string"));
    }
    Ok(value.to_owned())
}

/// Optional string field: blank collapses to `None`.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value.filter(|v| !is_blank(v)).map(str::to_owned)
}

/// First non-blank candidate wins. The candidate order is the declared
/// fallback priority for the field; changing it is a breaking change for
/// content authors.
pub(crate) fn first_non_blank<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|v| !is_blank(v))
}

/// Minimal syntactic email check, same strictness the original content
/// contract relied on: one `@`, non-empty local part, dotted domain.
pub(crate) fn require_email(field: &str, value: &str) -> Result<String> {
    let ok = match value.split_once('@') {
        Some((local, host)) => {
            !local.is_empty() && host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
        }
        None => false,
    };
    if !ok {
        return Err(ContentError::invalid(field, "must be a valid email address"));
    }
    Ok(value.to_owned())
}
