//! Catalog preview tiles. Unlike the category facade this works on loose,
//! not-yet-validated product documents: preview tabs must tolerate any
//! historical product layout, so every field is resolved through a
//! tolerant fallback chain and a conventional path closes the image chain.

use serde::Serialize;
use serde_json::Value as Json;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Raw product documents per category, as loaded from disk. The
/// previsualizar mapper resolves its tab tiles from here.
#[derive(Debug, Clone, Default)]
pub struct PreviewSource {
    by_category: HashMap<String, Vec<(String, Json)>>,
}

impl PreviewSource {
    pub fn new() -> Self {
        PreviewSource::default()
    }

    pub fn insert(&mut self, category_key: impl Into<String>, docs: Vec<(String, Json)>) {
        self.by_category.insert(category_key.into(), docs);
    }

    /// Documents for a category; an unknown key is an empty slice.
    pub fn docs_for(&self, category_key: &str) -> &[(String, Json)] {
        self.by_category
            .get(category_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogPreviewItem {
    pub name: String,
    pub slug: String,
    pub src: String,
    pub badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn text(value: Option<&Json>) -> &str {
    value.and_then(Json::as_str).unwrap_or_default()
}

fn field<'a>(doc: &'a Json, key: &str) -> &'a str {
    text(doc.get(key))
}

fn first_of<'a>(candidates: impl IntoIterator<Item = &'a str>) -> &'a str {
    candidates.into_iter().find(|v| !v.is_empty()).unwrap_or_default()
}

/// Image priority: real fields first (flat cover/hero, loose `image` and
/// `cover`, first entry of `images`/`gallery`/`media`), then the
/// conventional `/catalog/{category}/{slug}/cover.png` location.
fn pick_image(category_key: &str, slug: &str, doc: &Json) -> String {
    let direct = first_of([
        field(doc, "coverImage"),
        field(doc, "heroImage"),
        field(doc, "image"),
        field(doc, "cover"),
        text(doc.get("images").and_then(|v| v.get(0))),
        text(doc.get("gallery").and_then(|v| v.get(0))),
        text(doc.get("media").and_then(|v| v.get(0)).and_then(|v| v.get("src"))),
        text(doc.get("images").and_then(|v| v.get(0)).and_then(|v| v.get("src"))),
    ]);
    if !direct.is_empty() {
        return direct.to_owned();
    }
    format!("/catalog/{category_key}/{slug}/cover.png")
}

fn humanize_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick_name(slug: &str, doc: &Json) -> String {
    let name = first_of([field(doc, "name"), field(doc, "title"), field(doc, "productName")]);
    if name.is_empty() {
        humanize_slug(slug)
    } else {
        name.to_owned()
    }
}

fn pick_brand(doc: &Json) -> &str {
    first_of([field(doc, "brand"), field(doc, "marca")])
}

fn pick_description(doc: &Json) -> &str {
    first_of([
        field(doc, "shortDescription"),
        field(doc, "subtitle"),
        field(doc, "description"),
        field(doc, "badge"),
    ])
}

struct Keyed {
    order: Option<f64>,
    item: CatalogPreviewItem,
}

/// Build the preview tiles for one category from `(file_slug, document)`
/// pairs. Sorted by optional numeric `order` ascending with missing
/// orders last, ties broken by case-insensitive name; truncated to
/// `limit` (at least one tile).
pub fn preview_items(
    category_key: &str,
    docs: &[(String, Json)],
    limit: usize,
) -> Vec<CatalogPreviewItem> {
    let mut keyed: Vec<Keyed> = docs
        .iter()
        .map(|(file_slug, doc)| {
            let slug = {
                let declared = field(doc, "slug");
                if declared.is_empty() {
                    file_slug.clone()
                } else {
                    declared.to_owned()
                }
            };
            let brand = pick_brand(doc);
            let description = pick_description(doc);
            let badge = first_of([field(doc, "badge"), brand]);

            Keyed {
                order: doc.get("order").and_then(Json::as_f64),
                item: CatalogPreviewItem {
                    name: pick_name(file_slug, doc),
                    src: pick_image(category_key, file_slug, doc),
                    slug,
                    badge: badge.to_owned(),
                    brand: (!brand.is_empty()).then(|| brand.to_owned()),
                    description: (!description.is_empty()).then(|| description.to_owned()),
                },
            }
        })
        .collect();

    keyed.sort_by(|a, b| match (a.order, b.order) {
        (Some(x), Some(y)) => x
            .total_cmp(&y)
            .then_with(|| name_cmp(&a.item.name, &b.item.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => name_cmp(&a.item.name, &b.item.name),
    });

    keyed.truncate(limit.max(1));
    keyed.into_iter().map(|k| k.item).collect()
}

fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
