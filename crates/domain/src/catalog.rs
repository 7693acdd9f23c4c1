//! Catalog subdomain: categories and products. Products accept two
//! historical image layouts (flat fields or a nested `images` block); the
//! cover image is derived through a fixed fallback chain and is guaranteed
//! non-empty on every validated product.

use crate::schema::{first_non_blank, is_blank, optional, require};
use crate::{ContentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSpec {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Never empty after validation.
    pub cover_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    pub gallery: Vec<String>,
    pub specs: Vec<ProductSpec>,
}

/// A product joined with its owning category; products have no existence
/// outside a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category_key: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawLegacyImages {
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    hero: Option<String>,
    #[serde(default)]
    gallery: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    slug: String,
    name: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default)]
    hero_image: Option<String>,
    #[serde(default)]
    gallery: Option<Vec<String>>,
    #[serde(default)]
    images: Option<RawLegacyImages>,
    #[serde(default)]
    specs: Option<Vec<ProductSpec>>,
}

/// Parse the categories document (a JSON array).
#[tracing::instrument(skip_all)]
pub fn parse_categories(raw: &Json) -> Result<Vec<Category>> {
    let items = raw
        .as_array()
        .ok_or_else(|| ContentError::invalid("categories", "must be an array"))?;

    let mut categories = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let category = Category::deserialize(item)?;
        require(&format!("[{i}].key"), &category.key)?;
        require(&format!("[{i}].title"), &category.title)?;
        categories.push(category);
    }
    Ok(categories)
}

/// Parse and normalize one product document.
///
/// Cover fallback chain, in declared priority order:
/// `coverImage` → `images.cover` → resolved hero → first gallery image.
/// If the whole chain is empty the product fails validation; cards cannot
/// render without a cover.
#[tracing::instrument(skip_all)]
pub fn parse_product(raw: &Json) -> Result<Product> {
    let doc = RawProduct::deserialize(raw)?;
    let legacy = doc.images.unwrap_or_default();

    let gallery: Vec<String> = doc
        .gallery
        .or(legacy.gallery)
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| !is_blank(entry))
        .collect();

    let hero_image = first_non_blank([doc.hero_image.as_deref(), legacy.hero.as_deref()])
        .map(str::to_owned);

    let cover_image = first_non_blank([
        doc.cover_image.as_deref(),
        legacy.cover.as_deref(),
        hero_image.as_deref(),
        gallery.first().map(String::as_str),
    ])
    .map(str::to_owned)
    .ok_or_else(|| {
        ContentError::invalid(
            "coverImage",
            "missing cover image: provide `coverImage` (flat) or `images.cover` (legacy)",
        )
    })?;

    let specs = doc.specs.unwrap_or_default();
    for (i, spec) in specs.iter().enumerate() {
        require(&format!("specs[{i}].label"), &spec.label)?;
        require(&format!("specs[{i}].value"), &spec.value)?;
    }

    Ok(Product {
        slug: require("slug", &doc.slug)?,
        name: require("name", &doc.name)?,
        brand: optional(doc.brand.as_deref()),
        short_description: doc.short_description,
        description: doc.description,
        cover_image,
        hero_image,
        gallery,
        specs,
    })
}

/// Join a product with its owning category key.
pub fn parse_product_in_category(raw: &Json, category_key: &str) -> Result<ProductWithCategory> {
    let product = parse_product(raw)?;
    Ok(ProductWithCategory {
        product,
        category_key: require("categoryKey", category_key)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_product_ok() {
        let doc = json!({
            "slug": "briot-attitude",
            "name": "Briot Attitude",
            "brand": "Briot",
            "coverImage": "/cover.png",
            "gallery": ["/g1.png", "/g2.png"],
            "specs": [{ "label": "Peso", "value": "45 kg" }]
        });
        let product = parse_product(&doc).expect("parse");
        assert_eq!(product.cover_image, "/cover.png");
        assert_eq!(product.gallery, ["/g1.png", "/g2.png"]);
    }

    #[test]
    fn empty_cover_falls_back_to_legacy_nested_cover() {
        let doc = json!({
            "slug": "s",
            "name": "n",
            "coverImage": "",
            "images": { "cover": "/a.png" },
            "heroImage": "/b.png"
        });
        let product = parse_product(&doc).expect("parse");
        assert_eq!(product.cover_image, "/a.png");
    }

    #[test]
    fn hero_then_gallery_close_the_chain() {
        let doc = json!({
            "slug": "s", "name": "n",
            "images": { "hero": "/hero.png" }
        });
        assert_eq!(parse_product(&doc).expect("parse").cover_image, "/hero.png");

        let doc = json!({
            "slug": "s", "name": "n",
            "gallery": ["/first.png", "/second.png"]
        });
        assert_eq!(parse_product(&doc).expect("parse").cover_image, "/first.png");
    }

    #[test]
    fn all_image_sources_empty_fails_validation() {
        let doc = json!({
            "slug": "s",
            "name": "n",
            "coverImage": "  ",
            "images": { "cover": "", "gallery": [] }
        });
        let err = parse_product(&doc).unwrap_err();
        assert!(err.to_string().contains("coverImage"));
    }

    #[test]
    fn legacy_gallery_used_when_flat_absent() {
        let doc = json!({
            "slug": "s", "name": "n",
            "images": { "gallery": ["/lg1.png", "/lg2.png"] }
        });
        let product = parse_product(&doc).expect("parse");
        assert_eq!(product.gallery, ["/lg1.png", "/lg2.png"]);
        assert_eq!(product.cover_image, "/lg1.png");
    }

    #[test]
    fn gallery_order_is_preserved() {
        let doc = json!({
            "slug": "s", "name": "n", "coverImage": "/c.png",
            "gallery": ["/z.png", "/a.png", "/m.png"]
        });
        let product = parse_product(&doc).expect("parse");
        assert_eq!(product.gallery, ["/z.png", "/a.png", "/m.png"]);
    }

    #[test]
    fn blank_spec_value_rejected() {
        let doc = json!({
            "slug": "s", "name": "n", "coverImage": "/c.png",
            "specs": [{ "label": "Peso", "value": " " }]
        });
        let err = parse_product(&doc).unwrap_err();
        assert!(err.to_string().contains("specs[0].value"));
    }

    #[test]
    fn categories_parse_and_validate() {
        let doc = json!([
            { "key": "biseladoras", "title": "Biseladoras", "heroImage": "/b.png" },
            { "key": "equipos-oftalmologicos", "title": "Equipos Oftalmológicos" }
        ]);
        let categories = parse_categories(&doc).expect("parse");
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].key, "biseladoras");

        let bad = json!([{ "key": "", "title": "x" }]);
        assert!(parse_categories(&bad).is_err());
    }

    #[test]
    fn join_assigns_category_key() {
        let doc = json!({ "slug": "s", "name": "n", "coverImage": "/c.png" });
        let joined = parse_product_in_category(&doc, "biseladoras").expect("join");
        assert_eq!(joined.category_key, "biseladoras");
        assert!(parse_product_in_category(&doc, " ").is_err());
    }
}
