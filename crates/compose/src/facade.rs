//! Catalog facade: joins a validated category with its validated products
//! into the single content value the category page consumes.

use domain::catalog::{Category, ProductWithCategory};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub slug: String,
    pub name: String,
    /// The product's cover image.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCategoryContent {
    pub category_key: String,
    pub category_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    pub items: Vec<CategoryItem>,
}

/// Hero priority: the category's own image, then the first product that
/// declares a hero, then the first product's cover. `None` here is fine;
/// the mapper has one more fallback level.
pub fn category_content(
    category: &Category,
    products: &[ProductWithCategory],
) -> CatalogCategoryContent {
    let hero_image = category
        .hero_image
        .clone()
        .or_else(|| {
            products
                .iter()
                .find_map(|p| p.product.hero_image.clone())
        })
        .or_else(|| products.first().map(|p| p.product.cover_image.clone()));

    CatalogCategoryContent {
        category_key: category.key.clone(),
        category_title: category.title.clone(),
        hero_image,
        items: products
            .iter()
            .map(|p| CategoryItem {
                slug: p.product.slug.clone(),
                name: p.product.name.clone(),
                image: p.product.cover_image.clone(),
                description: p.product.short_description.clone(),
                brand: p.product.brand.clone(),
            })
            .collect(),
    }
}
