use crate::brands::{Brand, BrandTable};
use crate::facade::CatalogCategoryContent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Site-wide hero image used when everything else is missing.
const DEFAULT_HERO_IMAGE: &str = "/images/Equipos_Oftalmologicos.png";

/// Per-category hero fallbacks. Injected configuration like the brand
/// table; `Default` ships the stock categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HeroFallbacks {
    by_category: HashMap<String, String>,
}

impl HeroFallbacks {
    pub fn new(by_category: HashMap<String, String>) -> Self {
        HeroFallbacks { by_category }
    }

    fn get(&self, category_key: &str) -> Option<&str> {
        self.by_category.get(category_key).map(String::as_str)
    }
}

impl Default for HeroFallbacks {
    fn default() -> Self {
        let by_category = [
            (
                "equipos-oftalmologicos".to_owned(),
                "/images/Equipos_Oftalmologicos.png".to_owned(),
            ),
            ("biseladoras".to_owned(), "/images/Biceladoras.png".to_owned()),
        ]
        .into_iter()
        .collect();
        HeroFallbacks { by_category }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CtaTone {
    Blue,
    Orange,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub home_label: String,
    pub home_href: String,
    pub current_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogCta {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemUi {
    pub slug: String,
    pub name: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCategoryUi {
    pub title: String,
    pub hero_image: String,
    pub cta_tone: CtaTone,
    pub breadcrumb: Breadcrumb,
    pub cta_primary: CatalogCta,
    pub cta_secondary: CatalogCta,
    pub brands: Vec<Brand>,
    pub items: Vec<CatalogItemUi>,
}

pub fn map_catalog_category(
    content: CatalogCategoryContent,
    brands: &BrandTable,
    hero_fallbacks: &HeroFallbacks,
) -> CatalogCategoryUi {
    let category_key = content.category_key.as_str();

    let tone = if category_key == "biseladoras" {
        CtaTone::Orange
    } else {
        CtaTone::Blue
    };

    // Hero priority: facade-resolved image, static per-category fallback,
    // first item's cover, site default.
    let hero_image = content
        .hero_image
        .clone()
        .or_else(|| hero_fallbacks.get(category_key).map(str::to_owned))
        .or_else(|| content.items.first().map(|it| it.image.clone()))
        .unwrap_or_else(|| DEFAULT_HERO_IMAGE.to_owned());

    let items = content
        .items
        .into_iter()
        .map(|it| {
            let brand_logo = it
                .brand
                .as_deref()
                .and_then(|name| brands.logo_for(category_key, name))
                .map(str::to_owned);
            CatalogItemUi {
                slug: it.slug,
                name: it.name,
                image: it.image,
                description: it.description,
                brand: it.brand,
                brand_logo,
            }
        })
        .collect();

    CatalogCategoryUi {
        title: content.category_title.clone(),
        hero_image,
        cta_tone: tone,
        breadcrumb: Breadcrumb {
            home_label: "Catálogo".to_owned(),
            home_href: "/".to_owned(),
            current_label: content.category_title,
        },
        cta_primary: CatalogCta {
            label: "Descarga nuestro catálogo completo 2026".to_owned(),
            href: "/catalogo.pdf".to_owned(),
        },
        cta_secondary: CatalogCta {
            label: "Nuestros Equipos".to_owned(),
            href: "#equipos".to_owned(),
        },
        brands: brands.brands_for(category_key).to_vec(),
        items,
    }
}
