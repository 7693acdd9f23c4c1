//! Brand reference table: category key → ordered brand list. Injected
//! read-only configuration; mappers receive it explicitly so lookups stay
//! testable in isolation. A missing category or brand is never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BrandTable {
    by_category: HashMap<String, Vec<Brand>>,
}

impl BrandTable {
    pub fn new(by_category: HashMap<String, Vec<Brand>>) -> Self {
        BrandTable { by_category }
    }

    /// Brands for a category, in their declared display order.
    pub fn brands_for(&self, category_key: &str) -> &[Brand] {
        self.by_category
            .get(category_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Resolve a brand name to its logo path. A miss resolves to `None`;
    /// the dependent UI field is simply omitted.
    pub fn logo_for(&self, category_key: &str, brand_name: &str) -> Option<&str> {
        self.brands_for(category_key)
            .iter()
            .find(|b| b.name == brand_name)
            .map(|b| b.logo.as_str())
    }
}
