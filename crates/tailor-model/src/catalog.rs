//! Tag catalog loading.
//!
//! The catalog is static configuration: a JSON object mapping category names
//! to the tags offered under each category.
//!
//! ```json
//! { "categories": { "TRIP_TYPE": ["Adventure", "Solo"], "BUDGET": ["Luxury"] } }
//! ```
//!
//! Categories keep the order they appear in the file.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::draft::TagSelection;
use crate::error::{ModelError, Result};

const BUILTIN_CATALOG: &str = include_str!("../data/tags.json");

/// A named group of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCategory {
    pub name: String,
    pub tags: Vec<String>,
}

impl TagCategory {
    /// Human-readable heading for the category, e.g. `FOOD_AND_DRINK` becomes
    /// `Food and drink`.
    pub fn label(&self) -> String {
        category_label(&self.name)
    }
}

/// All selectable tags, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCatalog {
    categories: Vec<TagCategory>,
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: OrderedCategories,
}

struct OrderedCategories(Vec<TagCategory>);

impl<'de> Deserialize<'de> for OrderedCategories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = OrderedCategories;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to tag lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, tags)) = map.next_entry::<String, Vec<String>>()? {
                    categories.push(TagCategory { name, tags });
                }
                Ok(OrderedCategories(categories))
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

impl TagCatalog {
    pub fn new(categories: Vec<TagCategory>) -> Self {
        Self { categories }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(BUILTIN_CATALOG).map_err(ModelError::BuiltinCatalog)?;
        Ok(Self::new(file.categories.0))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ModelError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&text).map_err(|source| ModelError::CatalogJson {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file.categories.0))
    }

    pub fn categories(&self) -> &[TagCategory] {
        &self.categories
    }

    pub fn tag_count(&self) -> usize {
        self.categories.iter().map(|c| c.tags.len()).sum()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.tags.iter().any(|t| t == tag))
    }

    /// Selected tags that no category offers, in sorted order.
    pub fn unknown_tags<'a>(&self, selection: &'a TagSelection) -> Vec<&'a str> {
        selection.iter().filter(|tag| !self.contains(tag)).collect()
    }
}

/// Turn a `SCREAMING_SNAKE` category key into a sentence-case heading.
pub fn category_label(name: &str) -> String {
    let spaced = name.replace('_', " ").to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_in_file_order() {
        let catalog = TagCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"TRIP_TYPE"));
        assert_eq!(names.last(), Some(&"ACCESSIBILITY"));
        assert!(catalog.contains("Hiking"));
        assert!(!catalog.contains("hiking"));
    }

    #[test]
    fn labels_are_sentence_case() {
        assert_eq!(category_label("FOOD_AND_DRINK"), "Food and drink");
        assert_eq!(category_label("BUDGET"), "Budget");
        assert_eq!(category_label(""), "");
    }
}
