use super::aggregate::{CategoryInfo, SpiceCard, SpiceId};
use crate::projections::p001_catalog_visibility::ALL_CATEGORIES;
use crate::shared::error::CatalogError;
use anyhow::Context;
use serde::Deserialize;

const EMBEDDED_CATALOG: &str = include_str!("../../../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogJson {
    categories: Vec<CategoryInfo>,
    spices: Vec<SpiceJson>,
}

#[derive(Debug, Deserialize)]
struct SpiceJson {
    category: String,
    name: String,
    #[serde(rename = "nameEn")]
    name_en: String,
    description: String,
}

/// Immutable card collection the page is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<CategoryInfo>,
    pub cards: Vec<SpiceCard>,
}

impl Catalog {
    /// Parse a catalog document. Card identity is its position in `spices`.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogJson = serde_json::from_str(raw)?;

        if parsed.spices.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(reserved) = parsed
            .categories
            .iter()
            .find(|c| c.tag == ALL_CATEGORIES)
        {
            return Err(CatalogError::ReservedCategory(reserved.tag.clone()));
        }

        let cards = parsed
            .spices
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                if !parsed.categories.iter().any(|c| c.tag == s.category) {
                    return Err(CatalogError::UnknownCategory {
                        index,
                        category: s.category,
                    });
                }
                Ok(SpiceCard {
                    id: SpiceId(index),
                    category: s.category,
                    title: s.name,
                    title_en: s.name_en,
                    description: s.description,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            categories: parsed.categories,
            cards,
        })
    }

    /// Catalog bundled with the page
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("embedded catalog")
    }

    pub fn get(&self, id: SpiceId) -> Option<&SpiceCard> {
        self.cards.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        for (i, card) in catalog.cards.iter().enumerate() {
            assert_eq!(card.id, SpiceId(i));
            assert!(!card.title.trim().is_empty());
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let raw = r#"{
            "categories": [{"tag": "blends", "label": "خلطات", "labelEn": "Blends"}],
            "spices": [{"category": "teas", "name": "شاي", "nameEn": "Tea", "description": ""}]
        }"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::UnknownCategory { index, category }) => {
                assert_eq!(index, 0);
                assert_eq!(category, "teas");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_reserved_category_rejected() {
        let raw = r#"{
            "categories": [{"tag": "all", "label": "الكل", "labelEn": "All"}],
            "spices": [{"category": "all", "name": "x", "nameEn": "x", "description": ""}]
        }"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::ReservedCategory(_))
        ));
    }

    #[test]
    fn test_empty_and_malformed() {
        assert!(matches!(
            Catalog::from_json(r#"{"categories": [], "spices": []}"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
