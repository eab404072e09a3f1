use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Position of a card in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpiceId(pub usize);

impl SpiceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

// ============================================================================
// Card
// ============================================================================

/// Карточка специи на витрине
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiceCard {
    pub id: SpiceId,
    /// Category tag, matched verbatim by the category filter
    pub category: String,
    /// Primary (Arabic) name; copied into cart items
    pub title: String,
    /// Secondary (English) name
    pub title_en: String,
    pub description: String,
}

impl SpiceCard {
    /// Case-insensitive substring match against both titles and the description.
    ///
    /// `needle` must already be lower-cased; an empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.title_en.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Category shown as a filter button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub tag: String,
    pub label: String,
    #[serde(rename = "labelEn")]
    pub label_en: String,
}
