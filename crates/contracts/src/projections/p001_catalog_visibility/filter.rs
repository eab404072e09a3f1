use super::ALL_CATEGORIES;
use crate::domain::a001_spice::{SpiceCard, SpiceId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Build from a button token; `"all"` is the sentinel for no restriction
    pub fn from_token(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(tag) => tag,
        }
    }

    pub fn admits(&self, card: &SpiceCard) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => card.category == *tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    category: CategoryFilter,
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Normalized (lower-case, trimmed) search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = raw.trim().to_lowercase();
    }

    /// Category AND search
    pub fn admits(&self, card: &SpiceCard) -> bool {
        self.category.admits(card) && card.matches_search(&self.search_term)
    }
}

/// Ids of the cards that should be shown, in catalog order
pub fn visible_set(cards: &[SpiceCard], state: &FilterState) -> Vec<SpiceId> {
    cards
        .iter()
        .filter(|card| state.admits(card))
        .map(|card| card.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_spice::Catalog;
    use proptest::prelude::*;

    fn card(i: usize, category: &str, title: &str, title_en: &str, description: &str) -> SpiceCard {
        SpiceCard {
            id: SpiceId(i),
            category: category.to_string(),
            title: title.to_string(),
            title_en: title_en.to_string(),
            description: description.to_string(),
        }
    }

    fn sample() -> Vec<SpiceCard> {
        vec![
            card(0, "blends", "زعتر", "Za'atar", "Thyme, sesame and sumac"),
            card(1, "single", "كمون", "Cumin", "Earthy seeds"),
            card(2, "single", "سماق", "Sumac", "Tangy berries"),
            card(3, "herbs", "نعناع", "Mint", "Dried leaves"),
        ]
    }

    #[test]
    fn test_default_shows_everything() {
        let cards = sample();
        let state = FilterState::new();
        assert_eq!(visible_set(&cards, &state).len(), cards.len());
    }

    #[test]
    fn test_category_and_search_combined() {
        let cards = sample();
        let mut state = FilterState::new();
        state.set_search_term("sumac");
        assert_eq!(visible_set(&cards, &state), vec![SpiceId(0), SpiceId(2)]);

        state.set_category(CategoryFilter::from_token("single"));
        assert_eq!(visible_set(&cards, &state), vec![SpiceId(2)]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let cards = sample();
        let mut state = FilterState::new();
        state.set_search_term("  CUMIN ");
        assert_eq!(state.search_term(), "cumin");
        assert_eq!(visible_set(&cards, &state), vec![SpiceId(1)]);
    }

    #[test]
    fn test_search_arabic_title() {
        let cards = sample();
        let mut state = FilterState::new();
        state.set_search_term("نعناع");
        assert_eq!(visible_set(&cards, &state), vec![SpiceId(3)]);
    }

    #[test]
    fn test_clearing_search_restores_category_set() {
        let cards = sample();
        let mut state = FilterState::new();
        state.set_category(CategoryFilter::from_token("single"));
        let by_category = visible_set(&cards, &state);

        state.set_search_term("zzz");
        assert!(visible_set(&cards, &state).is_empty());
        state.set_search_term("");
        assert_eq!(visible_set(&cards, &state), by_category);
    }

    #[test]
    fn test_all_token_roundtrip() {
        assert_eq!(CategoryFilter::from_token("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.token(), "all");
        assert_eq!(CategoryFilter::from_token("herbs").token(), "herbs");
    }

    fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            Just(CategoryFilter::Only("blends".to_string())),
            Just(CategoryFilter::Only("single".to_string())),
            Just(CategoryFilter::Only("herbs".to_string())),
            Just(CategoryFilter::Only("teas".to_string())),
        ]
    }

    proptest! {
        #[test]
        fn prop_visible_set_is_conjunction(
            category in category_strategy(),
            term in "[a-zA-Z ]{0,6}"
        ) {
            let cards = Catalog::embedded().unwrap().cards;
            let mut state = FilterState::new();
            state.set_category(category.clone());
            state.set_search_term(&term);

            let visible = visible_set(&cards, &state);
            let needle = term.trim().to_lowercase();
            for card in &cards {
                let by_category = category.admits(card);
                let by_search = needle.is_empty()
                    || card.title.to_lowercase().contains(&needle)
                    || card.title_en.to_lowercase().contains(&needle)
                    || card.description.to_lowercase().contains(&needle);
                prop_assert_eq!(visible.contains(&card.id), by_category && by_search);
            }
        }

        #[test]
        fn prop_set_category_idempotent(category in category_strategy(), term in "[a-z]{0,3}") {
            let cards = sample();
            let mut once = FilterState::new();
            once.set_search_term(&term);
            once.set_category(category.clone());

            let mut twice = once.clone();
            twice.set_category(category);

            prop_assert_eq!(visible_set(&cards, &once), visible_set(&cards, &twice));
        }
    }
}
