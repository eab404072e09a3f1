use thiserror::Error;

/// Ошибки корзины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// Confirm was requested before both a spice and a weight were chosen.
    #[error("weight required")]
    WeightRequired,
}

/// Ошибки загрузки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no cards")]
    Empty,

    #[error("card #{index} uses undeclared category '{category}'")]
    UnknownCategory { index: usize, category: String },

    #[error("category tag '{0}' is reserved")]
    ReservedCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_message() {
        assert_eq!(CartError::WeightRequired.to_string(), "weight required");
    }

    #[test]
    fn test_catalog_error_message() {
        let err = CatalogError::UnknownCategory {
            index: 3,
            category: "teas".to_string(),
        };
        assert_eq!(err.to_string(), "card #3 uses undeclared category 'teas'");
    }
}
