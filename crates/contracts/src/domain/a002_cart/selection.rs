//! Add-to-cart cycle: `Idle -> SelectingWeight -> Idle`.
//!
//! [`CartManager`] owns the cart together with the staging area of the weight
//! modal. The modal is open exactly while `selection` is `Some`.

use super::aggregate::{Cart, CartItemId, CartView};
use crate::domain::a001_spice::SpiceCard;
use crate::shared::error::CartError;

/// Weight picked in the modal. Preset and custom entry exclude each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightChoice {
    Preset(String),
    Custom(String),
}

impl WeightChoice {
    pub fn token(&self) -> &str {
        match self {
            WeightChoice::Preset(t) | WeightChoice::Custom(t) => t,
        }
    }

    pub fn is_preset(&self, token: &str) -> bool {
        matches!(self, WeightChoice::Preset(t) if t == token)
    }
}

/// Staging state of the weight modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub spice_name: Option<String>,
    pub weight: Option<WeightChoice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartManager {
    cart: Cart,
    selection: Option<Selection>,
}

impl CartManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_some()
    }

    /// Open the weight modal for `card`, discarding any earlier staging.
    pub fn begin_selection(&mut self, card: &SpiceCard) {
        self.selection = Some(Selection {
            spice_name: Some(card.title.clone()),
            weight: None,
        });
    }

    /// Overwrite the staged weight. Ignored while the modal is closed.
    pub fn choose_weight(&mut self, choice: WeightChoice) {
        if let Some(selection) = self.selection.as_mut() {
            selection.weight = Some(choice);
        }
    }

    pub fn choose_preset(&mut self, token: &str) {
        self.choose_weight(WeightChoice::Preset(token.to_string()));
    }

    /// Free-text weight input. Blank input is ignored, whatever was staged
    /// before stays staged.
    pub fn enter_custom_weight(&mut self, raw: &str) {
        let text = raw.trim();
        if !text.is_empty() {
            self.choose_weight(WeightChoice::Custom(text.to_string()));
        }
    }

    /// Close the modal without adding anything
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Move the staged selection into the cart.
    ///
    /// On error nothing changes, the modal stays open.
    pub fn confirm(&mut self) -> Result<CartItemId, CartError> {
        let (name, weight) = match &self.selection {
            Some(Selection {
                spice_name: Some(name),
                weight: Some(weight),
            }) => (name.clone(), weight.token().to_string()),
            _ => return Err(CartError::WeightRequired),
        };

        let id = self.cart.push(name, weight);
        self.selection = None;
        log::debug!("cart: added item {} ({} total)", id, self.cart.len());
        Ok(id)
    }

    pub fn remove(&mut self, id: CartItemId) {
        if self.cart.remove(id) {
            log::debug!("cart: removed item {}", id);
        }
    }

    pub fn clear(&mut self) {
        let n = self.cart.len();
        self.cart.clear();
        log::debug!("cart: cleared {} item(s)", n);
    }

    pub fn render(&self) -> CartView {
        self.cart.render()
    }
}
