use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор позиции корзины. Выдаётся монотонно и не переиспользуется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartItemId(pub u64);

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One confirmed (spice, weight) selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: CartItemId,
    pub name: String,
    /// Preset token or whatever the customer typed; never parsed
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    next_id: u64,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item with a fresh id and return that id
    pub fn push(&mut self, name: String, weight: String) -> CartItemId {
        let id = CartItemId(self.next_id);
        self.next_id += 1;
        self.items.push(CartItem { id, name, weight });
        id
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: CartItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empty the cart. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self) -> CartView {
        if self.items.is_empty() {
            return CartView::Empty;
        }
        CartView::Items(
            self.items
                .iter()
                .map(|item| CartLine {
                    id: item.id,
                    name: item.name.clone(),
                    weight: item.weight.clone(),
                })
                .collect(),
        )
    }
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: CartItemId,
    pub name: String,
    pub weight: String,
}

/// Что показывает окно корзины
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    Empty,
    /// Insertion order
    Items(Vec<CartLine>),
}

impl CartView {
    pub fn count(&self) -> usize {
        match self {
            CartView::Empty => 0,
            CartView::Items(lines) => lines.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut cart = Cart::new();
        let a = cart.push("كمون".into(), "100".into());
        let b = cart.push("سماق".into(), "250".into());
        assert!(b > a);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].name, "كمون");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.push("كمون".into(), "100".into());
        let before = cart.clone();
        assert!(!cart.remove(CartItemId(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut cart = Cart::new();
        let first = cart.push("a".into(), "50".into());
        cart.clear();
        let second = cart.push("b".into(), "50".into());
        assert_ne!(first, second);
    }

    #[test]
    fn test_render() {
        let mut cart = Cart::new();
        assert_eq!(cart.render(), CartView::Empty);
        let id = cart.push("Cumin".into(), "100".into());
        assert_eq!(
            cart.render(),
            CartView::Items(vec![CartLine {
                id,
                name: "Cumin".into(),
                weight: "100".into(),
            }])
        );
        cart.clear();
        assert_eq!(cart.render(), CartView::Empty);
        assert_eq!(cart.render().count(), 0);
    }
}
