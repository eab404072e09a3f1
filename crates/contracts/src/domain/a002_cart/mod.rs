pub mod aggregate;
pub mod selection;

pub use aggregate::{Cart, CartItem, CartItemId, CartLine, CartView};
pub use selection::{CartManager, Selection, WeightChoice};
