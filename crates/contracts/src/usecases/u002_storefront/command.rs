use crate::domain::a001_spice::SpiceId;
use crate::domain::a002_cart::CartItemId;
use crate::projections::p001_catalog_visibility::{CategoryFilter, PhaseTicket};

/// Every user action the storefront reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    SelectCategory(CategoryFilter),
    Search(String),
    /// Card click: open the weight modal for this spice
    PickSpice(SpiceId),
    ChoosePreset(String),
    EnterCustomWeight(String),
    ConfirmSelection,
    OpenCart,
    /// Close button, overlay click or Escape
    CloseModals,
    RemoveItem(CartItemId),
    ClearCart,
    SendOrder,
    /// A deferred fade step fired
    CompleteTransition { card: SpiceId, ticket: PhaseTicket },
}
