pub mod card_animated;
pub mod filter_panel;

pub use card_animated::CardAnimated;
pub use filter_panel::{FilterOption, FilterPanel};
