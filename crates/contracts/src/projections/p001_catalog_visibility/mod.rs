//! Which catalog cards are shown, and where each one is in its fade transition.

pub mod filter;
pub mod transition;

pub use filter::{visible_set, CategoryFilter, FilterState};
pub use transition::{CardPhase, CardVisibility, PhaseTicket};

/// Category token meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";
