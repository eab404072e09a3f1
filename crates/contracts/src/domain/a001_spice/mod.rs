pub mod aggregate;
pub mod catalog;

pub use aggregate::{CategoryInfo, SpiceCard, SpiceId};
pub use catalog::Catalog;
