//! Command dispatcher tying the filter, the fades and the cart together.

pub mod command;
pub mod effect;
pub mod storefront;

pub use command::StoreCommand;
pub use effect::StoreEffect;
pub use storefront::Storefront;
