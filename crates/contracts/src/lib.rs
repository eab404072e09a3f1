//! Domain model and state transitions of the spice storefront.
//!
//! Everything here is plain Rust with no browser dependency, so the frontend
//! crate only wires DOM events to [`usecases::u002_storefront::Storefront`]
//! and renders what it returns.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
