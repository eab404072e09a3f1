pub mod a001_spice;
pub mod a002_cart;
