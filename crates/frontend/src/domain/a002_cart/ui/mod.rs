pub mod cart_fab;
pub mod cart_panel;
pub mod weight_picker;
