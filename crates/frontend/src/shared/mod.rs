pub mod components;
pub mod dom;
pub mod icons;
pub mod modal;
