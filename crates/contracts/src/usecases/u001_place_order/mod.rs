pub mod message;

pub use message::{compose_message, order_url};
