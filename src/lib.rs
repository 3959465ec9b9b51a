pub mod api;
pub mod config;
pub mod core;
pub mod models;

/// Re-export important types for easier access
pub use crate::models::{CartSnapshot, LineItem, MenuItem, OrderTicket};

pub use crate::config::CartConfig;
pub use crate::core::cart::OrderCart;
pub use crate::core::error::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
