//! Collaborator-facing APIs that drive the cart from page controls

pub mod checkout;
pub mod menu;
pub mod pickup;
pub mod quick_add;
pub mod tip;
