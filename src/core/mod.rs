//! Core cart logic and data structures

pub mod cart;
pub mod error;
pub mod money;
pub mod observer;
pub mod types;
