use serde::{Deserialize, Serialize};

/// One distinct product entry in the cart with its own quantity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Display name, also the key of the line within a cart
    pub name: String,
    /// Price of a single unit in dollars
    pub unit_price: f64,
    /// Number of units ordered, at least 1 while the line is in a cart
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new LineItem
    pub fn new(name: String, unit_price: f64, quantity: u32) -> Self {
        Self {
            name,
            unit_price,
            quantity,
        }
    }

    /// Price of the whole line (unit price times quantity)
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
