use crate::models::{CartSnapshot, LineItem};
use serde::{Deserialize, Serialize};

/// Order record produced when a cart is checked out
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderTicket {
    /// Unique identifier for the order
    pub order_id: String,
    /// Items in the order, in the order they were first added
    pub line_items: Vec<LineItem>,
    /// Amount before tip
    pub subtotal: f64,
    /// Tip amount
    pub tip: f64,
    /// Amount charged
    pub total: f64,
    /// Optional pickup time as `HH:MM`
    pub pickup_time: Option<String>,
    /// Unix timestamp when the order was placed
    pub created_timestamp: u64,
}

impl OrderTicket {
    /// Creates a ticket from the snapshot of the cart being checked out
    pub fn from_snapshot(order_id: String, snapshot: CartSnapshot, created_timestamp: u64) -> Self {
        Self {
            order_id,
            line_items: snapshot.line_items,
            subtotal: snapshot.subtotal,
            tip: snapshot.tip,
            total: snapshot.total,
            pickup_time: None,
            created_timestamp,
        }
    }

    /// Sets the pickup time
    pub fn with_pickup_time(mut self, pickup_time: String) -> Self {
        self.pickup_time = Some(pickup_time);
        self
    }

    /// Serializes the ticket to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
