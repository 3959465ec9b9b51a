//! Checkout trigger: pay button state and order placement

use crate::api::pickup::PickupSlot;
use crate::core::cart::OrderCart;
use crate::core::error::Error;
use crate::core::money::format_usd;
use crate::models::OrderTicket;
use crate::Result;
use chrono::Utc;
use uuid::Uuid;

/// API behind the "Pay" button
#[derive(Debug, Default)]
pub struct Checkout;

impl Checkout {
    /// Creates a new Checkout
    pub fn new() -> Self {
        Self
    }

    /// The pay button is disabled while the cart is empty
    pub fn is_enabled(&self, cart: &OrderCart) -> bool {
        !cart.is_empty()
    }

    /// Text of the pay button, e.g. "Pay $6.00"
    pub fn pay_label(&self, cart: &OrderCart) -> String {
        format!("Pay {}", format_usd(cart.total()))
    }

    /// Places the order and empties the cart
    pub fn place_order(
        &self,
        cart: &mut OrderCart,
        pickup: Option<&PickupSlot>,
    ) -> Result<OrderTicket> {
        if cart.is_empty() {
            return Err(Error::InvalidState("cannot check out an empty cart".into()));
        }

        // Generate a unique order ID
        let order_id = Uuid::new_v4().to_string();

        // Get the current timestamp
        let timestamp = Utc::now().timestamp() as u64;

        let mut ticket = OrderTicket::from_snapshot(order_id, cart.snapshot(), timestamp);
        if let Some(slot) = pickup {
            ticket = ticket.with_pickup_time(slot.value.clone());
        }

        log::info!(
            "Placed order {} for {}",
            ticket.order_id,
            format_usd(ticket.total)
        );

        cart.clear();
        Ok(ticket)
    }
}
