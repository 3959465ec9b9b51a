//! Common data types and enums

/// Kind of mutation that produced a cart change notification
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A new line item was appended
    ItemAdded {
        /// Name of the line
        name: String,
    },
    /// An existing line changed quantity
    QuantityChanged {
        /// Name of the line
        name: String,
        /// Quantity after the change
        quantity: u32,
    },
    /// A line was removed because its quantity reached zero
    ItemRemoved {
        /// Name of the removed line
        name: String,
    },
    /// The tip rate was changed
    TipRateChanged {
        /// New tip rate
        rate: f64,
    },
    /// Every line item was removed
    Cleared,
}

impl CartEvent {
    /// Converts the event kind to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::QuantityChanged { .. } => "quantity_changed",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::TipRateChanged { .. } => "tip_rate_changed",
            CartEvent::Cleared => "cleared",
        }
    }
}

/// Handle returned by `OrderCart::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
