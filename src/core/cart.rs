//! Order cart: line items, tip rate and totals

use crate::config::CartConfig;
use crate::core::error::Error;
use crate::core::money::ensure_non_negative;
use crate::core::observer::Observer;
use crate::core::types::{CartEvent, SubscriptionId};
use crate::models::{CartSnapshot, LineItem};
use crate::Result;
use std::fmt;

/// Cart of order line items keyed by name.
///
/// Line items keep the order in which they were first added, names are
/// unique, and every stored line has a quantity of at least one. Totals are
/// recomputed from the line items on every call.
pub struct OrderCart {
    /// Line items in first-added order
    line_items: Vec<LineItem>,
    /// Tip rate as a fraction of the subtotal
    tip_rate: f64,
    /// Tip presets and policy
    config: CartConfig,
    /// Registered change observers
    observers: Vec<(SubscriptionId, Observer)>,
    /// Next subscription handle to give out
    next_subscription: u64,
}

impl OrderCart {
    /// Creates an empty cart with the default configuration
    pub fn new() -> Self {
        Self::from_parts(CartConfig::default())
    }

    /// Creates an empty cart with the given configuration
    pub fn with_config(config: CartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: CartConfig) -> Self {
        Self {
            line_items: Vec::new(),
            tip_rate: config.default_tip_rate,
            config,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Adds one unit of `name` at `price`.
    ///
    /// An existing line is incremented and keeps its original unit price;
    /// otherwise a new line with quantity 1 is appended. A line already at
    /// `u32::MAX` is left as is without notifying. A negative or non-finite
    /// price is rejected and the cart is left untouched.
    pub fn add(&mut self, name: &str, price: f64) -> Result<()> {
        if let Err(e) = ensure_non_negative("price", price) {
            log::warn!("Rejected add of {:?}: {}", name, e);
            return Err(e);
        }

        let event = match self.line_items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                let Some(quantity) = item.quantity.checked_add(1) else {
                    log::warn!("Quantity of {:?} is at its maximum, add ignored", name);
                    return Ok(());
                };
                item.quantity = quantity;
                CartEvent::QuantityChanged {
                    name: item.name.clone(),
                    quantity: item.quantity,
                }
            }
            None => {
                self.line_items.push(LineItem::new(name.to_string(), price, 1));
                CartEvent::ItemAdded {
                    name: name.to_string(),
                }
            }
        };

        self.notify(event);
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// Negative quantities are clamped to zero and a zero quantity removes
    /// the line. Unknown names are ignored.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) {
        let Some(index) = self.line_items.iter().position(|item| item.name == name) else {
            log::debug!("Ignoring quantity change for {:?}: not in cart", name);
            return;
        };

        let effective = quantity.max(0);
        let event = if effective == 0 {
            let removed = self.line_items.remove(index);
            CartEvent::ItemRemoved { name: removed.name }
        } else {
            let item = &mut self.line_items[index];
            item.quantity = u32::try_from(effective).unwrap_or(u32::MAX);
            CartEvent::QuantityChanged {
                name: item.name.clone(),
                quantity: item.quantity,
            }
        };

        self.notify(event);
    }

    /// Sets the tip rate applied to the subtotal
    pub fn set_tip_rate(&mut self, rate: f64) -> Result<()> {
        if let Err(e) = ensure_non_negative("tip rate", rate) {
            log::warn!("Rejected tip rate: {}", e);
            return Err(e);
        }
        if !self.config.allow_custom_tip && !self.config.is_preset(rate) {
            log::warn!("Rejected tip rate {}: not a preset", rate);
            return Err(Error::InvalidArgument(format!(
                "tip rate {} is not one of the offered presets",
                rate
            )));
        }

        self.tip_rate = rate;
        self.notify(CartEvent::TipRateChanged { rate });
        Ok(())
    }

    /// Removes every line item, keeping the tip rate
    pub fn clear(&mut self) {
        self.line_items.clear();
        self.notify(CartEvent::Cleared);
    }

    /// Sum of unit price times quantity over all line items
    pub fn subtotal(&self) -> f64 {
        self.line_items.iter().map(LineItem::line_total).sum()
    }

    /// Tip amount for the current subtotal and tip rate
    pub fn tip(&self) -> f64 {
        self.subtotal() * self.tip_rate
    }

    /// Subtotal plus tip
    pub fn total(&self) -> f64 {
        self.subtotal() + self.tip()
    }

    pub fn tip_rate(&self) -> f64 {
        self.tip_rate
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Quantity of the named line, 0 when absent
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.line_items
            .iter()
            .find(|item| item.name == name)
            .map_or(0, |item| item.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    /// Current line items and totals
    pub fn snapshot(&self) -> CartSnapshot {
        let subtotal = self.subtotal();
        let tip = subtotal * self.tip_rate;
        CartSnapshot {
            line_items: self.line_items.clone(),
            tip_rate: self.tip_rate,
            subtotal,
            tip,
            total: subtotal + tip,
        }
    }

    /// Registers an observer called after every mutation
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &CartSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: CartEvent) {
        let snapshot = self.snapshot();
        log::debug!(
            "Cart {}: {} line(s), total {:.2}",
            event.as_str(),
            snapshot.line_items.len(),
            snapshot.total
        );

        for (_, observer) in self.observers.iter_mut() {
            observer(&event, &snapshot);
        }
    }
}

impl Default for OrderCart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OrderCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderCart")
            .field("line_items", &self.line_items)
            .field("tip_rate", &self.tip_rate)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observer::SnapshotRecorder;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_repeat_add_increments_quantity() {
        let mut cart = OrderCart::new();
        cart.add("Latte", 4.50).unwrap();
        cart.add("Latte", 4.50).unwrap();

        assert_eq!(cart.line_items(), &[LineItem::new("Latte".to_string(), 4.5, 2)]);
        assert!(approx(cart.subtotal(), 9.00));
    }

    #[test]
    fn test_tip_and_total() {
        let mut cart = OrderCart::new();
        cart.add("Mocha", 5.00).unwrap();
        cart.set_tip_rate(0.20).unwrap();

        assert!(approx(cart.tip(), 1.00));
        assert!(approx(cart.total(), 6.00));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = OrderCart::new();
        cart.add("Tea", 3.00).unwrap();
        cart.set_quantity("Tea", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn test_set_quantity_unknown_is_noop() {
        let mut cart = OrderCart::new();
        let recorder = SnapshotRecorder::new();
        cart.subscribe(recorder.callback());

        cart.set_quantity("Ghost", 5);

        assert!(cart.is_empty());
        assert_eq!(recorder.changes(), 0);
    }

    #[test]
    fn test_set_quantity_down_to_one() {
        let mut cart = OrderCart::new();
        for _ in 0..3 {
            cart.add("Croissant", 3.25).unwrap();
        }
        cart.set_quantity("Croissant", 1);

        assert_eq!(cart.quantity_of("Croissant"), 1);
        assert!(approx(cart.subtotal(), 3.25));
    }

    #[test]
    fn test_negative_quantity_clamps_to_removal() {
        let mut cart = OrderCart::new();
        cart.add("Tea", 3.00).unwrap();
        cart.add("Scone", 2.75).unwrap();
        cart.set_quantity("Tea", -4);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("Tea"), 0);
        assert_eq!(cart.line_items()[0].name, "Scone");
    }

    #[test]
    fn test_double_removal_is_idempotent() {
        let mut cart = OrderCart::new();
        cart.add("Tea", 3.00).unwrap();
        cart.add("Mocha", 5.00).unwrap();

        cart.set_quantity("Tea", 0);
        let once = cart.snapshot();
        cart.set_quantity("Tea", 0);

        assert_eq!(cart.snapshot(), once);
    }

    #[test]
    fn test_rejected_add_leaves_cart_unchanged() {
        let mut cart = OrderCart::new();
        cart.add("Mocha", 5.00).unwrap();
        let recorder = SnapshotRecorder::new();
        cart.subscribe(recorder.callback());
        let before = cart.snapshot();

        let err = cart.add("Latte", -1.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(cart.add("Latte", f64::NAN).is_err());
        assert!(cart.add("Mocha", f64::INFINITY).is_err());

        assert_eq!(cart.snapshot(), before);
        assert_eq!(recorder.changes(), 0);
    }

    #[test]
    fn test_rejected_tip_rate_leaves_cart_unchanged() {
        let mut cart = OrderCart::new();
        cart.add("Mocha", 5.00).unwrap();
        cart.set_tip_rate(0.15).unwrap();

        assert!(cart.set_tip_rate(-0.1).unwrap_err().is_invalid_argument());
        assert!(cart.set_tip_rate(f64::NAN).is_err());
        assert_eq!(cart.tip_rate(), 0.15);
    }

    #[test]
    fn test_custom_tip_policy() {
        let mut open = OrderCart::new();
        assert!(open.set_tip_rate(0.12).is_ok());

        let config = CartConfig {
            allow_custom_tip: false,
            ..CartConfig::default()
        };
        let mut strict = OrderCart::with_config(config).unwrap();
        assert!(strict.set_tip_rate(0.18).is_ok());
        assert!(strict.set_tip_rate(0.12).unwrap_err().is_invalid_argument());
        assert_eq!(strict.tip_rate(), 0.18);
    }

    #[test]
    fn test_default_tip_rate_from_config() {
        let config = CartConfig {
            default_tip_rate: 0.15,
            ..CartConfig::default()
        };
        let mut cart = OrderCart::with_config(config).unwrap();
        cart.add("Latte", 4.00).unwrap();

        assert!(approx(cart.tip(), 0.60));
    }

    #[test]
    fn test_add_keeps_first_unit_price() {
        let mut cart = OrderCart::new();
        cart.add("Latte", 4.50).unwrap();
        cart.add("Latte", 5.00).unwrap();

        assert_eq!(cart.line_items()[0].unit_price, 4.50);
        assert!(approx(cart.subtotal(), 9.00));
    }

    #[test]
    fn test_insertion_order() {
        let mut cart = OrderCart::new();
        cart.add("Latte", 4.50).unwrap();
        cart.add("Scone", 3.00).unwrap();
        cart.add("Latte", 4.50).unwrap();
        cart.add("Tea", 3.00).unwrap();

        let names: Vec<&str> = cart.line_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Latte", "Scone", "Tea"]);
    }

    #[test]
    fn test_observers_see_consistent_snapshots() {
        let mut cart = OrderCart::new();
        let recorder = SnapshotRecorder::new();
        cart.subscribe(recorder.callback());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cart.subscribe(move |event: &CartEvent, _: &CartSnapshot| {
            sink.borrow_mut().push(event.as_str())
        });

        cart.add("Latte", 4.50).unwrap();
        cart.add("Latte", 4.50).unwrap();
        cart.set_tip_rate(0.20).unwrap();
        cart.set_quantity("Latte", 0);

        assert_eq!(
            *seen.borrow(),
            vec!["item_added", "quantity_changed", "tip_rate_changed", "item_removed"]
        );

        let latest = recorder.latest().unwrap();
        assert!(latest.is_empty());
        assert_eq!(latest.tip_rate, 0.20);
        assert_eq!(latest.total, 0.0);
    }

    #[test]
    fn test_observer_snapshot_matches_cart() {
        let mut cart = OrderCart::new();
        let recorder = SnapshotRecorder::new();
        cart.subscribe(recorder.callback());

        cart.add("Mocha", 5.00).unwrap();
        cart.set_tip_rate(0.20).unwrap();

        let latest = recorder.latest().unwrap();
        assert_eq!(latest, cart.snapshot());
        assert!(approx(latest.total, latest.subtotal + latest.tip));
    }

    #[test]
    fn test_add_at_max_quantity_is_silent() {
        let mut cart = OrderCart::new();
        cart.add("Espresso", 3.00).unwrap();
        cart.set_quantity("Espresso", i64::from(u32::MAX));
        let recorder = SnapshotRecorder::new();
        cart.subscribe(recorder.callback());

        cart.add("Espresso", 3.00).unwrap();

        assert_eq!(cart.quantity_of("Espresso"), u32::MAX);
        assert_eq!(recorder.changes(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut cart = OrderCart::new();
        let recorder = SnapshotRecorder::new();
        let id = cart.subscribe(recorder.callback());

        cart.add("Tea", 3.00).unwrap();
        assert!(cart.unsubscribe(id));
        assert!(!cart.unsubscribe(id));
        cart.add("Tea", 3.00).unwrap();

        assert_eq!(recorder.changes(), 1);
    }

    #[test]
    fn test_clear_keeps_tip_rate() {
        let mut cart = OrderCart::new();
        cart.add("Tea", 3.00).unwrap();
        cart.set_tip_rate(0.15).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.tip_rate(), 0.15);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = CartConfig {
            default_tip_rate: -1.0,
            ..CartConfig::default()
        };
        assert!(OrderCart::with_config(config).is_err());
    }
}
