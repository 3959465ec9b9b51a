//! Change notification for cart observers

use crate::core::types::CartEvent;
use crate::models::CartSnapshot;
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with the mutation kind and the resulting snapshot
pub type Observer = Box<dyn FnMut(&CartEvent, &CartSnapshot)>;

#[derive(Debug, Default)]
struct Recorded {
    latest: Option<CartSnapshot>,
    last_event: Option<CartEvent>,
    changes: usize,
}

/// Keeps the most recent snapshot for pull-style renderers.
///
/// Only the latest snapshot and event are held, plus a change counter, so a
/// recorder can stay subscribed for the life of the cart. Clones share the
/// same record, so one clone can be handed to the cart through
/// [`SnapshotRecorder::callback`] while another is read.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    inner: Rc<RefCell<Recorded>>,
}

impl SnapshotRecorder {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a callback suitable for `OrderCart::subscribe`
    pub fn callback(&self) -> impl FnMut(&CartEvent, &CartSnapshot) + 'static {
        let inner = Rc::clone(&self.inner);
        move |event, snapshot| {
            let mut recorded = inner.borrow_mut();
            recorded.latest = Some(snapshot.clone());
            recorded.last_event = Some(event.clone());
            recorded.changes += 1;
        }
    }

    /// Most recent snapshot, if any mutation has been observed
    pub fn latest(&self) -> Option<CartSnapshot> {
        self.inner.borrow().latest.clone()
    }

    /// Event behind the most recent snapshot
    pub fn last_event(&self) -> Option<CartEvent> {
        self.inner.borrow().last_event.clone()
    }

    /// Number of notifications received
    pub fn changes(&self) -> usize {
        self.inner.borrow().changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cart::OrderCart;

    #[test]
    fn test_recorder_keeps_only_latest() {
        let mut cart = OrderCart::new();
        let recorder = SnapshotRecorder::new();
        cart.subscribe(recorder.callback());

        for _ in 0..1000 {
            cart.add("Latte", 4.50).unwrap();
        }
        cart.set_tip_rate(0.15).unwrap();

        assert_eq!(recorder.changes(), 1001);
        assert_eq!(
            recorder.last_event(),
            Some(CartEvent::TipRateChanged { rate: 0.15 })
        );
        assert_eq!(recorder.latest().unwrap().quantity_of("Latte"), 1000);
    }

    #[test]
    fn test_clones_share_record() {
        let mut cart = OrderCart::new();
        let recorder = SnapshotRecorder::new();
        let reader = recorder.clone();
        cart.subscribe(recorder.callback());

        cart.add("Tea", 3.00).unwrap();

        assert_eq!(reader.changes(), 1);
        assert_eq!(
            reader.last_event(),
            Some(CartEvent::ItemAdded {
                name: "Tea".to_string()
            })
        );
    }
}
