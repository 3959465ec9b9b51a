use crate::models::LineItem;
use serde::{Deserialize, Serialize};

/// Consistent view of the cart handed to observers after a mutation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Line items in first-added order
    pub line_items: Vec<LineItem>,
    /// Tip rate as a fraction of the subtotal
    pub tip_rate: f64,
    /// Sum of unit price times quantity over all line items
    pub subtotal: f64,
    /// Subtotal times tip rate
    pub tip: f64,
    /// Subtotal plus tip
    pub total: f64,
}

impl CartSnapshot {
    /// Whether the snapshot holds no line items
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Total number of units across all line items
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }

    /// Quantity of the named line, 0 when absent
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.line_items
            .iter()
            .find(|item| item.name == name)
            .map_or(0, |item| item.quantity)
    }

    /// Serializes the snapshot to JSON for a render layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CartSnapshot {
        CartSnapshot {
            line_items: vec![
                LineItem::new("Latte".to_string(), 4.5, 2),
                LineItem::new("Scone".to_string(), 3.0, 1),
            ],
            tip_rate: 0.0,
            subtotal: 12.0,
            tip: 0.0,
            total: 12.0,
        }
    }

    #[test]
    fn test_counts() {
        let snapshot = sample();

        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.item_count(), 3);
        assert_eq!(snapshot.quantity_of("Latte"), 2);
        assert_eq!(snapshot.quantity_of("Mocha"), 0);
    }

    #[test]
    fn test_to_json_keeps_order() {
        let json = sample().to_json().unwrap();
        let latte = json.find("Latte").unwrap();
        let scone = json.find("Scone").unwrap();

        assert!(latte < scone);
        assert!(json.contains("\"subtotal\":12.0"));
    }
}
