use crate::core::money::parse_amount;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Filter value that shows every menu item
pub const FILTER_ALL: &str = "all";

/// An item on the café menu that can be added to an order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Name of the item, used as the line item key once ordered
    pub name: String,
    /// Price as written on the menu (e.g. "4.50")
    pub price: String,
    /// Optional description of the item
    #[serde(default)]
    pub description: Option<String>,
    /// Tags matched by the menu filter pills (e.g. "hot", "vegan")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MenuItem {
    /// Creates a new MenuItem with required fields
    pub fn new(name: String, price: String) -> Self {
        Self {
            name,
            price,
            description: None,
            tags: Vec::new(),
        }
    }

    /// Sets the description of the item
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the tags of the item
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Parses the menu price into a number
    pub fn parsed_price(&self) -> Result<f64> {
        parse_amount(&self.price)
    }

    /// Whether the item stays visible under the given filter
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == FILTER_ALL || self.tags.iter().any(|tag| tag == filter)
    }
}
