//! Menu lookups, filter pills and "Add" controls

use crate::core::cart::OrderCart;
use crate::core::error::Error;
use crate::models::MenuItem;
use crate::Result;

/// API for the menu section: filtering and adding items to the order
#[derive(Debug, Clone, Default)]
pub struct MenuApi {
    /// Items in menu order
    items: Vec<MenuItem>,
}

impl MenuApi {
    /// Creates a new MenuApi over the given items
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Loads the menu from a JSON array of items
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// All items in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by name
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Items visible when the given filter pill is selected
    pub fn filter(&self, filter: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.matches_filter(filter))
            .collect()
    }

    /// Distinct tags in the order they first appear, for building filter pills
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.items.iter().flat_map(|item| item.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Handles a menu "Add" click for the named item
    pub fn add_to_order(&self, cart: &mut OrderCart, name: &str) -> Result<()> {
        let item = self
            .find(name)
            .ok_or_else(|| Error::NotFound(format!("menu item {:?}", name)))?;

        let price = item.parsed_price()?;
        cart.add(&item.name, price)
    }
}
