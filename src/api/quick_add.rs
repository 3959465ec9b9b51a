//! Quick-add sidebar: per-item increment and decrement counters

use crate::api::menu::MenuApi;
use crate::core::cart::OrderCart;
use crate::core::error::Error;
use crate::core::money::format_usd;
use crate::Result;

/// One row of the quick-add panel
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAddRow {
    /// Item name, matching the cart line name
    pub name: String,
    /// Parsed unit price
    pub price: f64,
}

impl QuickAddRow {
    /// Price label shown under the item name
    pub fn price_label(&self) -> String {
        format_usd(self.price)
    }
}

/// Quick-add panel built from the menu
#[derive(Debug, Clone)]
pub struct QuickAddPanel {
    rows: Vec<QuickAddRow>,
}

impl QuickAddPanel {
    /// Builds one row per menu item; fails if any menu price does not parse
    pub fn from_menu(menu: &MenuApi) -> Result<Self> {
        let rows = menu
            .items()
            .iter()
            .map(|item| -> Result<QuickAddRow> {
                Ok(QuickAddRow {
                    name: item.name.clone(),
                    price: item.parsed_price()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[QuickAddRow] {
        &self.rows
    }

    fn row(&self, name: &str) -> Result<&QuickAddRow> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .ok_or_else(|| Error::NotFound(format!("quick-add row {:?}", name)))
    }

    /// "+" button: adds one unit
    pub fn increment(&self, cart: &mut OrderCart, name: &str) -> Result<()> {
        let row = self.row(name)?;
        cart.add(&row.name, row.price)
    }

    /// "-" button: lowers the quantity by one, removing the line at zero.
    ///
    /// Pressing it for an item that is not in the cart does nothing.
    pub fn decrement(&self, cart: &mut OrderCart, name: &str) -> Result<()> {
        let row = self.row(name)?;
        let current = i64::from(cart.quantity_of(&row.name));
        cart.set_quantity(&row.name, current - 1);
        Ok(())
    }

    /// Counter value for every row, in menu order
    pub fn counters(&self, cart: &OrderCart) -> Vec<(String, u32)> {
        self.rows
            .iter()
            .map(|row| (row.name.clone(), cart.quantity_of(&row.name)))
            .collect()
    }
}
