//! Tip selector radio group

use crate::config::CartConfig;
use crate::core::cart::OrderCart;
use crate::core::money::parse_amount;
use crate::Result;

/// One radio option of the tip selector
#[derive(Debug, Clone, PartialEq)]
pub struct TipOption {
    /// Fraction of the subtotal
    pub rate: f64,
    /// Label shown next to the radio button
    pub label: String,
}

/// Tip selector built from the configured presets
#[derive(Debug, Clone)]
pub struct TipSelector {
    options: Vec<TipOption>,
}

impl TipSelector {
    /// Creates a selector offering the configured presets
    pub fn from_config(config: &CartConfig) -> Self {
        let options = config
            .tip_presets
            .iter()
            .map(|&rate| TipOption {
                rate,
                label: tip_label(rate),
            })
            .collect();

        Self { options }
    }

    pub fn options(&self) -> &[TipOption] {
        &self.options
    }

    /// Handles a change of the selected radio; `value` is the radio's value text
    pub fn select(&self, cart: &mut OrderCart, value: &str) -> Result<()> {
        let rate = parse_amount(value)?;
        cart.set_tip_rate(rate)
    }
}

fn tip_label(rate: f64) -> String {
    if rate == 0.0 {
        "No tip".to_string()
    } else {
        format!("{}%", (rate * 100.0).round())
    }
}
