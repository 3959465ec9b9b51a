//! Cart and order form configuration

use crate::core::error::Error;
use crate::core::money::ensure_non_negative;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Tip rates offered by the tip selector
pub const DEFAULT_TIP_PRESETS: [f64; 4] = [0.0, 0.15, 0.18, 0.20];

/// Tolerance used when comparing a tip rate against the presets
const PRESET_EPSILON: f64 = 1e-9;

/// Pickup slots must fall within this many minutes of the first slot, and
/// the lead time may not exceed it either
pub const PICKUP_WINDOW_MINUTES: i64 = 24 * 60;

/// Upper bound on the number of pickup slots (one per minute over the window)
pub const MAX_PICKUP_SLOTS: usize = PICKUP_WINDOW_MINUTES as usize + 1;

/// Cart configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CartConfig {
    /// Tip rates offered by the tip selector, as fractions of the subtotal
    pub tip_presets: Vec<f64>,
    /// Tip rate a fresh cart starts with
    pub default_tip_rate: f64,
    /// Whether tip rates outside the presets are accepted
    pub allow_custom_tip: bool,
    /// Pickup time slot settings
    pub pickup: PickupConfig,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            tip_presets: DEFAULT_TIP_PRESETS.to_vec(),
            default_tip_rate: 0.0,
            allow_custom_tip: true,
            pickup: PickupConfig::default(),
        }
    }
}

impl CartConfig {
    /// Loads a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every configured rate and slot setting is usable
    pub fn validate(&self) -> Result<()> {
        for rate in &self.tip_presets {
            ensure_non_negative("tip preset", *rate)?;
        }
        ensure_non_negative("default tip rate", self.default_tip_rate)?;

        if !self.allow_custom_tip && !self.is_preset(self.default_tip_rate) {
            return Err(Error::InvalidArgument(format!(
                "default tip rate {} is not one of the presets",
                self.default_tip_rate
            )));
        }

        self.pickup.validate()
    }

    /// Whether a rate matches one of the configured presets
    pub fn is_preset(&self, rate: f64) -> bool {
        self.tip_presets
            .iter()
            .any(|preset| (preset - rate).abs() < PRESET_EPSILON)
    }
}

/// Pickup time slot configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickupConfig {
    /// Minutes between now and the first slot
    pub lead_minutes: u32,
    /// Minutes between consecutive slots
    pub slot_interval_minutes: u32,
    /// Number of slots offered
    pub slot_count: usize,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            lead_minutes: 15,
            slot_interval_minutes: 15,
            slot_count: 16,
        }
    }
}

impl PickupConfig {
    fn validate(&self) -> Result<()> {
        if self.slot_interval_minutes == 0 {
            return Err(Error::InvalidArgument(
                "pickup slot interval must be at least one minute".into(),
            ));
        }
        if i64::from(self.lead_minutes) > PICKUP_WINDOW_MINUTES {
            return Err(Error::InvalidArgument(format!(
                "pickup lead time of {} minutes exceeds {} minutes",
                self.lead_minutes, PICKUP_WINDOW_MINUTES
            )));
        }
        if self.slot_count > MAX_PICKUP_SLOTS {
            return Err(Error::InvalidArgument(format!(
                "at most {} pickup slots can be offered, got {}",
                MAX_PICKUP_SLOTS, self.slot_count
            )));
        }

        // Last slot offset from the first; slot_count is bounded above so this fits in i64
        let span = i64::from(self.slot_interval_minutes)
            * self.slot_count.saturating_sub(1) as i64;
        if span > PICKUP_WINDOW_MINUTES {
            return Err(Error::InvalidArgument(format!(
                "pickup slots span {} minutes, more than {} minutes",
                span, PICKUP_WINDOW_MINUTES
            )));
        }
        Ok(())
    }
}
