//! Pickup time options for the order form

use crate::config::{PickupConfig, MAX_PICKUP_SLOTS, PICKUP_WINDOW_MINUTES};
use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// A selectable pickup time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupSlot {
    /// Display label, e.g. "9:15 AM"
    pub label: String,
    /// Form value as 24-hour `HH:MM`
    pub value: String,
}

/// Builds pickup slots starting `lead_minutes` after `now`, truncated to the minute.
///
/// Slots stop early at the end of the pickup window or where the calendar
/// runs out, so an unvalidated config yields fewer slots rather than a panic.
pub fn pickup_slots(now: NaiveDateTime, config: &PickupConfig) -> Vec<PickupSlot> {
    let lead = Duration::minutes(i64::from(config.lead_minutes));
    let Some(start) = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .and_then(|t| t.checked_add_signed(lead))
    else {
        return Vec::new();
    };

    let window = Duration::minutes(PICKUP_WINDOW_MINUTES);
    let step = Duration::minutes(i64::from(config.slot_interval_minutes));

    let mut slots = Vec::new();
    for i in 0..config.slot_count.min(MAX_PICKUP_SLOTS) {
        let offset = match i32::try_from(i).ok().and_then(|i| step.checked_mul(i)) {
            Some(offset) if offset <= window => offset,
            _ => break,
        };
        let Some(slot) = start.checked_add_signed(offset) else {
            break;
        };

        slots.push(PickupSlot {
            label: slot.format("%-I:%M %p").to_string(),
            value: slot.format("%H:%M").to_string(),
        });
    }
    slots
}

/// Pickup slots relative to the local clock
pub fn pickup_slots_from_now(config: &PickupConfig) -> Vec<PickupSlot> {
    pickup_slots(Local::now().naive_local(), config)
}
