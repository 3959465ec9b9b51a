//! Amount parsing and USD display formatting

use crate::core::error::Error;
use crate::Result;

/// Formats an amount as US dollars with two decimals, e.g. `$9.00`
pub fn format_usd(amount: f64) -> String {
    // -0.0 would otherwise render as "$-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("${:.2}", amount)
}

/// Parses an amount written as text (a menu price or a tip radio value)
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("not a number: {:?}", raw)))?;

    if !value.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "amount must be finite: {:?}",
            raw
        )));
    }

    Ok(value)
}

/// Checks that a price or rate is finite and non-negative
pub(crate) fn ensure_non_negative(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "{} must be finite, got {}",
            what, value
        )));
    }
    if value < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be non-negative, got {}",
            what, value
        )));
    }
    Ok(())
}
