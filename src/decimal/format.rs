//! Display rendering of decimal values.

use bigdecimal::BigDecimal;

/// Render `value` for display: plain form with trailing fractional zeros
/// removed. Internal state keeps the full-scale form from
/// [`BigDecimal::to_plain_string`].
pub fn to_display_string(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
