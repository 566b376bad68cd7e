//! Decimal helpers: division with a rounding fallback, and display rendering.
//!
//! Values are [`bigdecimal::BigDecimal`]: an unscaled [`num_bigint::BigInt`]
//! plus a scale, so addition, subtraction and multiplication are exact.
//! Division is the only operation that may have to round, and it only does
//! so when the exact quotient does not terminate. Full-precision rendering
//! is [`BigDecimal::to_plain_string`](bigdecimal::BigDecimal::to_plain_string).

mod divide;
mod format;

pub use divide::{divide, DECIMAL128_PRECISION};
pub use format::to_display_string;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Number of decimal digits in the magnitude of `n` (zero has one digit).
pub(crate) fn digit_count(n: &BigInt) -> i64 {
    i64::try_from(BigDecimal::from(n.clone()).digits()).unwrap_or(i64::MAX)
}

/// `10^exponent` as a big integer.
pub(crate) fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}
