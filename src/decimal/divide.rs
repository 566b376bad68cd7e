//! Exact-first decimal division.
//!
//! `lhs / rhs` is first computed exactly. A quotient is exact when the long
//! division remainder reaches zero; for a divisor of `n` bits that happens
//! within `n` extra digits or never. Only when it never does do we fall back
//! to 34 significant digits with round-half-even, the IEEE 754 decimal128
//! context.

use super::{digit_count, pow10};
use crate::error::{CalcError, DivisionFailure};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use tracing::trace;

/// Significant digits kept by the rounded fallback.
pub const DECIMAL128_PRECISION: u64 = 34;

const fn scale_overflow() -> CalcError {
    CalcError::DivisionFailure(DivisionFailure::ScaleOverflow)
}

/// Divide `lhs` by `rhs`.
///
/// The exact quotient is returned whenever it terminates, at the smallest
/// scale not below `lhs.scale - rhs.scale`. Otherwise the quotient is rounded
/// to [`DECIMAL128_PRECISION`] significant digits, half-even, and keeps all of
/// them, trailing zeros included.
///
/// # Errors
///
/// [`DivisionFailure::ByZero`] when `rhs` is zero, in either path.
pub fn divide(lhs: &BigDecimal, rhs: &BigDecimal) -> Result<BigDecimal, CalcError> {
    if rhs.is_zero() {
        return Err(CalcError::DivisionFailure(DivisionFailure::ByZero));
    }

    let (dividend, lhs_scale) = lhs.as_bigint_and_exponent();
    let (divisor, rhs_scale) = rhs.as_bigint_and_exponent();
    let preferred_scale = lhs_scale.checked_sub(rhs_scale).ok_or_else(scale_overflow)?;

    let negative = (dividend.sign() == Sign::Minus) != (divisor.sign() == Sign::Minus);
    let numerator = dividend.abs();
    let denominator = divisor.abs();

    let (magnitude, shift) = if let Some(exact) = exact_quotient(&numerator, &denominator) {
        exact
    } else {
        trace!(%lhs, %rhs, "quotient does not terminate, rounding to {DECIMAL128_PRECISION} digits");
        rounded_quotient(&numerator, &denominator, DECIMAL128_PRECISION)?
    };

    let unscaled = if negative { -magnitude } else { magnitude };
    let scale = preferred_scale.checked_add(shift).ok_or_else(scale_overflow)?;
    Ok(BigDecimal::new(unscaled, scale))
}

/// Long division of two positive magnitudes, returning the quotient digits
/// and how many places past the preferred scale they extend.
fn exact_quotient(numerator: &BigInt, denominator: &BigInt) -> Option<(BigInt, i64)> {
    let limit = denominator.bits();
    let mut remainder = numerator % denominator;
    let mut extra = 0u64;

    while !remainder.is_zero() {
        if extra >= limit {
            return None;
        }
        remainder = (remainder * 10u32) % denominator;
        extra += 1;
    }

    let extra = u32::try_from(extra).ok()?;
    Some((numerator * pow10(extra) / denominator, i64::from(extra)))
}

/// Quotient of two positive magnitudes rounded to `precision` significant
/// digits, half-even, with its decimal shift.
fn rounded_quotient(
    numerator: &BigInt,
    denominator: &BigInt,
    precision: u64,
) -> Result<(BigInt, i64), CalcError> {
    let precision = i64::try_from(precision).map_err(|_| scale_overflow())?;
    let mut shift = precision - (digit_count(numerator) - digit_count(denominator));

    loop {
        let (scaled_num, scaled_den) = scale_pair(numerator, denominator, shift)?;
        let mut quotient = &scaled_num / &scaled_den;

        match digit_count(&quotient).cmp(&precision) {
            Ordering::Greater => {
                shift -= 1;
                continue;
            }
            Ordering::Less => {
                shift += 1;
                continue;
            }
            Ordering::Equal => {}
        }

        let remainder = &scaled_num % &scaled_den;
        let round_up = match (remainder * 2u32).cmp(&scaled_den) {
            Ordering::Greater => true,
            Ordering::Equal => !(&quotient % 2u32).is_zero(),
            Ordering::Less => false,
        };
        if round_up {
            quotient += 1u32;
        }

        // 99..9 rounded up to 10..0 gained a digit.
        if digit_count(&quotient) > precision {
            quotient /= 10u32;
            shift -= 1;
        }

        return Ok((quotient, shift));
    }
}

/// Multiply whichever side keeps the division integral by `10^|shift|`.
fn scale_pair(
    numerator: &BigInt,
    denominator: &BigInt,
    shift: i64,
) -> Result<(BigInt, BigInt), CalcError> {
    let factor = pow10(u32::try_from(shift.unsigned_abs()).map_err(|_| scale_overflow())?);
    if shift >= 0 {
        Ok((numerator * factor, denominator.clone()))
    } else {
        Ok((numerator.clone(), denominator * factor))
    }
}
