//! Binary operators.

use crate::decimal;
use crate::error::CalcError;
use bigdecimal::BigDecimal;
use std::fmt;

/// A calculator operator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// All four operators.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The key that presses this operator.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up the operator for a key.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Compute `lhs op rhs`.
    ///
    /// Addition, subtraction and multiplication are exact. Division is
    /// exact when the quotient terminates and rounded otherwise; see
    /// [`decimal::divide`].
    pub fn apply(self, lhs: &BigDecimal, rhs: &BigDecimal) -> Result<BigDecimal, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => decimal::divide(lhs, rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply a possibly absent pending operator. With no operator the left
/// operand passes through and `rhs` is ignored.
pub fn apply(
    op: Option<Operator>,
    lhs: &BigDecimal,
    rhs: &BigDecimal,
) -> Result<BigDecimal, CalcError> {
    op.map_or_else(|| Ok(lhs.clone()), |op| op.apply(lhs, rhs))
}
