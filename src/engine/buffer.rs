//! `NumberBuffer`: the operand literal currently being typed.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// An in-progress number literal.
///
/// Holds digits, at most one `.`, and a `-` only in first position. The
/// empty buffer reads as zero, as do the incomplete literals `-`, `.`
/// and `-.`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberBuffer {
    text: String,
}

impl NumberBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a character if it keeps the literal well formed.
    ///
    /// Digits are always taken, `.` only once, and `-` only as the first
    /// character. Returns whether the character was appended.
    pub fn push(&mut self, c: char) -> bool {
        let accepted = match c {
            '0'..='9' => true,
            '.' => !self.text.contains('.'),
            '-' => self.text.is_empty(),
            _ => false,
        };
        if accepted {
            self.text.push(c);
        }
        accepted
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the contents with a plain decimal rendering.
    pub(crate) fn replace(&mut self, literal: String) {
        self.text = literal;
    }

    /// The literal as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Exact value of the literal, keeping every typed fractional digit
    /// as scale (`1.0` has scale 1).
    pub fn value(&self) -> BigDecimal {
        let (negative, body) = match self.text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.text.as_str()),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        let digits: String = int_part.chars().chain(frac_part.chars()).collect();
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_default();
        let scale = i64::try_from(frac_part.len()).unwrap_or(i64::MAX);

        BigDecimal::new(if negative { -magnitude } else { magnitude }, scale)
    }
}
