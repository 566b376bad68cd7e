//! Engine: the desk calculator state machine.
//!
//! One accumulator register, one pending operator, one input buffer.
//! Operators chain strictly left to right: pressing an operator applies the
//! one pressed before it.

use super::buffer::NumberBuffer;
use super::operator::Operator;
use crate::error::CalcError;
use bigdecimal::BigDecimal;
use num_traits::Zero;

/// The calculator core.
///
/// All mutating operations take `&mut self`, so a single engine is never
/// observed half-updated. Share one across threads by confining it to an
/// owning loop (see [`crate::actor::Session`]) or wrapping it in a mutex.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// Operand being typed.
    buffer: NumberBuffer,
    /// Left operand carried across operator presses.
    accumulator: BigDecimal,
    /// Operator waiting for its right operand.
    pending: Option<Operator>,
    /// Set after an evaluation: the next typed character starts a new operand.
    needs_buffer_reset: bool,
}

impl Engine {
    /// Create an engine at rest: empty buffer, zero accumulator.
    pub fn new() -> Self {
        Self {
            buffer: NumberBuffer::new(),
            accumulator: BigDecimal::zero(),
            pending: None,
            needs_buffer_reset: false,
        }
    }

    /// Feed a digit, `.` or leading `-` into the buffer.
    ///
    /// Returns whether the character was consumed; a rejected character
    /// should not be echoed.
    pub fn push_digit_or_point(&mut self, c: char) -> bool {
        if self.needs_buffer_reset {
            self.buffer.clear();
            self.needs_buffer_reset = false;
        }
        self.buffer.push(c)
    }

    /// Value of the buffer, exactly as typed.
    pub fn current_value(&self) -> BigDecimal {
        self.buffer.value()
    }

    /// Press an operator button.
    ///
    /// The first press captures the buffer as the accumulator; later presses
    /// apply the previously pending operator before queueing `op`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionFailure`] when the pending operator is a division
    /// that fails. The engine is left untouched.
    pub fn press(&mut self, op: Operator) -> Result<(), CalcError> {
        let operand = self.current_value();
        let accumulator = match self.pending {
            None => operand,
            Some(pending) => pending.apply(&self.accumulator, &operand)?,
        };

        self.accumulator = accumulator;
        self.pending = Some(op);
        self.buffer.clear();
        Ok(())
    }

    /// Press `+`.
    pub fn press_add(&mut self) -> Result<(), CalcError> {
        self.press(Operator::Add)
    }

    /// Press `-`.
    pub fn press_subtract(&mut self) -> Result<(), CalcError> {
        self.press(Operator::Subtract)
    }

    /// Press `*`.
    pub fn press_multiply(&mut self) -> Result<(), CalcError> {
        self.press(Operator::Multiply)
    }

    /// Press `/`.
    pub fn press_divide(&mut self) -> Result<(), CalcError> {
        self.press(Operator::Divide)
    }

    /// Press `=`.
    ///
    /// With an operator pending, computes the result, writes its plain form
    /// back into the buffer and returns to rest. Without one, returns the
    /// buffer's value, which makes a repeated `=` idempotent.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionFailure`] on a failed division. The engine is
    /// left untouched so the operand can be corrected.
    pub fn evaluate(&mut self) -> Result<BigDecimal, CalcError> {
        let Some(pending) = self.pending else {
            return Ok(self.current_value());
        };
        let result = pending.apply(&self.accumulator, &self.current_value())?;

        self.pending = None;
        self.buffer.replace(result.to_plain_string());
        self.accumulator = BigDecimal::zero();
        self.needs_buffer_reset = true;
        Ok(result)
    }

    /// Press clear: drop the pending operator, the buffer and the accumulator.
    pub fn clear(&mut self) {
        self.pending = None;
        self.buffer.clear();
        self.accumulator = BigDecimal::zero();
    }

    /// The operator waiting for its right operand.
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// The literal currently in the buffer.
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    /// Whether a `-` typed now would start a negative operand rather than
    /// subtract. True only while the buffer is empty.
    pub fn accepts_sign(&self) -> bool {
        self.buffer.is_empty()
    }
}
