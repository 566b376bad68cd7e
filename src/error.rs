//! Error types.
//!
//! The calculator core has exactly one failure mode, [`CalcError::DivisionFailure`].
//! Everything else the engine accepts is total: unusable characters are
//! rejected by returning `false`, never by raising.

use std::io;
use thiserror::Error;

/// Why a division could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionFailure {
    /// The divisor was exactly zero.
    #[error("division by zero")]
    ByZero,
    /// The quotient's scale does not fit in the decimal exponent range.
    #[error("quotient scale out of range")]
    ScaleOverflow,
}

/// Errors raised by the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division failed; engine state is left as it was before the call.
    #[error("Division failed: {0}")]
    DivisionFailure(DivisionFailure),
}

/// Errors raised by the interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The input thread reported a failure while reading events.
    #[error("input thread error: {0}")]
    Input(String),

    /// The input channel closed without a shutdown notice.
    #[error("input channel disconnected")]
    Disconnected,
}
