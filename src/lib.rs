//! # Deskcalc
//!
//! An arbitrary-precision desk calculator for the terminal.
//!
//! Deskcalc behaves like a four-function pocket calculator with a single
//! accumulator register: keys are fed in one at a time, operators chain
//! strictly left to right, and `=` shows the result.
//!
//! ## Core Concepts
//!
//! - **Exact arithmetic**: operands are arbitrary-precision decimals; `+ - *`
//!   never round
//! - **Exact-first division**: terminating quotients are exact, others fall
//!   back to 34 significant digits, round-half-even
//! - **No partial failure**: a failed division leaves the engine untouched
//! - **Actor model**: a dedicated input thread, one session loop owning the
//!   engine
//!
//! ## Example
//!
//! ```rust
//! use deskcalc::Engine;
//!
//! let mut engine = Engine::new();
//! engine.push_digit_or_point('1');
//! engine.press_divide().unwrap();
//! engine.push_digit_or_point('8');
//! let result = engine.evaluate().unwrap();
//! assert_eq!(result.to_plain_string(), "0.125");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Command, Flow, InputActor, InputEvent, KeyCode, KeyModifiers, Session, SessionConfig};
pub use engine::{Engine, NumberBuffer, Operator};
pub use error::{CalcError, DivisionFailure, SessionError};
pub use terminal::{OutputBuffer, TerminalGuard};
