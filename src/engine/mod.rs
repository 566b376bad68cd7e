//! Calculator core: input buffer, operators and the accumulator state machine.
//!
//! # State machine
//!
//! ```text
//!            press(op)               press(op')
//!   ┌──────┐ ────────▶ ┌──────────┐ ─────────▶ (applies op, queues op')
//!   │ None │           │ Some(op) │
//!   └──────┘ ◀──────── └──────────┘
//!            evaluate / clear
//! ```
//!
//! Nothing here performs I/O; adapters feed characters in and read
//! [`Engine::current_value`] back.

mod buffer;
mod calculator;
mod operator;

pub use buffer::NumberBuffer;
pub use calculator::Engine;
pub use operator::{apply, Operator};
