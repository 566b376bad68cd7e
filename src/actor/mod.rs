//! Actor Model: Message-passing between the terminal and the calculator.
//!
//! - **Input Actor**: Polls terminal key events, forwards them to the session
//! - **Session**: Owns the engine, applies one event at a time, prints output
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐     ┌────────┐
//! │ Input Thread │ ─────────────────▶  │   Session    │ ──▶ │ Engine │
//! └──────────────┘   (crossbeam)       │  (main loop) │     └────────┘
//!                                      └──────────────┘
//!                                            │ echo / =result / ERROR
//!                                            ▼
//!                                         stdout
//! ```
//!
//! The engine never leaves the session's thread, so its operations are
//! serialized without a lock.

mod input;
mod messages;
mod session;

pub use input::InputActor;
pub use messages::{Command, InputEvent, KeyCode, KeyModifiers};
pub use session::{Flow, Session, SessionConfig};
