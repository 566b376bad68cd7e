//! Terminal plumbing: raw mode and batched output.

mod guard;
mod output;

pub use guard::TerminalGuard;
pub use output::{OutputBuffer, NEWLINE};
