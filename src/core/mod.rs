//! Core types for the repository shell.
//!
//! Nothing in here draws or owns the terminal; keys arrive as `crossterm`
//! key codes and the TUI drives these types.

pub mod error;
pub mod identifier;
pub mod notify;
pub mod shell;

pub use error::{Error, Result};
pub use identifier::Identifier;
pub use notify::{Notifier, RecordingNotifier};
pub use shell::{BAD_INPUT, KeyOutcome, Shell};
