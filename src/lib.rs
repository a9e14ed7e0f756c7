//! repo-shell - a terminal view for one repository at a time.
//!
//! The user types an `owner/repo` identifier and presses Enter; the shell
//! validates it and hands the two segments to a repository panel.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐        ┌─────────────┐
//! │     CLI     │        │     TUI     │
//! └──────┬──────┘        └──────┬──────┘
//!        │                      │
//!        └──────────┬───────────┘
//!                   │
//!            ┌──────┴──────┐
//!            │    Core     │
//!            └─────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

pub use config::Config;
pub use crate::core::{Identifier, Notifier, Shell};
