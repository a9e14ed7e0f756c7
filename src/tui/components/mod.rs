//! TUI components for rendering the shell.

mod alert;
mod input;
mod repository;
mod toast;

pub use alert::AlertDialog;
pub use input::{InputField, render_input};
pub use repository::{RepositorySummary, RepositoryView};
pub use toast::Toast;
