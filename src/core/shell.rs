//! The Shell: owner of the editable `owner/repo` identifier.

use crossterm::event::KeyCode;

use super::error::Error;
use super::identifier::Identifier;
use super::notify::Notifier;

/// Message shown when submitted text is not an `owner/repo` pair.
pub const BAD_INPUT: &str = "Bad input.";

/// Result of handling one key release.
#[derive(Debug)]
pub enum KeyOutcome {
    /// The key was not Enter; nothing happened.
    Ignored,
    /// The input was malformed; the user was notified and state is unchanged.
    Rejected(Error),
    /// State was replaced. Holds the identifier that was current before.
    Updated(Identifier),
}

impl KeyOutcome {
    /// Whether this outcome replaced the view state.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// Parent view state.
///
/// The text field itself is not part of this state: the Shell reads the
/// field's raw text when Enter is released and never writes back to it.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    state: Identifier,
}

impl Shell {
    /// Create a shell starting at `initial`.
    #[must_use]
    pub const fn new(initial: Identifier) -> Self {
        Self { state: initial }
    }

    /// Current identifier.
    #[must_use]
    pub const fn state(&self) -> &Identifier {
        &self.state
    }

    /// Current owner segment.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.state.username
    }

    /// Current repository segment.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.state.repo
    }

    /// Placeholder text for the input field.
    #[must_use]
    pub fn placeholder(&self) -> String {
        self.state.to_string()
    }

    /// Handle a key release over the input field.
    ///
    /// Only Enter does anything. The raw text is parsed and, if it splits into
    /// exactly two segments, replaces the state in one assignment. Otherwise
    /// `notifier` receives [`BAD_INPUT`] once and state is left alone.
    pub fn handle_key_release(
        &mut self,
        key: KeyCode,
        input: &str,
        notifier: &mut dyn Notifier,
    ) -> KeyOutcome {
        if key != KeyCode::Enter {
            return KeyOutcome::Ignored;
        }

        match Identifier::parse(input) {
            Ok(next) => {
                tracing::info!(previous = %self.state, next = %next, "identifier updated");
                let previous = std::mem::replace(&mut self.state, next);
                KeyOutcome::Updated(previous)
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected identifier");
                notifier.notify(BAD_INPUT);
                KeyOutcome::Rejected(e)
            }
        }
    }
}
