//! Notification surface selected by configuration.

use std::time::Instant;

use ratatui::Frame;

use super::components::{AlertDialog, Toast};
use crate::config::{NoticeStyle, TuiConfig};
use crate::core::Notifier;

/// Where "Bad input." and friends are shown.
#[derive(Debug, Clone)]
pub enum Notice {
    Alert(AlertDialog),
    Toast(Toast),
}

impl Notice {
    #[must_use]
    pub fn from_config(config: &TuiConfig) -> Self {
        match config.notice {
            NoticeStyle::Alert => Self::Alert(AlertDialog::new()),
            NoticeStyle::Toast => Self::Toast(Toast::new(config.toast_duration())),
        }
    }

    /// Whether input is currently captured by the notice.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        match self {
            Self::Alert(alert) => alert.is_open(),
            Self::Toast(_) => false,
        }
    }

    /// Message on screen, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Alert(alert) => alert.message(),
            Self::Toast(toast) => toast.message(),
        }
    }

    /// Close a blocking notice.
    pub fn dismiss(&mut self) {
        if let Self::Alert(alert) = self {
            alert.dismiss();
        }
    }

    /// Advance time-based state.
    pub fn tick(&mut self, now: Instant) {
        if let Self::Toast(toast) = self {
            toast.expire(now);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match self {
            Self::Alert(alert) => alert.render(frame),
            Self::Toast(toast) => toast.render(frame),
        }
    }
}

impl Notifier for Notice {
    fn notify(&mut self, message: &str) {
        match self {
            Self::Alert(alert) => alert.notify(message),
            Self::Toast(toast) => toast.notify(message),
        }
    }
}
