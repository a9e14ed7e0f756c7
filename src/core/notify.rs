//! User notification capability.

/// Something that can show a short message to the user.
///
/// The Shell reports malformed input through this trait only. Whether the
/// message blocks further input (a modal alert) or not (a toast) is up to the
/// implementation.
pub trait Notifier {
    /// Present `message` to the user.
    fn notify(&mut self, message: &str);
}

/// Collects every message it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    /// Messages in the order they were shown.
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
