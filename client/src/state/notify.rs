//! Transient snackbar notifications.
//!
//! Each `show` bumps a sequence number so a delayed auto-dismiss only clears
//! the notification it was scheduled for, never a newer one.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a notification stays up before auto-dismissing.
pub const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub tone: Tone,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { tone: Tone::Info, title: title.into(), message: message.into() }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { tone: Tone::Success, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { tone: Tone::Error, title: title.into(), message: message.into() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub current: Option<Notification>,
    pub seq: u64,
}

impl NotifyState {
    /// Replace whatever is showing. Returns the sequence to pass to [`Self::expire`].
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.seq
    }

    /// Clear the notification only if it is still the one shown at `seq`.
    pub fn expire(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }
}
