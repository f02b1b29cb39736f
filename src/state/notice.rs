//! Transient status notices.
//!
//! DESIGN
//! ======
//! At most one notice is visible. Showing a new one replaces the current one
//! and bumps a sequence number; a scheduled hide carries the sequence it was
//! armed for, so a stale timer cannot cut a newer notice short.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays visible before it is hidden.
pub const NOTICE_VISIBLE_MS: u32 = 4_000;

/// Visual tone of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier class for the notice banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "message success",
            Self::Error => "message error",
        }
    }
}

/// A single user-facing status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Identifies this notice for its scheduled hide.
    pub seq: u64,
}

/// The currently visible notice, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: Option<Notice>,
    last_seq: u64,
}

impl NoticeState {
    /// Replace whatever is showing with a new notice and return its sequence.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind) -> u64 {
        self.last_seq += 1;
        self.current = Some(Notice { text: text.into(), kind, seq: self.last_seq });
        self.last_seq
    }

    /// Hide the notice identified by `seq`. Returns `false` if it was already
    /// replaced or hidden.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
