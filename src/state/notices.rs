//! Transient user-facing notices (login success, request failures).
//!
//! DESIGN
//! ======
//! A small id-addressed queue so timed dismissal cannot remove the wrong
//! entry when notices stack up.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Visual flavor of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier suffix.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of currently visible notices.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, message });
        id
    }

    /// Remove the notice with `id`, if it is still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
