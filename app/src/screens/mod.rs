//! View state for the two screens of the catalog.
//!
//! Screens own their state, call `TeamsApi`, and collapse every failure into
//! a generic user-facing `Alert`; the classified cause only goes to the log.
//! Rendering produces plain text so the terminal front-end (or a test) can
//! show it as-is.

pub mod detail;
pub mod list;

pub use detail::DetailScreen;
pub use list::ListScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A dialog with no choices besides dismissing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            kind: AlertKind::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: AlertKind::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}

/// A question the user must answer before a destructive action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
}

/// Where the user is. The team id is the only navigation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { id: String },
}
