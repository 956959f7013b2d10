use crate::logger::{log, LogSeverity};
use std::fmt;
use std::fmt::{Display, Formatter};

/// What kind of notification an alert is. Warnings still come with usable
/// output; errors never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl Display for AlertKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Info => write!(f, "info"),
            AlertKind::Success => write!(f, "success"),
            AlertKind::Warning => write!(f, "warning"),
            AlertKind::Error => write!(f, "error"),
        }
    }
}

/// How a presentation surface should show the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertMode {
    Normal,
    Popup,
    Bottom,
}

/// A structured notification for the presentation surface: warnings during a
/// conversion that still produced output, or a fatal failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    pub mode: AlertMode,
}

impl Alert {
    pub fn new(message: impl Into<String>, kind: AlertKind, mode: AlertMode) -> Self {
        Alert {
            message: message.into(),
            kind,
            mode,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Alert::new(message, AlertKind::Warning, AlertMode::Bottom)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Alert::new(message, AlertKind::Error, AlertMode::Popup)
    }

    /// Mirrors the alert onto the log, at the matching severity.
    pub fn emit(&self) {
        let severity = match self.kind {
            AlertKind::Info | AlertKind::Success => LogSeverity::Info,
            AlertKind::Warning => LogSeverity::Warning,
            AlertKind::Error => LogSeverity::Error,
        };
        log(self.message.clone(), severity);
    }
}
