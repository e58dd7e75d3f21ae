//! Domain types shown by the dashboard panels.
//!
//! The seeded collections are `'static` and never mutated, so entries borrow
//! their text. Only [`FeedbackDraft`] owns its strings, because it holds
//! whatever the user typed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a system log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Warning,
    Error,
    Success,
}

impl LogKind {
    /// Every log kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Success];

    /// Wire name (`"info"`, `"warning"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    /// Uppercased label printed inside the badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line in the system log panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: &'static str,
    /// Display string, rendered verbatim.
    pub timestamp: &'static str,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub message: &'static str,
}

/// A row of the experience leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpEntry {
    pub id: &'static str,
    pub rank: u32,
    pub name: &'static str,
    pub xp: u32,
    pub level: u32,
    /// Percent toward the next level, 0 to 100.
    pub progress: u8,
}

/// Urgency of a feedback note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted feedback note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub priority: Priority,
    pub timestamp: &'static str,
}

/// In-progress values of the add-feedback form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub title: String,
    pub content: String,
}

impl FeedbackDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields carry text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Top-level panel selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Logs,
    Xp,
    Feedback,
}

impl Tab {
    /// Tabs in navigation order.
    pub const ALL: [Self; 3] = [Self::Logs, Self::Xp, Self::Feedback];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logs => "logs",
            Self::Xp => "xp",
            Self::Feedback => "feedback",
        }
    }

    /// Whether the navigation controls may switch to this tab.
    ///
    /// Only the logs panel is wired up; the other two buttons render but do
    /// nothing.
    #[must_use]
    pub fn is_navigable(self) -> bool {
        match self {
            Self::Logs => true,
            Self::Xp | Self::Feedback => false,
        }
    }

    /// Label on the wide navigation bar.
    #[must_use]
    pub fn desktop_label(self) -> &'static str {
        match self {
            Self::Logs => "Logs",
            Self::Xp => "XP / Ranking",
            Self::Feedback => "Feedback",
        }
    }

    /// Label on the compact navigation bar.
    #[must_use]
    pub fn mobile_label(self) -> &'static str {
        match self {
            Self::Logs => "Logs",
            Self::Xp => "XP",
            Self::Feedback => "Notes",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`Tab`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logs" => Ok(Self::Logs),
            "xp" => Ok(Self::Xp),
            "feedback" => Ok(Self::Feedback),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}
