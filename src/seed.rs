//! Hardcoded sample data backing the three panels.

use crate::model::{FeedbackEntry, LogEntry, LogKind, Priority, XpEntry};

static LOGS: [LogEntry; 6] = [
    LogEntry {
        id: "1",
        timestamp: "2024-01-15 14:32:15",
        kind: LogKind::Success,
        message: "User authentication successful",
    },
    LogEntry {
        id: "2",
        timestamp: "2024-01-15 14:31:42",
        kind: LogKind::Info,
        message: "Database connection established",
    },
    LogEntry {
        id: "3",
        timestamp: "2024-01-15 14:30:18",
        kind: LogKind::Warning,
        message: "High memory usage detected (85%)",
    },
    LogEntry {
        id: "4",
        timestamp: "2024-01-15 14:29:33",
        kind: LogKind::Error,
        message: "Failed to load external API resource",
    },
    LogEntry {
        id: "5",
        timestamp: "2024-01-15 14:28:07",
        kind: LogKind::Info,
        message: "System backup completed successfully",
    },
    LogEntry {
        id: "6",
        timestamp: "2024-01-15 14:27:21",
        kind: LogKind::Success,
        message: "New user registration completed",
    },
];

static XP: [XpEntry; 5] = [
    XpEntry {
        id: "1",
        rank: 1,
        name: "Alex Chen",
        xp: 12450,
        level: 15,
        progress: 75,
    },
    XpEntry {
        id: "2",
        rank: 2,
        name: "Sarah Kim",
        xp: 11200,
        level: 14,
        progress: 60,
    },
    XpEntry {
        id: "3",
        rank: 3,
        name: "Mike Johnson",
        xp: 9800,
        level: 13,
        progress: 40,
    },
    XpEntry {
        id: "4",
        rank: 4,
        name: "Emma Davis",
        xp: 8900,
        level: 12,
        progress: 85,
    },
    XpEntry {
        id: "5",
        rank: 5,
        name: "David Wilson",
        xp: 7650,
        level: 11,
        progress: 30,
    },
];

static FEEDBACK: [FeedbackEntry; 3] = [
    FeedbackEntry {
        id: "1",
        title: "UI Performance Optimization",
        content: "Consider implementing lazy loading for better performance",
        priority: Priority::High,
        timestamp: "2024-01-15",
    },
    FeedbackEntry {
        id: "2",
        title: "Mobile Navigation",
        content: "Add swipe gestures for better mobile experience",
        priority: Priority::Medium,
        timestamp: "2024-01-14",
    },
    FeedbackEntry {
        id: "3",
        title: "Dark Mode Enhancement",
        content: "Improve contrast ratios for better accessibility",
        priority: Priority::Low,
        timestamp: "2024-01-13",
    },
];

/// System log lines, newest first.
#[must_use]
pub fn logs() -> &'static [LogEntry] {
    &LOGS
}

/// Leaderboard rows ordered by rank.
#[must_use]
pub fn xp_ranking() -> &'static [XpEntry] {
    &XP
}

/// Feedback notes, newest first.
#[must_use]
pub fn feedback() -> &'static [FeedbackEntry] {
    &FEEDBACK
}
