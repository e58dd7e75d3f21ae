//! Enum-keyed style lookups.
//!
//! Every table is an exhaustive `match` without a wildcard arm, so adding a
//! variant to [`LogKind`], [`Priority`] or [`Tab`] fails to compile until it
//! has a style.

use crate::model::{LogKind, Priority, Tab};
use crate::ui::components::Icon;

/// Colour family shared by badges and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Red,
    Amber,
    Blue,
    Green,
}

impl Tone {
    /// Translucent fill, text and border classes for a badge.
    #[must_use]
    pub fn badge_classes(self) -> &'static str {
        match self {
            Self::Emerald => "bg-emerald-500/20 text-emerald-400 border-emerald-500/30",
            Self::Red => "bg-red-500/20 text-red-400 border-red-500/30",
            Self::Amber => "bg-amber-500/20 text-amber-400 border-amber-500/30",
            Self::Blue => "bg-blue-500/20 text-blue-400 border-blue-500/30",
            Self::Green => "bg-green-500/20 text-green-400 border-green-500/30",
        }
    }

    /// Foreground class for an icon.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Emerald => "text-emerald-400",
            Self::Red => "text-red-400",
            Self::Amber => "text-amber-400",
            Self::Blue => "text-blue-400",
            Self::Green => "text-green-400",
        }
    }
}

#[must_use]
pub fn log_tone(kind: LogKind) -> Tone {
    match kind {
        LogKind::Success => Tone::Emerald,
        LogKind::Error => Tone::Red,
        LogKind::Warning => Tone::Amber,
        LogKind::Info => Tone::Blue,
    }
}

#[must_use]
pub fn log_icon(kind: LogKind) -> Icon {
    match kind {
        LogKind::Success => Icon::CheckCircle,
        LogKind::Error | LogKind::Warning => Icon::AlertCircle,
        LogKind::Info => Icon::Info,
    }
}

/// Badge classes for a log line.
#[must_use]
pub fn log_badge_classes(kind: LogKind) -> &'static str {
    log_tone(kind).badge_classes()
}

#[must_use]
pub fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Red,
        Priority::Medium => Tone::Amber,
        Priority::Low => Tone::Green,
    }
}

/// Badge classes for a feedback note.
#[must_use]
pub fn priority_badge_classes(priority: Priority) -> &'static str {
    priority_tone(priority).badge_classes()
}

#[must_use]
pub fn tab_icon(tab: Tab) -> Icon {
    match tab {
        Tab::Logs => Icon::Target,
        Tab::Xp => Icon::Trophy,
        Tab::Feedback => Icon::Star,
    }
}

/// Highlight for the selected navigation button.
#[must_use]
pub fn tab_button_classes(active: bool) -> &'static str {
    if active {
        "bg-teal-500/20 text-teal-400 border border-teal-500/30"
    } else {
        "text-slate-400 hover:text-white hover:bg-slate-700/50"
    }
}
