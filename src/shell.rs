//! View-shell state and its update function.
//!
//! All UI state lives in [`ShellState`] and changes only through [`reduce`],
//! which takes the current state and an [`Action`] and returns the next state.
//! Nothing else mutates it, so rendering can treat a snapshot as the single
//! source of truth.

use serde::Serialize;

use crate::model::{FeedbackDraft, Tab};

/// UI state for one shell instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShellState {
    pub active_tab: Tab,
    pub draft: FeedbackDraft,
}

/// User interactions the shell responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A navigation button was pressed.
    SelectTab(Tab),
    /// The draft form fields changed.
    EditDraft { title: String, content: String },
    /// The add-feedback button was pressed.
    AddFeedback,
}

/// Apply `action` to `state`.
///
/// Tab requests for panels that are not navigable leave the state as is.
/// Adding feedback clears a complete draft and never touches the seeded
/// feedback collection; an incomplete draft is left alone.
#[must_use]
pub fn reduce(state: ShellState, action: Action) -> ShellState {
    match action {
        Action::SelectTab(tab) if tab.is_navigable() => ShellState {
            active_tab: tab,
            ..state
        },
        Action::SelectTab(_) => state,
        Action::EditDraft { title, content } => ShellState {
            draft: FeedbackDraft { title, content },
            ..state
        },
        Action::AddFeedback if state.draft.is_complete() => ShellState {
            draft: FeedbackDraft::default(),
            ..state
        },
        Action::AddFeedback => state,
    }
}
