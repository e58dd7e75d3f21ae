//! Dashboard shell layout.
//!
//! [`page`] renders the whole document; [`shell_fragment`] renders just the
//! `#shell` element (header plus active panel) that htmx swaps after a tab
//! request.

mod feedback;
mod header;
mod logs;
mod xp;

pub use feedback::{DRAFT_FORM_ID, feedback_card, feedback_draft_form, feedback_panel};
pub use header::header;
pub use logs::{log_card, logs_panel};
pub use xp::{group_thousands, xp_card, xp_panel};

use crate::model::Tab;
use crate::seed;
use crate::shell::ShellState;
use crate::ui::escape;

/// Full HTML document for `state`.
#[must_use]
pub fn page(title: &str, state: &ShellState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Logs, XP ranking and feedback dashboard">
    <title>{title}</title>

    <!-- HTMX (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900">
{shell}
</body>
</html>"#,
        title = escape(title),
        shell = shell_fragment(title, state),
    )
}

/// Header and active panel wrapped in the `#shell` swap target.
#[must_use]
pub fn shell_fragment(title: &str, state: &ShellState) -> String {
    format!(
        r#"<div id="shell">{header}<main class="container mx-auto px-4 py-6">{panel}</main></div>"#,
        header = header(title, state.active_tab),
        panel = active_panel(state),
    )
}

/// Panel for the active tab.
///
/// Only the logs tab is reachable through [`crate::shell::reduce`], so in
/// practice this always renders the log list.
#[must_use]
pub fn active_panel(state: &ShellState) -> String {
    match state.active_tab {
        Tab::Logs => logs_panel(seed::logs()),
        Tab::Xp => xp_panel(seed::xp_ranking()),
        Tab::Feedback => feedback_panel(seed::feedback(), &state.draft),
    }
}
