//! System log panel.

use crate::model::LogEntry;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Icon, badge, card, card_content};
use crate::ui::escape;
use crate::ui::style::{log_icon, log_tone};

/// Heading with the (inert) Filter and Search buttons, then one card per log.
#[must_use]
pub fn logs_panel(logs: &[LogEntry]) -> String {
    let tool = Button::new(ButtonVariant::Outline)
        .size(ButtonSize::Sm)
        .class("border-slate-600 text-slate-300 hover:bg-slate-700 bg-transparent");
    let filter = tool.render(&format!("{}Filter", Icon::Filter.render("mr-2")));
    let search = tool.render(&format!("{}Search", Icon::Search.render("mr-2")));

    let cards: String = logs.iter().map(log_card).collect();

    format!(
        r#"<section data-panel="logs" class="space-y-4">
    <div class="flex items-center justify-between">
        <h2 class="text-2xl font-bold text-white flex items-center space-x-2">{heading_icon}<span>System Logs</span></h2>
        <div class="flex items-center space-x-2">{filter}{search}</div>
    </div>
    <div class="space-y-2">{cards}</div>
</section>"#,
        heading_icon = Icon::Target.render_sized("w-6 h-6", "text-teal-400"),
    )
}

/// One log line: tone-coloured icon and message, then badge and timestamp.
#[must_use]
pub fn log_card(log: &LogEntry) -> String {
    let tone = log_tone(log.kind);
    let body = format!(
        r#"<div class="flex items-center justify-between">
    <div class="flex items-center space-x-3">{icon}<span class="text-white font-medium">{message}</span></div>
    <div class="flex items-center space-x-3">{badge}<span class="text-slate-400 text-sm">{timestamp}</span></div>
</div>"#,
        icon = log_icon(log.kind).render(tone.text_class()),
        message = escape(log.message),
        badge = badge(tone, log.kind.label()),
        timestamp = escape(log.timestamp),
    );

    let content = card_content("p-4", &body);
    card(
        "bg-slate-800/50 border-slate-700/50 hover:bg-slate-800/70 transition-colors",
        &format!(r#"<article data-log-id="{}">{content}</article>"#, escape(log.id)),
    )
}
