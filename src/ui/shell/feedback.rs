//! Feedback panel and the add-feedback draft form.

use crate::model::{FeedbackDraft, FeedbackEntry};
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, Field, Icon, badge, card, card_content, card_header,
    card_title, input, textarea,
};
use crate::ui::escape;
use crate::ui::style::priority_tone;

/// DOM id of the draft form; htmx swaps it after an edit or add.
pub const DRAFT_FORM_ID: &str = "feedback-draft";

#[must_use]
pub fn feedback_panel(entries: &[FeedbackEntry], draft: &FeedbackDraft) -> String {
    let notes: String = entries.iter().map(feedback_card).collect();
    format!(
        r#"<section data-panel="feedback" class="space-y-4">
    <h2 class="text-2xl font-bold text-white flex items-center space-x-2">{icon}<span>Feedback</span></h2>
    {form}
    <div class="space-y-2">{notes}</div>
</section>"#,
        icon = Icon::Star.render_sized("w-6 h-6", "text-teal-400"),
        form = draft_card(draft),
    )
}

/// Card around the draft form. The form inside it is the swap target.
fn draft_card(draft: &FeedbackDraft) -> String {
    card(
        "bg-slate-800/50 border-slate-700/50",
        &format!(
            "{}{}",
            card_header("", &card_title("text-white", "Add Feedback")),
            card_content("", &feedback_draft_form(draft))
        ),
    )
}

/// Title and content fields pre-filled from `draft`, with the add button.
///
/// Field edits are sent as they change; the add button posts the current
/// field values and receives a fresh form back. The returned markup's root is
/// the `#feedback-draft` form itself, so an `outerHTML` swap replaces it in
/// place.
#[must_use]
pub fn feedback_draft_form(draft: &FeedbackDraft) -> String {
    let title = input(Field {
        name: "title",
        id: "feedback-title",
        placeholder: "Feedback title...",
        value: &draft.title,
        class: "bg-slate-900/50 border-slate-600 text-white",
    });
    let content = textarea(
        Field {
            name: "content",
            id: "feedback-content",
            placeholder: "Describe your feedback...",
            value: &draft.content,
            class: "bg-slate-900/50 border-slate-600 text-white",
        },
        3,
    );
    let add = Button::new(ButtonVariant::Primary)
        .size(ButtonSize::Md)
        .attr("hx-post", "/feedback")
        .attr("hx-include", format!("#{DRAFT_FORM_ID}"))
        .attr("hx-target", format!("#{DRAFT_FORM_ID}"))
        .attr("hx-swap", "outerHTML")
        .render(&format!("{}Add Feedback", Icon::Plus.render("mr-2")));

    format!(
        r#"<form id="{DRAFT_FORM_ID}" hx-put="/feedback/draft" hx-trigger="change" hx-swap="none" class="space-y-3">{title}{content}{add}</form>"#
    )
}

#[must_use]
pub fn feedback_card(entry: &FeedbackEntry) -> String {
    let body = format!(
        r#"<div class="flex items-start justify-between">
    <div class="space-y-1">
        <h3 class="text-white font-medium">{title}</h3>
        <p class="text-slate-300 text-sm">{content}</p>
    </div>
    <div class="flex items-center space-x-3">{badge}<span class="text-slate-400 text-sm">{timestamp}</span></div>
</div>"#,
        title = escape(entry.title),
        content = escape(entry.content),
        badge = badge(priority_tone(entry.priority), entry.priority.label()),
        timestamp = escape(entry.timestamp),
    );

    card(
        "bg-slate-800/50 border-slate-700/50",
        &format!(
            r#"<article data-feedback-id="{}">{}</article>"#,
            escape(entry.id),
            card_content("p-4", &body)
        ),
    )
}
