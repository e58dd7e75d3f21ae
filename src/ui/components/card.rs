//! Card component with header and content sections.
//!
//! `children` is trusted markup; callers escape any user text before passing
//! it in.

/// Card container.
#[must_use]
pub fn card(class: &str, children: &str) -> String {
    format!(r#"<div class="rounded-xl border shadow-sm {class}">{children}</div>"#)
}

/// Card header section.
#[must_use]
pub fn card_header(class: &str, children: &str) -> String {
    format!(r#"<div class="flex flex-col space-y-1.5 p-6 {class}">{children}</div>"#)
}

/// Card title heading.
#[must_use]
pub fn card_title(class: &str, children: &str) -> String {
    format!(r#"<h3 class="font-semibold leading-none tracking-tight {class}">{children}</h3>"#)
}

/// Card content section.
#[must_use]
pub fn card_content(class: &str, children: &str) -> String {
    format!(r#"<div class="p-6 pt-0 {class}">{children}</div>"#)
}
