//! Server-rendered HTML for the dashboard.
//!
//! Markup is produced as plain strings with `format!`, styled with Tailwind
//! utility classes and wired with htmx attributes.
//!
//! # Structure
//!
//! - [`components`]: ShadCN-style building blocks (badge, button, card, ...)
//! - [`style`]: enum-keyed colour and icon tables
//! - [`shell`]: the page document, header and the three panels

pub mod components;
pub mod shell;
pub mod style;

/// Escape text for use in HTML element content or a quoted attribute value.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
