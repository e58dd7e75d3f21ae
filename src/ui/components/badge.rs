//! Badge component for status indicators and tags.

use crate::ui::escape;
use crate::ui::style::Tone;

/// Render a small pill label in the given tone.
///
/// # Example
///
/// ```rust
/// use mvp_shell::ui::components::badge;
/// use mvp_shell::ui::style::Tone;
///
/// let html = badge(Tone::Red, "ERROR");
/// assert!(html.contains(">ERROR</span>"));
/// ```
#[must_use]
pub fn badge(tone: Tone, label: &str) -> String {
    let base_classes = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs \
                        font-semibold transition-colors";

    format!(
        r#"<span class="{base_classes} {tone}">{label}</span>"#,
        tone = tone.badge_classes(),
        label = escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_tone_classes() {
        let html = badge(Tone::Amber, "WARNING");
        assert!(html.contains("bg-amber-500/20 text-amber-400 border-amber-500/30"));
        assert!(html.contains(">WARNING<"));
    }

    #[test]
    fn escapes_label() {
        assert!(badge(Tone::Blue, "<x>").contains("&lt;x&gt;"));
    }
}
