//! Horizontal progress bar.

/// Render a bar filled to `percent`, clamped to 100.
#[must_use]
pub fn progress(percent: u8, class: &str) -> String {
    let value = percent.min(100);
    format!(
        r#"<div role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{value}" class="relative h-2 w-full overflow-hidden rounded-full bg-slate-700 {class}"><div class="h-full bg-teal-400 transition-all" style="width: {value}%"></div></div>"#
    )
}
