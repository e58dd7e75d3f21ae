//! Text input and textarea components.

use crate::ui::escape;

/// Attributes shared by [`input`] and [`textarea`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Field<'a> {
    /// Input name attribute.
    pub name: &'a str,
    /// Input ID attribute.
    pub id: &'a str,
    /// Placeholder text.
    pub placeholder: &'a str,
    /// Current value; escaped on render.
    pub value: &'a str,
    /// Additional CSS classes.
    pub class: &'a str,
}

/// Single-line text input.
#[must_use]
pub fn input(field: Field<'_>) -> String {
    let base_classes = "flex h-10 w-full rounded-lg border px-3 py-2 text-sm \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-teal-500 \
                        disabled:cursor-not-allowed disabled:opacity-50";

    format!(
        r#"<input type="text" class="{base_classes} {class}" name="{name}" id="{id}" placeholder="{placeholder}" value="{value}" autocomplete="off"/>"#,
        class = field.class,
        name = field.name,
        id = field.id,
        placeholder = escape(field.placeholder),
        value = escape(field.value),
    )
}

/// Multi-line text input.
#[must_use]
pub fn textarea(field: Field<'_>, rows: u32) -> String {
    let base_classes = "flex min-h-[80px] w-full rounded-lg border px-3 py-2 text-sm \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-teal-500 \
                        disabled:cursor-not-allowed disabled:opacity-50 resize-none";

    format!(
        r#"<textarea class="{base_classes} {class}" name="{name}" id="{id}" placeholder="{placeholder}" rows="{rows}">{value}</textarea>"#,
        class = field.class,
        name = field.name,
        id = field.id,
        placeholder = escape(field.placeholder),
        value = escape(field.value),
    )
}
