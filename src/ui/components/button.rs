//! Button component with variants and sizes.

use crate::ui::escape;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-teal-500 text-white hover:bg-teal-600",
            Self::Outline => "border bg-transparent",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
        }
    }
}

/// ShadCN-style button.
///
/// # Example
///
/// ```rust
/// use mvp_shell::ui::components::{Button, ButtonSize, ButtonVariant};
///
/// let html = Button::new(ButtonVariant::Outline)
///     .size(ButtonSize::Sm)
///     .attr("hx-post", "/feedback")
///     .render("Add");
/// assert!(html.contains(r#"hx-post="/feedback""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button<'a> {
    variant: ButtonVariant,
    size: ButtonSize,
    class: &'a str,
    attrs: Vec<(&'a str, String)>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Additional CSS classes.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = class;
        self
    }

    /// Extra attribute; the value is escaped.
    #[must_use]
    pub fn attr(mut self, name: &'a str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Render with `children` as trusted inner markup.
    #[must_use]
    pub fn render(&self, children: &str) -> String {
        let base_classes = "inline-flex items-center justify-center rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-teal-500 disabled:pointer-events-none \
                            disabled:opacity-50";

        let attrs: String = self
            .attrs
            .iter()
            .map(|(name, value)| format!(r#" {name}="{}""#, escape(value)))
            .collect();

        format!(
            r#"<button type="button" class="{base_classes} {} {} {}"{attrs}>{children}</button>"#,
            self.variant.classes(),
            self.size.classes(),
            self.class,
        )
    }
}
