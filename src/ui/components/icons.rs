//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements (Lucide outlines) so they pick up
//! `currentColor` from the surrounding text classes.

/// Common icon size class.
const ICON_SIZE: &str = "w-4 h-4";

/// Icons used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Target,
    Trophy,
    Star,
    Filter,
    Search,
    CheckCircle,
    AlertCircle,
    Info,
    Plus,
    TrendingUp,
}

impl Icon {
    /// Stable icon name, written to the `data-icon` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zap => "zap",
            Self::Target => "target",
            Self::Trophy => "trophy",
            Self::Star => "star",
            Self::Filter => "filter",
            Self::Search => "search",
            Self::CheckCircle => "check-circle",
            Self::AlertCircle => "alert-circle",
            Self::Info => "info",
            Self::Plus => "plus",
            Self::TrendingUp => "trending-up",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Self::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Self::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
            Self::Trophy => concat!(
                r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/>"#,
                r#"<path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/>"#,
                r#"<path d="M4 22h16"/>"#,
                r#"<path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/>"#,
                r#"<path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/>"#,
                r#"<path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
            ),
            Self::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Self::Filter => r#"<polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>"#,
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::CheckCircle => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#
            }
            Self::AlertCircle => concat!(
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<line x1="12" x2="12" y1="8" y2="12"/>"#,
                r#"<line x1="12" x2="12.01" y1="16" y2="16"/>"#,
            ),
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::Plus => r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#,
            Self::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
        }
    }

    /// Render at the default size with extra classes appended.
    #[must_use]
    pub fn render(self, class: &str) -> String {
        self.render_sized(ICON_SIZE, class)
    }

    /// Render with an explicit size class.
    #[must_use]
    pub fn render_sized(self, size: &str, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" data-icon="{name}" class="{size} {class}">{body}</svg>"#,
            name = self.name(),
            body = self.body(),
        )
    }
}
