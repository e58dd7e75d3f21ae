//! Sticky header with the brand and both navigation bars.

use crate::model::Tab;
use crate::ui::escape;
use crate::ui::style::{tab_button_classes, tab_icon};
use crate::ui::components::Icon;

/// Which navigation bar a button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavVariant {
    Desktop,
    Mobile,
}

/// Header with the brand title, desktop navigation and mobile navigation.
///
/// Every tab button posts its tab; the reducer decides whether it switches.
#[must_use]
pub fn header(title: &str, active: Tab) -> String {
    let desktop: String = Tab::ALL
        .iter()
        .map(|&tab| nav_button(tab, active, NavVariant::Desktop))
        .collect();
    let mobile: String = Tab::ALL
        .iter()
        .map(|&tab| nav_button(tab, active, NavVariant::Mobile))
        .collect();

    format!(
        r#"<header class="border-b border-slate-700/50 bg-slate-900/80 backdrop-blur-sm sticky top-0 z-50">
    <div class="container mx-auto px-4 py-4">
        <div class="flex items-center justify-between">
            <div class="flex items-center space-x-3">
                {brand}
                <h1 class="text-xl font-bold text-white">{title}</h1>
            </div>
            <nav data-nav="desktop" class="hidden md:flex space-x-1">{desktop}</nav>
        </div>
        <nav data-nav="mobile" class="md:hidden mt-4 flex space-x-1">{mobile}</nav>
    </div>
</header>"#,
        brand = Icon::Zap.render_sized("w-5 h-5", "text-white"),
        title = escape(title),
    )
}

fn nav_button(tab: Tab, active: Tab, variant: NavVariant) -> String {
    let (layout, label) = match variant {
        NavVariant::Desktop => ("flex items-center space-x-2", tab.desktop_label()),
        NavVariant::Mobile => (
            "flex-1 px-3 py-2 flex items-center justify-center space-x-1 text-sm",
            tab.mobile_label(),
        ),
    };
    let is_active = tab == active;

    format!(
        r##"<button type="button" data-tab="{tab}" aria-pressed="{is_active}" hx-post="/tabs/{tab}" hx-target="#shell" hx-swap="outerHTML" class="px-4 py-2 rounded-lg font-medium transition-all duration-200 {layout} {state}">{icon}<span>{label}</span></button>"##,
        state = tab_button_classes(is_active),
        icon = tab_icon(tab).render(""),
    )
}
