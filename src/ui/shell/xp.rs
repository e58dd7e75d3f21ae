//! Experience leaderboard panel.

use crate::model::XpEntry;
use crate::ui::components::{Icon, card, card_content, progress};
use crate::ui::escape;

#[must_use]
pub fn xp_panel(entries: &[XpEntry]) -> String {
    let rows: String = entries.iter().map(xp_card).collect();
    format!(
        r#"<section data-panel="xp" class="space-y-4">
    <h2 class="text-2xl font-bold text-white flex items-center space-x-2">{icon}<span>XP Leaderboard</span></h2>
    <div class="space-y-2">{rows}</div>
</section>"#,
        icon = Icon::Trophy.render_sized("w-6 h-6", "text-teal-400"),
    )
}

#[must_use]
pub fn xp_card(entry: &XpEntry) -> String {
    let body = format!(
        r#"<div class="flex items-center justify-between mb-2">
    <div class="flex items-center space-x-3">
        <span class="text-teal-400 font-bold">#{rank}</span>
        <span class="text-white font-medium">{name}</span>
        <span class="text-slate-400 text-sm">Level {level}</span>
    </div>
    <div class="flex items-center space-x-1 text-slate-300 text-sm">{trend}<span>{xp} XP</span></div>
</div>{bar}"#,
        rank = entry.rank,
        name = escape(entry.name),
        level = entry.level,
        trend = Icon::TrendingUp.render("text-emerald-400"),
        xp = group_thousands(entry.xp),
        bar = progress(entry.progress, ""),
    );

    card(
        "bg-slate-800/50 border-slate-700/50",
        &format!(
            r#"<article data-xp-rank="{}">{}</article>"#,
            entry.rank,
            card_content("p-4", &body)
        ),
    )
}

/// `12450` → `"12,450"`.
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(9800), "9,800");
        assert_eq!(group_thousands(12450), "12,450");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn renders_every_rank_with_progress() {
        let html = xp_panel(seed::xp_ranking());
        assert_eq!(html.matches("data-xp-rank=").count(), 5);
        assert!(html.contains("Alex Chen"));
        assert!(html.contains("12,450 XP"));
        assert!(html.contains("Level 15"));
        assert!(html.contains("width: 75%"));
    }
}
