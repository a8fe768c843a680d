use std::fmt::Write as _;

use kitbag_core::view::{ProductCard, StorefrontView, SummaryView};

const NAME_WIDTH: usize = 18;
const LABEL_WIDTH: usize = 24;

pub fn render_text(view: &StorefrontView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));

    for card in &view.products {
        out.push_str(&render_card(card));
        out.push('\n');
    }

    if let Some(summary) = &view.summary {
        out.push('\n');
        out.push_str(&render_summary(summary));
    }

    out.truncate(out.trim_end().len());
    out
}

pub fn render_json(view: &StorefrontView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

fn render_card(card: &ProductCard) -> String {
    let marker = if card.selected { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{marker} {:>2}  {:<NAME_WIDTH$} {:>9}  {}",
        card.id, card.name, card.price, card.photo_url
    );

    if let Some(control) = &card.quantity_control {
        let _ = write!(
            line,
            "  [ {} {} {} ]",
            control.decrement_label, control.quantity, control.increment_label
        );
    }

    line
}

fn render_summary(summary: &SummaryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary.heading);
    let _ = writeln!(out, "  {:<LABEL_WIDTH$} {:>10}", "Item", "Total");

    for row in &summary.rows {
        let _ = writeln!(out, "  {:<LABEL_WIDTH$} {:>10}", row.label, row.amount);
    }

    let _ = writeln!(out, "  {:<LABEL_WIDTH$} {:>10}", "Total", summary.total);
    out
}

#[cfg(test)]
mod tests {
    use kitbag_core::config::AppConfig;
    use kitbag_core::{Catalog, ProductId, StorefrontView};

    use super::{render_json, render_text};

    fn view_with(selected: &[u32]) -> StorefrontView {
        let catalog = selected
            .iter()
            .fold(Catalog::seeded().expect("seed is valid"), |catalog, id| {
                catalog.toggle_bag(ProductId(*id))
            });
        StorefrontView::build(&catalog, &AppConfig::default().display)
    }

    #[test]
    fn empty_bag_renders_catalog_without_summary() {
        let text = render_text(&view_with(&[]));

        assert!(text.starts_with("Jersey Shop\n==========="));
        assert_eq!(text.lines().filter(|line| line.starts_with("[ ]")).count(), 9);
        assert!(!text.contains("Order Details"));
    }

    #[test]
    fn selected_jersey_shows_marker_controls_and_summary() {
        let text = render_text(&view_with(&[1]));

        let first = text.lines().nth(2).expect("first product line");
        assert!(first.starts_with("[x]  1  Real Madrid"));
        assert!(first.ends_with("[ - 3 + ]"));
        assert!(text.contains("Order Details"));
        assert!(text.contains("3 x Real Madrid"));
        assert!(text.trim_end().ends_with("$359.97"));
    }

    #[test]
    fn json_render_is_parseable() {
        let json = render_json(&view_with(&[1, 2])).expect("view serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["summary"]["total"], "$459.96");
        assert_eq!(value["summary"]["rows"][1]["label"], "1 x Milan");
    }
}
