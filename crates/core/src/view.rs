//! Presentation model handed to whatever draws the storefront.
//!
//! Everything here is already formatted for display; renderers only lay it
//! out. The quantity control is descriptive: it carries the product's real
//! quantity but no behavior is attached to its buttons.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::domain::product::{Product, ProductId};
use crate::summary::{round_money, OrderSummary, MONEY_SCALE};

pub const SUMMARY_HEADING: &str = "Order Details";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StorefrontView {
    pub title: String,
    pub version: u64,
    pub products: Vec<ProductCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub photo_url: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_control: Option<QuantityControl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuantityControl {
    pub quantity: u32,
    pub decrement_label: &'static str,
    pub increment_label: &'static str,
    pub wired: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub heading: &'static str,
    pub rows: Vec<SummaryRow>,
    pub total: String,
    pub item_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub amount: String,
}

impl StorefrontView {
    pub fn build(catalog: &Catalog, display: &DisplayConfig) -> Self {
        let products =
            catalog.get_all().iter().map(|product| ProductCard::new(product, display)).collect();
        let summary = OrderSummary::from_bag(catalog.in_bag())
            .map(|summary| SummaryView::new(&summary, &display.currency_symbol));

        Self { title: display.title.clone(), version: catalog.version(), products, summary }
    }
}

impl ProductCard {
    pub fn new(product: &Product, display: &DisplayConfig) -> Self {
        let quantity_control = product.in_bag.then(|| QuantityControl {
            quantity: product.quantity.get(),
            decrement_label: "-",
            increment_label: "+",
            wired: false,
        });

        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_money(&display.currency_symbol, product.price),
            photo_url: format!("{}{}", display.asset_base, product.photo),
            selected: product.in_bag,
            quantity_control,
        }
    }
}

impl SummaryView {
    pub fn new(summary: &OrderSummary, currency_symbol: &str) -> Self {
        let rows = summary
            .lines
            .iter()
            .map(|line| SummaryRow {
                label: format!("{} x {}", line.quantity, line.name),
                amount: format_money(currency_symbol, line.line_total),
            })
            .collect();

        Self {
            heading: SUMMARY_HEADING,
            rows,
            total: format_money(currency_symbol, summary.total),
            item_count: summary.item_count(),
        }
    }
}

/// `$` + amount with exactly two decimals, e.g. `$359.97` or `$100.00`.
pub fn format_money(currency_symbol: &str, amount: Decimal) -> String {
    let mut amount = round_money(amount);
    amount.rescale(MONEY_SCALE);
    format!("{currency_symbol}{amount}")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{format_money, StorefrontView};
    use crate::catalog::Catalog;
    use crate::config::AppConfig;
    use crate::domain::product::ProductId;

    #[test]
    fn money_always_shows_two_decimals() {
        assert_eq!(format_money("$", Decimal::new(100, 0)), "$100.00");
        assert_eq!(format_money("$", Decimal::new(35_997, 2)), "$359.97");
        assert_eq!(format_money("€", Decimal::new(8_949, 2)), "€89.49");
    }

    #[test]
    fn untouched_catalog_view_has_no_summary() {
        let display = AppConfig::default().display;
        let view = StorefrontView::build(&Catalog::seeded().expect("seed is valid"), &display);

        assert_eq!(view.products.len(), 9);
        assert!(view.summary.is_none());
        assert!(view.products.iter().all(|card| card.quantity_control.is_none()));
        assert_eq!(view.products[0].photo_url, "./img/real_madrid.webp");
        assert_eq!(view.products[0].price, "$119.99");
    }

    #[test]
    fn selected_card_shows_real_quantity_and_inert_controls() {
        let display = AppConfig::default().display;
        let catalog = Catalog::seeded().expect("seed is valid").toggle_bag(ProductId(1));
        let view = StorefrontView::build(&catalog, &display);

        let card = &view.products[0];
        assert!(card.selected);
        let control = card.quantity_control.as_ref().expect("selected card has control");
        assert_eq!(control.quantity, 3);
        assert!(!control.wired);
    }

    #[test]
    fn summary_rows_render_quantity_name_and_amount() {
        let display = AppConfig::default().display;
        let catalog = Catalog::seeded()
            .expect("seed is valid")
            .toggle_bag(ProductId(1))
            .toggle_bag(ProductId(2));
        let view = StorefrontView::build(&catalog, &display);

        let summary = view.summary.expect("bag is not empty");
        assert_eq!(summary.rows[0].label, "3 x Real Madrid");
        assert_eq!(summary.rows[0].amount, "$359.97");
        assert_eq!(summary.rows[1].label, "1 x Milan");
        assert_eq!(summary.total, "$459.96");
        assert_eq!(view.version, 2);
    }

    #[test]
    fn json_view_omits_absent_summary_and_controls() {
        let display = AppConfig::default().display;
        let view = StorefrontView::build(&Catalog::seeded().expect("seed is valid"), &display);
        let json = serde_json::to_value(&view).expect("view serializes");

        assert!(json.get("summary").is_none());
        assert!(json["products"][0].get("quantity_control").is_none());
        assert_eq!(json["products"][0]["id"], 1);
    }
}
