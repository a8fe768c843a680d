use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};

/// Display precision for every monetary amount.
pub const MONEY_SCALE: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub name: String,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<LineItem>,
    pub total: Decimal,
}

impl OrderSummary {
    /// Builds the summary for the in-bag products among `products`, keeping
    /// their order. Returns `None` when none of them is in the bag: an empty
    /// bag has no summary at all, not a zero one.
    pub fn from_bag<'a, I>(products: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let lines: Vec<LineItem> = products
            .into_iter()
            .filter(|product| product.in_bag)
            .map(|product| LineItem {
                product_id: product.id,
                quantity: product.quantity.get(),
                name: product.name.clone(),
                unit_price: product.price,
                line_total: round_money(product.line_total()),
            })
            .collect();

        if lines.is_empty() {
            return None;
        }

        let total = round_money(lines.iter().map(|line| line.line_total).sum());
        Some(Self { lines, total })
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rust_decimal::Decimal;

    use super::{round_money, OrderSummary};
    use crate::catalog::Catalog;
    use crate::domain::product::{Product, ProductId};

    fn two_jersey_catalog() -> Catalog {
        let three = NonZeroU32::new(3).expect("non-zero literal");
        Catalog::new(vec![
            Product::new(ProductId(1), "Real Madrid", Decimal::new(11_999, 2), "real_madrid.webp")
                .with_quantity(three),
            Product::new(ProductId(2), "Milan", Decimal::new(9_999, 2), "milan.png"),
        ])
        .expect("fixture catalog is valid")
    }

    #[test]
    fn single_line_summary_multiplies_quantity() {
        let catalog = two_jersey_catalog().toggle_bag(ProductId(1));
        let summary = OrderSummary::from_bag(catalog.in_bag()).expect("bag is not empty");

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].quantity, 3);
        assert_eq!(summary.lines[0].name, "Real Madrid");
        assert_eq!(summary.lines[0].line_total, Decimal::new(35_997, 2));
        assert_eq!(summary.total, Decimal::new(35_997, 2));
    }

    #[test]
    fn two_line_summary_keeps_catalog_order_and_sums_exactly() {
        let catalog = two_jersey_catalog().toggle_bag(ProductId(1)).toggle_bag(ProductId(2));
        let summary = OrderSummary::from_bag(catalog.in_bag()).expect("bag is not empty");

        let names: Vec<&str> = summary.lines.iter().map(|line| line.name.as_str()).collect();
        assert_eq!(names, vec!["Real Madrid", "Milan"]);
        assert_eq!(summary.total, Decimal::new(45_996, 2));
        assert_eq!(summary.item_count(), 4);
    }

    #[test]
    fn empty_bag_has_no_summary() {
        let catalog = two_jersey_catalog().toggle_bag(ProductId(1)).toggle_bag(ProductId(1));

        assert!(OrderSummary::from_bag(catalog.in_bag()).is_none());
    }

    #[test]
    fn products_outside_the_bag_contribute_nothing() {
        let catalog = two_jersey_catalog().toggle_bag(ProductId(2));
        let summary = OrderSummary::from_bag(catalog.get_all()).expect("milan is in the bag");

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, Decimal::new(9_999, 2));
    }

    #[test]
    fn total_matches_sum_of_line_totals_for_whole_seed() {
        let catalog = (1..=9).fold(Catalog::seeded().expect("seed catalog is valid"), |c, id| {
            c.toggle_bag(ProductId(id))
        });
        let summary = OrderSummary::from_bag(catalog.in_bag()).expect("bag is not empty");
        let line_sum: Decimal = summary.lines.iter().map(|line| line.line_total).sum();

        assert_eq!(summary.total, line_sum);
        assert_eq!(summary.total, Decimal::new(119_419, 2));
    }

    #[test]
    fn rounding_uses_midpoint_away_from_zero() {
        assert_eq!(round_money(Decimal::new(10_005, 3)), Decimal::new(1_001, 2));
        assert_eq!(round_money(Decimal::new(10_004, 3)), Decimal::new(1_000, 2));
    }
}
