use std::num::NonZeroU32;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::domain::product::ProductId;
use crate::errors::DomainError;
use crate::summary::OrderSummary;
use crate::view::StorefrontView;

/// Owns the current catalog snapshot for one shopping session.
///
/// The storefront is passed explicitly to whoever renders or handles input;
/// each handled event swaps in the snapshot the catalog store returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Storefront {
    catalog: Catalog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub product_id: ProductId,
    /// Bag membership after the event; `None` when the id is unknown.
    pub in_bag: Option<bool>,
    pub changed: bool,
    pub version: u64,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn open() -> Result<Self, DomainError> {
        let catalog = Catalog::seeded()?;
        info!(
            event_name = "session.storefront.opened",
            product_count = catalog.len(),
            "storefront opened with seed catalog"
        );
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn version(&self) -> u64 {
        self.catalog.version()
    }

    pub fn has_changed_since(&self, version: u64) -> bool {
        self.catalog.version() != version
    }

    /// Handles a "select/deselect product" gesture. Unknown ids are ignored.
    pub fn select(&mut self, product_id: ProductId) -> SelectionOutcome {
        let before = self.catalog.version();
        self.catalog = self.catalog.toggle_bag(product_id);

        SelectionOutcome {
            product_id,
            in_bag: self.catalog.find(product_id).map(|product| product.in_bag),
            changed: self.has_changed_since(before),
            version: self.catalog.version(),
        }
    }

    pub fn adjust_quantity(
        &mut self,
        product_id: ProductId,
        quantity: NonZeroU32,
    ) -> Result<u64, DomainError> {
        if !self.catalog.contains(product_id) {
            return Err(DomainError::UnknownProduct(product_id));
        }
        self.catalog = self.catalog.set_quantity(product_id, quantity);
        Ok(self.catalog.version())
    }

    pub fn summary(&self) -> Option<OrderSummary> {
        let summary = OrderSummary::from_bag(self.catalog.in_bag());
        debug!(
            event_name = "session.summary.recomputed",
            version = self.catalog.version(),
            line_count = summary.as_ref().map_or(0, |summary| summary.lines.len()),
            "order summary recomputed"
        );
        summary
    }

    pub fn view(&self, display: &DisplayConfig) -> StorefrontView {
        StorefrontView::build(&self.catalog, display)
    }
}
