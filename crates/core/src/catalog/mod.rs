//! Catalog store: the ordered, authoritative product list for a session.
//!
//! A `Catalog` is an immutable snapshot. Mutations return a new snapshot with
//! a bumped `version`; operations that change nothing (unknown id, same
//! quantity) hand back an equal snapshot with the same version, so renderers
//! can detect changes by comparing versions rather than object identity.

pub mod seed;
pub mod selection;

use std::collections::HashSet;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    version: u64,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, DomainError> {
        validate_products(&products)?;
        Ok(Self { products, version: 0 })
    }

    /// Opens the shop with the built-in jersey list.
    pub fn seeded() -> Result<Self, DomainError> {
        Self::new(seed::jersey_products()?)
    }

    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    /// In-bag products in catalog order.
    pub fn in_bag(&self) -> Vec<&Product> {
        self.products.iter().filter(|product| product.in_bag).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn toggle_bag(&self, product_id: ProductId) -> Self {
        match selection::toggle(&self.products, product_id) {
            Some(products) => {
                let next = self.successor(products);
                debug!(
                    event_name = "catalog.selection.toggled",
                    product_id = product_id.0,
                    in_bag = next.find(product_id).map(|product| product.in_bag),
                    version = next.version,
                    "product bag membership toggled"
                );
                next
            }
            None => {
                debug!(
                    event_name = "catalog.selection.unknown_id",
                    product_id = product_id.0,
                    version = self.version,
                    "ignoring toggle for unknown product"
                );
                self.clone()
            }
        }
    }

    /// Sets the quantity of one product. Nothing in the storefront surface
    /// calls this yet; the +/- controls are rendered without behavior.
    pub fn set_quantity(&self, product_id: ProductId, quantity: NonZeroU32) -> Self {
        match selection::adjust_quantity(&self.products, product_id, quantity) {
            Some(products) => {
                let next = self.successor(products);
                debug!(
                    event_name = "catalog.quantity.adjusted",
                    product_id = product_id.0,
                    quantity = quantity.get(),
                    version = next.version,
                    "product quantity adjusted"
                );
                next
            }
            None => self.clone(),
        }
    }

    fn successor(&self, products: Vec<Product>) -> Self {
        Self { products, version: self.version.wrapping_add(1) }
    }
}

fn validate_products(products: &[Product]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if !seen.insert(product.id) {
            return Err(DomainError::InvalidCatalog(format!(
                "duplicate product id `{}`",
                product.id
            )));
        }
        if product.price < Decimal::ZERO {
            return Err(DomainError::InvalidCatalog(format!(
                "product `{}` has negative price {}",
                product.id, product.price
            )));
        }
        if product.name.trim().is_empty() {
            return Err(DomainError::InvalidCatalog(format!(
                "product `{}` has an empty name",
                product.id
            )));
        }
        if product.photo.trim().is_empty() {
            return Err(DomainError::InvalidCatalog(format!(
                "product `{}` has no photo reference",
                product.id
            )));
        }
    }

    Ok(())
}
