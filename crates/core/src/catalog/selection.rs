//! Pure snapshot transforms over an ordered product list.
//!
//! Each function returns `None` when nothing would change, so callers can keep
//! the current snapshot (and its version) instead of minting an equal copy.

use std::num::NonZeroU32;

use crate::domain::product::{Product, ProductId};

pub fn toggle(products: &[Product], id: ProductId) -> Option<Vec<Product>> {
    let position = products.iter().position(|product| product.id == id)?;
    Some(replace_at(products, position, |product| {
        let in_bag = !product.in_bag;
        product.with_in_bag(in_bag)
    }))
}

pub fn adjust_quantity(
    products: &[Product],
    id: ProductId,
    quantity: NonZeroU32,
) -> Option<Vec<Product>> {
    let position = products.iter().position(|product| product.id == id)?;
    if products[position].quantity == quantity {
        return None;
    }
    Some(replace_at(products, position, |product| product.with_quantity(quantity)))
}

fn replace_at(
    products: &[Product],
    position: usize,
    update: impl FnOnce(Product) -> Product,
) -> Vec<Product> {
    let mut next = products.to_vec();
    let current = next[position].clone();
    next[position] = update(current);
    next
}
