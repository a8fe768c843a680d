use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

struct SeedEntry {
    id: u32,
    photo: &'static str,
    name: &'static str,
    price_cents: i64,
    quantity: u32,
}

const JERSEYS: [SeedEntry; 9] = [
    SeedEntry {
        id: 1,
        photo: "real_madrid.webp",
        name: "Real Madrid",
        price_cents: 11_999,
        quantity: 3,
    },
    SeedEntry { id: 2, photo: "milan.png", name: "Milan", price_cents: 9_999, quantity: 1 },
    SeedEntry { id: 3, photo: "chelsea.webp", name: "Chelsea", price_cents: 9_999, quantity: 1 },
    SeedEntry {
        id: 4,
        photo: "barcelona.png",
        name: "Barcelona",
        price_cents: 10_999,
        quantity: 1,
    },
    SeedEntry { id: 5, photo: "benfica.png", name: "Benfica", price_cents: 8_949, quantity: 1 },
    SeedEntry {
        id: 6,
        photo: "manchester.webp",
        name: "Manchester City",
        price_cents: 12_979,
        quantity: 1,
    },
    SeedEntry { id: 7, photo: "bayern.webp", name: "Bayern", price_cents: 11_999, quantity: 1 },
    SeedEntry { id: 8, photo: "psg.png", name: "PSG", price_cents: 9_499, quantity: 1 },
    SeedEntry { id: 9, photo: "ajax.webp", name: "Ajax", price_cents: 8_999, quantity: 1 },
];

/// The fixed jersey list the shop opens with. A zero quantity in the table is
/// rejected here; price and uniqueness checks happen in `Catalog::new`.
pub fn jersey_products() -> Result<Vec<Product>, DomainError> {
    JERSEYS.iter().map(product_from_seed).collect()
}

fn product_from_seed(entry: &SeedEntry) -> Result<Product, DomainError> {
    let quantity = NonZeroU32::new(entry.quantity).ok_or_else(|| {
        DomainError::InvalidCatalog(format!("product `{}` has zero quantity", entry.id))
    })?;

    Ok(Product::new(
        ProductId(entry.id),
        entry.name,
        Decimal::new(entry.price_cents, 2),
        entry.photo,
    )
    .with_quantity(quantity))
}
