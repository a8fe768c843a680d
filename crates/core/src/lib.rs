//! Kitbag: catalog, bag selection, and order summary for a small jersey shop.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod session;
pub mod summary;
pub mod view;

pub use catalog::Catalog;
pub use domain::product::{Product, ProductId};
pub use errors::{ApplicationError, DomainError};
pub use session::{SelectionOutcome, Storefront};
pub use summary::{LineItem, OrderSummary};
pub use view::{ProductCard, StorefrontView, SummaryView};
