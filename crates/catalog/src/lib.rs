//! Product catalog module.
//!
//! This crate owns the static set of purchasable items, the suggested
//! up-sell items, and the store information metadata. It is the ingestion
//! boundary for raw catalog data: prices, identifiers, and names are
//! validated here so the cart engine downstream can treat them as opaque,
//! well-formed input.

pub mod catalog;
pub mod item;
pub mod store;
pub mod suggestion;

pub use catalog::Catalog;
pub use item::{CatalogItem, Category, CategoryFilter, ProductId};
pub use store::StoreInfo;
pub use suggestion::SuggestedItem;
