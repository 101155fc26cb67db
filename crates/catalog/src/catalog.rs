//! Queryable product catalog (read-only once built).

use std::collections::HashSet;

use crate::item::{CatalogItem, CategoryFilter, ProductId};
use storefront_core::{DomainError, DomainResult};

/// The static set of purchasable items.
///
/// The cart engine treats this as opaque read-only input and never mutates
/// it; filtering and search live entirely here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from ingested items. Ids must be unique.
    pub fn new(items: Vec<CatalogItem>) -> DomainResult<Self> {
        let mut seen: HashSet<&ProductId> = HashSet::new();
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate catalog item id: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Filter items by category and free-text query.
    ///
    /// The query matches case-insensitively against name or description; an
    /// empty (or whitespace) query matches everything. Result order is the
    /// catalog's insertion order.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                let matches_category = match filter {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(category) => item.category == category,
                };
                let matches_query = needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle);
                matches_category && matches_query
            })
            .collect()
    }
}
