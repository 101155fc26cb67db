//! Suggested up-sell items.

use serde::{Deserialize, Serialize};

use crate::item::ProductId;
use storefront_core::{DomainError, DomainResult, Entity, Money};

/// A catalog item surfaced as an up-sell once the cart is non-empty.
///
/// Suggested items carry no description of their own; when one is merged
/// into the cart the engine fills in its fixed marker text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl SuggestedItem {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("suggested item name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            price,
            image: image.into(),
        })
    }
}

impl Entity for SuggestedItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
