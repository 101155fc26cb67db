use chrono::Utc;

use storefront_cart::{
    AddItem, Cart, CartCommand, CartId, ItemCandidate, PricingConfig, RemoveLine, SetQuantity,
};
use storefront_catalog::{Catalog, ProductId, StoreInfo, SuggestedItem};
use storefront_core::{Aggregate, AggregateId, DomainError, DomainResult};
use storefront_events::Event;

use crate::view::SidebarView;

/// One interactive ordering session: a cart plus the read-only surfaces it
/// draws from (catalog, suggested items, store info) and the fixed pricing
/// configuration.
///
/// Single writer, synchronous, in-memory. The session is discarded when the
/// shell navigates away; nothing is persisted.
#[derive(Debug, Clone)]
pub struct OrderSession {
    cart: Cart,
    catalog: Catalog,
    suggested: Vec<SuggestedItem>,
    store: StoreInfo,
    pricing: PricingConfig,
}

impl OrderSession {
    pub fn new(
        catalog: Catalog,
        suggested: Vec<SuggestedItem>,
        store: StoreInfo,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            cart: Cart::new(CartId::new(AggregateId::new())),
            catalog,
            suggested,
            store,
            pricing,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn suggested(&self) -> &[SuggestedItem] {
        &self.suggested
    }

    pub fn store(&self) -> &StoreInfo {
        &self.store
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// "Add to Cart" on a catalog product.
    ///
    /// An id the catalog does not contain is a shell programming error (the
    /// shell only renders ids the catalog gave it), reported as `NotFound`.
    pub fn add_product(&mut self, id: &ProductId) -> DomainResult<()> {
        let item = self.catalog.get(id).ok_or_else(DomainError::not_found)?;
        let candidate = ItemCandidate::from(item);
        self.dispatch(CartCommand::AddItem(AddItem {
            candidate,
            occurred_at: Utc::now(),
        }))
    }

    /// "Add" on a suggested up-sell item.
    pub fn add_suggested(&mut self, id: &ProductId) -> DomainResult<()> {
        let item = self
            .suggested
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(DomainError::not_found)?;
        let candidate = ItemCandidate::from(item);
        self.dispatch(CartCommand::AddItem(AddItem {
            candidate,
            occurred_at: Utc::now(),
        }))
    }

    /// "+" control on a cart line.
    pub fn increment(&mut self, id: &ProductId) -> DomainResult<()> {
        let quantity = self.cart.line(id).map_or(0, |line| line.quantity);
        self.set_quantity(id, quantity.saturating_add(1))
    }

    /// "-" control on a cart line; decrementing from 1 removes the line.
    pub fn decrement(&mut self, id: &ProductId) -> DomainResult<()> {
        let quantity = self.cart.line(id).map_or(0, |line| line.quantity);
        self.set_quantity(id, quantity - 1)
    }

    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> DomainResult<()> {
        self.dispatch(CartCommand::SetQuantity(SetQuantity {
            product_id: id.clone(),
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    /// Trash control on a cart line.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<()> {
        self.dispatch(CartCommand::RemoveLine(RemoveLine {
            product_id: id.clone(),
            occurred_at: Utc::now(),
        }))
    }

    /// Pre-seed a cart line with an explicit quantity (demo/startup data).
    pub fn seed_line(&mut self, candidate: ItemCandidate, quantity: i64) -> DomainResult<()> {
        let id = candidate.product_id.clone();
        self.dispatch(CartCommand::AddItem(AddItem {
            candidate,
            occurred_at: Utc::now(),
        }))?;
        if quantity != 1 {
            self.set_quantity(&id, quantity)?;
        }
        Ok(())
    }

    /// Current sidebar state, recomputed from scratch on every read.
    pub fn sidebar(&self) -> DomainResult<SidebarView> {
        SidebarView::project(&self.cart, &self.suggested, &self.pricing)
    }

    fn dispatch(&mut self, command: CartCommand) -> DomainResult<()> {
        let events = self.cart.handle(&command)?;
        for event in &events {
            tracing::debug!(event_type = event.event_type(), "cart event");
            self.cart.apply(event);
        }
        Ok(())
    }
}
