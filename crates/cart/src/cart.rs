use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::{CatalogItem, ProductId, SuggestedItem};
use storefront_core::{Aggregate, AggregateId, AggregateRoot, DomainError, Entity, Money};
use storefront_events::Event;

use crate::totals::{OrderTotals, PricingConfig};

/// Cart identifier (one per ordering session).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub AggregateId);

impl CartId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Description stored for lines merged in without one of their own.
pub const ADDED_FROM_SUGGESTIONS: &str = "Added from suggestions";

/// Candidate item description handed to a merge-add.
///
/// Built from a catalog item or a suggested item; the cart only ever reads
/// it, and discards it entirely when a line with the same id already exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCandidate {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub image: String,
    pub description: Option<String>,
}

impl From<&CatalogItem> for ItemCandidate {
    fn from(item: &CatalogItem) -> Self {
        Self {
            product_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            description: Some(item.description.clone()),
        }
    }
}

impl From<&SuggestedItem> for ItemCandidate {
    fn from(item: &SuggestedItem) -> Self {
        Self {
            product_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            description: None,
        }
    }
}

/// One product entry in the cart with its captured metadata and quantity.
///
/// Invariant: `quantity >= 1`. A line whose quantity would drop to zero is
/// removed from the cart instead of being stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Aggregate root: Cart.
///
/// An ordered sequence of lines keyed by product id; insertion order is
/// display order and every operation preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// Create an empty cart. Carts are transient session state: there is no
    /// creation command, a cart exists from birth and is discarded with its
    /// session.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    /// Derive subtotal, tax, total, and loyalty points from current state.
    ///
    /// Pure recomputation on every call; nothing is cached.
    pub fn totals(&self, pricing: &PricingConfig) -> Result<OrderTotals, DomainError> {
        OrderTotals::compute(&self.lines, pricing)
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem (merge-add).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub candidate: ItemCandidate,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub product_id: ProductId,
    /// Non-positive values remove the line instead of storing the quantity.
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveLine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLine {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    SetQuantity(SetQuantity),
    RemoveLine(RemoveLine),
}

/// Event: LineAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub product_id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LineQuantityChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineQuantityChanged {
    pub product_id: ProductId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LineRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    LineQuantityChanged(LineQuantityChanged),
    LineRemoved(LineRemoved),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::LineQuantityChanged(_) => "cart.line.quantity_changed",
            CartEvent::LineRemoved(_) => "cart.line.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::LineAdded(e) => e.occurred_at,
            CartEvent::LineQuantityChanged(e) => e.occurred_at,
            CartEvent::LineRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(e) => {
                self.lines.push(CartLine {
                    product_id: e.product_id.clone(),
                    name: e.name.clone(),
                    description: e.description.clone(),
                    image: e.image.clone(),
                    unit_price: e.unit_price,
                    quantity: e.quantity,
                });
            }
            CartEvent::LineQuantityChanged(e) => {
                if let Some(line) = self
                    .lines
                    .iter_mut()
                    .find(|line| line.product_id == e.product_id)
                {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::LineRemoved(e) => {
                self.lines.retain(|line| line.product_id != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add_item(cmd),
            CartCommand::SetQuantity(cmd) => self.handle_set_quantity(cmd),
            CartCommand::RemoveLine(cmd) => self.handle_remove_line(cmd),
        }
    }
}

impl Cart {
    /// Classify first: an existing line means a quantity bump, a missing one
    /// means an append. On merge the candidate's metadata is discarded; the
    /// existing entry wins.
    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        match self.line(&cmd.candidate.product_id) {
            Some(line) => Ok(vec![CartEvent::LineQuantityChanged(LineQuantityChanged {
                product_id: line.product_id.clone(),
                quantity: line.quantity.saturating_add(1),
                occurred_at: cmd.occurred_at,
            })]),
            None => {
                let candidate = &cmd.candidate;
                Ok(vec![CartEvent::LineAdded(LineAdded {
                    product_id: candidate.product_id.clone(),
                    name: candidate.name.clone(),
                    description: candidate
                        .description
                        .clone()
                        .or_else(|| Some(ADDED_FROM_SUGGESTIONS.to_string())),
                    image: candidate.image.clone(),
                    unit_price: candidate.unit_price,
                    quantity: 1,
                    occurred_at: cmd.occurred_at,
                })])
            }
        }
    }

    fn handle_set_quantity(&self, cmd: &SetQuantity) -> Result<Vec<CartEvent>, DomainError> {
        let Some(line) = self.line(&cmd.product_id) else {
            // Unknown id: a no-op, not a failure.
            return Ok(Vec::new());
        };

        if cmd.quantity <= 0 {
            return Ok(vec![CartEvent::LineRemoved(LineRemoved {
                product_id: line.product_id.clone(),
                occurred_at: cmd.occurred_at,
            })]);
        }

        Ok(vec![CartEvent::LineQuantityChanged(LineQuantityChanged {
            product_id: line.product_id.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_line(&self, cmd: &RemoveLine) -> Result<Vec<CartEvent>, DomainError> {
        if self.line(&cmd.product_id).is_none() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::LineRemoved(LineRemoved {
            product_id: cmd.product_id.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
