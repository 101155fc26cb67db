//! View models handed to the rendering shell.
//!
//! All amounts arrive display-rounded as two-decimal strings; the shell adds
//! currency symbols and layout. Everything here is `Serialize` so a shell on
//! the other side of a JSON boundary can consume it unchanged.

use serde::Serialize;

use storefront_cart::{Cart, CartLine, OrderTotals, PricingConfig};
use storefront_catalog::SuggestedItem;
use storefront_core::{DomainError, DomainResult};

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub quantity: i64,
    pub unit_price: String,
    pub line_total: String,
}

impl LineView {
    fn project(line: &CartLine) -> DomainResult<Self> {
        let line_total = line
            .unit_price
            .checked_mul(line.quantity)
            .ok_or_else(|| DomainError::invariant("cart line amount overflow"))?;
        Ok(Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            description: line.description.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            line_total: line_total.to_string(),
        })
    }
}

/// One rendered suggested up-sell item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedItemView {
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&SuggestedItem> for SuggestedItemView {
    fn from(item: &SuggestedItem) -> Self {
        Self {
            product_id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
        }
    }
}

/// The order summary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub loyalty_points: u64,
}

impl From<OrderTotals> for TotalsView {
    fn from(totals: OrderTotals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
            loyalty_points: totals.loyalty_points,
        }
    }
}

/// What the order sidebar shows.
///
/// The empty cart is a distinct display mode, not a zeroed summary: totals,
/// suggestions, and the checkout affordance do not exist on the `Empty`
/// variant at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SidebarView {
    Empty,
    Active {
        lines: Vec<LineView>,
        suggestions: Vec<SuggestedItemView>,
        totals: TotalsView,
    },
}

impl SidebarView {
    pub fn project(
        cart: &Cart,
        suggested: &[SuggestedItem],
        pricing: &PricingConfig,
    ) -> DomainResult<Self> {
        if cart.is_empty() {
            return Ok(SidebarView::Empty);
        }

        let lines = cart
            .lines()
            .iter()
            .map(LineView::project)
            .collect::<DomainResult<Vec<_>>>()?;
        let totals = cart.totals(pricing)?;

        Ok(SidebarView::Active {
            lines,
            suggestions: suggested.iter().map(SuggestedItemView::from).collect(),
            totals: TotalsView::from(totals),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SidebarView::Empty)
    }
}
