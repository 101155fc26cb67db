//! Money value object.
//!
//! Amounts are held in the smallest currency unit (cents, `u64`) so that all
//! accumulation is exact integer arithmetic. Rounding happens only when an
//! amount is formatted for display.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative currency amount in the smallest currency unit (e.g., cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a major-unit amount (e.g. `24.99` dollars) into `Money`.
    ///
    /// This is the ingestion boundary for raw numeric price data: negative
    /// and non-finite input is rejected here rather than allowed to corrupt
    /// downstream totals. The amount is rounded to the nearest cent.
    pub fn from_major_units(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("price out of range"));
        }
        Ok(Self(cents as u64))
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, `None` on overflow.
    pub fn checked_mul(self, quantity: i64) -> Option<Money> {
        let quantity = u64::try_from(quantity).ok()?;
        self.0.checked_mul(quantity).map(Money)
    }

    /// Add another amount, `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    /// Two-decimal major units, e.g. `24.99`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
