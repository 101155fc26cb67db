//! Derived order totals.
//!
//! Subtotal, tax, total, and loyalty points are a pure function of the cart
//! lines and the pricing configuration. All accumulation is exact integer
//! arithmetic; amounts are rounded to whole cents only for display, and
//! loyalty points floor the unrounded total.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money};

use crate::cart::CartLine;

/// Parts-per-million denominator for the tax rate.
const PPM: u128 = 1_000_000;

/// Cents per major currency unit.
const CENTS_PER_UNIT: u128 = 100;

/// Fixed pricing configuration. Plain configuration, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate in parts per million (88_750 = 8.875%).
    pub tax_rate_ppm: u32,
    /// Whole loyalty points promised per major currency unit of the total.
    pub points_per_dollar: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_ppm: 88_750,
            points_per_dollar: 10,
        }
    }
}

/// Derived totals for display: amounts rounded to whole cents, points
/// floored from the unrounded total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub loyalty_points: u64,
}

impl OrderTotals {
    /// Recompute totals from scratch over the given lines.
    ///
    /// Tax and total are carried as exact integer numerators over `PPM`
    /// (in cents) until the final display rounding, so repeated
    /// recomputation can never drift by a cent. Loyalty points use floor,
    /// never round-to-nearest: the promised reward count must not be
    /// inflated by cent rounding.
    pub fn compute(lines: &[CartLine], pricing: &PricingConfig) -> DomainResult<OrderTotals> {
        let mut subtotal = Money::ZERO;
        for line in lines {
            let line_total = line
                .unit_price
                .checked_mul(line.quantity)
                .ok_or_else(|| DomainError::invariant("cart line amount overflow"))?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| DomainError::invariant("cart subtotal overflow"))?;
        }

        let subtotal_cents = subtotal.cents() as u128;
        let tax_numer = subtotal_cents * pricing.tax_rate_ppm as u128;
        let total_numer = subtotal_cents * (PPM + pricing.tax_rate_ppm as u128);

        let tax = Money::from_cents(display_cents(tax_numer)?);
        let total = Money::from_cents(display_cents(total_numer)?);

        let points_numer = total_numer * pricing.points_per_dollar as u128;
        let loyalty_points = u64::try_from(points_numer / (PPM * CENTS_PER_UNIT))
            .map_err(|_| DomainError::invariant("loyalty points overflow"))?;

        Ok(OrderTotals {
            subtotal,
            tax,
            total,
            loyalty_points,
        })
    }
}

/// Round an exact numerator over `PPM` half up to whole cents.
fn display_cents(numer: u128) -> DomainResult<u64> {
    u64::try_from((numer + PPM / 2) / PPM)
        .map_err(|_| DomainError::invariant("cart amount overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::ProductId;

    fn line(id: &str, cents: u64, quantity: i64) -> CartLine {
        CartLine {
            product_id: ProductId::new(id).unwrap(),
            name: id.to_string(),
            description: None,
            image: format!("{id}.jpg"),
            unit_price: Money::from_cents(cents),
            quantity,
        }
    }

    #[test]
    fn subtotal_is_exact_to_the_cent() {
        // 24.99 x 2 + 16.50 x 1 = 66.48, exactly.
        let lines = vec![line("margherita-pizza", 2499, 2), line("caesar-salad", 1650, 1)];
        let totals = OrderTotals::compute(&lines, &PricingConfig::default()).unwrap();
        assert_eq!(totals.subtotal, Money::from_cents(6648));
        assert_eq!(totals.subtotal.to_string(), "66.48");
    }

    #[test]
    fn tax_total_and_points_for_sample_order() {
        // subtotal 66.48 at 8.875%: tax displays 5.90, total displays 72.38,
        // points = floor(unrounded total x 10) = 723.
        let lines = vec![line("margherita-pizza", 2499, 2), line("caesar-salad", 1650, 1)];
        let totals = OrderTotals::compute(&lines, &PricingConfig::default()).unwrap();

        assert_eq!(totals.tax.to_string(), "5.90");
        assert_eq!(totals.total.to_string(), "72.38");
        assert_eq!(totals.loyalty_points, 723);
    }

    #[test]
    fn points_floor_the_unrounded_total() {
        // subtotal 1.00: total is exactly 1.08875, so points must be
        // floor(10.8875) = 10 even though the displayed total is 1.09.
        let lines = vec![line("fresh-juice", 100, 1)];
        let totals = OrderTotals::compute(&lines, &PricingConfig::default()).unwrap();

        assert_eq!(totals.total.to_string(), "1.09");
        assert_eq!(totals.loyalty_points, 10);
    }

    #[test]
    fn display_rounding_is_half_up() {
        // subtotal 2.00: exact tax is 17.75 cents, displayed as 0.18.
        let lines = vec![line("espresso", 200, 1)];
        let totals = OrderTotals::compute(&lines, &PricingConfig::default()).unwrap();
        assert_eq!(totals.tax.to_string(), "0.18");
    }

    #[test]
    fn empty_lines_compute_to_zero() {
        let totals = OrderTotals::compute(&[], &PricingConfig::default()).unwrap();
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.total, Money::ZERO);
        assert_eq!(totals.loyalty_points, 0);
    }

    #[test]
    fn recomputation_is_stable_across_repeated_reads() {
        let lines = vec![
            line("margherita-pizza", 2499, 2),
            line("caesar-salad", 1650, 1),
            line("garlic-bread", 899, 3),
        ];
        let pricing = PricingConfig::default();
        let first = OrderTotals::compute(&lines, &pricing).unwrap();
        for _ in 0..100 {
            assert_eq!(OrderTotals::compute(&lines, &pricing).unwrap(), first);
        }
    }

    #[test]
    fn line_overflow_is_an_invariant_violation() {
        let lines = vec![line("overflow", u64::MAX, 2)];
        let err = OrderTotals::compute(&lines, &PricingConfig::default()).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for line amount overflow"),
        }
    }
}
