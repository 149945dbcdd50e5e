//! Splitting money into parts without losing minor units.
//!
//! Uses the largest remainder method:
//! 1. Compute each exact share of the absolute amount
//! 2. Truncate every share to the currency's minor unit
//! 3. Hand the leftover minor units, one each, to the shares with the
//!    largest truncated fractions (earlier parts win ties)
//!
//! The parts therefore always sum exactly to the original amount.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Money;
use crate::error::{MoneyError, MoneyResult};

impl Money {
    /// Splits the amount into `parts` near-equal parts.
    ///
    /// ```rust
    /// use coinage_core::types::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let total = Money::with_code(dec!(100), "USD").unwrap();
    /// let parts = total.allocate(3).unwrap();
    /// let amounts: Vec<_> = parts.iter().map(|m| m.amount()).collect();
    /// assert_eq!(amounts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    pub fn allocate(&self, parts: usize) -> MoneyResult<Vec<Money>> {
        self.allocate_by_ratios(&vec![Decimal::ONE; parts])
    }

    /// Splits the amount proportionally to `ratios`.
    ///
    /// Ratios need not sum to any particular value, but none may be negative
    /// and their total must be positive. An empty slice yields no parts.
    pub fn allocate_by_ratios(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Money>> {
        if ratios.is_empty() {
            return Ok(Vec::new());
        }
        if ratios.iter().any(|r| *r < Decimal::ZERO) {
            return Err(MoneyError::InvalidAllocation {
                reason: "ratios must not be negative".to_string(),
            });
        }

        let total_ratio = ratios
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
            .ok_or_else(|| MoneyError::overflow("allocation"))?;
        if total_ratio <= Decimal::ZERO {
            return Err(MoneyError::InvalidAllocation {
                reason: "ratios must sum to a positive total".to_string(),
            });
        }

        let digits = self.currency().decimal_digits();
        let unit = self.currency().minor_unit();
        let magnitude = self.amount().abs();

        let exact = ratios
            .iter()
            .map(|ratio| {
                magnitude
                    .checked_mul(*ratio)
                    .and_then(|scaled| scaled.checked_div(total_ratio))
                    .ok_or_else(|| MoneyError::overflow("allocation"))
            })
            .collect::<MoneyResult<Vec<Decimal>>>()?;

        let mut shares: Vec<Decimal> = exact
            .iter()
            .map(|share| share.round_dp_with_strategy(digits, RoundingStrategy::ToZero))
            .collect();

        let allocated: Decimal = shares.iter().copied().sum();
        let leftover_units = ((magnitude - allocated) / unit)
            .trunc()
            .to_usize()
            .unwrap_or(0);

        if leftover_units > 0 {
            // Stable sort: equal fractions keep their original order
            let mut order: Vec<usize> = (0..shares.len()).collect();
            order.sort_by(|&a, &b| (exact[b] - shares[b]).cmp(&(exact[a] - shares[a])));
            for &index in order.iter().take(leftover_units) {
                shares[index] += unit;
            }
        }

        let negative = self.is_negative();
        Ok(shares
            .into_iter()
            .map(|share| Money::new(if negative { -share } else { share }, self.currency()))
            .collect())
    }
}
