//! Property-based tests for money values.
//!
//! - Rounding at construction
//! - Same-currency arithmetic and cross-currency rejection
//! - Format/parse round trip
//! - Exchange round trip
//! - Allocation sum invariant

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::MoneyError;
use crate::locale::NumberFormat;
use crate::types::{Currency, ExchangeRate, Money};

/// Strategy picking any catalog currency.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::all().collect::<Vec<_>>())
}

/// Strategy for two distinct catalog currencies.
fn distinct_currencies() -> impl Strategy<Value = (Currency, Currency)> {
    (any_currency(), any_currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy for signed decimals with up to 6 decimal places.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for non-negative amounts in minor units.
fn minor_units() -> impl Strategy<Value = i64> {
    0i64..10_000_000_000i64
}

/// Strategy for exchange rates (0.01 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (100i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Rounding
    // =========================================================================

    /// The stored amount is the input rounded half away from zero, at
    /// exactly the currency's scale.
    #[test]
    fn prop_construction_rounds_to_currency_digits(
        currency in any_currency(),
        amount in any_amount(),
    ) {
        let money = Money::new(amount, currency);
        let expected = amount.round_dp_with_strategy(
            currency.decimal_digits(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        prop_assert_eq!(money.amount(), expected);
        prop_assert_eq!(money.amount().scale(), currency.decimal_digits());
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// a + b - b == a for amounts in the same currency.
    #[test]
    fn prop_add_then_subtract_is_identity(
        currency in any_currency(),
        a in any_amount(),
        b in any_amount(),
    ) {
        let a = Money::new(a, currency);
        let b = Money::new(b, currency);
        let sum = a.try_add(&b).unwrap();
        prop_assert_eq!(sum.currency(), currency);
        prop_assert_eq!(sum.try_sub(&b).unwrap(), a);
    }

    /// Mixing currencies fails for arithmetic and is plain inequality for `==`.
    #[test]
    fn prop_cross_currency_operations_fail(
        (first, second) in distinct_currencies(),
        amount in any_amount(),
    ) {
        let a = Money::new(amount, first);
        let b = Money::new(amount, second);
        let expected = MoneyError::mismatch(first.code(), second.code());
        prop_assert_eq!(a.try_add(&b), Err(expected.clone()));
        prop_assert_eq!(a.try_cmp(&b), Err(expected));
        prop_assert!(a != b);
        prop_assert!(a.partial_cmp(&b).is_none());
    }

    // =========================================================================
    // Text round trip
    // =========================================================================

    /// Parsing the international format gives back the same value.
    #[test]
    fn prop_international_format_parses_back(
        currency in any_currency(),
        units in minor_units(),
    ) {
        let money = Money::new(Decimal::new(units, currency.decimal_digits()), currency);
        let text = money.format("I", &NumberFormat::invariant()).unwrap();
        prop_assert_eq!(Money::parse(&text).unwrap(), money, "text was {}", text);
    }

    // =========================================================================
    // Exchange
    // =========================================================================

    /// Converting there and back loses at most the rounding of each leg.
    #[test]
    fn prop_exchange_round_trip(
        (base, quote) in distinct_currencies(),
        units in minor_units(),
        rate in positive_rate(),
    ) {
        let exchange = ExchangeRate::new(base, quote, rate).unwrap();
        let original = Money::new(Decimal::new(units, base.decimal_digits()), base);

        let there = exchange.convert(&original).unwrap();
        prop_assert_eq!(there.currency(), quote);
        let back = exchange.convert(&there).unwrap();
        prop_assert_eq!(back.currency(), base);

        let tolerance = quote.minor_unit() * rate + base.minor_unit();
        let drift = (back.amount() - original.amount()).abs();
        prop_assert!(drift <= tolerance, "drift {} exceeds {}", drift, tolerance);
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Parts always sum to the original and differ by at most one minor unit.
    #[test]
    fn prop_allocation_sums_to_total(
        currency in any_currency(),
        amount in any_amount(),
        parts in 1usize..50,
    ) {
        let total = Money::new(amount, currency);
        let shares = total.allocate(parts).unwrap();
        prop_assert_eq!(shares.len(), parts);

        let sum = shares
            .iter()
            .try_fold(Money::zero(currency), |acc, share| acc.try_add(share))
            .unwrap();
        prop_assert_eq!(sum, total);

        let largest = shares.iter().map(|s| s.amount().abs()).max().unwrap();
        let smallest = shares.iter().map(|s| s.amount().abs()).min().unwrap();
        prop_assert!(largest - smallest <= currency.minor_unit());
    }

    /// Ratio allocation never loses or invents minor units.
    #[test]
    fn prop_ratio_allocation_sums_to_total(
        currency in any_currency(),
        amount in any_amount(),
        ratios in prop::collection::vec(0u32..100, 1..10),
    ) {
        prop_assume!(ratios.iter().any(|r| *r > 0));
        let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();

        let total = Money::new(amount, currency);
        let shares = total.allocate_by_ratios(&ratios).unwrap();
        let sum = shares
            .iter()
            .try_fold(Money::zero(currency), |acc, share| acc.try_add(share))
            .unwrap();
        prop_assert_eq!(sum, total);
    }
}
