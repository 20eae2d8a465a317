//! Money calculation utilities using rust_decimal for precision
//!
//! All prices cross the wire as `f64` but every calculation runs on
//! `Decimal` and is rounded half-up to 2 decimal places before being
//! converted back.

use crate::ModelError;
use rust_decimal::prelude::*;

/// Rounding: 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Combo meals are sold at 85% of their summed constituent prices
/// (fixed 15% discount, not configurable).
const COMBO_PRICE_FACTOR: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

#[inline]
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Validate that a price is finite and non-negative
pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ModelError::InvalidPrice(price));
    }
    Ok(())
}

/// Unit price of a cart line: base price plus the selected modifier prices
pub fn unit_price(base_price: f64, modifier_prices: impl IntoIterator<Item = f64>) -> f64 {
    let sum = modifier_prices
        .into_iter()
        .fold(to_decimal(base_price), |acc, p| acc + to_decimal(p));
    round_money(sum).to_f64().unwrap_or_default()
}

/// Line total: unit price times quantity
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    let total = to_decimal(unit_price) * Decimal::from(quantity);
    round_money(total).to_f64().unwrap_or_default()
}

/// Cart total over (unit_price, quantity) pairs
pub fn cart_total(lines: impl IntoIterator<Item = (f64, i32)>) -> f64 {
    let total = lines
        .into_iter()
        .fold(Decimal::ZERO, |acc, (price, qty)| {
            acc + round_money(to_decimal(price) * Decimal::from(qty))
        });
    round_money(total).to_f64().unwrap_or_default()
}

/// Combo price: 85% of the summed constituent base prices
///
/// Requires at least 2 constituents; fewer is a validation precondition
/// failure, not a computed result.
pub fn combo_price(constituent_prices: &[f64]) -> Result<f64, ModelError> {
    if constituent_prices.len() < 2 {
        return Err(ModelError::ComboTooSmall(constituent_prices.len()));
    }
    for price in constituent_prices {
        validate_price(*price)?;
    }
    let sum = constituent_prices
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc + to_decimal(*p));
    Ok(round_money(sum * COMBO_PRICE_FACTOR)
        .to_f64()
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_adds_modifiers() {
        // $10.00 base + $2.50 modifier
        assert_eq!(unit_price(10.0, [2.5]), 12.5);
        assert_eq!(unit_price(10.0, []), 10.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(12.0, 2), 24.0);
        assert_eq!(line_total(0.10, 3), 0.30);
    }

    #[test]
    fn test_cart_total_spec_example() {
        // Item A ($12.00, qty 2) + item B ($10.00 + $2.50 modifier, qty 1)
        let lines = [(12.0, 2), (unit_price(10.0, [2.5]), 1)];
        assert_eq!(cart_total(lines), 36.50);
    }

    #[test]
    fn test_combo_price_spec_example() {
        // $12.00 + $10.00 at 85% = $18.70, exactly
        assert_eq!(combo_price(&[12.0, 10.0]).unwrap(), 18.70);
    }

    #[test]
    fn test_combo_price_rounds_half_up() {
        // 0.85 * (1.10 + 1.25) = 1.9975 -> 2.00
        assert_eq!(combo_price(&[1.10, 1.25]).unwrap(), 2.00);
    }

    #[test]
    fn test_combo_requires_two_items() {
        assert!(matches!(
            combo_price(&[12.0]),
            Err(ModelError::ComboTooSmall(1))
        ));
        assert!(matches!(
            combo_price(&[]),
            Err(ModelError::ComboTooSmall(0))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(combo_price(&[10.0, -1.0]).is_err());
    }

    #[test]
    fn test_float_artifacts_do_not_accumulate() {
        // 0.1 * 10 at f64 would drift; Decimal keeps it exact
        let lines = vec![(0.1, 1); 10];
        assert_eq!(cart_total(lines), 1.0);
    }
}
