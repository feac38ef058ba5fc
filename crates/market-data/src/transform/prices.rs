//! Closing prices and the metrics derived from them.
//!
//! The provider has no real-time quote, so "current" is the latest adjusted
//! close and the daily move is measured against the close before it.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{Result, StockDataError};
use crate::models::RawStockRow;

/// Round to two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a value as a fixed two-decimal string.
pub fn fixed2(value: Decimal) -> String {
    let mut rounded = round2(value);
    rounded.rescale(2);
    rounded.to_string()
}

/// Adjusted close of the most recent row.
pub fn current_closing_price(series: &[RawStockRow]) -> Result<Decimal> {
    series
        .last()
        .map(RawStockRow::adjusted_close)
        .ok_or(StockDataError::EmptySeries)
}

/// Adjusted close of the row before the most recent one.
pub fn previous_closing_price(series: &[RawStockRow]) -> Result<Decimal> {
    if series.len() < 2 {
        return Err(StockDataError::InsufficientData {
            required: 2,
            available: series.len(),
        });
    }
    Ok(series[series.len() - 2].adjusted_close())
}

/// Latest close minus previous close, rounded to cents.
///
/// Any series shorter than two rows is `InsufficientData`, including an empty one.
pub fn current_price_change(series: &[RawStockRow]) -> Result<Decimal> {
    let previous = previous_closing_price(series)?;
    let current = current_closing_price(series)?;
    price_change_between(current, previous)
}

/// Daily move as a percentage of the previous close, rounded to two places.
///
/// The percentage is taken from the already rounded price change, not the raw
/// difference, so both tile values agree.
pub fn daily_percent_change(series: &[RawStockRow]) -> Result<Decimal> {
    let price_change = current_price_change(series)?;
    let previous = previous_closing_price(series)?;
    percent_change_from(price_change, previous)
}

pub(crate) fn price_change_between(current: Decimal, previous: Decimal) -> Result<Decimal> {
    current.checked_sub(previous).map(round2).ok_or_else(|| {
        StockDataError::ArithmeticOverflow(format!("{} - {}", current, previous))
    })
}

pub(crate) fn percent_change_from(price_change: Decimal, previous: Decimal) -> Result<Decimal> {
    if previous.is_zero() {
        return Err(StockDataError::DivisionByZero);
    }
    price_change
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round2)
        .ok_or_else(|| {
            StockDataError::ArithmeticOverflow(format!(
                "{} / {} * 100",
                price_change, previous
            ))
        })
}
