//! Price normalization.
//!
//! Prices are kept with exactly two fractional digits. Input carrying more
//! precision is rounded half away from zero (`2.345` -> `2.35`,
//! `9.999` -> `10.00`) before the range check, so the checked value is the
//! value that gets stored.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Smallest storable price, `0.01`.
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest value a `NUMERIC(10,2)` column holds, `99999999.99`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    Missing,
    InvalidDecimal,
    NotPositive,
    TooLarge,
}

impl PriceError {
    pub fn code(self) -> &'static str {
        match self {
            PriceError::Missing => "required",
            PriceError::InvalidDecimal => "invalid_decimal",
            PriceError::NotPositive | PriceError::TooLarge => "out_of_range",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PriceError::Missing => "Price is required.",
            PriceError::InvalidDecimal => "Price must be a valid decimal number.",
            PriceError::NotPositive => "Price must be positive.",
            PriceError::TooLarge => "Price must not exceed 99999999.99.",
        }
    }
}

pub fn parse_price(raw: &str) -> Result<Decimal, PriceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PriceError::Missing);
    }

    let value = Decimal::from_str(raw).map_err(|_| unparsed(raw))?;
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded < MIN_PRICE {
        return Err(PriceError::NotPositive);
    }
    if rounded > MAX_PRICE {
        return Err(PriceError::TooLarge);
    }

    rounded.rescale(2);
    Ok(rounded)
}

/// Classifies input that `Decimal` refused: a well-formed number can only have
/// failed by carrying more digits than 96 bits hold.
fn unparsed(raw: &str) -> PriceError {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let well_formed = !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());

    match (well_formed, negative) {
        (false, _) => PriceError::InvalidDecimal,
        (true, true) => PriceError::NotPositive,
        (true, false) => PriceError::TooLarge,
    }
}
