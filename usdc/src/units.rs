//! Conversions between base-unit integers and decimal strings.

use alloy_primitives::U256;

use crate::error::Error;

/// Format `value` as a decimal number with `decimals` fractional digits.
///
/// Trailing fractional zeros are dropped, as is the decimal point when the
/// fraction is zero: `1_500_000` with 6 decimals is `"1.5"`, `2_000_000` is `"2"`.
#[must_use]
pub fn format_units(value: U256, decimals: u8) -> String {
    let scale = U256::from(10u8).pow(U256::from(decimals));
    let (integer, fraction) = value.div_rem(scale);
    if fraction.is_zero() {
        return integer.to_string();
    }
    let digits = fraction.to_string();
    let padded = format!("{digits:0>width$}", width = usize::from(decimals));
    format!("{integer}.{}", padded.trim_end_matches('0'))
}

/// Parse a base-unit token amount written in decimal digits.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] for empty input, anything other than ASCII
/// digits (signs, hex prefixes, decimal points), or values above `2^256 - 1`.
pub fn parse_amount(input: &str) -> Result<U256, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAmount(input.to_owned()));
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| Error::InvalidAmount(input.to_owned()))
}
