//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Market prices are stored as `u64` scaled by 10^8 so that rankings compare
//! integers instead of floats. Feed messages carry prices as JSON numbers;
//! they are converted once, at the ingestion boundary, with `rust_decimal`.
//!
//! ## Sentinel
//!
//! A buy price of zero on the feed means "not for sale here". Such quotes are
//! stored with [`UNAVAILABLE`] as their buy price, which sorts after every real
//! price in an ascending supply ranking.
//!
//! ## Examples
//!
//! ```
//! use galaxy_market::types::price::{credits, from_fixed_trimmed, to_fixed};
//!
//! assert_eq!(to_fixed("2845.5"), Some(284_550_000_000));
//! assert_eq!(credits(10), 1_000_000_000);
//! assert_eq!(from_fixed_trimmed(credits(10)), "10");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point arithmetic: 10^8
pub const SCALE: u64 = 100_000_000;

/// Buy price recorded for quotes that are not for sale at their station.
pub const UNAVAILABLE: u64 = u64::MAX;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point u64
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If parsing fails or value is out of range
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a feed price (JSON number) to fixed-point u64
///
/// Negative, NaN and infinite inputs are rejected.
///
/// ```
/// use galaxy_market::types::price::from_f64;
///
/// assert_eq!(from_f64(0.5), Some(50_000_000));
/// assert_eq!(from_f64(-1.0), None);
/// assert_eq!(from_f64(f64::NAN), None);
/// ```
pub fn from_f64(value: f64) -> Option<u64> {
    if !value.is_finite() {
        return None;
    }
    let decimal = Decimal::from_f64(value)?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to fixed-point u64
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If value is negative or out of range
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_zero() {
        return Some(0);
    }
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Whole credits as a fixed-point price (saturating)
#[inline]
pub fn credits(whole: u64) -> u64 {
    whole.saturating_mul(SCALE)
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a human-readable string (trimmed trailing zeros)
///
/// # Example
///
/// ```
/// use galaxy_market::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{}", decimal.normalize())
}

/// Whether a buy price is a real price rather than [`UNAVAILABLE`]
#[inline]
pub fn is_available(price: u64) -> bool {
    price != UNAVAILABLE
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1.0"), Some(100_000_000));
        assert_eq!(to_fixed("1"), Some(100_000_000));
        assert_eq!(to_fixed("0.5"), Some(50_000_000));
        assert_eq!(to_fixed("0.00000001"), Some(1));
    }

    #[test]
    fn test_to_fixed_edge_cases() {
        assert_eq!(to_fixed("0"), Some(0));
        assert_eq!(to_fixed("-1.0"), None);
        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
    }

    #[test]
    fn test_from_f64_feed_prices() {
        assert_eq!(from_f64(0.0), Some(0));
        assert_eq!(from_f64(2845.0), Some(credits(2845)));
        assert_eq!(from_f64(12.25), Some(1_225_000_000));
        assert_eq!(from_f64(f64::INFINITY), None);
        assert_eq!(from_f64(-0.5), None);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(from_f64(-0.0), Some(0));
    }

    #[test]
    fn test_credits_saturates() {
        assert_eq!(credits(0), 0);
        assert_eq!(credits(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_unavailable_sorts_last() {
        assert!(!is_available(UNAVAILABLE));
        assert!(is_available(0));
        assert!(credits(1_000_000_000) < UNAVAILABLE);
    }

    #[test]
    fn test_from_fixed_trimmed() {
        assert_eq!(from_fixed_trimmed(credits(2845)), "2845");
        assert_eq!(from_fixed_trimmed(123_456_789), "1.23456789");
        assert_eq!(from_fixed_trimmed(0), "0");
    }
}
