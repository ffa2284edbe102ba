//! Document pricing and numbering.
//!
//! A line item's estimated price is `quantity × weight × price_per_kilogram`; a document's
//! shipping fee is the sum of its line prices, accumulated in line order.

use crate::config::settings::DEFAULT_PRICE_PER_KILOGRAM;
use rand::Rng;
use std::ops::RangeInclusive;

/// Prefix of every generated document number.
pub const DOCUMENT_NUMBER_PREFIX: &str = "DOC";

/// Range of the numeric suffix of generated document numbers (always nine digits).
pub const DOCUMENT_NUMBER_RANGE: RangeInclusive<u32> = 100_000_000..=999_999_999;

/// Per-kilogram pricing used for document line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    /// Price charged per kilogram of goods
    pub price_per_kilogram: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_PER_KILOGRAM)
    }
}

impl Pricing {
    /// Creates pricing for the given per-kilogram price.
    #[must_use]
    pub const fn new(price_per_kilogram: f64) -> Self {
        Self { price_per_kilogram }
    }

    /// Estimated price of one line: `quantity × weight × price_per_kilogram`.
    #[must_use]
    pub fn line_estimate(&self, quantity: i32, weight: f64) -> f64 {
        f64::from(quantity) * weight * self.price_per_kilogram
    }

    /// Prices every `(quantity, weight)` line and returns the line prices with their sum.
    #[must_use]
    pub fn price_lines<I>(&self, lines: I) -> (Vec<f64>, f64)
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut total = 0.0;
        let prices = lines
            .into_iter()
            .map(|(quantity, weight)| {
                let price = self.line_estimate(quantity, weight);
                total += price;
                price
            })
            .collect();
        (prices, total)
    }
}

/// Generates a document number: `DOC` followed by a random nine-digit integer.
#[must_use]
pub fn generate_document_number() -> String {
    let suffix = rand::thread_rng().gen_range(DOCUMENT_NUMBER_RANGE);
    format!("{DOCUMENT_NUMBER_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_line_estimate_matches_reference_case() {
        let pricing = Pricing::new(7000.0);
        assert_eq!(pricing.line_estimate(2, 1.4), 19600.0);
        assert_eq!(pricing.line_estimate(0, 3.0), 0.0);
    }

    #[test]
    fn test_price_lines_sums_in_order() {
        let pricing = Pricing::new(7000.0);
        let (prices, total) = pricing.price_lines([(2, 1.4), (4, 0.3)]);

        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0], pricing.line_estimate(2, 1.4));
        assert_eq!(prices[1], pricing.line_estimate(4, 0.3));
        assert_eq!(total, prices[0] + prices[1]);
        assert!((total - 28000.0).abs() < 1e-6);
    }

    #[test]
    fn test_price_lines_empty_is_zero() {
        let (prices, total) = Pricing::default().price_lines(std::iter::empty());
        assert!(prices.is_empty());
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_document_number_format() {
        for _ in 0..1000 {
            let number = generate_document_number();
            let digits = number.strip_prefix(DOCUMENT_NUMBER_PREFIX).unwrap_or_default();

            assert_eq!(digits.len(), 9, "bad document number {number}");
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            let value: u32 = digits.parse().unwrap_or_default();
            assert!(DOCUMENT_NUMBER_RANGE.contains(&value));
        }
    }
}
