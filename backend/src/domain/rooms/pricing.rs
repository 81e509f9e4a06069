//! Seasonal pricing strategies.
//!
//! A strategy is a plain function of the base price. The season key picks
//! one from a closed table; unrecognised keys fall back to the low season.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested stay window. Carried verbatim and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayDates {
    /// Arrival date as supplied by the caller.
    pub check_in: String,
    /// Departure date as supplied by the caller.
    pub check_out: String,
}

/// Pricing season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Base price unchanged.
    Low,
    /// 30% surcharge.
    High,
    /// 60% surcharge.
    Peak,
}

impl Season {
    /// Wire key for this season.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::Peak => "peak",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(base price, stay dates) -> nightly price`.
pub type PricingStrategy = fn(f64, Option<&StayDates>) -> f64;

const fn low_season_price(base_price: f64, _dates: Option<&StayDates>) -> f64 {
    base_price
}

#[expect(
    clippy::float_arithmetic,
    reason = "prices are plain IEEE-754 products of the base price"
)]
fn high_season_price(base_price: f64, _dates: Option<&StayDates>) -> f64 {
    base_price * 1.3
}

#[expect(
    clippy::float_arithmetic,
    reason = "prices are plain IEEE-754 products of the base price"
)]
fn peak_season_price(base_price: f64, _dates: Option<&StayDates>) -> f64 {
    base_price * 1.6
}

const SEASON_TABLE: [(Season, PricingStrategy); 3] = [
    (Season::Low, low_season_price),
    (Season::High, high_season_price),
    (Season::Peak, peak_season_price),
];

/// Look up the strategy for `key`, falling back to the low season.
///
/// Keys match exactly; `"HIGH"` resolves to the low season.
///
/// # Examples
/// ```
/// use hotel_rooms::domain::{resolve_strategy, Season};
///
/// let (season, price) = resolve_strategy("peak");
/// assert_eq!(season, Season::Peak);
/// assert_eq!(price(100.0, None), 100.0 * 1.6);
///
/// let (fallback, _) = resolve_strategy("winter");
/// assert_eq!(fallback, Season::Low);
/// ```
#[must_use]
pub fn resolve_strategy(key: &str) -> (Season, PricingStrategy) {
    SEASON_TABLE
        .into_iter()
        .find(|(season, _)| season.as_str() == key)
        .unwrap_or((Season::Low, low_season_price))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("low", Season::Low, 100.0)]
    #[case("high", Season::High, 100.0 * 1.3)]
    #[case("peak", Season::Peak, 100.0 * 1.6)]
    #[case("winter", Season::Low, 100.0)]
    #[case("HIGH", Season::Low, 100.0)]
    #[case("", Season::Low, 100.0)]
    fn resolves_season_and_price(
        #[case] key: &str,
        #[case] expected_season: Season,
        #[case] expected_price: f64,
    ) {
        let (season, strategy) = resolve_strategy(key);
        assert_eq!(season, expected_season);
        assert_eq!(strategy(100.0, None).to_bits(), expected_price.to_bits());
    }

    #[rstest]
    fn dates_do_not_change_the_price() {
        let dates = StayDates {
            check_in: "2026-07-01".to_owned(),
            check_out: "not-a-date".to_owned(),
        };
        let (_, strategy) = resolve_strategy("high");
        assert_eq!(
            strategy(80.0, Some(&dates)).to_bits(),
            strategy(80.0, None).to_bits()
        );
    }

    #[rstest]
    fn seeded_suite_peak_price_matches_double_product() {
        let (_, strategy) = resolve_strategy("peak");
        assert_eq!(strategy(200.0, None).to_bits(), (200.0_f64 * 1.6).to_bits());
    }
}
