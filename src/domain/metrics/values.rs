//! Domain value types for herd metrics calculations
//!
//! Provides validated types for daily rates, feed efficiency and percentage
//! change. Rates are bounded so every derived ratio stays finite.

use crate::domain::metrics::{constants, errors::MetricsError};
use nutype::nutype;

/// Daily milk yield in litres
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1000.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct MilkYield(f64);

/// Daily feed intake in kilograms
///
/// Zero intake is unrepresentable, which keeps `milk / feed` defined for
/// every constructed cow.
#[nutype(
    validate(finite, greater_or_equal = 0.01, less_or_equal = 1000.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct FeedIntake(f64);

/// Feed conversion ratio: litres of milk per kilogram of feed
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Efficiency(f64);

impl Efficiency {
    /// Efficiency from validated daily rates. Always defined.
    pub fn from_yield_and_intake(milk_yield: MilkYield, feed_intake: FeedIntake) -> Self {
        let ratio = milk_yield.into_inner() / feed_intake.into_inner();
        Self::try_new(ratio).expect("bounded rates always give a finite, non-negative ratio")
    }

    /// Efficiency from raw daily rates
    ///
    /// Fails with [`MetricsError::DivisionByZero`] when `feed_intake` is zero.
    pub fn from_rates(milk_yield: f64, feed_intake: f64) -> Result<Self, MetricsError> {
        if feed_intake == 0.0 {
            return Err(MetricsError::DivisionByZero);
        }
        let ratio = milk_yield / feed_intake;
        Self::try_new(ratio).map_err(|_| MetricsError::invalid("efficiency", ratio))
    }

    /// Strictly below the low-efficiency threshold; the threshold itself is safe
    pub fn is_below_threshold(&self) -> bool {
        self.into_inner() < constants::efficiency::LOW_EFFICIENCY_THRESHOLD
    }
}

/// Signed change between two values, in percentage points, rounded to one decimal
#[nutype(
    validate(finite),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        PartialOrd,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct PercentageChange(f64);

impl PercentageChange {
    /// No change (0%)
    pub fn none() -> Self {
        Self::try_new(0.0).unwrap()
    }

    /// Relative change from `first` to `last`
    ///
    /// A zero baseline has no defined relative change and yields 0%.
    pub fn between(first: f64, last: f64) -> Self {
        if first == 0.0 {
            return Self::none();
        }
        let raw = (last - first) / first * constants::calculation::PERCENT_MULTIPLIER;
        Self::rounded(raw)
    }

    /// Round to one decimal place, half away from zero
    pub fn rounded(raw: f64) -> Self {
        let scale = constants::calculation::ONE_DECIMAL_SCALE;
        let rounded = (raw * scale).round() / scale;
        // -0.0 reads as "down by 0%"
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        Self::try_new(rounded).unwrap_or_else(|_| Self::none())
    }

    /// Absolute size of the change in percentage points
    pub fn magnitude(&self) -> f64 {
        self.into_inner().abs()
    }

    /// Strictly positive change
    pub fn is_increase(&self) -> bool {
        self.into_inner() > 0.0
    }
}

impl Default for PercentageChange {
    fn default() -> Self {
        Self::none()
    }
}
