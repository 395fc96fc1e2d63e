//! Trend classification for methane and milk metrics

use crate::domain::metrics::{
    metric_kind::{MetricKind, TrendDirection},
    sample::Series,
    values::PercentageChange,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction, size and verdict of a metric's change over a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendClassification {
    kind: MetricKind,
    magnitude: f64,
    direction: TrendDirection,
    is_favorable: bool,
}

impl TrendClassification {
    /// Classify a signed percentage change for `kind`
    ///
    /// Only a strictly positive change points up; zero reads as down.
    pub fn classify(change: PercentageChange, kind: MetricKind) -> Self {
        let direction = if change.is_increase() {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };

        Self {
            kind,
            magnitude: change.magnitude(),
            direction,
            is_favorable: direction == kind.favorable_direction(),
        }
    }

    /// Classify the first-to-last change of `kind` across a series
    pub fn from_series(series: &Series, kind: MetricKind) -> Self {
        Self::classify(series.percentage_change(kind), kind)
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Absolute change in percentage points
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn direction(&self) -> TrendDirection {
        self.direction
    }

    pub fn is_favorable(&self) -> bool {
        self.is_favorable
    }

    /// Dashboard label, e.g. "Methane emissions down by 9.1%"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrendClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} by {}%",
            self.kind.display_name(),
            self.direction,
            self.magnitude
        )
    }
}

/// Free-function form of [`TrendClassification::classify`]
pub fn classify_trend(change: PercentageChange, kind: MetricKind) -> TrendClassification {
    TrendClassification::classify(change, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn change(value: f64) -> PercentageChange {
        PercentageChange::try_new(value).unwrap()
    }

    #[test]
    fn test_methane_decline_is_favorable() {
        let trend = classify_trend(change(-9.1), MetricKind::Methane);
        assert!(trend.is_favorable());
        assert_eq!(trend.direction(), TrendDirection::Down);
        assert_eq!(trend.magnitude(), 9.1);
    }

    #[test]
    fn test_milk_decline_is_unfavorable() {
        let trend = classify_trend(change(-9.1), MetricKind::Milk);
        assert!(!trend.is_favorable());
        assert_eq!(trend.direction(), TrendDirection::Down);
    }

    #[rstest]
    #[case(MetricKind::Methane, 4.2, false)]
    #[case(MetricKind::Milk, 4.2, true)]
    #[case(MetricKind::Methane, 0.0, true)]
    #[case(MetricKind::Milk, 0.0, false)]
    fn test_favorability_table(
        #[case] kind: MetricKind,
        #[case] value: f64,
        #[case] favorable: bool,
    ) {
        assert_eq!(classify_trend(change(value), kind).is_favorable(), favorable);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            classify_trend(change(-9.1), MetricKind::Methane).label(),
            "Methane emissions down by 9.1%"
        );
        assert_eq!(
            classify_trend(change(9.6), MetricKind::Milk).label(),
            "Milk production up by 9.6%"
        );
        assert_eq!(
            classify_trend(PercentageChange::none(), MetricKind::Milk).label(),
            "Milk production down by 0%"
        );
    }
}
