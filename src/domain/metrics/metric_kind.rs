//! Metric kinds tracked over a reporting window

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Which side of a change counts as good news
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
}

/// A metric recorded in every [`Sample`](super::sample::Sample)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[display("methane")]
    Methane,
    #[display("milk")]
    Milk,
}

impl MetricKind {
    /// Direction of change that is desirable for this metric
    ///
    /// Lower emissions and higher yield are both wins. New kinds must be
    /// added here explicitly.
    pub fn favorable_direction(self) -> TrendDirection {
        match self {
            Self::Methane => TrendDirection::Down,
            Self::Milk => TrendDirection::Up,
        }
    }

    /// Human-readable name used in trend labels
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Methane => "Methane emissions",
            Self::Milk => "Milk production",
        }
    }

    /// Every tracked metric, in dashboard order
    pub fn all() -> [Self; 2] {
        [Self::Methane, Self::Milk]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorable_directions() {
        assert_eq!(MetricKind::Methane.favorable_direction(), TrendDirection::Down);
        assert_eq!(MetricKind::Milk.favorable_direction(), TrendDirection::Up);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&MetricKind::Methane).unwrap(), "\"methane\"");
        assert_eq!(
            serde_json::from_str::<MetricKind>("\"milk\"").unwrap(),
            MetricKind::Milk
        );
        assert_eq!(serde_json::to_string(&TrendDirection::Up).unwrap(), "\"up\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(MetricKind::Milk.to_string(), "milk");
        assert_eq!(TrendDirection::Down.to_string(), "down");
    }
}
