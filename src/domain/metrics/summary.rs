//! Herd summary feeding the dashboard cards

use crate::domain::{
    herd::Cow,
    metrics::{
        metric_kind::MetricKind, ranking::EfficiencyRanking, sample::Series,
        trend::TrendClassification, values::Efficiency,
    },
};
use serde::{Deserialize, Serialize};

/// Mean efficiency of the herd, `None` when the herd is empty
pub fn average_efficiency(herd: &[Cow]) -> Option<Efficiency> {
    if herd.is_empty() {
        return None;
    }
    let total: f64 = herd.iter().map(|cow| cow.efficiency().into_inner()).sum();
    Efficiency::try_new(total / herd.len() as f64).ok()
}

/// Everything the dashboard derives from a herd and a reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HerdSummary {
    ranking: EfficiencyRanking,
    average_efficiency: Option<Efficiency>,
    below_threshold_count: usize,
    methane_trend: TrendClassification,
    milk_trend: TrendClassification,
}

impl HerdSummary {
    pub fn build(herd: &[Cow], series: &Series) -> Self {
        let ranking = EfficiencyRanking::from_herd(herd);
        let below_threshold_count = ranking.below_threshold().count();

        Self {
            average_efficiency: average_efficiency(herd),
            below_threshold_count,
            methane_trend: TrendClassification::from_series(series, MetricKind::Methane),
            milk_trend: TrendClassification::from_series(series, MetricKind::Milk),
            ranking,
        }
    }

    pub fn ranking(&self) -> &EfficiencyRanking {
        &self.ranking
    }

    pub fn average_efficiency(&self) -> Option<Efficiency> {
        self.average_efficiency
    }

    pub fn below_threshold_count(&self) -> usize {
        self.below_threshold_count
    }

    pub fn methane_trend(&self) -> &TrendClassification {
        &self.methane_trend
    }

    pub fn milk_trend(&self) -> &TrendClassification {
        &self.milk_trend
    }

    pub fn trend(&self, kind: MetricKind) -> &TrendClassification {
        match kind {
            MetricKind::Methane => &self.methane_trend,
            MetricKind::Milk => &self.milk_trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::demo_data::{demo_herd, weekly_methane_milk_series};

    #[test]
    fn test_average_efficiency_of_demo_herd() {
        let average = average_efficiency(&demo_herd()).unwrap();
        let expected = (25.0 / 45.0 + 30.0 / 50.0 + 20.0 / 42.0) / 3.0;
        assert!((average.into_inner() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_average_of_empty_herd() {
        assert!(average_efficiency(&[]).is_none());
    }

    #[test]
    fn test_summary_of_demo_data() {
        let summary = HerdSummary::build(&demo_herd(), &weekly_methane_milk_series());

        let order: Vec<_> = summary
            .ranking()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(order, vec!["Daisy", "Bessie", "Molly"]);
        assert_eq!(summary.below_threshold_count(), 2);

        assert_eq!(summary.methane_trend().label(), "Methane emissions down by 9.1%");
        assert!(summary.trend(MetricKind::Methane).is_favorable());
        assert_eq!(summary.milk_trend().label(), "Milk production up by 9.6%");
        assert!(summary.trend(MetricKind::Milk).is_favorable());
    }
}
