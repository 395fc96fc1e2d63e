//! Efficiency ranking of a herd

use crate::domain::{
    herd::{Cow, CowName},
    metrics::values::Efficiency,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    name: CowName,
    efficiency: Efficiency,
    below_threshold: bool,
}

impl RankedEntry {
    pub fn new(name: CowName, efficiency: Efficiency) -> Self {
        Self {
            name,
            below_threshold: efficiency.is_below_threshold(),
            efficiency,
        }
    }

    pub fn name(&self) -> &CowName {
        &self.name
    }

    pub fn efficiency(&self) -> Efficiency {
        self.efficiency
    }

    /// Highlighted on the dashboard when true
    pub fn below_threshold(&self) -> bool {
        self.below_threshold
    }
}

/// Cows ordered by efficiency, best first; ties keep herd order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EfficiencyRanking {
    entries: Vec<RankedEntry>,
}

impl EfficiencyRanking {
    pub fn from_herd<'a, I>(herd: I) -> Self
    where
        I: IntoIterator<Item = &'a Cow>,
    {
        Self::from_entries(
            herd.into_iter()
                .map(|cow| RankedEntry::new(cow.name().clone(), cow.efficiency()))
                .collect(),
        )
    }

    /// Rank pre-computed entries
    pub fn from_entries(mut entries: Vec<RankedEntry>) -> Self {
        // sort_by is stable
        entries.sort_by(|a, b| {
            b.efficiency
                .partial_cmp(&a.efficiency)
                .unwrap_or(Ordering::Equal)
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn below_threshold(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter().filter(|entry| entry.below_threshold)
    }
}

/// Free-function form of [`EfficiencyRanking::from_herd`]
pub fn rank_by_efficiency(herd: &[Cow]) -> EfficiencyRanking {
    EfficiencyRanking::from_herd(herd)
}
