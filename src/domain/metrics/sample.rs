//! Dated methane/milk samples and the series they form

use crate::domain::metrics::{
    constants, metric_kind::MetricKind, values::PercentageChange,
};
use chrono::NaiveDate;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Methane emissions in kg/day/cow
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
pub struct MethaneReading(f64);

/// Milk production in kg/day/cow
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
pub struct MilkReading(f64);

/// One dated observation of both tracked metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    date: NaiveDate,
    methane: MethaneReading,
    milk: MilkReading,
}

impl Sample {
    pub fn new(date: NaiveDate, methane: MethaneReading, milk: MilkReading) -> Self {
        Self {
            date,
            methane,
            milk,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn methane(&self) -> MethaneReading {
        self.methane
    }

    pub fn milk(&self) -> MilkReading {
        self.milk
    }

    /// Raw value of the requested metric
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Methane => self.methane.into_inner(),
            MetricKind::Milk => self.milk.into_inner(),
        }
    }
}

/// Samples of a reporting window, ascending by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series; samples are stably sorted by date
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(Sample::date);
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Change of `kind` between the first and last sample
    ///
    /// Fewer than two samples, or a zero first value, yield 0%.
    pub fn percentage_change(&self, kind: MetricKind) -> PercentageChange {
        if self.samples.len() < constants::calculation::MIN_SAMPLES_FOR_CHANGE {
            return PercentageChange::none();
        }
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => PercentageChange::between(first.value(kind), last.value(kind)),
            _ => PercentageChange::none(),
        }
    }
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Self::from_samples(samples)
    }
}

impl From<Series> for Vec<Sample> {
    fn from(series: Series) -> Self {
        series.samples
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}

/// Free-function form of [`Series::percentage_change`]
pub fn percentage_change(series: &Series, kind: MetricKind) -> PercentageChange {
    series.percentage_change(kind)
}
