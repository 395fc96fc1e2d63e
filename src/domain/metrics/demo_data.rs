//! Demo data for the dashboard
//!
//! Random series come from a seedable generator so anything built on them
//! is reproducible. The fixed herd and weekly series are the dashboard's
//! showcase data.

use crate::domain::{
    herd::{AgeYears, Cow, CowId, CowName, LactationStage, WeightKg},
    metrics::{
        constants::demo_generation::{methane, milk, MAX_DAYS},
        errors::MetricsError,
        sample::{MethaneReading, MilkReading, Sample, Series},
        values::{FeedIntake, MilkYield},
    },
};
use chrono::{Days, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generates a drifting methane/milk series: methane falls, milk rises
#[derive(Debug, Clone)]
pub struct DemoSeriesGenerator<R: Rng> {
    rng: R,
}

impl DemoSeriesGenerator<StdRng> {
    /// Deterministic generator; the same seed always yields the same series
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DemoSeriesGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// One sample per day for `days` days starting at `start`
    ///
    /// Emitted values are truncated to whole numbers. Windows longer than
    /// [`MAX_DAYS`] are rejected.
    pub fn generate(&mut self, start: NaiveDate, days: u32) -> Result<Series, MetricsError> {
        if days > MAX_DAYS {
            return Err(MetricsError::WindowTooLong {
                days,
                max: MAX_DAYS,
            });
        }

        let mut methane_level = methane::START;
        let mut milk_level = milk::START;
        let mut samples = Vec::with_capacity(days as usize);

        for offset in 0..days {
            let Some(date) = start.checked_add_days(Days::new(u64::from(offset))) else {
                break;
            };

            methane_level = (methane_level
                - self.rng.random_range(0.0..methane::MAX_DAILY_REDUCTION))
            .max(methane::FLOOR);
            milk_level = (milk_level + self.rng.random_range(0.0..milk::MAX_DAILY_INCREASE))
                .min(milk::CAP);

            let methane_value = methane_level.floor();
            let milk_value = milk_level.floor();
            samples.push(Sample::new(
                date,
                MethaneReading::try_new(methane_value)
                    .map_err(|_| MetricsError::invalid("methane", methane_value))?,
                MilkReading::try_new(milk_value)
                    .map_err(|_| MetricsError::invalid("milk", milk_value))?,
            ));
        }

        Ok(Series::from_samples(samples))
    }
}

struct DemoCow {
    id: &'static str,
    name: &'static str,
    age: u8,
    weight: f64,
    stage: LactationStage,
    milk_yield: f64,
    feed_intake: f64,
}

const DEMO_HERD: [DemoCow; 3] = [
    DemoCow {
        id: "cow1",
        name: "Bessie",
        age: 3,
        weight: 257.0,
        stage: LactationStage::Mid,
        milk_yield: 25.0,
        feed_intake: 45.0,
    },
    DemoCow {
        id: "cow2",
        name: "Daisy",
        age: 2,
        weight: 300.0,
        stage: LactationStage::Early,
        milk_yield: 30.0,
        feed_intake: 50.0,
    },
    DemoCow {
        id: "cow3",
        name: "Molly",
        age: 2,
        weight: 337.0,
        stage: LactationStage::Late,
        milk_yield: 20.0,
        feed_intake: 42.0,
    },
];

/// The three-cow showcase herd
pub fn demo_herd() -> Vec<Cow> {
    DEMO_HERD
        .iter()
        .map(|cow| {
            Cow::builder(
                CowId::try_new(cow.id).unwrap(),
                CowName::try_new(cow.name).unwrap(),
            )
            .age(AgeYears::try_new(cow.age).unwrap())
            .weight(WeightKg::try_new(cow.weight).unwrap())
            .lactation_stage(cow.stage)
            .daily_rates(
                MilkYield::try_new(cow.milk_yield).unwrap(),
                FeedIntake::try_new(cow.feed_intake).unwrap(),
            )
            .build()
            .unwrap()
        })
        .collect()
}

/// (date, methane, milk) for September 2024, one row per week
const WEEKLY_SAMPLES: [(&str, f64, f64); 5] = [
    ("2024-09-02", 28.5, 29.2),
    ("2024-09-09", 27.8, 30.1),
    ("2024-09-16", 27.2, 30.8),
    ("2024-09-23", 26.5, 31.4),
    ("2024-09-30", 25.9, 32.0),
];

/// Weekly methane vs. milk series shown on the trends chart
pub fn weekly_methane_milk_series() -> Series {
    WEEKLY_SAMPLES
        .iter()
        .map(|(date, methane, milk)| {
            Sample::new(
                date.parse().unwrap(),
                MethaneReading::try_new(*methane).unwrap(),
                MilkReading::try_new(*milk).unwrap(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::metric_kind::MetricKind;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = DemoSeriesGenerator::seeded(7).generate(start(), 30).unwrap();
        let b = DemoSeriesGenerator::seeded(7).generate(start(), 30).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
    }

    #[test]
    fn test_generated_values_stay_in_bounds() {
        let series = DemoSeriesGenerator::seeded(99).generate(start(), 120).unwrap();
        for sample in series.iter() {
            let methane = sample.methane().into_inner();
            let milk = sample.milk().into_inner();
            assert!((methane::FLOOR..=methane::START).contains(&methane));
            assert!((milk::START..=milk::CAP).contains(&milk));
            assert_eq!(methane.fract(), 0.0);
            assert_eq!(milk.fract(), 0.0);
        }
    }

    #[test]
    fn test_generated_dates_are_consecutive() {
        let series = DemoSeriesGenerator::seeded(1).generate(start(), 3).unwrap();
        let dates: Vec<_> = series.iter().map(|s| s.date().to_string()).collect();
        assert_eq!(dates, vec!["2024-09-01", "2024-09-02", "2024-09-03"]);
    }

    #[test]
    fn test_generated_trends_never_worsen() {
        let series = DemoSeriesGenerator::seeded(3).generate(start(), 60).unwrap();
        assert!(series.percentage_change(MetricKind::Methane).into_inner() <= 0.0);
        assert!(series.percentage_change(MetricKind::Milk).into_inner() >= 0.0);
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(DemoSeriesGenerator::seeded(1).generate(start(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        let mut generator = DemoSeriesGenerator::seeded(1);
        assert_eq!(
            generator.generate(start(), u32::MAX),
            Err(MetricsError::WindowTooLong {
                days: u32::MAX,
                max: MAX_DAYS
            })
        );
        assert_eq!(generator.generate(start(), MAX_DAYS).unwrap().len(), MAX_DAYS as usize);
    }

    #[test]
    fn test_demo_herd() {
        let herd = demo_herd();
        assert_eq!(herd.len(), 3);
        assert_eq!(herd[0].name().as_ref(), "Bessie");
        assert_eq!(herd[1].lactation_stage(), LactationStage::Early);
    }

    #[test]
    fn test_weekly_series() {
        let series = weekly_methane_milk_series();
        assert_eq!(series.len(), 5);
        assert_eq!(series.last().unwrap().methane().into_inner(), 25.9);
    }
}
