//! Herd metrics derivations
//!
//! Pure functions turning cows and dated samples into dashboard metrics:
//! feed efficiency, percentage change, trend verdicts and efficiency
//! ranking. Every operation is total over validated inputs.

pub mod constants;
pub mod demo_data;
pub mod errors;
pub mod metric_kind;
pub mod ranking;
pub mod sample;
pub mod summary;
pub mod trend;
pub mod values;

// Re-export commonly used types
pub use demo_data::{demo_herd, weekly_methane_milk_series, DemoSeriesGenerator};
pub use errors::MetricsError;
pub use metric_kind::{MetricKind, TrendDirection};
pub use ranking::{rank_by_efficiency, EfficiencyRanking, RankedEntry};
pub use sample::{percentage_change, MethaneReading, MilkReading, Sample, Series};
pub use summary::{average_efficiency, HerdSummary};
pub use trend::{classify_trend, TrendClassification};
pub use values::{Efficiency, FeedIntake, MilkYield, PercentageChange};
