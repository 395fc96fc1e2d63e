//! Domain types and derivations for the dairy dashboard
//!
//! Validated herd entities, daily records and the metrics computed from
//! them, following type-driven development principles.

pub mod herd;
pub mod metrics;
pub mod records;

pub use herd::{
    efficiency, AgeYears, Cow, CowBuilder, CowId, CowName, HerdError, LactationStage, WeightKg,
};
pub use metrics::*;
pub use records::{DailyRecord, HealthStatus, RecordNotes};
