//! Daily data entry records

use crate::domain::{
    herd::CowId,
    metrics::values::{Efficiency, FeedIntake, MilkYield},
};
use chrono::NaiveDate;
use derive_more::Display;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Health status reported with each daily record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum HealthStatus {
    #[display("healthy")]
    Healthy,
    #[display("sick")]
    Sick,
    #[display("injured")]
    Injured,
    #[display("under observation")]
    UnderObservation,
}

impl HealthStatus {
    pub fn needs_attention(self) -> bool {
        !matches!(self, Self::Healthy)
    }
}

/// Free-text notes on a daily record
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct RecordNotes(String);

/// One day's milk, feed and health entry for a cow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    cow_id: CowId,
    date: NaiveDate,
    milk_yield: MilkYield,
    feed_intake: FeedIntake,
    health_status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<RecordNotes>,
}

impl DailyRecord {
    pub fn new(
        cow_id: CowId,
        date: NaiveDate,
        milk_yield: MilkYield,
        feed_intake: FeedIntake,
        health_status: HealthStatus,
    ) -> Self {
        Self {
            cow_id,
            date,
            milk_yield,
            feed_intake,
            health_status,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: RecordNotes) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn cow_id(&self) -> &CowId {
        &self.cow_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn milk_yield(&self) -> MilkYield {
        self.milk_yield
    }

    pub fn feed_intake(&self) -> FeedIntake {
        self.feed_intake
    }

    pub fn health_status(&self) -> HealthStatus {
        self.health_status
    }

    pub fn notes(&self) -> Option<&RecordNotes> {
        self.notes.as_ref()
    }

    /// Feed efficiency for the recorded day
    pub fn efficiency(&self) -> Efficiency {
        Efficiency::from_yield_and_intake(self.milk_yield, self.feed_intake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: HealthStatus) -> DailyRecord {
        DailyRecord::new(
            CowId::try_new("cow2").unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
            MilkYield::try_new(27.0).unwrap(),
            FeedIntake::try_new(45.0).unwrap(),
            status,
        )
    }

    #[test]
    fn test_daily_efficiency() {
        assert_eq!(record(HealthStatus::Healthy).efficiency().into_inner(), 0.6);
    }

    #[test]
    fn test_health_attention() {
        assert!(!HealthStatus::Healthy.needs_attention());
        assert!(HealthStatus::UnderObservation.needs_attention());
    }

    #[test]
    fn test_json_round_trip_with_notes() {
        let record = record(HealthStatus::Sick).with_notes(RecordNotes::try_new("Off feed").unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["healthStatus"], "sick");
        assert_eq!(json["date"], "2024-09-30");
        let back: DailyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_json_without_notes_omits_field() {
        let json = serde_json::to_value(record(HealthStatus::Healthy)).unwrap();
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_blank_notes_rejected() {
        assert!(RecordNotes::try_new("   ").is_err());
    }
}
