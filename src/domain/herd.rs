//! Herd entities
//!
//! A cow carries its current daily milk yield and feed intake. Both rates
//! are read-only to the metrics layer.

use crate::domain::metrics::values::{Efficiency, FeedIntake, MilkYield};
use derive_more::Display;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while assembling herd entities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HerdError {
    #[error("Missing cow {0}")]
    MissingField(&'static str),

    #[error("Unknown lactation stage: {0}")]
    UnknownLactationStage(String),
}

/// Herd-local cow identifier, e.g. `cow1`
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CowId(String);

/// Display name of a cow
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CowName(String);

/// Age in whole years
#[nutype(
    validate(less_or_equal = 30),
    default = 0,
    derive(
        Debug,
        Clone,
        Copy,
        Default,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct AgeYears(u8);

/// Live weight in kilograms
#[nutype(
    validate(finite, greater = 0.0),
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
pub struct WeightKg(f64);

/// Stage of the lactation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum LactationStage {
    Early,
    Mid,
    Late,
    Dry,
}

impl FromStr for LactationStage {
    type Err = HerdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" => Ok(Self::Early),
            "mid" => Ok(Self::Mid),
            "late" => Ok(Self::Late),
            "dry" => Ok(Self::Dry),
            other => Err(HerdError::UnknownLactationStage(other.to_string())),
        }
    }
}

/// A tracked animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cow {
    id: CowId,
    name: CowName,
    age: AgeYears,
    weight: WeightKg,
    lactation_stage: LactationStage,
    milk_yield: MilkYield,
    feed_intake: FeedIntake,
}

impl Cow {
    pub fn builder(id: CowId, name: CowName) -> CowBuilder {
        CowBuilder::new(id, name)
    }

    pub fn id(&self) -> &CowId {
        &self.id
    }

    pub fn name(&self) -> &CowName {
        &self.name
    }

    pub fn age(&self) -> AgeYears {
        self.age
    }

    pub fn weight(&self) -> WeightKg {
        self.weight
    }

    pub fn lactation_stage(&self) -> LactationStage {
        self.lactation_stage
    }

    pub fn milk_yield(&self) -> MilkYield {
        self.milk_yield
    }

    pub fn feed_intake(&self) -> FeedIntake {
        self.feed_intake
    }

    /// Milk litres per kilogram of feed
    pub fn efficiency(&self) -> Efficiency {
        Efficiency::from_yield_and_intake(self.milk_yield, self.feed_intake)
    }
}

/// Free-function form of [`Cow::efficiency`]
pub fn efficiency(cow: &Cow) -> Efficiency {
    cow.efficiency()
}

/// Builder for [`Cow`]; every field except id and name has a neutral default
#[derive(Debug, Clone)]
pub struct CowBuilder {
    id: CowId,
    name: CowName,
    age: AgeYears,
    weight: Option<WeightKg>,
    lactation_stage: LactationStage,
    daily_rates: Option<(MilkYield, FeedIntake)>,
}

impl CowBuilder {
    fn new(id: CowId, name: CowName) -> Self {
        Self {
            id,
            name,
            age: AgeYears::default(),
            weight: None,
            lactation_stage: LactationStage::Mid,
            daily_rates: None,
        }
    }

    pub fn age(mut self, age: AgeYears) -> Self {
        self.age = age;
        self
    }

    pub fn weight(mut self, weight: WeightKg) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn lactation_stage(mut self, stage: LactationStage) -> Self {
        self.lactation_stage = stage;
        self
    }

    pub fn daily_rates(mut self, milk_yield: MilkYield, feed_intake: FeedIntake) -> Self {
        self.daily_rates = Some((milk_yield, feed_intake));
        self
    }

    /// Finish the cow; weight and daily rates are mandatory
    pub fn build(self) -> Result<Cow, HerdError> {
        let weight = self.weight.ok_or(HerdError::MissingField("weight"))?;
        let (milk_yield, feed_intake) = self
            .daily_rates
            .ok_or(HerdError::MissingField("daily rates"))?;

        Ok(Cow {
            id: self.id,
            name: self.name,
            age: self.age,
            weight,
            lactation_stage: self.lactation_stage,
            milk_yield,
            feed_intake,
        })
    }
}
