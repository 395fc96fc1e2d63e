//! Constants for herd metrics derivations and demo data generation

/// Efficiency thresholds
pub mod efficiency {
    /// Milk litres per kg of feed below which a cow is flagged for attention
    pub const LOW_EFFICIENCY_THRESHOLD: f64 = 0.6;
}

/// Percentage change calculation
pub mod calculation {
    /// Multiplier converting a ratio into percentage points
    pub const PERCENT_MULTIPLIER: f64 = 100.0;

    /// Scale used to round percentage changes to one decimal place
    pub const ONE_DECIMAL_SCALE: f64 = 10.0;

    /// Minimum number of samples needed to compute a change
    pub const MIN_SAMPLES_FOR_CHANGE: usize = 2;
}

/// Constants for demo data generation
pub mod demo_generation {
    /// Methane series shape (kg/day/cow)
    pub mod methane {
        /// Starting methane value of a generated series
        pub const START: f64 = 150.0;

        /// Methane never drops below this floor
        pub const FLOOR: f64 = 80.0;

        /// Exclusive upper bound of the daily random reduction
        pub const MAX_DAILY_REDUCTION: f64 = 2.0;
    }

    /// Milk series shape (kg/day/cow)
    pub mod milk {
        /// Starting milk value of a generated series
        pub const START: f64 = 20.0;

        /// Milk never rises above this cap
        pub const CAP: f64 = 35.0;

        /// Exclusive upper bound of the daily random increase
        pub const MAX_DAILY_INCREASE: f64 = 0.5;
    }

    /// Default reporting window for generated series
    pub const DEFAULT_DAYS: u32 = 30;

    /// Longest generated series, ten years of daily samples
    pub const MAX_DAYS: u32 = 3_660;

    /// Default seed for the demo generator
    pub const DEFAULT_SEED: u64 = 42;
}
