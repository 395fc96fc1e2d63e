use crate::config::Settings;
use crate::domain::metrics::{
    demo_herd, weekly_methane_milk_series, DemoSeriesGenerator, HerdSummary,
};
use crate::infrastructure::log_messages;
use crate::registration::{
    FarmerRegistration, InMemoryTokenStore, NextRoute, RegistrationClient, TokenStore,
};
use crate::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// First day of the generated demo window
const DEMO_START: (i32, u32, u32) = (2024, 9, 1);

/// Dashboard data for the demo herd
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    /// Demo herd against the weekly chart series
    pub weekly: HerdSummary,
    /// Demo herd against a seeded random series
    pub generated: HerdSummary,
    pub seed: u64,
    pub days: u32,
}

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    token_store: Arc<InMemoryTokenStore>,
    registration: RegistrationClient,
}

impl Application {
    pub fn with_settings(settings: Settings) -> Result<Self> {
        let token_store = Arc::new(InMemoryTokenStore::new());
        let registration = RegistrationClient::from_settings(
            &settings.registration,
            Arc::clone(&token_store) as Arc<dyn TokenStore>,
        )?;

        Ok(Self {
            settings,
            token_store,
            registration,
        })
    }

    /// Herd summaries for the weekly series and a seeded random series
    #[instrument(skip(self))]
    pub fn demo_report(&self, seed: Option<u64>, days: Option<u32>) -> Result<DemoReport> {
        let seed = seed.unwrap_or(self.settings.demo.seed);
        let days = days.unwrap_or(self.settings.demo.days);
        let herd = demo_herd();

        let (year, month, day) = DEMO_START;
        let start = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        let generated_series = DemoSeriesGenerator::seeded(seed).generate(start, days)?;

        let weekly = HerdSummary::build(&herd, &weekly_methane_milk_series());
        let generated = HerdSummary::build(&herd, &generated_series);

        if weekly.below_threshold_count() > 0 {
            let names: Vec<String> = weekly
                .ranking()
                .below_threshold()
                .map(|entry| entry.name().to_string())
                .collect();
            warn!(cows = ?names, "{}", log_messages::metrics::LOW_EFFICIENCY_COWS);
        }
        info!(seed, days, "{}", log_messages::application::REPORT_BUILT);

        Ok(DemoReport {
            weekly,
            generated,
            seed,
            days,
        })
    }

    /// Register a farmer with the configured backend
    pub async fn register(&self, registration: &FarmerRegistration) -> Result<NextRoute> {
        Ok(self.registration.register(registration).await?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn token_store(&self) -> &InMemoryTokenStore {
        &self.token_store
    }

    pub fn registration_client(&self) -> &RegistrationClient {
        &self.registration
    }
}
