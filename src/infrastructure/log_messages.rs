//! Log message constants
//!
//! Centralizes the messages emitted by the application so wording stays
//! consistent across the library and the binary.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting Dairy Insights";
    pub const SETTINGS_LOADED: &str = "Configuration loaded";
    pub const REPORT_BUILT: &str = "Herd report built";
}

/// Farmer registration messages
pub mod registration {
    pub const SENDING_REQUEST: &str = "Sending farmer registration request";
    pub const RESPONSE_RECEIVED: &str = "Registration response received";
    pub const REJECTED: &str = "Registration rejected by backend";
    pub const TOKENS_STORED: &str = "Registration succeeded; tokens stored";
    pub const REGISTERED_WITHOUT_TOKENS: &str =
        "Registration succeeded without tokens; sign-in required";
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
}

/// Herd metrics messages
pub mod metrics {
    pub const LOW_EFFICIENCY_COWS: &str = "Cows below the efficiency threshold";
    pub const EMPTY_HERD: &str = "Herd is empty; no efficiency average";
}
