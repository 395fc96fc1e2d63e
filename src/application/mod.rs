//! Application services
//!
//! Wires configuration, the metrics derivations and the registration
//! client together for the binary.

pub mod app;

pub use app::{Application, DemoReport};
