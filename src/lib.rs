//! Dairy Insights - herd metrics for a dairy-farm dashboard
//!
//! Derives feed efficiency, methane/milk trends and efficiency rankings
//! from herd data, and registers farmers with the external backend,
//! following type-driven development principles.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod registration;

pub use application::Application;
pub use error::{Error, Result};
