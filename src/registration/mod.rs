//! Farmer registration against the external backend
//!
//! The backend owns accounts; this module only sends the registration,
//! interprets the reply and keeps any issued tokens.

pub mod client;
pub mod error;
pub mod response;
pub mod token_store;
pub mod types;

pub use client::{register_endpoint, RegistrationClient};
pub use error::{extract_error_message, RegistrationError};
pub use response::NextRoute;
pub use token_store::{InMemoryTokenStore, TokenPair, TokenStore};
pub use types::{County, EmailAddress, FarmName, FarmerRegistration, FullName, Password, Telephone};
