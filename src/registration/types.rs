//! Farmer registration request types
//!
//! Every field is validated at construction so a request that reaches the
//! wire is well formed.

use super::error::RegistrationError;
use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};
use std::fmt;

/// Farmer's full name
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct FullName(String);

/// Name of the farm
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct FarmName(String);

/// Contact email address
#[nutype(
    sanitize(trim),
    validate(predicate = |email| email.contains('@') && email.len() > 3),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct EmailAddress(String);

/// Telephone number, digits only
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 20, regex = r"^[0-9]+$"),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct Telephone(String);

/// County of residence, e.g. Nakuru or Kiambu
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct County(String);

/// Account password; never printed
#[nutype(
    validate(not_empty, len_char_max = 128),
    derive(Clone, PartialEq, Eq, Serialize, Deserialize, AsRef)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Body of `POST /register/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerRegistration {
    pub full_name: FullName,
    pub farm_name: FarmName,
    pub email: EmailAddress,
    pub telephone: Telephone,
    pub county: County,
    pub password: Password,
}

impl FarmerRegistration {
    /// Validate raw form input into a request
    ///
    /// The first field that fails is reported with its validation reason.
    pub fn try_new(
        full_name: impl Into<String>,
        farm_name: impl Into<String>,
        email: impl Into<String>,
        telephone: impl Into<String>,
        county: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        Ok(Self {
            full_name: FullName::try_new(full_name).map_err(invalid_field("full name"))?,
            farm_name: FarmName::try_new(farm_name).map_err(invalid_field("farm name"))?,
            email: EmailAddress::try_new(email).map_err(invalid_field("email"))?,
            telephone: Telephone::try_new(telephone).map_err(invalid_field("telephone"))?,
            county: County::try_new(county).map_err(invalid_field("county"))?,
            password: Password::try_new(password).map_err(invalid_field("password"))?,
        })
    }
}

fn invalid_field<E: fmt::Display>(field: &'static str) -> impl FnOnce(E) -> RegistrationError {
    move |error| RegistrationError::InvalidField {
        field,
        reason: error.to_string(),
    }
}
