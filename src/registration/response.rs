//! Interpretation of a successful registration response

use super::{
    error::{is_truthy, to_display_string},
    token_store::TokenPair,
};
use derive_more::Display;
use serde::Serialize;
use serde_json::Value;

/// Where the farmer goes after registering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum NextRoute {
    /// Tokens were issued; the farmer is signed in
    #[display("/dashboard")]
    Dashboard,
    /// Registered without tokens; the farmer must sign in
    #[display("/login")]
    Login,
}

impl NextRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
        }
    }
}

/// Both tokens, when the body carries a truthy `access` and `refresh`
///
/// Non-string tokens are kept as their text rendering.
pub fn tokens_from_body(body: &Value) -> Option<TokenPair> {
    let access = token_text(body.get("access")?)?;
    let refresh = token_text(body.get("refresh")?)?;
    Some(TokenPair { access, refresh })
}

fn token_text(value: &Value) -> Option<String> {
    is_truthy(value).then(|| to_display_string(value))
}
