//! HTTP client for the external farmer registration endpoint

use super::{
    error::{extract_error_message, RegistrationError},
    response::{tokens_from_body, NextRoute},
    token_store::TokenStore,
    types::FarmerRegistration,
};
use crate::config::RegistrationSettings;
use crate::infrastructure::log_messages;
use bytes::Bytes;
use http::{
    header::{ACCEPT, CONTENT_TYPE},
    Method, Request, StatusCode, Uri,
};
use http_body_util::{BodyExt, Full};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

const REGISTER_PATH: &str = "/register/";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends farmer registrations and stores any issued tokens
pub struct RegistrationClient {
    endpoint: Uri,
    timeout: Duration,
    client: Client<HttpConnector, Full<Bytes>>,
    token_store: Arc<dyn TokenStore>,
}

impl RegistrationClient {
    /// Client posting to `{base_url}/register/`
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, RegistrationError> {
        let endpoint = register_endpoint(base_url)?;
        let client = Client::builder(TokioExecutor::new()).build_http();

        Ok(Self {
            endpoint,
            timeout: request_timeout,
            client,
            token_store,
        })
    }

    pub fn from_settings(
        settings: &RegistrationSettings,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, RegistrationError> {
        Self::new(
            &settings.base_url,
            Duration::from_millis(settings.timeout_ms),
            token_store,
        )
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Register a farmer
    ///
    /// Issues exactly one request. Tokens in a successful response are
    /// written to the token store before returning [`NextRoute::Dashboard`].
    #[instrument(skip(self, registration), fields(endpoint = %self.endpoint))]
    pub async fn register(
        &self,
        registration: &FarmerRegistration,
    ) -> Result<NextRoute, RegistrationError> {
        info!("{}", log_messages::registration::SENDING_REQUEST);

        let payload = serde_json::to_vec(registration)?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(Full::new(Bytes::from(payload)))
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let (status, body) = timeout(self.timeout, self.send(request))
            .await
            .map_err(|_| RegistrationError::Timeout)??;
        debug!(status = status.as_u16(), "{}", log_messages::registration::RESPONSE_RECEIVED);

        if !status.is_success() {
            let message = extract_error_message(status, &body);
            warn!(status = status.as_u16(), %message, "{}", log_messages::registration::REJECTED);
            return Err(RegistrationError::Rejected { status, message });
        }

        match tokens_from_body(&body) {
            Some(tokens) => {
                self.token_store.store(tokens);
                info!("{}", log_messages::registration::TOKENS_STORED);
                Ok(NextRoute::Dashboard)
            }
            None => {
                info!("{}", log_messages::registration::REGISTERED_WITHOUT_TOKENS);
                Ok(NextRoute::Login)
            }
        }
    }

    async fn send(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<(StatusCode, Value), RegistrationError> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?
            .to_bytes();

        // The body is parsed before the status is checked, so an unreadable
        // body is malformed whatever the status.
        let body = serde_json::from_slice(&bytes)
            .map_err(|e| RegistrationError::MalformedResponse(e.to_string()))?;

        Ok((status, body))
    }
}

/// `{base_url}/register/`, tolerating a trailing slash on the base
pub fn register_endpoint(base_url: &str) -> Result<Uri, RegistrationError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let candidate = format!("{trimmed}{REGISTER_PATH}");

    let uri: Uri = candidate
        .parse()
        .map_err(|e: http::uri::InvalidUri| RegistrationError::InvalidUri {
            uri: candidate.clone(),
            reason: e.to_string(),
        })?;

    match uri.scheme_str() {
        Some("http") if uri.host().is_some() => Ok(uri),
        _ => Err(RegistrationError::InvalidUri {
            uri: candidate,
            reason: "expected an http:// URL with a host".to_string(),
        }),
    }
}
