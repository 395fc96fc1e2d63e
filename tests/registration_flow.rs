//! Registration client against a mock backend

use dairy_insights::registration::{
    FarmerRegistration, InMemoryTokenStore, NextRoute, RegistrationClient, RegistrationError,
    TokenStore,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::{sync::Arc, time::Duration};

fn registration() -> FarmerRegistration {
    FarmerRegistration::try_new(
        "Wanjiku Kamau",
        "Green Valley Dairy",
        "wanjiku@example.com",
        "0712345678",
        "Nakuru",
        "s3cret-pass",
    )
    .unwrap()
}

fn client(base_url: &str, store: Arc<InMemoryTokenStore>) -> RegistrationClient {
    RegistrationClient::new(base_url, Duration::from_secs(5), store).unwrap()
}

#[tokio::test]
async fn test_tokens_are_stored_and_dashboard_is_next() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register/")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(json!({
            "full_name": "Wanjiku Kamau",
            "farm_name": "Green Valley Dairy",
            "email": "wanjiku@example.com",
            "telephone": "0712345678",
            "county": "Nakuru",
            "password": "s3cret-pass"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"access": "access-token", "refresh": "refresh-token"}).to_string())
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let route = client(&server.url(), Arc::clone(&store))
        .register(&registration())
        .await
        .unwrap();

    assert_eq!(route, NextRoute::Dashboard);
    assert_eq!(store.access_token().as_deref(), Some("access-token"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-token"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_without_tokens_goes_to_login() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register/")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": 17, "email": "wanjiku@example.com"}).to_string())
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let route = client(&server.url(), Arc::clone(&store))
        .register(&registration())
        .await
        .unwrap();

    assert_eq!(route, NextRoute::Login);
    assert!(store.access_token().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_field_errors_are_flattened() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"email": ["farmer with this email already exists."]}).to_string())
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let error = client(&server.url(), Arc::clone(&store))
        .register(&registration())
        .await
        .unwrap_err();

    match &error {
        RegistrationError::Rejected { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "farmer with this email already exists.");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(error.user_message(), "farmer with this email already exists.");
    assert!(store.access_token().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_body_is_flattened() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/register/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!(["Phone number already registered"]).to_string())
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let error = client(&server.url(), store)
        .register(&registration())
        .await
        .unwrap_err();

    assert!(matches!(error, RegistrationError::Rejected { .. }));
    assert_eq!(error.user_message(), "Phone number already registered");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_numeric_tokens_are_stored_as_text() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/register/")
        .with_status(200)
        .with_body(json!({"access": 12345, "refresh": "refresh-token"}).to_string())
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let route = client(&server.url(), Arc::clone(&store))
        .register(&registration())
        .await
        .unwrap();

    assert_eq!(route, NextRoute::Dashboard);
    assert_eq!(store.access_token().as_deref(), Some("12345"));
}

#[tokio::test]
async fn test_detail_field_wins_over_other_values() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/register/")
        .with_status(403)
        .with_body(json!({"code": "denied", "detail": "Registration closed"}).to_string())
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let error = client(&server.url(), store)
        .register(&registration())
        .await
        .unwrap_err();

    assert_eq!(error.user_message(), "Registration closed");
}

#[tokio::test]
async fn test_non_json_body_is_unexpected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/register/")
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<h1>Server Error</h1>")
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let error = client(&server.url(), store)
        .register(&registration())
        .await
        .unwrap_err();

    assert!(matches!(error, RegistrationError::MalformedResponse(_)));
    assert_eq!(error.user_message(), "An unexpected error occurred");
}

#[tokio::test]
async fn test_unreachable_backend_is_unexpected() {
    // Nothing listens on the discard port locally
    let store = Arc::new(InMemoryTokenStore::new());
    let error = client("http://127.0.0.1:9", store)
        .register(&registration())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        RegistrationError::Transport(_) | RegistrationError::Timeout
    ));
    assert_eq!(error.user_message(), "An unexpected error occurred");
}

#[test]
fn test_invalid_field_keeps_validation_reason() {
    let error = FarmerRegistration::try_new(
        "Wanjiku Kamau",
        "Green Valley Dairy",
        "wanjiku@example.com",
        "+254 712 345",
        "Nakuru",
        "s3cret-pass",
    )
    .unwrap_err();

    match &error {
        RegistrationError::InvalidField { field, reason } => {
            assert_eq!(*field, "telephone");
            assert!(!reason.is_empty());
        }
        other => panic!("expected invalid field, got {other:?}"),
    }
    assert!(error.user_message().starts_with("Invalid telephone: "));
}
