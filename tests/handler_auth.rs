mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_login_issues_token() {
    let app = common::test_app();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": common::ADMIN_USERNAME,
            "password": common::ADMIN_PASSWORD,
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert!(!json["token"].as_str().unwrap().is_empty());
    assert!(json["expiresAt"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = common::test_app();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "username": common::ADMIN_USERNAME,
            "password": "wrong",
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid username or password");
    assert!(json.get("token").is_none());
}

#[tokio::test]
async fn test_admin_route_without_token() {
    let app = common::test_app();

    let response = app.server.get("/api/contacts").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["message"],
        "Authorization header is missing or invalid"
    );
}

#[tokio::test]
async fn test_admin_route_with_forged_token() {
    let app = common::test_app();

    let response = app
        .server
        .get("/api/contacts")
        .authorization_bearer("eyJzdWIiOiJhZG1pbiJ9.deadbeef")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let other = {
        let mut options = common::test_options();
        options.token_signing_secret = "a-completely-different-signing-secret".to_string();
        common::test_app_with(common::RecordingMailer::default(), options)
    };
    let foreign_token = other.admin_token().await;

    let app = common::test_app();
    app.server
        .get("/api/contacts")
        .authorization_bearer(&foreign_token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_on_public_read_is_ignored() {
    let app = common::test_app();

    app.server
        .get("/api/blogs")
        .authorization_bearer("garbage")
        .await
        .assert_status_ok();
}
