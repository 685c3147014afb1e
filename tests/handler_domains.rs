mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn domain_body(slug: &str, order: i32, is_active: bool) -> Value {
    json!({
        "name": "Technology",
        "slug": slug,
        "description": "Software, AI and infrastructure products built and funded by the lab.",
        "icon": "FaLaptopCode",
        "hasActiveProjects": true,
        "order": order,
        "isActive": is_active,
    })
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_domain_requires_admin() {
    let app = common::test_app();

    let response = app
        .server
        .post("/api/domains")
        .json(&domain_body("technology", 1, true))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_create_domain_success() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let response = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&domain_body("technology", 1, true))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["slug"], "technology");
    assert_eq!(json["data"]["hasActiveProjects"], true);
    assert!(json["data"]["id"].is_i64());
}

#[tokio::test]
async fn test_create_domain_rejects_bad_slug() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let response = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&domain_body("web dev", 1, true))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "slug");
}

#[tokio::test]
async fn test_create_domain_rejects_short_description() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let mut body = domain_body("technology", 1, true);
    body["description"] = json!("Too short");

    let response = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["errors"][0]["field"], "description");
}

#[tokio::test]
async fn test_create_domain_padding_does_not_count_toward_length() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let mut body = domain_body("technology", 1, true);
    body["description"] = json!(format!("Short{}", " ".repeat(60)));

    let response = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "description");
}

#[tokio::test]
async fn test_create_domain_stores_trimmed_text() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let mut body = domain_body("  Technology ", 1, true);
    body["name"] = json!("  Technology  ");
    body["icon"] = json!(" FaLaptopCode ");

    let response = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&body)
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["data"]["name"], "Technology");
    assert_eq!(json["data"]["slug"], "technology");
    assert_eq!(json["data"]["icon"], "FaLaptopCode");
}

#[tokio::test]
async fn test_create_domain_duplicate_slug_conflicts() {
    let app = common::test_app();
    let token = app.admin_token().await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        app.server
            .post("/api/domains")
            .authorization_bearer(&token)
            .json(&domain_body("technology", 1, true))
            .await
            .assert_status(expected);
    }
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_domains_public_sorted_and_active_only() {
    let app = common::test_app();
    let token = app.admin_token().await;

    for (slug, order, active) in [("b", 2, true), ("a", 1, true), ("hidden", 0, false)] {
        app.server
            .post("/api/domains")
            .authorization_bearer(&token)
            .json(&domain_body(slug, order, active))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = app.server.get("/api/domains").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("cache-control").to_str().unwrap(),
        "public, max-age=3600"
    );
    let json = response.json::<Value>();
    assert_eq!(json["count"], 2);
    let slugs: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["a", "b"]);
}

#[tokio::test]
async fn test_list_domains_empty() {
    let app = common::test_app();

    let response = app.server.get("/api/domains").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": true, "count": 0, "data": [] })
    );
}

// ─── UPDATE / DELETE ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_domain_partial() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let created = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&domain_body("technology", 1, true))
        .await
        .json::<Value>();
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/domains/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "order": 5, "isActive": false }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["order"], 5);
    assert_eq!(json["data"]["isActive"], false);
    assert_eq!(json["data"]["slug"], "technology");
}

#[tokio::test]
async fn test_update_unknown_domain_not_found() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let response = app
        .server
        .put("/api/domains/999")
        .authorization_bearer(&token)
        .json(&json!({ "order": 5 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Domain not found");
}

#[tokio::test]
async fn test_delete_domain() {
    let app = common::test_app();
    let token = app.admin_token().await;

    let created = app
        .server
        .post("/api/domains")
        .authorization_bearer(&token)
        .json(&domain_body("technology", 1, true))
        .await
        .json::<Value>();
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .server
        .delete(&format!("/api/domains/{id}"))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Domain deleted successfully"
    );

    app.server
        .get(&format!("/api/domains/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
