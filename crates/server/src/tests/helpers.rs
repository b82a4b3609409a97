// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router test helpers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use placement_api::seed_admin;
use placement_persistence::{MIN_PASSWORD_COST, Persistence};
use serde_json::{Value, json};
use std::sync::Arc;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};

pub const ADMIN_PASSWORD: &str = "admin123";
pub const PASSWORD: &str = "secret1";

/// Builds a router over an in-memory database with the admin seeded.
pub fn create_test_app() -> Router {
    build_router(create_test_state())
}

/// Builds app state over an in-memory database with the admin seeded.
pub fn create_test_state() -> AppState {
    let mut persistence: Persistence = Persistence::new_in_memory()
        .expect("Failed to create in-memory persistence")
        .with_password_cost(MIN_PASSWORD_COST);
    seed_admin(
        &mut persistence,
        "admin",
        "admin@placementportal.com",
        ADMIN_PASSWORD,
    )
    .unwrap();
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    }
}

/// A deadline thirty days out, in `YYYY-MM-DD` form.
pub fn future_deadline() -> String {
    let deadline = OffsetDateTime::now_utc().date() + Duration::days(30);
    deadline
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap()
}

/// Sends one request and returns the status and decoded JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request: Request<Body> = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn register(app: &Router, username: &str, role: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": PASSWORD,
            "confirm_password": PASSWORD,
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body["account_id"].as_i64().unwrap()
}

pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["session_token"].as_str().unwrap().to_string()
}

pub async fn login_admin(app: &Router) -> String {
    login(app, "admin", ADMIN_PASSWORD).await
}

pub fn drive_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Build backend services",
        "requirements": "Rust",
        "salary": "12 LPA",
        "location": "Bangalore",
        "job_type": "Full-time",
        "deadline": future_deadline(),
    })
}
