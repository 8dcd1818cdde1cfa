//! In-process stand-in for the CRM backend.
#![allow(dead_code)]

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::{Value, json};
use shared::CrmClient;
use std::time::Duration;
use tokio::net::TcpListener;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "password123";
pub const ADMIN_TOKEN: &str = "tok-admin";
pub const SIGNUP_TOKEN: &str = "tok-signup";
pub const GOOGLE_ID_TOKEN: &str = "google-id-token";
pub const GOOGLE_TOKEN: &str = "tok-google";
/// Profile name that makes `PUT /auth/profile` answer late.
pub const SLOW_NAME: &str = "Slow Poke";

/// Serve `router` on an ephemeral port and return a client pointed at it.
pub async fn spawn(router: Router) -> CrmClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    CrmClient::new(&format!("http://{addr}/api"))
}

pub fn admin_json() -> Value {
    json!({
        "id": "u-1",
        "email": ADMIN_EMAIL,
        "name": "Ada Admin",
        "role": "SUPER_ADMIN",
        "isProfileComplete": true,
        "createdAt": "2024-01-15T10:30:00Z"
    })
}

pub fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn invalid_token() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid token"})),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == ADMIN_EMAIL && body["password"] == ADMIN_PASSWORD {
        Json(json!({"token": ADMIN_TOKEN, "user": admin_json()})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> Response {
    if body["email"] == ADMIN_EMAIL {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": "Email already registered"})),
        )
            .into_response();
    }
    let user = json!({
        "id": "u-2",
        "email": body["email"],
        "name": body.get("name").cloned().unwrap_or(Value::Null),
        "role": "CUSTOMER",
        "isProfileComplete": false
    });
    Json(json!({"token": SIGNUP_TOKEN, "user": user})).into_response()
}

async fn google(Json(body): Json<Value>) -> Response {
    if body["idToken"] != GOOGLE_ID_TOKEN {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid Google token"})),
        )
            .into_response();
    }
    let user = json!({
        "id": "u-3",
        "email": "gina@example.com",
        "role": "CUSTOMER",
        "isProfileComplete": true
    });
    Json(json!({"token": GOOGLE_TOKEN, "user": user})).into_response()
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(ADMIN_TOKEN) => Json(json!({"user": admin_json()})).into_response(),
        _ => invalid_token(),
    }
}

async fn update_profile(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if bearer(&headers) != Some(ADMIN_TOKEN) {
        return invalid_token();
    }
    let mut user = admin_json();
    if body["name"] == SLOW_NAME {
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    if let Some(name) = body.get("name") {
        user["name"] = name.clone();
    }
    if let Some(phone) = body.get("phoneNumber") {
        user["phoneNumber"] = phone.clone();
    }
    Json(json!({"user": user})).into_response()
}

/// Auth endpoints: one known admin account, open signup and one Google identity.
pub fn auth_router() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/google", post(google))
        .route("/api/auth/me", get(me))
        .route("/api/auth/profile", put(update_profile))
}
