//! Wire-level behaviour of the API client against a local backend.

mod common;

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use shared::client::UploadFile;
use shared::models::{DashboardQuery, LoginRequest, RangeType};
use std::collections::HashMap;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_TOKEN, auth_router, bearer, spawn};

#[tokio::test]
async fn test_unauthorized_error_message_is_surfaced() {
    let client = spawn(auth_router()).await;
    client.set_token(Some("expired".to_string()));

    let err = client.me().await.unwrap_err();

    assert_eq!(err.message(), "Invalid token");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_unparsable_server_error_uses_fallback() {
    let router = Router::new().route(
        "/api/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>upstream died</html>") }),
    );
    let client = spawn(router).await;

    let err = client.list_products().await.unwrap_err();

    assert_eq!(err.message(), "Something went wrong");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_unreachable_backend_uses_fallback() {
    let client = shared::CrmClient::new("http://127.0.0.1:9/api");

    let err = client.list_products().await.unwrap_err();

    assert_eq!(err.message(), "Something went wrong");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_login_then_me_round_trip() {
    let client = spawn(auth_router()).await;

    let auth = client
        .login(&LoginRequest {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(auth.token, ADMIN_TOKEN);

    client.set_token(Some(auth.token));
    let me = client.me().await.unwrap();

    assert_eq!(me.user.id, auth.user.id);
    assert_eq!(me.user.role, auth.user.role);
}

#[tokio::test]
async fn test_rejected_login_carries_backend_message() {
    let client = spawn(auth_router()).await;

    let err = client
        .login(&LoginRequest {
            email: ADMIN_EMAIL.to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
}

#[tokio::test]
async fn test_bearer_header_follows_token() {
    let router = Router::new().route(
        "/api/products",
        get(|headers: HeaderMap| async move {
            let name = bearer(&headers).unwrap_or("anonymous").to_string();
            Json(json!({"products": [{"id": "p-1", "name": name, "price": 1.0}]}))
        }),
    );
    let client = spawn(router).await;

    let anonymous = client.list_products().await.unwrap();
    assert_eq!(anonymous.products[0].name, "anonymous");

    client.set_token(Some(ADMIN_TOKEN.to_string()));
    let signed_in = client.list_products().await.unwrap();
    assert_eq!(signed_in.products[0].name, ADMIN_TOKEN);
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let router = Router::new().route(
        "/api/products/{id}",
        delete(|Path(id): Path<String>| async move {
            if id == "p-1" {
                StatusCode::NO_CONTENT
            } else {
                StatusCode::NOT_FOUND
            }
        }),
    );
    let client = spawn(router).await;

    client.delete_product("p-1").await.unwrap();
    let missing = client.delete_product("p-2").await.unwrap_err();
    assert_eq!(missing.status(), Some(404));
    assert_eq!(missing.message(), "Something went wrong");
}

#[tokio::test]
async fn test_dashboard_query_parameters() {
    let router = Router::new().route(
        "/api/stats/dashboard",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let mut keys: Vec<_> = params.keys().cloned().collect();
            keys.sort();
            Json(json!({
                "totals": {"customers": params.len()},
                "salesChart": [{"label": keys.join(","), "amount": 1.0}],
                "recentSales": [{"id": params.get("rangeType").cloned().unwrap_or_default()}],
            }))
        }),
    );
    let client = spawn(router).await;
    let query = DashboardQuery {
        range_type: Some(RangeType::Weekly),
        ..DashboardQuery::default()
    };

    let stats = client.dashboard_stats(&query).await.unwrap();

    assert_eq!(stats.totals.customers, 3);
    assert_eq!(stats.sales_chart[0].label, "limit,page,rangeType");
    assert_eq!(stats.recent_sales[0].id, "weekly");
    assert_eq!(stats.pagination, None);
}

#[tokio::test]
async fn test_multipart_upload_sends_file_field() {
    let router = Router::new().route(
        "/api/upload/document",
        post(|headers: HeaderMap, mut multipart: Multipart| async move {
            assert_eq!(bearer(&headers), Some(ADMIN_TOKEN));
            let field = multipart.next_field().await.unwrap().unwrap();
            let name = field.name().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            let mime = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.unwrap();
            Json::<Value>(json!({
                "url": format!("/files/{}", file_name.clone().unwrap_or_default()),
                "filename": file_name,
                "size": bytes.len(),
                "mimeType": mime,
                "field": name,
            }))
        }),
    );
    let client = spawn(router).await;
    client.set_token(Some(ADMIN_TOKEN.to_string()));

    let uploaded = client
        .upload_document(UploadFile {
            name: "contract.pdf".to_string(),
            mime_type: Some("application/pdf".to_string()),
            bytes: b"%PDF-1.4 test".to_vec(),
        })
        .await
        .unwrap();

    assert_eq!(uploaded.url, "/files/contract.pdf");
    assert_eq!(uploaded.filename.as_deref(), Some("contract.pdf"));
    assert_eq!(uploaded.size, Some(13));
    assert_eq!(uploaded.mime_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn test_notifications_page_decodes() {
    let router = Router::new().route(
        "/api/notifications",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            Json(json!({
                "notifications": [
                    {"id": "n-1", "title": "Welcome", "message": "Hello", "type": "info", "isRead": false},
                    {"id": "n-2", "title": "Order", "message": "Shipped", "type": "order", "isRead": true}
                ],
                "pagination": {
                    "page": params["page"].parse::<u32>().unwrap(),
                    "limit": params["limit"].parse::<u32>().unwrap(),
                    "total": 2,
                    "totalPages": 1
                }
            }))
        }),
    );
    let client = spawn(router).await;

    let page = client.notifications(0, 20).await.unwrap();

    let pagination = page.pagination.clone().unwrap();
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.limit, 20);
    assert_eq!(page.unread_count(), 1);
}
