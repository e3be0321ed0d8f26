//! Hermetic HTTP fixtures for the ajax-core integration tests.
//!
//! Mirrors the hosted endpoints the original test suite pointed at (a small
//! user lookup and a login route) plus a few utility routes for exercising
//! status classification, header derivation, and non-text bodies.

use axum::{
    body::Bytes,
    extract::Path,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
pub struct Login {
    pub email: String,
    pub password: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/users/{id}", get(get_user))
        .route("/api/login", post(login))
        .route("/status/{code}", get(echo_status))
        .route("/echo", post(echo))
        .route("/document", get(document))
        .route("/binary", get(binary))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_user(Path(id): Path<u64>) -> Result<Json<User>, (StatusCode, Json<serde_json::Value>)> {
    if id == 2 {
        Ok(Json(User {
            id: 2,
            email: "janet.weaver@example.com".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
        }))
    } else {
        Err((StatusCode::NOT_FOUND, Json(json!({}))))
    }
}

async fn login(Json(input): Json<Login>) -> (StatusCode, Json<serde_json::Value>) {
    match input.password {
        Some(_) => (StatusCode::OK, Json(json!({"token": "QpwL5tke4Pnpja7X4"}))),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing password"})),
        ),
    }
}

async fn echo_status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

/// Report the request headers the adapter derives, plus the body, so tests
/// can assert what actually went over the wire.
async fn echo(headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "cache_control": header_value("cache-control"),
        "content_type": header_value("content-type"),
        "x_custom": header_value("x-custom"),
        "body": body,
    }))
}

async fn document() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/xml")],
        "<catalog><item id=\"1\">first</item></catalog>",
    )
}

async fn binary() -> impl IntoResponse {
    // Deliberately not valid UTF-8.
    (
        [(CONTENT_TYPE, "application/octet-stream")],
        Bytes::from_static(&[0u8, 159, 146, 150, 255]),
    )
}
