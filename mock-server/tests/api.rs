use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- users ---

#[tokio::test]
async fn get_known_user() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/api/users/2").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 2);
    assert_eq!(user.first_name, "Janet");
}

#[tokio::test]
async fn get_unknown_user_returns_404_with_empty_object() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/api/users/23").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}

// --- login ---

#[tokio::test]
async fn login_with_password_returns_token() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"email":"eve.holt@example.com","password":"cityslicka"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["token"], "QpwL5tke4Pnpja7X4");
}

#[tokio::test]
async fn login_without_password_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/login", r#"{"email":"eve.holt@example.com"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Missing password");
}

// --- status ---

#[tokio::test]
async fn status_route_echoes_the_requested_code() {
    for code in [201u16, 204, 404, 500, 503] {
        let app = app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/status/{code}"))
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), code, "for /status/{code}");
    }
}

// --- echo ---

#[tokio::test]
async fn echo_reports_headers_and_body() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .header("cache-control", "no-store")
                .header("content-type", "application/json")
                .header("x-custom", "yes")
                .body(r#"{"a":1}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["cache_control"], "no-store");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(body["x_custom"], "yes");
    assert_eq!(body["body"], r#"{"a":1}"#);
}

#[tokio::test]
async fn echo_reports_null_for_absent_headers() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let body: serde_json::Value = body_json(resp).await;
    assert!(body["cache_control"].is_null());
}

// --- document / binary ---

#[tokio::test]
async fn document_route_serves_xml() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/document").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/xml"
    );
    let body = body_bytes(resp).await;
    assert!(body.starts_with(b"<catalog>"));
}

#[tokio::test]
async fn binary_route_serves_non_utf8_bytes() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/binary").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(body.as_ref(), &[0u8, 159, 146, 150, 255]);
    assert!(String::from_utf8(body.to_vec()).is_err());
}
