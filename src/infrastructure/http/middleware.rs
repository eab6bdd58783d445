//! HTTP Middleware
//!
//! 4xx / 5xx 响应日志，按 API 分组标记

use axum::{extract::Request, middleware::Next, response::Response};

/// 请求所属的 API 分组
pub fn route_area(path: &str) -> &'static str {
    let mut segments = path.trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("api"), Some("voice")) => "voice",
        (Some("api"), Some("settings")) => "settings",
        (Some("api"), Some("identity")) => "identity",
        (Some("api"), Some("ping")) => "ping",
        _ => "unknown",
    }
}

/// 拦截 4xx / 5xx 响应并记录日志
///
/// 只记录 path，不记录 query string。
/// 业务错误（errno != 0）的 HTTP 状态仍是 200，由 ApiError::into_response 记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let area = route_area(&path);

    let response = next.run(request).await;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::error!(%method, %path, area, status, "API request failed");
    } else if response.status().is_client_error() {
        match area {
            "unknown" => tracing::warn!(%method, %path, status, "No such API route"),
            _ => tracing::warn!(%method, %path, area, status, "API request rejected"),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request as HttpRequest, StatusCode},
        routing::post,
        Json, Router,
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::http::dto::SetStateRequest;

    async fn set_state(Json(req): Json<SetStateRequest>) -> String {
        req.key.to_string()
    }

    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn router() -> Router {
        Router::new()
            .route("/set_state", post(set_state))
            .route("/broken", post(broken))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    fn post_json(uri: &str, body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_route_area() {
        assert_eq!(route_area("/api/voice/resolve"), "voice");
        assert_eq!(route_area("/api/settings/set_state"), "settings");
        assert_eq!(route_area("/api/identity/auth_token"), "identity");
        assert_eq!(route_area("/api/ping"), "ping");
        assert_eq!(route_area("/callback"), "unknown");
        assert_eq!(route_area("/"), "unknown");
    }

    #[tokio::test]
    async fn test_passes_through_success() {
        let response = router()
            .oneshot(post_json("/set_state", r#"{"key": "rate", "value": 1.2}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_setting_key_is_client_error() {
        let response = router()
            .oneshot(post_json("/set_state", r#"{"key": "pitch", "value": 1}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_route_and_server_error() {
        let response = router().oneshot(post_json("/nope", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router().oneshot(post_json("/broken", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
