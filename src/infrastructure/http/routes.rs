//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/voice/list            GET   列出所有音色
//! - /api/voice/resolve         POST  按名称或语言解析音色
//! - /api/settings/get          POST  读取设置
//! - /api/settings/update       POST  合并写入设置
//! - /api/settings/set_state    POST  写入单个设置项
//! - /api/identity/client_id    GET   获取客户端 ID
//! - /api/identity/auth_token   POST  获取登录 token

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/voice", voice_routes())
        .nest("/settings", settings_routes())
        .nest("/identity", identity_routes())
}

/// Voice 路由
fn voice_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_voices))
        .route("/resolve", post(handlers::resolve_voice))
}

/// Settings 路由
fn settings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get", post(handlers::get_settings))
        .route("/update", post(handlers::update_settings))
        .route("/set_state", post(handlers::set_state))
}

/// Identity 路由
fn identity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/client_id", get(handlers::get_client_id))
        .route("/auth_token", post(handlers::get_auth_token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{IdentityError, IdentityPort};
    use crate::domain::voice::{Gender, Voice, VoiceEngine};
    use crate::infrastructure::adapters::StaticVoiceProvider;
    use crate::infrastructure::memory::InMemorySettingsStore;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    struct FixedRedirect(Option<String>);

    #[async_trait]
    impl IdentityPort for FixedRedirect {
        fn redirect_url(&self) -> String {
            "http://127.0.0.1:5071/callback".to_string()
        }

        async fn launch_web_auth_flow(
            &self,
            _url: &str,
            interactive: bool,
        ) -> Result<Option<String>, IdentityError> {
            Ok(if interactive { self.0.clone() } else { None })
        }
    }

    fn app(redirect: Option<&str>) -> Router {
        let voices = vec![
            Voice::new("Daniel", Some("en-GB")).with_gender(Gender::Male),
            Voice::new("Samantha", Some("en-US")).with_gender(Gender::Female),
            Voice::remote("GoogleTranslate French", Some("fr"), VoiceEngine::GoogleTranslate),
        ];
        let state = AppState::new(
            Arc::new(InMemorySettingsStore::new()),
            Arc::new(StaticVoiceProvider::new(voices)),
            Arc::new(FixedRedirect(redirect.map(str::to_string))),
            "https://readaloud.app",
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Value {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app(None);
        let body = call(&app, "GET", "/api/ping", None).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_voice_list_and_resolve() {
        let app = app(None);

        let body = call(&app, "GET", "/api/voice/list", None).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);

        let body = call(&app, "POST", "/api/voice/resolve", Some(json!({"lang": "en-US"}))).await;
        assert_eq!(body["data"]["voiceName"], "Samantha");

        let body = call(&app, "POST", "/api/voice/resolve", Some(json!({"lang": "fr-CA"}))).await;
        assert_eq!(body["data"]["voiceName"], "GoogleTranslate French");
        assert_eq!(body["data"]["autoSelect"], true);

        let body = call(&app, "POST", "/api/voice/resolve", Some(json!({"lang": "ja"}))).await;
        assert_eq!(body["errno"], 0);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let app = app(None);

        let body = call(
            &app,
            "POST",
            "/api/settings/update",
            Some(json!({"voiceName": "Daniel", "rate": 1.5})),
        )
        .await;
        assert_eq!(body["errno"], 0);

        call(
            &app,
            "POST",
            "/api/settings/set_state",
            Some(json!({"key": "volume", "value": 0.5})),
        )
        .await;

        let body = call(&app, "POST", "/api/settings/get", Some(json!({}))).await;
        assert_eq!(body["data"], json!({"voiceName": "Daniel", "rate": 1.5, "volume": 0.5}));

        let body = call(&app, "POST", "/api/settings/get", Some(json!({"keys": ["rate"]}))).await;
        assert_eq!(body["data"], json!({"rate": 1.5}));
    }

    #[tokio::test]
    async fn test_client_id_is_stable() {
        let app = app(None);

        let first = call(&app, "GET", "/api/identity/client_id", None).await;
        let second = call(&app, "GET", "/api/identity/client_id", None).await;

        let id = first["data"]["clientId"].as_str().unwrap();
        assert_eq!(id.len(), 8);
        assert_eq!(second["data"]["clientId"], id);
    }

    #[tokio::test]
    async fn test_auth_token() {
        let app = app(Some("http://127.0.0.1:5071/callback?token=tk-1"));

        let body = call(&app, "POST", "/api/identity/auth_token", Some(json!({}))).await;
        assert!(body["data"]["token"].is_null());

        let body = call(
            &app,
            "POST",
            "/api/identity/auth_token",
            Some(json!({"interactive": true})),
        )
        .await;
        assert_eq!(body["data"]["token"], "tk-1");
    }

    #[tokio::test]
    async fn test_auth_flow_error_maps_to_errno() {
        let app = app(Some(
            "http://127.0.0.1:5071/callback?error=access_denied&error_description=User+cancelled",
        ));

        let body = call(
            &app,
            "POST",
            "/api/identity/auth_token",
            Some(json!({"interactive": true})),
        )
        .await;
        assert_eq!(body["errno"], 401);
        assert_eq!(body["error"], "User cancelled");
        assert!(body["data"].is_null());
    }
}
