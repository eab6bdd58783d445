//! HTTP Client - 通用 GET / POST
//!
//! 只有 HTTP 200 视为成功，其他状态码返回 FetchFailed（携带状态码和响应体），
//! 不做自动重试

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::application::ApplicationError;
use crate::util::{url_encode, Deadline};

/// 响应体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    #[default]
    Text,
    Bytes,
    Json,
}

/// 响应体
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Text(String),
    Bytes(Vec<u8>),
    Json(Value),
}

impl ResponseBody {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// GET 请求
#[derive(Debug, Clone, Default)]
pub struct GetRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub response_type: ResponseType,
}

impl GetRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }
}

impl From<&str> for GetRequest {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for GetRequest {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// POST 请求体编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostEncoding {
    #[default]
    FormUrlEncoded,
    Json,
}

impl PostEncoding {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
        }
    }
}

/// HTTP 客户端配置
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// 请求超时时间（秒），0 表示不限制
    pub timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// HTTP 客户端
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// 创建新的 HTTP 客户端
    pub fn new(config: HttpClientConfig) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .user_agent(concat!("readaloud/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::fetch_failed("", None, format!("client init: {}", e)))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, ApplicationError> {
        Self::new(HttpClientConfig::default())
    }

    /// GET 请求，接受 URL 字符串或 [`GetRequest`]
    pub async fn get(&self, request: impl Into<GetRequest>) -> Result<ResponseBody, ApplicationError> {
        let request = request.into();
        let client = self.client.clone();
        let url = request.url.clone();

        self.bounded(&url, async move {
            let headers = build_headers(&request.headers)?;

            tracing::debug!(url = %request.url, "Sending GET request");

            let response = client
                .get(&request.url)
                .headers(headers)
                .send()
                .await
                .map_err(|e| ApplicationError::fetch_failed(&request.url, None, e.to_string()))?;

            let status = response.status();
            if status != reqwest::StatusCode::OK {
                let detail = response.text().await.unwrap_or_default();
                return Err(ApplicationError::fetch_failed(
                    &request.url,
                    Some(status.as_u16()),
                    detail,
                ));
            }

            let read_err =
                |e: reqwest::Error| ApplicationError::fetch_failed(&request.url, Some(200), e.to_string());

            let body = match request.response_type {
                ResponseType::Text => ResponseBody::Text(response.text().await.map_err(read_err)?),
                ResponseType::Bytes => {
                    ResponseBody::Bytes(response.bytes().await.map_err(read_err)?.to_vec())
                }
                ResponseType::Json => {
                    ResponseBody::Json(response.json::<Value>().await.map_err(read_err)?)
                }
            };

            Ok(body)
        })
        .await
    }

    /// POST 请求，返回响应文本
    pub async fn post(
        &self,
        url: &str,
        payload: &Map<String, Value>,
        encoding: PostEncoding,
    ) -> Result<String, ApplicationError> {
        let body = match encoding {
            PostEncoding::FormUrlEncoded => url_encode(
                payload
                    .iter()
                    .map(|(key, value)| (key.as_str(), form_value(value))),
            ),
            PostEncoding::Json => serde_json::to_string(payload)
                .map_err(|e| ApplicationError::invalid_argument(e.to_string()))?,
        };

        let client = self.client.clone();
        let target = url.to_string();

        self.bounded(url, async move {
            let url = target;
            tracing::debug!(url = %url, content_type = encoding.content_type(), "Sending POST request");

            let response = client
                .post(&url)
                .header(CONTENT_TYPE, encoding.content_type())
                .body(body)
                .send()
                .await
                .map_err(|e| ApplicationError::fetch_failed(&url, None, e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApplicationError::fetch_failed(&url, Some(status.as_u16()), e.to_string()))?;

            if status != reqwest::StatusCode::OK {
                return Err(ApplicationError::fetch_failed(&url, Some(status.as_u16()), text));
            }

            Ok(text)
        })
        .await
    }

    /// 按配置的超时包装请求
    async fn bounded<F, T>(&self, url: &str, operation: F) -> Result<T, ApplicationError>
    where
        F: std::future::Future<Output = Result<T, ApplicationError>> + Send + 'static,
        T: Send + 'static,
    {
        if self.config.timeout_secs == 0 {
            return operation.await;
        }

        Deadline::new(
            Duration::from_secs(self.config.timeout_secs),
            format!("Request timed out: {}", url.chars().take(100).collect::<String>()),
        )
        .run(operation)
        .await
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap, ApplicationError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApplicationError::invalid_argument(format!("header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApplicationError::invalid_argument(format!("header value: {}", e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// 表单字段值：字符串原样，其他类型取 JSON 文本
fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap as AxumHeaders, StatusCode},
        routing::{get, post},
        Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/text", get(|| async { "hello" }))
            .route("/json", get(|| async { axum::Json(json!({"voices": 2})) }))
            .route(
                "/echo-header",
                get(|headers: AxumHeaders| async move {
                    headers
                        .get("x-client-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                }),
            )
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "no such voice") }))
            .route(
                "/created",
                get(|| async { (StatusCode::CREATED, "created is not ok") }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    "late"
                }),
            )
            .route(
                "/echo",
                post(|headers: AxumHeaders, body: String| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    format!("{}|{}", content_type, body)
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_get_text_from_string_url() {
        let base = spawn_server().await;
        let client = HttpClient::with_default_config().unwrap();

        let body = client.get(format!("{}/text", base)).await.unwrap();
        assert_eq!(body.into_text().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_get_json_with_headers() {
        let base = spawn_server().await;
        let client = HttpClient::with_default_config().unwrap();

        let body = client
            .get(GetRequest::new(format!("{}/json", base)).response_type(ResponseType::Json))
            .await
            .unwrap();
        assert_eq!(body.into_json(), Some(json!({"voices": 2})));

        let body = client
            .get(GetRequest::new(format!("{}/echo-header", base)).header("x-client-id", "Ab3dE9xZ"))
            .await
            .unwrap();
        assert_eq!(body, ResponseBody::Text("Ab3dE9xZ".to_string()));
    }

    #[tokio::test]
    async fn test_get_non_200_fails_with_detail() {
        let base = spawn_server().await;
        let client = HttpClient::with_default_config().unwrap();

        for (path, expected_status, expected_detail) in [
            ("/missing", 404, "no such voice"),
            ("/created", 201, "created is not ok"),
        ] {
            let err = client.get(format!("{}{}", base, path)).await.unwrap_err();
            match err {
                ApplicationError::FetchFailed { status, detail, .. } => {
                    assert_eq!(status, Some(expected_status));
                    assert_eq!(detail, expected_detail);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_get_times_out() {
        let base = spawn_server().await;
        let client = HttpClient::new(HttpClientConfig { timeout_secs: 1 }).unwrap();

        let err = client.get(format!("{}/slow", base)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::TimeoutExceeded(_)));
    }

    #[tokio::test]
    async fn test_post_form_and_json() {
        let base = spawn_server().await;
        let client = HttpClient::with_default_config().unwrap();

        let mut payload = Map::new();
        payload.insert("text".to_string(), json!("hi there"));
        payload.insert("rate".to_string(), json!(1.5));

        let echoed = client
            .post(&format!("{}/echo", base), &payload, PostEncoding::default())
            .await
            .unwrap();
        assert_eq!(echoed, "application/x-www-form-urlencoded|rate=1.5&text=hi%20there");

        let echoed = client
            .post(&format!("{}/echo", base), &payload, PostEncoding::Json)
            .await
            .unwrap();
        let (content_type, body) = echoed.split_once('|').unwrap();
        assert_eq!(content_type, "application/json");
        assert_eq!(serde_json::from_str::<Value>(body).unwrap(), json!({"text": "hi there", "rate": 1.5}));
    }

    #[tokio::test]
    async fn test_post_non_200_fails() {
        let base = spawn_server().await;
        let client = HttpClient::with_default_config().unwrap();

        let err = client
            .post(&format!("{}/missing", base), &Map::new(), PostEncoding::Json)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::FetchFailed { status: Some(405), .. }));
    }
}
