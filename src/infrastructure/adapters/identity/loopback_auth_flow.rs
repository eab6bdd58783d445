//! Loopback Auth Flow - 本地回调登录
//!
//! 登录页面在浏览器中打开，身份服务登录完成后重定向到
//! `http://{host}:{port}/callback?...`，本地监听器收到请求后把完整 URL 交回调用方。
//! 每次登录临时启动监听器，结束或超时后关闭。

use async_trait::async_trait;
use axum::{extract::RawQuery, extract::State, response::Html, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{IdentityError, IdentityPort};
use crate::application::ApplicationError;
use crate::util::Deadline;

const CALLBACK_PATH: &str = "/callback";

const CALLBACK_PAGE: &str =
    "<!doctype html><html><body><p>Login complete. You may close this window.</p></body></html>";

/// 本地回调配置
#[derive(Debug, Clone)]
pub struct LoopbackAuthConfig {
    pub host: String,
    pub callback_port: u16,
    pub login_timeout: Duration,
}

impl Default for LoopbackAuthConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            callback_port: 5071,
            login_timeout: Duration::from_secs(300),
        }
    }
}

#[derive(Clone)]
struct CallbackState {
    redirect_url: String,
    sender: Arc<Mutex<Option<oneshot::Sender<String>>>>,
}

/// Loopback Auth Flow
pub struct LoopbackAuthFlow {
    config: LoopbackAuthConfig,
}

impl LoopbackAuthFlow {
    pub fn new(config: LoopbackAuthConfig) -> Self {
        Self { config }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.callback_port)
    }

    async fn wait_for_callback(&self, url: &str) -> Result<String, ApplicationError> {
        let listener = TcpListener::bind(self.bind_addr())
            .await
            .map_err(|e| ApplicationError::auth_flow(format!("callback listener: {}", e)))?;

        let (tx, rx) = oneshot::channel();
        let state = CallbackState {
            redirect_url: self.redirect_url(),
            sender: Arc::new(Mutex::new(Some(tx))),
        };
        let router = Router::new()
            .route(CALLBACK_PATH, get(callback))
            .with_state(state);

        let shutdown = CancellationToken::new();
        let server_shutdown = shutdown.clone();
        tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(server_shutdown.cancelled_owned())
                .await;
            if let Err(e) = result {
                tracing::warn!(error = %e, "Callback listener stopped");
            }
        });

        tracing::info!(login_url = %url, "Open the login page in a browser to continue");

        let result = Deadline::new(self.config.login_timeout, "Login timed out")
            .run(async move {
                rx.await
                    .map_err(|_| ApplicationError::auth_flow("Callback listener closed"))
            })
            .await;

        shutdown.cancel();
        result
    }
}

async fn callback(State(state): State<CallbackState>, RawQuery(query): RawQuery) -> Html<&'static str> {
    let url = match query {
        Some(query) => format!("{}?{}", state.redirect_url, query),
        None => state.redirect_url.clone(),
    };

    if let Some(sender) = state.sender.lock().await.take() {
        tracing::debug!("Login callback received");
        let _ = sender.send(url);
    }

    Html(CALLBACK_PAGE)
}

#[async_trait]
impl IdentityPort for LoopbackAuthFlow {
    fn redirect_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.config.host, self.config.callback_port, CALLBACK_PATH
        )
    }

    async fn launch_web_auth_flow(
        &self,
        url: &str,
        interactive: bool,
    ) -> Result<Option<String>, IdentityError> {
        if !interactive {
            return Ok(None);
        }

        match self.wait_for_callback(url).await {
            Ok(redirected) => Ok(Some(redirected)),
            Err(ApplicationError::TimeoutExceeded(msg)) => Err(IdentityError::Timeout(msg)),
            Err(e) => Err(IdentityError::LaunchFailed(e.to_string())),
        }
    }
}
