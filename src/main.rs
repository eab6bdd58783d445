//! Read Aloud - 本地后台服务
//!
//! 启动顺序: 配置 -> 日志 -> 设置存储 -> 音色来源 -> 登录回调 -> HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use readaloud::application::VoiceProviderPort;
use readaloud::config::{load_config, print_config, AppConfig};
use readaloud::infrastructure::adapters::{
    CompositeVoiceProvider, GoogleTranslateVoiceProvider, HttpClient, HttpClientConfig,
    HttpVoiceCatalog, LoopbackAuthConfig, LoopbackAuthFlow,
};
use readaloud::infrastructure::http::{AppState, HttpServer, ServerConfig};
use readaloud::infrastructure::persistence::sled::{SledSettingsStore, SledStoreConfig};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},readaloud={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_voice_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn VoiceProviderPort>> {
    let mut providers: Vec<Arc<dyn VoiceProviderPort>> =
        vec![Arc::new(GoogleTranslateVoiceProvider::new())];

    if let Some(url) = config.voices.catalog_endpoint(&config.service.service_url) {
        let client = HttpClient::new(HttpClientConfig {
            timeout_secs: config.voices.timeout_secs,
        })?;
        providers.push(Arc::new(HttpVoiceCatalog::new(client, url)));
    }

    Ok(Arc::new(CompositeVoiceProvider::new(providers)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Read Aloud background service");
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.storage.settings_path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let store = SledSettingsStore::new(&SledStoreConfig {
        db_path: config.storage.settings_path.clone(),
    })?
    .arc();

    let voice_provider = build_voice_provider(&config)?;

    let identity = Arc::new(LoopbackAuthFlow::new(LoopbackAuthConfig {
        host: config.server.host.clone(),
        callback_port: config.auth.callback_port,
        login_timeout: Duration::from_secs(config.auth.login_timeout_secs),
    }));

    let state = AppState::new(
        store.clone(),
        voice_provider,
        identity,
        config.service.web_app_url.clone(),
    );

    let server = HttpServer::new(
        ServerConfig::new(&config.server.host, config.server.port),
        state,
    );

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    store.flush()?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
