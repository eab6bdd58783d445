//! HTTP Voice Catalog - 从远程服务拉取音色列表
//!
//! 响应体可以是音色数组，也可以是 `{"voices": [...]}`

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{VoiceProviderError, VoiceProviderPort};
use crate::domain::voice::Voice;
use crate::infrastructure::adapters::net::{GetRequest, HttpClient, ResponseType};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogResponse {
    List(Vec<Voice>),
    Wrapped { voices: Vec<Voice> },
}

impl CatalogResponse {
    fn into_voices(self) -> Vec<Voice> {
        match self {
            Self::List(voices) | Self::Wrapped { voices } => voices,
        }
    }
}

/// HTTP Voice Catalog
pub struct HttpVoiceCatalog {
    client: HttpClient,
    url: String,
}

impl HttpVoiceCatalog {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VoiceProviderPort for HttpVoiceCatalog {
    async fn get_voices(&self) -> Result<Vec<Voice>, VoiceProviderError> {
        let body = self
            .client
            .get(GetRequest::new(self.url.as_str()).response_type(ResponseType::Json))
            .await?;

        let value = body
            .into_json()
            .ok_or_else(|| VoiceProviderError::InvalidResponse("expected JSON body".to_string()))?;

        let voices = serde_json::from_value::<CatalogResponse>(value)
            .map_err(|e| VoiceProviderError::InvalidResponse(e.to_string()))?
            .into_voices();

        tracing::info!(url = %self.url, voices = voices.len(), "Remote voice catalog loaded");
        Ok(voices)
    }

    fn name(&self) -> &str {
        "http_catalog"
    }
}
