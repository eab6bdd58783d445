//! Composite Voice Provider - 合并多个音色来源
//!
//! 并发获取所有来源，按来源顺序拼接；任一来源失败则整体失败

use async_trait::async_trait;
use futures_util::future::try_join_all;
use std::sync::Arc;

use crate::application::ports::{VoiceProviderError, VoiceProviderPort};
use crate::domain::voice::Voice;

/// Composite Voice Provider
pub struct CompositeVoiceProvider {
    providers: Vec<Arc<dyn VoiceProviderPort>>,
}

impl CompositeVoiceProvider {
    pub fn new(providers: Vec<Arc<dyn VoiceProviderPort>>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl VoiceProviderPort for CompositeVoiceProvider {
    async fn get_voices(&self) -> Result<Vec<Voice>, VoiceProviderError> {
        let lists = try_join_all(self.providers.iter().map(|p| p.get_voices())).await?;
        let voices: Vec<Voice> = lists.into_iter().flatten().collect();

        tracing::debug!(
            providers = self.providers.len(),
            voices = voices.len(),
            "Voice catalog assembled"
        );

        Ok(voices)
    }

    fn name(&self) -> &str {
        "composite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::voices::StaticVoiceProvider;

    struct Broken;

    #[async_trait]
    impl VoiceProviderPort for Broken {
        async fn get_voices(&self) -> Result<Vec<Voice>, VoiceProviderError> {
            Err(VoiceProviderError::InvalidResponse("broken".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_concatenates_in_provider_order() {
        let provider = CompositeVoiceProvider::new(vec![
            Arc::new(StaticVoiceProvider::new(vec![Voice::new("a", Some("en"))])),
            Arc::new(StaticVoiceProvider::new(vec![
                Voice::new("b", Some("fr")),
                Voice::new("c", None),
            ])),
        ]);

        let names: Vec<String> = provider
            .get_voices()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.voice_name)
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_failure_propagates() {
        let provider = CompositeVoiceProvider::new(vec![
            Arc::new(StaticVoiceProvider::new(vec![Voice::new("a", Some("en"))])),
            Arc::new(Broken),
        ]);

        assert!(provider.get_voices().await.is_err());
    }

    #[tokio::test]
    async fn test_empty_composite() {
        let provider = CompositeVoiceProvider::new(Vec::new());
        assert!(provider.is_empty());
        assert!(provider.get_voices().await.unwrap().is_empty());
    }
}
