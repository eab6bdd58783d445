//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GetAuthTokenHandler, GetUniqueClientIdHandler, SetStateHandler, UpdateSettingsHandler,
    // Query handlers
    GetSettingsHandler, GetSpeechVoiceHandler, ListVoicesHandler,
    // Ports
    IdentityPort, SettingsStorePort, VoiceProviderPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub store: Arc<dyn SettingsStorePort>,
    pub voice_provider: Arc<dyn VoiceProviderPort>,
    pub identity: Arc<dyn IdentityPort>,

    // ========== Command Handlers ==========
    pub update_settings_handler: UpdateSettingsHandler,
    pub set_state_handler: SetStateHandler,
    pub get_unique_client_id_handler: GetUniqueClientIdHandler,
    pub get_auth_token_handler: GetAuthTokenHandler,

    // ========== Query Handlers ==========
    pub get_settings_handler: GetSettingsHandler,
    pub get_speech_voice_handler: GetSpeechVoiceHandler,
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        store: Arc<dyn SettingsStorePort>,
        voice_provider: Arc<dyn VoiceProviderPort>,
        identity: Arc<dyn IdentityPort>,
        web_app_url: impl Into<String>,
    ) -> Self {
        Self {
            // Ports
            store: store.clone(),
            voice_provider: voice_provider.clone(),
            identity: identity.clone(),

            // Command handlers
            update_settings_handler: UpdateSettingsHandler::new(store.clone()),
            set_state_handler: SetStateHandler::new(store.clone()),
            get_unique_client_id_handler: GetUniqueClientIdHandler::new(store.clone()),
            get_auth_token_handler: GetAuthTokenHandler::new(
                store.clone(),
                identity.clone(),
                web_app_url,
            ),

            // Query handlers
            get_settings_handler: GetSettingsHandler::new(store.clone()),
            get_speech_voice_handler: GetSpeechVoiceHandler::new(voice_provider.clone()),
            list_voices_handler: ListVoicesHandler::new(voice_provider.clone()),
        }
    }
}
