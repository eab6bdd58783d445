//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetSpeechVoice, ListVoices};
use crate::domain::voice::Voice;
use crate::infrastructure::http::dto::{ApiResponse, ResolveVoiceRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有音色
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Voice>>>, ApiError> {
    let voices = state.list_voices_handler.handle(ListVoices).await?;
    Ok(Json(ApiResponse::success(voices)))
}

/// 按名称或语言解析音色，没有匹配时 data 为 null
pub async fn resolve_voice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResolveVoiceRequest>,
) -> Result<Json<ApiResponse<Option<Voice>>>, ApiError> {
    let query = GetSpeechVoice {
        voice_name: req.voice_name,
        lang: req.lang,
    };

    let voice = state.get_speech_voice_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(voice)))
}
