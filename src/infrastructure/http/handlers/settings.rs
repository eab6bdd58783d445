//! Settings HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetSettings, SetState, UpdateSettings};
use crate::domain::settings::Settings;
use crate::infrastructure::http::dto::{ApiResponse, Empty, GetSettingsRequest, SetStateRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 读取设置
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetSettingsRequest>,
) -> Result<Json<ApiResponse<Settings>>, ApiError> {
    let settings = state
        .get_settings_handler
        .handle(GetSettings { keys: req.keys })
        .await?;
    Ok(Json(ApiResponse::success(settings)))
}

/// 合并写入设置
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .update_settings_handler
        .handle(UpdateSettings { settings })
        .await?;
    Ok(Json(ApiResponse::ok()))
}

/// 写入单个设置项
pub async fn set_state(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetStateRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .set_state_handler
        .handle(SetState {
            key: req.key,
            value: req.value,
        })
        .await?;
    Ok(Json(ApiResponse::ok()))
}
