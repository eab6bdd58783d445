//! Identity HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetAuthToken, GetUniqueClientId};
use crate::infrastructure::http::dto::{
    ApiResponse, AuthTokenRequest, AuthTokenResponse, ClientIdResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取客户端 ID
pub async fn get_client_id(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ClientIdResponse>>, ApiError> {
    let client_id = state
        .get_unique_client_id_handler
        .handle(GetUniqueClientId)
        .await?;
    Ok(Json(ApiResponse::success(ClientIdResponse { client_id })))
}

/// 获取登录 token
///
/// interactive 为 true 且没有已保存 token 时会阻塞到登录完成或超时
pub async fn get_auth_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuthTokenRequest>,
) -> Result<Json<ApiResponse<AuthTokenResponse>>, ApiError> {
    let token = state
        .get_auth_token_handler
        .handle(GetAuthToken {
            interactive: req.interactive,
        })
        .await?;
    Ok(Json(ApiResponse::success(AuthTokenResponse { token })))
}
