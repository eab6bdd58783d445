//! Identity Port - 交互式登录
//!
//! 打开外部登录页面，等待身份服务把浏览器重定向回 `redirect_url()`

use async_trait::async_trait;
use thiserror::Error;

/// Identity 错误
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Identity flow unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    LaunchFailed(String),

    #[error("{0}")]
    Timeout(String),
}

/// Identity Port
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// 登录完成后的重定向地址
    fn redirect_url(&self) -> String;

    /// 启动登录流程
    ///
    /// 返回重定向后的完整 URL；用户关闭流程或不支持时返回 None
    async fn launch_web_auth_flow(
        &self,
        url: &str,
        interactive: bool,
    ) -> Result<Option<String>, IdentityError>;
}
