//! Identity Commands
//!
//! 两者都可能写入存储，因此放在命令侧

/// 获取安装级客户端 ID（首次调用时生成并保存）
#[derive(Debug, Clone, Copy)]
pub struct GetUniqueClientId;

/// 获取登录 token
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAuthToken {
    /// 没有已保存的 token 时是否启动交互式登录
    pub interactive: bool,
}
