//! Deadline - 带超时的异步操作
//!
//! 操作在独立任务中运行，与截止时间竞争：
//! - 操作先完成：返回操作本身的结果
//! - 截止时间先到：返回 TimeoutExceeded，并取消 token
//!
//! 超时后操作不会被强制中止，它可以继续运行直到结束，结果被丢弃。
//! 需要提前停止的操作可以观察 [`Deadline::token`]。

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ApplicationError;

/// 截止时间
#[derive(Debug, Clone)]
pub struct Deadline {
    timeout: Duration,
    message: String,
    token: CancellationToken,
}

impl Deadline {
    pub fn new(timeout: Duration, message: impl Into<String>) -> Self {
        Self {
            timeout,
            message: message.into(),
            token: CancellationToken::new(),
        }
    }

    pub fn from_millis(millis: u64, message: impl Into<String>) -> Self {
        Self::new(Duration::from_millis(millis), message)
    }

    /// 超时时被取消的 token
    pub fn token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 在截止时间内运行操作
    pub async fn run<F, T, E>(self, operation: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: From<ApplicationError> + Send + 'static,
    {
        let mut handle = tokio::spawn(operation);

        tokio::select! {
            joined = &mut handle => match joined {
                Ok(result) => result,
                Err(e) => Err(ApplicationError::timeout(format!(
                    "{} (task failed: {})",
                    self.message, e
                ))
                .into()),
            },
            _ = tokio::time::sleep(self.timeout) => {
                // 只通知，不 abort：丢弃 handle 后任务继续在后台运行
                self.token.cancel();
                tracing::debug!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    message = %self.message,
                    "Deadline exceeded"
                );
                Err(ApplicationError::timeout(self.message).into())
            }
        }
    }
}

/// 便捷函数：毫秒超时
pub async fn with_timeout<F, T>(
    millis: u64,
    message: impl Into<String>,
    operation: F,
) -> Result<T, ApplicationError>
where
    F: Future<Output = Result<T, ApplicationError>> + Send + 'static,
    T: Send + 'static,
{
    Deadline::from_millis(millis, message).run(operation).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_completes_before_deadline() {
        let result = with_timeout(1000, "too slow", async { Ok::<_, ApplicationError>(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_propagates_operation_error() {
        let result: Result<(), _> = with_timeout(1000, "too slow", async {
            Err(ApplicationError::invalid_argument("bad"))
        })
        .await;
        assert!(matches!(result, Err(ApplicationError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_times_out_with_message() {
        let result = with_timeout(20, "voice catalog timed out", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, ApplicationError>(())
        })
        .await;

        match result {
            Err(ApplicationError::TimeoutExceeded(msg)) => assert_eq!(msg, "voice catalog timed out"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_operation_keeps_running_after_timeout() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let result = with_timeout(10, "timeout", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, ApplicationError>(())
        })
        .await;
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_token_cancelled_on_timeout() {
        let deadline = Deadline::from_millis(10, "timeout");
        let token = deadline.token();
        let observed = token.clone();

        let result: Result<(), ApplicationError> = deadline
            .run(async move {
                token.cancelled().await;
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert!(observed.is_cancelled());
    }
}
