//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SettingsStore、VoiceProvider、Identity）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Identity commands
    GetAuthToken,
    GetUniqueClientId,
    // Settings commands
    SetState,
    UpdateSettings,
    // Handlers
    handlers::{GetAuthTokenHandler, GetUniqueClientIdHandler, SetStateHandler, UpdateSettingsHandler},
};

pub use error::{assert_that, ApplicationError};

pub use ports::{
    // Identity
    IdentityError,
    IdentityPort,
    // Settings store
    SettingsStorePort,
    StoreError,
    // Voice provider
    VoiceProviderError,
    VoiceProviderPort,
};

pub use queries::{
    // Settings queries
    GetSettings,
    // Voice queries
    GetSpeechVoice,
    ListVoices,
    // Handlers
    handlers::{GetSettingsHandler, GetSpeechVoiceHandler, ListVoicesHandler},
};
