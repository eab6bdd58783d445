//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod identity;
mod settings_store;
mod voice_provider;

pub use identity::{IdentityError, IdentityPort};
pub use settings_store::{SettingsStorePort, StoreError};
pub use voice_provider::{VoiceProviderError, VoiceProviderPort};
