//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod identity_handlers;
mod settings_handlers;

pub use identity_handlers::*;
pub use settings_handlers::*;
