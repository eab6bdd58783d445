//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod identity_commands;
mod settings_commands;

pub mod handlers;

pub use identity_commands::*;
pub use settings_commands::*;
