//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Voice Context: 音色与语言匹配
//! - Settings Context: 用户设置

pub mod settings;
pub mod voice;

// 共享的文本工具
mod text;

pub use text::{entity_for, escape_html, truncate_repeated_chars, ENTITY_MAP};
