//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 语言标签解析
//! - 音色元数据
//! - 按名称 / 语言挑选音色

mod aggregate;
mod matcher;
mod value_objects;

pub use aggregate::Voice;
pub use matcher::{find_voice_by_lang, find_voice_by_name, find_voice_with_tier, MatchTier};
pub use value_objects::{parse_lang, Gender, LanguageTag, VoiceEngine};
