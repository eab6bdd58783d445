//! Read Aloud - 朗读扩展的后台逻辑
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 语言标签解析、音色分级匹配
//! - Settings Context: 设置键和部分设置视图
//! - 文本工具: HTML 转义、重复字符截断
//!
//! 应用层 (application/):
//! - Ports: SettingsStore, VoiceProvider, Identity
//! - Commands: 设置写入、客户端 ID、登录 token
//! - Queries: 设置读取、音色解析
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 本地 RESTful API
//! - Memory / Persistence: 内存和 Sled 设置存储
//! - Adapters: 音色来源、HTTP 客户端、本地回调登录
//!
//! 工具 (util/): query string 编解码、带截止时间的异步操作

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use config::{load_config, AppConfig};
