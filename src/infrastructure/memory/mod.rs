//! Memory Layer - In-Memory State
//!
//! 进程内的设置存储，用于测试和不需要持久化的场景

mod settings_store;

pub use settings_store::InMemorySettingsStore;
