//! Settings Context - 用户设置
//!
//! 设置由外部键值存储持有，这里只定义键名和类型化视图

mod value_objects;

pub use value_objects::{SettingKey, Settings, DEFAULT_RATE, DEFAULT_VOLUME};
