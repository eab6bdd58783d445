//! 通用工具
//!
//! 无状态的辅助函数：query string 编解码、超时

pub mod query_string;
pub mod timeout;

pub use query_string::{parse_query_string, parse_url_query, url_encode, QueryMap};
pub use timeout::{with_timeout, Deadline};
