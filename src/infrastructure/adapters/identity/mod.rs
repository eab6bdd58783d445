//! 身份适配器

mod loopback_auth_flow;

pub use loopback_auth_flow::{LoopbackAuthConfig, LoopbackAuthFlow};
