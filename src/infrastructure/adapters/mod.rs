//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod identity;
pub mod net;
pub mod voices;

pub use identity::*;
pub use net::*;
pub use voices::*;
