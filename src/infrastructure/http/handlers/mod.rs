//! HTTP Handlers

mod identity;
mod ping;
mod settings;
mod voice;

pub use identity::*;
pub use ping::*;
pub use settings::*;
pub use voice::*;
