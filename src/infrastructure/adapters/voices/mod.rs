//! 音色来源适配器

mod composite;
mod google_translate;
mod http_catalog;
mod static_provider;

pub use composite::CompositeVoiceProvider;
pub use google_translate::{GoogleTranslateVoiceProvider, VOICE_NAME_PREFIX};
pub use http_catalog::HttpVoiceCatalog;
pub use static_provider::StaticVoiceProvider;
