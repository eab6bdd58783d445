//! Voice Queries

/// 解析朗读音色查询
///
/// 优先按名称精确匹配，其次按语言挑选
#[derive(Debug, Clone, Default)]
pub struct GetSpeechVoice {
    pub voice_name: Option<String>,
    pub lang: Option<String>,
}

impl GetSpeechVoice {
    pub fn new(voice_name: Option<&str>, lang: Option<&str>) -> Self {
        Self {
            voice_name: voice_name.map(str::to_string),
            lang: lang.map(str::to_string),
        }
    }
}

/// 列出所有音色查询
#[derive(Debug, Clone)]
pub struct ListVoices;
