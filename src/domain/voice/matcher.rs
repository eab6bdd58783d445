//! Voice Matcher - 按语言挑选音色
//!
//! 六档优先级，数值越小越优先；每档只保留第一个遇到的音色，
//! 最终返回最小的非空档位。

use super::{parse_lang, LanguageTag, Voice};

/// 匹配档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// 方言一致，女声
    ExactDialectFemale = 1,
    /// 方言一致
    ExactDialect = 2,
    /// 音色未声明方言
    LanguageOnly = 3,
    /// 方言不一致，但音色是 en-US
    UsEnglishFallback = 4,
    /// 音色未声明语言，视为可朗读任意语言
    LanguageAgnostic = 5,
    /// 方言不一致
    DialectMismatch = 6,
}

impl MatchTier {
    pub const ALL: [MatchTier; 6] = [
        MatchTier::ExactDialectFemale,
        MatchTier::ExactDialect,
        MatchTier::LanguageOnly,
        MatchTier::UsEnglishFallback,
        MatchTier::LanguageAgnostic,
        MatchTier::DialectMismatch,
    ];

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    fn slot(&self) -> usize {
        (self.rank() - 1) as usize
    }

    /// 计算音色相对请求语言的档位，语言不同时返回 None
    pub fn classify(voice: &Voice, requested: &LanguageTag) -> Option<Self> {
        let Some(voice_lang) = voice.language_tag() else {
            return Some(Self::LanguageAgnostic);
        };

        if voice_lang.lang != requested.lang {
            return None;
        }

        let tier = if voice_lang.rest == requested.rest {
            if voice.is_female() {
                Self::ExactDialectFemale
            } else {
                Self::ExactDialect
            }
        } else if voice_lang.has_no_dialect() {
            Self::LanguageOnly
        } else if voice_lang.is_english() && voice_lang.has_dialect("us") {
            Self::UsEnglishFallback
        } else {
            Self::DialectMismatch
        };

        Some(tier)
    }
}

/// 按名称精确查找，返回第一个匹配
pub fn find_voice_by_name<'a>(voices: &'a [Voice], name: &str) -> Option<&'a Voice> {
    voices.iter().find(|voice| voice.voice_name == name)
}

/// 按语言查找最合适的音色
pub fn find_voice_by_lang<'a, I>(voices: I, lang: &str) -> Option<&'a Voice>
where
    I: IntoIterator<Item = &'a Voice>,
{
    find_voice_with_tier(voices, lang).map(|(voice, _)| voice)
}

/// 同 [`find_voice_by_lang`]，同时返回命中的档位
pub fn find_voice_with_tier<'a, I>(voices: I, lang: &str) -> Option<(&'a Voice, MatchTier)>
where
    I: IntoIterator<Item = &'a Voice>,
{
    let requested = parse_lang(lang);
    let mut slots: [Option<&'a Voice>; 6] = [None; 6];

    for voice in voices {
        if let Some(tier) = MatchTier::classify(voice, &requested) {
            slots[tier.slot()].get_or_insert(voice);
        }
    }

    MatchTier::ALL
        .iter()
        .find_map(|tier| slots[tier.slot()].map(|voice| (voice, *tier)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::Gender;

    fn voice(name: &str, lang: Option<&str>) -> Voice {
        Voice::new(name, lang)
    }

    #[test]
    fn test_exact_dialect_female_beats_earlier_voice() {
        let voices = vec![
            voice("gb", Some("en-GB")).with_gender(Gender::Male),
            voice("us", Some("en-US")).with_gender(Gender::Female),
        ];

        let (found, tier) = find_voice_with_tier(&voices, "en-US").unwrap();
        assert_eq!(found.voice_name, "us");
        assert_eq!(tier, MatchTier::ExactDialectFemale);
    }

    #[test]
    fn test_blank_lang_voice_is_language_agnostic() {
        let voices = vec![voice("fr", Some("fr-FR")), voice("blank", Some(""))];

        let (found, tier) = find_voice_with_tier(&voices, "en-US").unwrap();
        assert_eq!(found.voice_name, "blank");
        assert_eq!(tier.rank(), 5);
    }

    #[test]
    fn test_no_match_for_other_language() {
        let voices = vec![voice("fr", Some("fr-FR"))];
        assert!(find_voice_by_lang(&voices, "en-US").is_none());
    }

    #[test]
    fn test_wrong_dialect_is_last_resort() {
        let voices = vec![voice("gb", Some("en-GB"))];

        let (found, tier) = find_voice_with_tier(&voices, "en-US").unwrap();
        assert_eq!(found.voice_name, "gb");
        assert_eq!(tier, MatchTier::DialectMismatch);
    }

    #[test]
    fn test_us_english_fallback_for_other_english_request() {
        let voices = vec![voice("au", Some("en-AU")), voice("us", Some("en-US"))];

        let (found, tier) = find_voice_with_tier(&voices, "en-GB").unwrap();
        assert_eq!(found.voice_name, "us");
        assert_eq!(tier, MatchTier::UsEnglishFallback);
    }

    #[test]
    fn test_us_fallback_only_applies_to_english() {
        // es-US 不享受 en-US 的回退优先级
        let voices = vec![voice("us", Some("es-US")), voice("mx", Some("es-MX"))];

        let (found, tier) = find_voice_with_tier(&voices, "es-ES").unwrap();
        assert_eq!(found.voice_name, "us");
        assert_eq!(tier, MatchTier::DialectMismatch);
    }

    #[test]
    fn test_language_only_voice_beats_us_fallback() {
        let voices = vec![voice("us", Some("en-US")), voice("en", Some("en"))];

        let (found, tier) = find_voice_with_tier(&voices, "en-IN").unwrap();
        assert_eq!(found.voice_name, "en");
        assert_eq!(tier, MatchTier::LanguageOnly);
    }

    #[test]
    fn test_language_agnostic_voice_qualifies_for_any_request() {
        let voices = vec![voice("fr", Some("fr-FR")), voice("any", None)];

        let (found, tier) = find_voice_with_tier(&voices, "ja-JP").unwrap();
        assert_eq!(found.voice_name, "any");
        assert_eq!(tier, MatchTier::LanguageAgnostic);
    }

    #[test]
    fn test_language_agnostic_beats_dialect_mismatch() {
        let voices = vec![voice("pt", Some("pt-PT")), voice("any", None)];
        assert_eq!(find_voice_by_lang(&voices, "pt-BR").unwrap().voice_name, "any");
    }

    #[test]
    fn test_first_voice_wins_within_tier() {
        let voices = vec![
            voice("first", Some("de-DE")),
            voice("second", Some("de-DE")),
        ];
        assert_eq!(find_voice_by_lang(&voices, "de-DE").unwrap().voice_name, "first");
    }

    #[test]
    fn test_bare_request_matches_bare_voice_exactly() {
        let voices = vec![
            voice("de-at", Some("de-AT")),
            voice("de", Some("de")).with_gender(Gender::Female),
        ];

        let (found, tier) = find_voice_with_tier(&voices, "de").unwrap();
        assert_eq!(found.voice_name, "de");
        assert_eq!(tier, MatchTier::ExactDialectFemale);
    }

    #[test]
    fn test_matching_is_case_and_separator_insensitive() {
        let voices = vec![voice("zh", Some("zh_CN"))];
        assert!(find_voice_by_lang(&voices, "ZH-cn").is_some());
    }

    #[test]
    fn test_only_matching_language_or_agnostic_returned() {
        let voices = vec![
            voice("fr", Some("fr-FR")),
            voice("it", Some("it-IT")),
            voice("en", Some("en-GB")),
        ];
        for request in ["en-US", "fr", "it-CH", "ko-KR"] {
            if let Some(found) = find_voice_by_lang(&voices, request) {
                let found_lang = found.language_tag().unwrap().lang;
                assert_eq!(found_lang, parse_lang(request).lang);
            }
        }
    }

    #[test]
    fn test_find_voice_by_name() {
        let voices = vec![voice("Samantha", Some("en-US")), voice("Samantha", Some("en-GB"))];

        let found = find_voice_by_name(&voices, "Samantha").unwrap();
        assert_eq!(found.lang.as_deref(), Some("en-US"));
        assert!(find_voice_by_name(&voices, "Daniel").is_none());
    }

    #[test]
    fn test_tier_ranks_are_ordered() {
        let ranks: Vec<u8> = MatchTier::ALL.iter().map(MatchTier::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
        assert!(MatchTier::LanguageAgnostic < MatchTier::DialectMismatch);
    }
}
