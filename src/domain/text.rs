//! 文本工具
//!
//! 朗读前的文本清理：截断重复字符、HTML 实体转义

/// HTML 实体映射表
pub const ENTITY_MAP: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('/', "&#x2F;"),
    ('`', "&#x60;"),
    ('=', "&#x3D;"),
];

/// 查找字符对应的 HTML 实体
#[inline]
pub fn entity_for(ch: char) -> Option<&'static str> {
    ENTITY_MAP
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, entity)| *entity)
}

/// 按实体表转义文本
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match entity_for(ch) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(ch),
        }
    }
    escaped
}

/// 截断重复字符
///
/// 连续相同字符最多保留 `max` 个，如 "!!!!!!" 在 max=3 时变成 "!!!"。
/// max 为 0 时按 1 处理。
pub fn truncate_repeated_chars(text: &str, max: usize) -> String {
    let max = max.max(1);
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut count = 0usize;

    for ch in text.chars() {
        if prev == Some(ch) {
            count += 1;
        } else {
            prev = Some(ch);
            count = 1;
        }

        if count <= max {
            result.push(ch);
        }
    }

    result
}
