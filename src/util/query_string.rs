//! Query String 编解码

use std::collections::HashMap;

use crate::application::ApplicationError;

/// 解析结果：没有 `=` 的键值为 None
pub type QueryMap = HashMap<String, Option<String>>;

/// 解析以 `?` 开头的 query string
///
/// `+` 视为空格，键和值都做百分号解码；`a=b=c` 只取 `b`，
/// 重复的键以最后一次出现为准，空片段被跳过
pub fn parse_query_string(search: &str) -> Result<QueryMap, ApplicationError> {
    let Some(query) = search.strip_prefix('?') else {
        return Err(ApplicationError::invalid_argument(
            "query string must start with '?'",
        ));
    };

    let query = query.replace('+', "%20");
    let mut result = QueryMap::new();

    for tuple in query.split('&').filter(|t| !t.is_empty()) {
        let mut tokens = tuple.split('=');
        let key = decode_component(tokens.next().unwrap_or_default())?;
        let value = tokens.next().map(decode_component).transpose()?;
        result.insert(key, value);
    }

    Ok(result)
}

/// 从完整 URL 中取出第一个 `?` 之后的部分并解析
pub fn parse_url_query(url: &str) -> Result<QueryMap, ApplicationError> {
    match url.find('?') {
        Some(index) => parse_query_string(&url[index..]),
        None => Err(ApplicationError::invalid_argument(format!(
            "no query string in {}",
            url.chars().take(100).collect::<String>()
        ))),
    }
}

/// 编码为 `k=v&k=v`
pub fn url_encode<I, K, V>(data: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    data.into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(component: &str) -> Result<String, ApplicationError> {
    urlencoding::decode(component)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ApplicationError::invalid_argument(format!("malformed component: {}", e)))
}
