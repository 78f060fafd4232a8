use std::collections::HashMap;
use std::sync::LazyLock;

/// Language names and short codes accepted from clients, mapped to provider codes.
pub static LANG_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("malay", "ms"),
        ("ms", "ms"),
        ("english", "en"),
        ("en", "en"),
        ("mandarin", "zh-CN"),
        ("zh", "zh-CN"),
        ("tamil", "ta"),
        ("ta", "ta"),
    ])
});

/// Case-insensitive lookup in `LANG_MAP`. Unknown input is returned verbatim.
pub fn normalize_lang(lang: &str) -> String {
    match LANG_MAP.get(lang.to_lowercase().as_str()) {
        Some(code) => (*code).to_string(),
        None => lang.to_string(),
    }
}
