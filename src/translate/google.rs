use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::interface::TranslateInterface;
use crate::config::GoogleConfig;

const MAX_CHARS: usize = 5000;

/// Languages the Google engine accepts, as (english name, code).
const GOOGLE_LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("assamese", "as"),
    ("aymara", "ay"),
    ("azerbaijani", "az"),
    ("bambara", "bm"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bhojpuri", "bho"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-CN"),
    ("chinese (traditional)", "zh-TW"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dhivehi", "dv"),
    ("dogri", "doi"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("ewe", "ee"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("guarani", "gn"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("ilocano", "ilo"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("kinyarwanda", "rw"),
    ("konkani", "gom"),
    ("korean", "ko"),
    ("krio", "kri"),
    ("kurdish (kurmanji)", "ku"),
    ("kurdish (sorani)", "ckb"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lingala", "ln"),
    ("lithuanian", "lt"),
    ("luganda", "lg"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("maithili", "mai"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("meiteilon (manipuri)", "mni-Mtei"),
    ("mizo", "lus"),
    ("mongolian", "mn"),
    ("myanmar", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia (oriya)", "or"),
    ("oromo", "om"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("quechua", "qu"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("sanskrit", "sa"),
    ("scots gaelic", "gd"),
    ("sepedi", "nso"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("tatar", "tt"),
    ("telugu", "te"),
    ("thai", "th"),
    ("tigrinya", "ti"),
    ("tsonga", "ts"),
    ("turkish", "tr"),
    ("turkmen", "tk"),
    ("twi", "ak"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// Resolve a language code or english name to the code the engine expects.
pub fn resolve_language(lang: &str) -> Result<String> {
    if lang == "auto" || GOOGLE_LANGUAGES.iter().any(|(_, code)| *code == lang) {
        return Ok(lang.to_string());
    }

    let lower = lang.to_lowercase();
    GOOGLE_LANGUAGES
        .iter()
        .find(|(name, code)| *name == lower || code.to_lowercase() == lower)
        .map(|(_, code)| (*code).to_string())
        .ok_or_else(|| anyhow::anyhow!("{} --> No support for the provided language.", lang))
}

/// Concatenate the translated segments found at `[0][*][0]`.
pub fn parse_segments(json: &Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("Invalid translation response format: missing segments"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translated.is_empty() {
        anyhow::bail!("Empty translation received from Google");
    }
    Ok(translated)
}

/// Error-response body for logging, or why it could not be read.
fn describe_body(body: reqwest::Result<String>) -> String {
    match body {
        Ok(text) => text,
        Err(e) => format!("<unreadable body: {}>", e),
    }
}

/// Translator backed by the public Google Translate endpoint
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(config: &GoogleConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        info!(
            "Initialized GoogleTranslator: base_url={}, timeout_secs={:?}",
            config.base_url, config.timeout_secs
        );
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn request_translation(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = describe_body(response.text().await);
            warn!("Google Translate API error: {} - {}", status, body);
            anyhow::bail!("Translation service returned error: {}", status);
        }

        let json: Value = response.json().await?;
        parse_segments(&json)
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, anyhow::Error> {
        let source = resolve_language(source)?;
        let target = resolve_language(target)?;

        if text.chars().count() >= MAX_CHARS {
            anyhow::bail!("Text length need to be between 0 and {} characters", MAX_CHARS);
        }

        let text = text.trim();
        if text.is_empty() || source == target {
            debug!("Skipping request: empty text or same source and target ({})", target);
            return Ok(text.to_string());
        }

        self.request_translation(text, &source, &target).await
    }

    fn name(&self) -> &str {
        "google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    /// Serve `app` on an ephemeral port and return its base url.
    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn translator(base_url: &str) -> GoogleTranslator {
        GoogleTranslator::new(&GoogleConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[test]
    fn resolves_codes_and_names() {
        assert_eq!(resolve_language("de").unwrap(), "de");
        assert_eq!(resolve_language("German").unwrap(), "de");
        assert_eq!(resolve_language("zh-CN").unwrap(), "zh-CN");
        assert_eq!(resolve_language("zh-cn").unwrap(), "zh-CN");
        assert_eq!(resolve_language("auto").unwrap(), "auto");
    }

    #[test]
    fn rejects_unsupported_language() {
        let err = resolve_language("klingon").unwrap_err();
        assert_eq!(err.to_string(), "klingon --> No support for the provided language.");
    }

    #[test]
    fn parse_concatenates_all_segments() {
        let body = json!([[["Hallo. ", "Hello. ", null, null, 10], ["Wie geht's?", "How are you?", null, null, 10]], null, "en"]);
        assert_eq!(parse_segments(&body).unwrap(), "Hallo. Wie geht's?");
    }

    #[test]
    fn parse_rejects_malformed_bodies() {
        assert!(parse_segments(&json!({"error": "nope"})).is_err());
        assert!(parse_segments(&json!([[]])).is_err());
    }

    #[tokio::test]
    async fn empty_text_short_circuits() {
        // Unreachable base url: any network call would fail.
        let google = translator("http://127.0.0.1:9");
        assert_eq!(google.translate("   ", "en", "ta").await.unwrap(), "");
    }

    #[tokio::test]
    async fn same_language_returns_trimmed_text() {
        let google = translator("http://127.0.0.1:9");
        assert_eq!(google.translate(" Hello ", "english", "en").await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn over_length_text_fails() {
        let google = translator("http://127.0.0.1:9");
        let text = "a".repeat(MAX_CHARS + 1);
        let err = google.translate(&text, "en", "ta").await.unwrap_err();
        assert!(err.to_string().contains("between 0 and 5000 characters"));
    }

    #[tokio::test]
    async fn text_at_the_limit_fails() {
        let google = translator("http://127.0.0.1:9");
        let text = "a".repeat(MAX_CHARS);
        let err = google.translate(&text, "en", "en").await.unwrap_err();
        assert_eq!(err.to_string(), "Text length need to be between 0 and 5000 characters");
    }

    #[tokio::test]
    async fn text_below_the_limit_is_accepted() {
        let google = translator("http://127.0.0.1:9");
        let text = "a".repeat(MAX_CHARS - 1);
        assert_eq!(google.translate(&text, "en", "en").await.unwrap(), text);
    }

    #[tokio::test]
    async fn unreadable_body_is_described() {
        let err = reqwest::get("http://127.0.0.1:9").await.unwrap_err();
        let described = describe_body(Err(err));
        assert!(described.starts_with("<unreadable body: "), "{}", described);
        assert_eq!(describe_body(Ok("slow down".to_string())), "slow down");
    }

    #[tokio::test]
    async fn sends_gtx_query_and_parses_response() {
        let app = Router::new().route(
            "/translate_a/single",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("client").map(String::as_str), Some("gtx"));
                assert_eq!(params.get("dt").map(String::as_str), Some("t"));
                let translated = format!(
                    "{}:{}:{}",
                    params["sl"], params["tl"], params["q"]
                );
                Json(json!([[[translated, params["q"], null, null, 10]], null, params["sl"]]))
            }),
        );
        let base_url = spawn_server(app).await;

        let google = translator(&base_url);
        let translated = google.translate("Hello world", "auto", "ta").await.unwrap();
        assert_eq!(translated, "auto:ta:Hello world");
    }

    #[tokio::test]
    async fn error_status_is_a_failure() {
        let app = Router::new().route(
            "/translate_a/single",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base_url = spawn_server(app).await;

        let err = translator(&base_url).translate("Hello", "en", "ms").await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }
}
