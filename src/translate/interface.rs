use async_trait::async_trait;
use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "auto".to_string()
}

/// Body of `POST /translation/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    pub target_lang: String,
}

/// `src_lang` and `tgt_lang` carry the normalized codes sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
    pub original_text: String,
    pub src_lang: String,
    pub tgt_lang: String,
}

/// A translation engine the endpoint delegates to.
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` from `source` to `target`.
    ///
    /// # Arguments
    /// * `text` - The text to translate, forwarded as received
    /// * `source` - Provider language code, or `"auto"` for detection
    /// * `target` - Provider language code
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, anyhow::Error>;

    /// Short provider name reported by the health endpoint
    fn name(&self) -> &str;
}
