use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use crate::config::TranslateConfig;
use super::google::GoogleTranslator;
use super::interface::TranslateInterface;

/// Factory for creating translation providers
pub struct TranslateFactory;

impl TranslateFactory {
    /// Create the provider named by `translate_config.provider`
    pub fn create_translator(translate_config: &TranslateConfig) -> Result<Arc<dyn TranslateInterface>> {
        info!("Initializing translation provider: {}", translate_config.provider);

        match translate_config.provider.as_str() {
            "google" | "google_translate" => {
                Ok(Arc::new(GoogleTranslator::new(&translate_config.google)?))
            }
            other => Err(anyhow::anyhow!("Unsupported translation provider: {}", other)),
        }
    }
}
