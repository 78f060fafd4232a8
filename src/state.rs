use std::sync::Arc;

use crate::config::Config;
use crate::translate::{TranslateFactory, TranslateInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslateInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslateFactory::create_translator(&config.translate_config)?;
        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslateInterface>) -> Self {
        Self { config, translator }
    }
}
