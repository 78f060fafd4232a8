use tracing::{error, info};

use crate::error::TranslateError;
use crate::translate::{normalize_lang, TranslateInterface, TranslationRequest, TranslationResponse};

const PREVIEW_CHARS: usize = 20;

/// Normalize the language pair, delegate to the provider and shape the response.
///
/// Any provider failure collapses into [`TranslateError::Failed`]; there is
/// exactly one attempt.
pub async fn handle_translation(
    translator: &dyn TranslateInterface,
    request: TranslationRequest,
) -> Result<TranslationResponse, TranslateError> {
    let source = normalize_lang(&request.source_lang);
    let target = normalize_lang(&request.target_lang);

    let preview: String = request.text.chars().take(PREVIEW_CHARS).collect();
    info!("Translating: {}... ({} -> {})", preview, source, target);

    match translator.translate(&request.text, &source, &target).await {
        Ok(translated_text) => Ok(TranslationResponse {
            translated_text,
            original_text: request.text,
            src_lang: source,
            tgt_lang: target,
        }),
        Err(e) => {
            error!("Translation error: {}", e);
            Err(e.into())
        }
    }
}
