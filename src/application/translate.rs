use crate::domain::error::{Result, TranslateError};
use crate::domain::model::{Translation, TranslationBatch, TranslationRequest};
use crate::domain::traits::TranslatorService;

/// Run a whole request through `service` and pair every result with its source
pub fn translate_request(
    service: &dyn TranslatorService,
    request: &TranslationRequest,
) -> Result<TranslationBatch> {
    let translated = service
        .translate_strings(
            &request.strings,
            &request.target_language,
            &request.source_language,
        )
        .collect::<Result<Vec<_>>>()?;

    if translated.len() != request.strings.len() {
        return Err(TranslateError::Api(format!(
            "{} returned {} translations for {} strings",
            service.name(),
            translated.len(),
            request.strings.len()
        )));
    }

    tracing::info!(
        service = service.name(),
        count = translated.len(),
        source = %request.source_language,
        target = %request.target_language,
        "translated strings"
    );

    Ok(TranslationBatch {
        service: service.name().to_string(),
        source_language: request.source_language.clone(),
        target_language: request.target_language.clone(),
        translations: request
            .strings
            .iter()
            .cloned()
            .zip(translated)
            .map(|(source, translated)| Translation { source, translated })
            .collect(),
    })
}
