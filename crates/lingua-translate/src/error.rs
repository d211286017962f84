use reqwest::StatusCode;
use thiserror::Error;

use crate::controller::TranslationOutcome;

/// Failures of the translation call or its configuration.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Transport-level success, but no usable `translatedText` in the body.
    #[error("translation service response contained no translation")]
    MissingTranslation,

    #[error("translation service returned HTTP {0}")]
    Status(StatusCode),

    #[error("translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid translation service configuration: {0}")]
    Config(String),
}

impl TranslateError {
    /// Fold this error into the outcome the controller consumes.
    ///
    /// Hard failures are logged here, at the one place every failure passes
    /// through; the user only ever sees the generic notices.
    #[must_use]
    pub fn into_outcome(self) -> TranslationOutcome {
        match self {
            Self::MissingTranslation => TranslationOutcome::MissingTranslation,
            other => {
                tracing::warn!(error = %other, "translation request failed");
                TranslationOutcome::Failed
            }
        }
    }
}
