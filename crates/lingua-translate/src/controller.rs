use crate::languages::{Language, SOURCE_LANGUAGE};

/// Shown when the trigger fires with no source text or no target language.
pub const VALIDATION_NOTICE: &str = "Please enter text and select a language.";

/// Shown when the service answered but the response carried no translation.
pub const SOFT_FAILURE_NOTICE: &str = "Translation failed. Please try again.";

/// Shown when the request itself failed (transport error, non-success status).
pub const HARD_FAILURE_NOTICE: &str = "An error occurred during translation.";

/// Latest result surfaced to the view.
///
/// Overwritten by every request cycle; no history is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TranslationResult {
    #[default]
    Empty,
    Translated(String),
    Notice(&'static str),
}

impl TranslationResult {
    /// Text the result area should display, empty string for [`Self::Empty`].
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Translated(text) => text,
            Self::Notice(notice) => notice,
        }
    }
}

/// Payload for one outbound call to the translation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source: &'static str,
    pub target: Language,
}

/// Completion of one outbound call, already folded into the three terminal
/// cases the controller distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    /// Transport-level success, but the response lacked a usable translation.
    MissingTranslation,
    /// The call itself failed. Detail is logged, never surfaced.
    Failed,
}

/// Idle/pending state machine behind the translation panel.
///
/// `begin_translation` moves Idle -> Pending and hands the caller the request
/// to dispatch; `finish_translation` moves Pending -> Idle whatever the
/// outcome. A begin with invalid inputs stays Idle and only rewrites the
/// result field, so no network call can ever originate from it.
#[derive(Debug, Default)]
pub struct TranslationController {
    source_text: String,
    target: Option<Language>,
    result: TranslationResult,
    busy: bool,
}

impl TranslationController {
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn set_target(&mut self, target: Option<Language>) {
        self.target = target;
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn target(&self) -> Option<Language> {
        self.target
    }

    #[must_use]
    pub fn result(&self) -> &TranslationResult {
        &self.result
    }

    /// True from a successful `begin_translation` until the matching
    /// `finish_translation`. Gates the trigger control.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validate inputs and, if they pass, enter the pending state.
    ///
    /// Returns the request the caller must dispatch, or `None` when
    /// validation failed (result becomes [`VALIDATION_NOTICE`]) or a request
    /// is already in flight (state untouched; the UI-level busy gate is the
    /// primary guard, this is the backstop).
    ///
    /// Whitespace-only source text counts as empty, a tighter check than
    /// rejecting only the empty string; nothing translatable ever reaches
    /// the wire.
    pub fn begin_translation(&mut self) -> Option<TranslationRequest> {
        if self.busy {
            return None;
        }

        let target = match self.target {
            Some(target) if !self.source_text.trim().is_empty() => target,
            _ => {
                self.result = TranslationResult::Notice(VALIDATION_NOTICE);
                return None;
            }
        };

        self.busy = true;
        self.result = TranslationResult::Empty;
        Some(TranslationRequest {
            source_text: self.source_text.clone(),
            source: SOURCE_LANGUAGE,
            target,
        })
    }

    /// Apply the outcome of the in-flight request and return to idle.
    ///
    /// Every completion path clears the busy flag exactly once.
    pub fn finish_translation(&mut self, outcome: TranslationOutcome) {
        self.result = match outcome {
            TranslationOutcome::Translated(text) => TranslationResult::Translated(text),
            TranslationOutcome::MissingTranslation => {
                TranslationResult::Notice(SOFT_FAILURE_NOTICE)
            }
            TranslationOutcome::Failed => TranslationResult::Notice(HARD_FAILURE_NOTICE),
        };
        self.busy = false;
    }
}
