use serde::{Deserialize, Serialize};

use crate::{
    config::ServiceConfig,
    controller::{TranslationOutcome, TranslationRequest},
    error::TranslateError,
};

/// JSON body of the outbound POST.
#[derive(Debug, Serialize)]
struct WirePayload<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

/// Response shape `{ "data": { "translations": [ { "translatedText": .. } ] } }`.
///
/// Every level defaults so that a 2xx response with an unexpected body parses
/// to "no translation" instead of a parse error; a successful response
/// without a translated string is the soft-failure case, never the hard one.
#[derive(Debug, Default, Deserialize)]
struct WireResponse {
    #[serde(default)]
    data: WireData,
}

#[derive(Debug, Default, Deserialize)]
struct WireData {
    #[serde(default)]
    translations: Vec<WireTranslation>,
}

#[derive(Debug, Default, Deserialize)]
struct WireTranslation {
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

/// Blocking HTTP client for the external translation collaborator.
///
/// One call per trigger, no retries; run it off the frame schedule (the app
/// dispatches it on Bevy's IO task pool).
pub struct TranslationClient {
    http: reqwest::blocking::Client,
    config: ServiceConfig,
}

impl TranslationClient {
    pub fn new(config: ServiceConfig) -> Result<Self, TranslateError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("lingua/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, config })
    }

    /// Perform one translation call.
    ///
    /// Success is a non-empty `translatedText` in the first entry of the
    /// response's translation list; later entries are never consulted. A 2xx
    /// response without one is [`TranslateError::MissingTranslation`]; a
    /// non-success status or transport problem is the hard-failure side.
    pub fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let payload = WirePayload {
            q: &request.source_text,
            source: request.source,
            target: request.target.code(),
            format: "text",
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(self.config.key_header.as_str(), self.config.api_key.as_str())
            .header(self.config.host_header.as_str(), self.config.api_host.as_str())
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status));
        }

        let body = response.text()?;
        let parsed: WireResponse = serde_json::from_str(&body).unwrap_or_default();

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.translated_text)
            .filter(|text| !text.is_empty())
            .ok_or(TranslateError::MissingTranslation)
    }

    /// [`Self::translate`] with every failure folded into the outcome the
    /// controller consumes. This is what the background worker calls.
    #[must_use]
    pub fn translate_outcome(&self, request: &TranslationRequest) -> TranslationOutcome {
        match self.translate(request) {
            Ok(text) => TranslationOutcome::Translated(text),
            Err(err) => err.into_outcome(),
        }
    }
}
