//! Translation controller and wire client for the Global Translator panel.
//!
//! The crate splits the request/response flow into three pieces:
//! - [`TranslationController`]: a pure idle/pending state machine over the
//!   user's source text, target language, latest result and busy flag,
//! - [`TranslationClient`]: one blocking HTTP POST per request against the
//!   external translation service,
//! - [`ServiceConfig`]: endpoint, credential headers and timeout, loaded
//!   from the environment or a RON file so secrets never live in code.
//!
//! The controller performs no I/O itself. Callers obtain a
//! [`TranslationRequest`] from [`TranslationController::begin_translation`],
//! run it through a client wherever they like, and hand the resulting
//! [`TranslationOutcome`] back to [`TranslationController::finish_translation`].
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod languages;

pub use client::TranslationClient;
pub use config::ServiceConfig;
pub use controller::{
    HARD_FAILURE_NOTICE, SOFT_FAILURE_NOTICE, TranslationController, TranslationOutcome,
    TranslationRequest, TranslationResult, VALIDATION_NOTICE,
};
pub use error::TranslateError;
pub use languages::{Language, SOURCE_LANGUAGE};
