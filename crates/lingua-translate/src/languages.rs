use std::fmt;

/// Fixed source language of the panel; it only translates out of English.
pub const SOURCE_LANGUAGE: &str = "en";

/// Target languages offered by the selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Hindi,
    Gujarati,
    French,
    Spanish,
    German,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Hindi,
        Language::Gujarati,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Japanese,
    ];

    /// ISO 639-1 code sent to the translation service.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Gujarati => "gu",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Japanese => "ja",
        }
    }

    /// Human-readable name shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Gujarati => "Gujarati",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::German => "German",
            Self::Japanese => "Japanese",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
