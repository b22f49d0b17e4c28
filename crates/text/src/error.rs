use quill_types::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TextError {
    #[error("Invalid replacement pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Replacement config has no match pattern")]
    MissingPattern,

    #[error("Replacement config has no replacement")]
    MissingReplacement,

    #[error("Nesting limit must be at least 1, got {0}")]
    InvalidNestingLimit(usize),

    #[error("Translation for '{key}' in locale '{locale}' is already registered")]
    DuplicateTranslation { key: String, locale: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TextError {
    pub fn duplicate_translation(key: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::DuplicateTranslation {
            key: key.into(),
            locale: locale.into(),
        }
    }
}

pub type Result<T, E = TextError> = std::result::Result<T, E>;
