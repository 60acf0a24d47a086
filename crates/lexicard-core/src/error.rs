use lexicard_types::{Language, UnknownLanguage};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Configuration errors. Data problems (missing entries, unexpected markup)
/// are never errors; they surface as `Extraction::NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No ruleset configured for dictionary {language}_{id}")]
    UnknownRuleset { language: Language, id: u8 },

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),

    #[error("No suffix table configured for language {0}")]
    MissingSuffixTable(Language),

    #[error("Invalid suffix table for {language}: {reason}")]
    InvalidSuffixTable { language: Language, reason: String },

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}
