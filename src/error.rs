//! Error types for synmark

use thiserror::Error;

/// Result type alias for synmark operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Ways a pattern can report a match that cannot be applied to the text
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Match starts before the position the scan resumed from
    #[error("match does not advance past the previous one")]
    NonAdvancing,
    /// Match runs past the end of the text
    #[error("match extends past the end of the text")]
    OutOfBounds,
    /// Match boundary falls inside a UTF-8 character
    #[error("match boundary splits a character")]
    SplitsCharacter,
}

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("Unknown highlight language: {0}")]
    UnknownLanguage(String),

    #[error("Pattern fault in {language}/{category} at byte {offset}: {kind}")]
    PatternFault {
        language: String,
        category: String,
        offset: usize,
        kind: FaultKind,
    },

    #[error("Match budget of {budget} exhausted in {language}/{category}")]
    BudgetExhausted {
        language: String,
        category: String,
        budget: usize,
    },

    #[error("Invalid pattern for {category}: {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid language file: {0}")]
    LanguageFile(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}
