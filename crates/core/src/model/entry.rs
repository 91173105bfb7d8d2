use serde::{Deserialize, Serialize};

/// One (source word, translation) vocabulary pair.
///
/// Entries are immutable once loaded and carry no content validation:
/// blank or duplicate words pass through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub source_word: String,
    pub translation: String,
}

impl VocabEntry {
    #[must_use]
    pub fn new(source_word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source_word: source_word.into(),
            translation: translation.into(),
        }
    }

    /// The single placeholder entry used when no vocabulary file exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new("Hallo", "Hello")
    }
}
