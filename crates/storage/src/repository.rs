use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sprich_core::model::VocabEntry;
use thiserror::Error;

/// Errors surfaced by vocabulary sources.
///
/// A missing file is not an error (sources fall back to a placeholder deck);
/// a file that exists but cannot be parsed propagates here uncaught.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("malformed vocabulary file: {0}")]
    Malformed(#[from] csv::Error),

    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Repository contract for the vocabulary deck.
#[async_trait]
pub trait VocabSource: Send + Sync {
    /// Load all entries in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing data exists but cannot be read
    /// or parsed.
    async fn load(&self) -> Result<Vec<VocabEntry>, StorageError>;
}

/// Simple in-memory vocabulary source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryVocab {
    entries: Arc<Mutex<Vec<VocabEntry>>>,
}

impl InMemoryVocab {
    #[must_use]
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Replace the deck contents. Lets tests shrink the deck under a live
    /// session.
    pub fn set_entries(&self, entries: Vec<VocabEntry>) {
        let mut guard = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = entries;
    }
}

#[async_trait]
impl VocabSource for InMemoryVocab {
    async fn load(&self) -> Result<Vec<VocabEntry>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}
