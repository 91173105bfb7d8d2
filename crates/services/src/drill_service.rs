use std::sync::Arc;

use sprich_core::model::{AnswerFeedback, RecognitionOutcome, VocabEntry, grade_answer};
use storage::repository::{StorageError, VocabSource};

use crate::speech::{Recognizer, SpokenPrompt, Synthesizer};

/// Orchestrates the drill: deck loading, prompt synthesis, and answer
/// checking over the vocabulary and speech ports.
#[derive(Clone)]
pub struct DrillLoopService {
    vocab: Arc<dyn VocabSource>,
    synthesizer: Arc<dyn Synthesizer>,
    recognizer: Arc<dyn Recognizer>,
}

impl DrillLoopService {
    #[must_use]
    pub fn new(
        vocab: Arc<dyn VocabSource>,
        synthesizer: Arc<dyn Synthesizer>,
        recognizer: Arc<dyn Recognizer>,
    ) -> Self {
        Self {
            vocab,
            synthesizer,
            recognizer,
        }
    }

    /// Load the full deck in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the vocabulary source exists but cannot be
    /// read or parsed.
    pub async fn load_deck(&self) -> Result<Vec<VocabEntry>, StorageError> {
        self.vocab.load().await
    }

    /// Synthesize the prompt word, degrading every failure to `None`.
    ///
    /// Callers treat `None` as "skip playback silently".
    pub async fn speak(&self, word: &str) -> Option<SpokenPrompt> {
        self.synthesizer.synthesize(word).await.ok()
    }

    /// Recognize a recording and grade it against the expected word.
    ///
    /// The port's three-way result folds into `RecognitionOutcome`: a failed
    /// service call is a `ServiceError`, never a `NoMatch`.
    pub async fn check_recording(&self, audio: &[u8], expected: &str) -> AnswerFeedback {
        let outcome = match self.recognizer.recognize(audio).await {
            Ok(Some(text)) => RecognitionOutcome::Recognized(text),
            Ok(None) => RecognitionOutcome::NoMatch,
            Err(_) => RecognitionOutcome::ServiceError,
        };
        grade_answer(&outcome, expected)
    }
}
