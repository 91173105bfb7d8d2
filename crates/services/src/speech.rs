//! Ports for the two hosted speech services.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::error::{RecognitionError, SynthesisError};

/// Synthesized audio for one prompt word.
///
/// Owns the temporary file that backs playback: replacing or dropping the
/// prompt removes the file, so repeated synthesis never accumulates temp
/// files.
#[derive(Debug)]
pub struct SpokenPrompt {
    file: NamedTempFile,
    bytes: Vec<u8>,
    media_type: &'static str,
}

impl SpokenPrompt {
    /// Persist synthesized bytes to a fresh temp file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the temp file cannot be created or written.
    pub fn from_bytes(
        bytes: Vec<u8>,
        media_type: &'static str,
        suffix: &str,
    ) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("sprich-prompt-")
            .suffix(suffix)
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(Self {
            file,
            bytes,
            media_type,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The audio as a `data:` URL, playable directly by a webview `audio`
    /// element.
    #[must_use]
    pub fn data_url(&self) -> String {
        let encoded =
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.bytes);
        format!("data:{};base64,{encoded}", self.media_type)
    }
}

/// Port for text-to-speech synthesis in the configured spoken language.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Convert a word into playable audio.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError` for blank input, transport failures, or
    /// non-success service replies.
    async fn synthesize(&self, text: &str) -> Result<SpokenPrompt, SynthesisError>;
}

/// Port for speech-to-text recognition in the configured locale.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Transcribe recorded audio.
    ///
    /// `Ok(Some(text))` is a recognized utterance, `Ok(None)` means the
    /// service answered but detected no speech.
    ///
    /// # Errors
    ///
    /// Returns `RecognitionError` when the service call itself fails.
    async fn recognize(&self, audio: &[u8]) -> Result<Option<String>, RecognitionError>;
}
