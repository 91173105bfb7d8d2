use std::env;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::SynthesisError;
use crate::speech::{SpokenPrompt, Synthesizer};

const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";
const DEFAULT_TTS_LANGUAGE: &str = "de";

#[derive(Clone, Debug)]
pub struct SynthesisConfig {
    pub base_url: String,
    pub language: String,
}

impl SynthesisConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("SPRICH_TTS_BASE_URL").unwrap_or_else(|_| DEFAULT_TTS_ENDPOINT.into());
        let language =
            env::var("SPRICH_TTS_LANG").unwrap_or_else(|_| DEFAULT_TTS_LANGUAGE.into());
        Self { base_url, language }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TTS_ENDPOINT.into(),
            language: DEFAULT_TTS_LANGUAGE.into(),
        }
    }
}

/// Text-to-speech over a hosted translate-style endpoint.
///
/// Every call fetches fresh audio; no caching, no retry. The spoken language
/// is fixed by configuration.
#[derive(Clone)]
pub struct SynthesisService {
    client: Client,
    config: SynthesisConfig,
}

impl SynthesisService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SynthesisConfig::from_env())
    }

    #[must_use]
    pub fn new(config: SynthesisConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch spoken audio for a word.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError` for blank input, transport failures,
    /// non-success replies, or temp-file I/O failures.
    pub async fn synthesize(&self, text: &str) -> Result<SpokenPrompt, SynthesisError> {
        let word = text.trim();
        if word.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.config.language.as_str()),
                ("q", word),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SynthesisError::HttpStatus(response.status()));
        }

        let bytes = response.bytes().await?;
        Ok(SpokenPrompt::from_bytes(bytes.to_vec(), "audio/mpeg", ".mp3")?)
    }
}

#[async_trait]
impl Synthesizer for SynthesisService {
    async fn synthesize(&self, text: &str) -> Result<SpokenPrompt, SynthesisError> {
        SynthesisService::synthesize(self, text).await
    }
}
