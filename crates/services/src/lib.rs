#![forbid(unsafe_code)]

pub mod drill_service;
pub mod error;
pub mod recognition_service;
pub mod speech;
pub mod synthesis_service;

pub use drill_service::DrillLoopService;
pub use error::{RecognitionError, SynthesisError};
pub use recognition_service::{RecognitionConfig, RecognitionService};
pub use speech::{Recognizer, SpokenPrompt, Synthesizer};
pub use synthesis_service::{SynthesisConfig, SynthesisService};
