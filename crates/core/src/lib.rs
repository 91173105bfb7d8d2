#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{AnswerFeedback, RecognitionOutcome, VocabEntry, grade_answer};
pub use session::{DrillPhase, DrillSession};
