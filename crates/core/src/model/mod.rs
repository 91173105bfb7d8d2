mod entry;
mod recognition;

pub use entry::VocabEntry;
pub use recognition::{AnswerFeedback, RecognitionOutcome, grade_answer};
