//
// ─── RECOGNITION OUTCOME ───────────────────────────────────────────────────────
//

/// Outcome of one speech-recognition attempt.
///
/// Produced fresh per recording event and never persisted. `NoMatch` means
/// the service answered but found no speech; `ServiceError` means the call
/// itself failed (network, auth, quota, unreadable reply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Recognized(String),
    NoMatch,
    ServiceError,
}

//
// ─── ANSWER GRADING ────────────────────────────────────────────────────────────
//

/// Feedback for one graded spoken answer.
///
/// `Unclear` covers both `NoMatch` and `ServiceError`; the two are not
/// distinguished in what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct { heard: String },
    Mismatch { heard: String },
    Unclear,
}

/// Grade a recognition outcome against the expected word.
///
/// The comparison is exact, case-insensitive string equality. No fuzzy
/// matching, no diacritic normalization beyond what the recognition service
/// itself applied.
#[must_use]
pub fn grade_answer(outcome: &RecognitionOutcome, expected: &str) -> AnswerFeedback {
    match outcome {
        RecognitionOutcome::Recognized(heard) => {
            if heard.to_lowercase() == expected.to_lowercase() {
                AnswerFeedback::Correct {
                    heard: heard.clone(),
                }
            } else {
                AnswerFeedback::Mismatch {
                    heard: heard.clone(),
                }
            }
        }
        RecognitionOutcome::NoMatch | RecognitionOutcome::ServiceError => AnswerFeedback::Unclear,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_correct() {
        let outcome = RecognitionOutcome::Recognized("Hallo".into());
        assert_eq!(
            grade_answer(&outcome, "Hallo"),
            AnswerFeedback::Correct {
                heard: "Hallo".into()
            }
        );
    }

    #[test]
    fn comparison_ignores_case() {
        let outcome = RecognitionOutcome::Recognized("hallo".into());
        assert_eq!(
            grade_answer(&outcome, "Hallo"),
            AnswerFeedback::Correct {
                heard: "hallo".into()
            }
        );
    }

    #[test]
    fn comparison_ignores_case_with_umlauts() {
        let outcome = RecognitionOutcome::Recognized("SCHÖN".into());
        assert_eq!(
            grade_answer(&outcome, "schön"),
            AnswerFeedback::Correct {
                heard: "SCHÖN".into()
            }
        );
    }

    #[test]
    fn other_text_is_mismatch_carrying_what_was_heard() {
        let outcome = RecognitionOutcome::Recognized("Guten Tag".into());
        assert_eq!(
            grade_answer(&outcome, "Hallo"),
            AnswerFeedback::Mismatch {
                heard: "Guten Tag".into()
            }
        );
    }

    #[test]
    fn no_match_grades_to_unclear() {
        assert_eq!(
            grade_answer(&RecognitionOutcome::NoMatch, "Hallo"),
            AnswerFeedback::Unclear
        );
    }

    #[test]
    fn service_error_grades_to_unclear_not_mismatch() {
        assert_eq!(
            grade_answer(&RecognitionOutcome::ServiceError, "Hallo"),
            AnswerFeedback::Unclear
        );
    }
}
