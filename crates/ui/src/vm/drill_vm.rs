use services::DrillLoopService;
use sprich_core::model::{AnswerFeedback, VocabEntry};
use sprich_core::session::{DrillPhase, DrillSession};

/// Discrete events driving the drill page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrillIntent {
    RecordingComplete(Vec<u8>),
    Next,
}

/// Display shape for the current card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub source_word: String,
    pub translation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Warning,
    Error,
}

impl FeedbackTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "drill-feedback--success",
            Self::Warning => "drill-feedback--warning",
            Self::Error => "drill-feedback--error",
        }
    }
}

/// Display shape for the feedback banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub tone: FeedbackTone,
    pub message: String,
}

#[must_use]
pub fn map_feedback(feedback: &AnswerFeedback) -> FeedbackVm {
    match feedback {
        AnswerFeedback::Correct { heard } => FeedbackVm {
            tone: FeedbackTone::Success,
            message: format!("Perfect! You said: {heard}"),
        },
        AnswerFeedback::Unclear => FeedbackVm {
            tone: FeedbackTone::Warning,
            message: "Didn't catch that. Try closer to the mic.".to_string(),
        },
        AnswerFeedback::Mismatch { heard } => FeedbackVm {
            tone: FeedbackTone::Error,
            message: format!("Heard: '{heard}'"),
        },
    }
}

/// View model for the drill page: the loaded deck plus the session state
/// machine.
pub struct DrillVm {
    entries: Vec<VocabEntry>,
    session: DrillSession,
}

impl DrillVm {
    #[must_use]
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        Self {
            entries,
            session: DrillSession::new(),
        }
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index(self.entries.len())
    }

    #[must_use]
    pub fn current_card(&self) -> Option<CardVm> {
        self.entries.get(self.current_index()).map(|entry| CardVm {
            source_word: entry.source_word.clone(),
            translation: entry.translation.clone(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> DrillPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        self.session.feedback().map(map_feedback)
    }

    /// One-based position through the deck, e.g. "3 / 12".
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.card_count())
    }

    /// Grade a completed recording against the current word and store the
    /// feedback.
    pub async fn check_recording(&mut self, drill: &DrillLoopService, audio: &[u8]) {
        let Some(card) = self.current_card() else {
            return;
        };
        let feedback = drill.check_recording(audio, &card.source_word).await;
        self.session.record_feedback(feedback);
    }

    /// Advance to the next card and return to the awaiting-recording state.
    pub fn next(&mut self) {
        self.session.next(self.entries.len());
    }
}
