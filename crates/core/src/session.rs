use crate::model::AnswerFeedback;

//
// ─── DRILL SESSION ─────────────────────────────────────────────────────────────
//

/// Where the drill stands for the current card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrillPhase {
    #[default]
    AwaitingRecording,
    ShowingFeedback,
}

/// Per-window drill state: the current card index, the last feedback, and
/// the two-state phase machine.
///
/// The stored index is allowed to run past the end of the deck; every read
/// re-clamps it against the live entry count, so a deck that shrinks under a
/// running session wraps to the first card instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillSession {
    index: usize,
    feedback: Option<AnswerFeedback>,
    phase: DrillPhase,
}

impl DrillSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current index, re-clamped against the live entry count.
    ///
    /// An out-of-range stored index (from `advance` past the end, or from a
    /// deck that shrank) resolves to 0. An empty deck also resolves to 0;
    /// callers must not use the result to address an empty deck.
    #[must_use]
    pub fn current_index(&self, entry_count: usize) -> usize {
        if self.index >= entry_count { 0 } else { self.index }
    }

    /// Advance to the next card by exactly one position.
    ///
    /// No skip-ahead, no shuffle. Wraparound is realized by the clamp on the
    /// next `current_index` read.
    pub fn advance(&mut self, entry_count: usize) {
        self.index = self.current_index(entry_count).saturating_add(1);
    }

    #[must_use]
    pub fn phase(&self) -> DrillPhase {
        self.phase
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    /// A graded recording arrived: store it and show feedback.
    pub fn record_feedback(&mut self, feedback: AnswerFeedback) {
        self.feedback = Some(feedback);
        self.phase = DrillPhase::ShowingFeedback;
    }

    /// Clear any stored feedback without moving the index.
    pub fn reset_feedback(&mut self) {
        self.feedback = None;
        self.phase = DrillPhase::AwaitingRecording;
    }

    /// "Next" pressed: advance the index, clear feedback, await a recording.
    pub fn next(&mut self, entry_count: usize) {
        self.advance(entry_count);
        self.reset_feedback();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
