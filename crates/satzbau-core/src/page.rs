//! Exercise page state machine.
//!
//! `Loading -> {Content, LoadFailed}`, `Content -> Content` (verdict or check
//! notice), `LoadFailed -> Loading` (retry), `Content -> Loading` (reset).
//!
//! Every load and check takes a [`Ticket`]. Only the most recently issued
//! ticket may change state; anything older is stale and dropped, so a slow
//! response can never overwrite a newer one. Retiring the page (unmount)
//! makes every outstanding ticket stale.

use tracing::{debug, error};

use crate::api::ApiError;
use crate::exercise::{SentenceExercise, Verdict};

pub const LOADING_MESSAGE: &str = "Loading sentence...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load sentence. Please try again later.";
pub const CHECK_FAILED_MESSAGE: &str = "Failed to check sentence. Please try again later.";
pub const RETRY_LABEL: &str = "Try Again";
pub const CORRECT_MESSAGE: &str = "Correct! Well done!";
pub const INCORRECT_MESSAGE: &str = "Not quite right. Try again!";
pub const NEXT_EXERCISE_LABEL: &str = "Try Another";
pub const RESET_LABEL: &str = "Reset";

/// Sequence number of one backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageError {
    #[default]
    None,
    LoadFailed,
    CheckFailed,
}

impl PageError {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::LoadFailed => Some(LOAD_FAILED_MESSAGE),
            Self::CheckFailed => Some(CHECK_FAILED_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictPanel {
    pub correct: bool,
    pub message: &'static str,
    pub action_label: &'static str,
}

impl VerdictPanel {
    fn for_verdict(verdict: Verdict) -> Option<Self> {
        if !verdict.is_known() {
            return None;
        }
        let correct = verdict == Verdict::Correct;
        Some(Self {
            correct,
            message: if correct { CORRECT_MESSAGE } else { INCORRECT_MESSAGE },
            action_label: if correct { NEXT_EXERCISE_LABEL } else { RESET_LABEL },
        })
    }
}

/// What the page shows. Exactly one variant is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Loading {
        message: &'static str,
    },
    Failed {
        message: &'static str,
        retry_label: &'static str,
    },
    Content {
        sentence: String,
        words: Vec<String>,
        /// Changes whenever a new exercise replaces the old one, so the
        /// arranger can be remounted with fresh state.
        generation: u64,
        notice: Option<&'static str>,
        verdict: Option<VerdictPanel>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Loading,
    LoadFailed,
    Content {
        exercise: SentenceExercise,
        generation: u64,
    },
}

#[derive(Debug, Clone)]
pub struct ExercisePage {
    phase: Phase,
    verdict: Verdict,
    error: PageError,
    issued: u64,
    latest: Option<Ticket>,
    generations: u64,
    retired: bool,
}

impl Default for ExercisePage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExercisePage {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            verdict: Verdict::Unknown,
            error: PageError::None,
            issued: 0,
            latest: None,
            generations: 0,
            retired: false,
        }
    }

    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.latest = Some(ticket);
        ticket
    }

    fn accepts(&self, ticket: Ticket, kind: &'static str) -> bool {
        let current = !self.is_retired() && self.latest == Some(ticket);
        if !current {
            debug!(
                kind,
                ticket = ticket.value(),
                latest = ?self.latest.map(Ticket::value),
                retired = self.is_retired(),
                "discarding stale response"
            );
        }
        current
    }

    /// Enters `Loading` and returns the ticket for the fetch.
    pub fn begin_load(&mut self) -> Ticket {
        self.phase = Phase::Loading;
        self.verdict = Verdict::Unknown;
        self.error = PageError::None;
        self.issue()
    }

    /// Reset and retry share one path: verdict cleared, fresh load.
    pub fn reset(&mut self) -> Ticket {
        self.begin_load()
    }

    /// Returns whether the result was applied.
    pub fn complete_load(
        &mut self,
        ticket: Ticket,
        result: Result<SentenceExercise, ApiError>,
    ) -> bool {
        if !self.accepts(ticket, "load") {
            return false;
        }
        self.latest = None;
        match result {
            Ok(exercise) => {
                self.generations += 1;
                self.phase = Phase::Content {
                    exercise,
                    generation: self.generations,
                };
                self.verdict = Verdict::Unknown;
                self.error = PageError::None;
            }
            Err(err) => {
                error!(error = %err, "failed to fetch sentence");
                self.phase = Phase::LoadFailed;
                self.error = PageError::LoadFailed;
            }
        }
        true
    }

    /// Returns a ticket only while an exercise is displayed.
    pub fn begin_check(&mut self) -> Option<Ticket> {
        if self.is_retired() || !matches!(self.phase, Phase::Content { .. }) {
            return None;
        }
        Some(self.issue())
    }

    /// Returns whether the result was applied. The exercise is kept either
    /// way so the user can continue adjusting.
    pub fn complete_check(&mut self, ticket: Ticket, result: Result<bool, ApiError>) -> bool {
        if !self.accepts(ticket, "check") {
            return false;
        }
        self.latest = None;
        match result {
            Ok(correct) => {
                self.verdict = Verdict::from_correct(correct);
                self.error = PageError::None;
            }
            Err(err) => {
                error!(error = %err, "failed to check sentence");
                self.error = PageError::CheckFailed;
            }
        }
        true
    }

    /// Marks the page as gone; late responses are ignored from now on.
    pub fn retire(&mut self) {
        if self.has_pending_request() {
            debug!(
                ticket = ?self.latest.map(Ticket::value),
                "retiring page with a request in flight"
            );
        }
        self.retired = true;
        self.latest = None;
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn has_pending_request(&self) -> bool {
        self.latest.is_some()
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn error(&self) -> PageError {
        self.error
    }

    pub fn exercise(&self) -> Option<&SentenceExercise> {
        match &self.phase {
            Phase::Content { exercise, .. } => Some(exercise),
            _ => None,
        }
    }

    pub fn view(&self) -> PageView {
        match &self.phase {
            Phase::Loading => PageView::Loading {
                message: LOADING_MESSAGE,
            },
            Phase::LoadFailed => PageView::Failed {
                message: LOAD_FAILED_MESSAGE,
                retry_label: RETRY_LABEL,
            },
            Phase::Content {
                exercise,
                generation,
            } => PageView::Content {
                sentence: exercise.sentence.clone(),
                words: exercise.words.clone(),
                generation: *generation,
                notice: match self.error {
                    PageError::CheckFailed => self.error.message(),
                    _ => None,
                },
                verdict: VerdictPanel::for_verdict(self.verdict),
            },
        }
    }
}
