use serde::{Deserialize, Serialize};

/// One scrambled sentence as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceExercise {
    pub sentence: String,
    pub words: Vec<String>,
}

impl SentenceExercise {
    pub fn new(sentence: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            sentence: sentence.into(),
            words,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
