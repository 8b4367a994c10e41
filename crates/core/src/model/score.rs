use serde::Serialize;
use std::fmt;

use crate::model::profile::{Profile, select_profile};
use crate::model::{SEQUENCE_LEN, Symbol};

/// Percentage of target positions recalled correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Score {
    correct: u8,
}

impl Score {
    /// Builds a score from a count of matching positions, capped at a full sequence.
    #[must_use]
    pub fn from_correct(correct: usize) -> Self {
        let capped = correct.min(SEQUENCE_LEN);
        Self {
            correct: u8::try_from(capped).unwrap_or(u8::MAX),
        }
    }

    /// Number of positions that matched.
    #[must_use]
    pub fn correct(self) -> u8 {
        self.correct
    }

    /// Score as a percentage; always a multiple of ten.
    #[must_use]
    pub fn percent(self) -> u8 {
        let per_slot = 100 / u8::try_from(SEQUENCE_LEN).unwrap_or(u8::MAX);
        self.correct * per_slot
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.percent()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Compare a recall against its target, position by position.
///
/// Only the first [`SEQUENCE_LEN`] target slots count. A slot the user left
/// empty never matches, and a right symbol in the wrong slot earns nothing.
#[must_use]
pub fn score_recall(target: &[Symbol], recalled: &[Symbol]) -> Score {
    let correct = target
        .iter()
        .take(SEQUENCE_LEN)
        .zip(recalled)
        .filter(|(expected, got)| expected == got)
        .count();
    Score::from_correct(correct)
}

/// Final evaluation of a session: the score and the profile it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub score: Score,
    pub profile: &'static Profile,
}

impl Outcome {
    #[must_use]
    pub fn evaluate(target: &[Symbol], recalled: &[Symbol]) -> Self {
        let score = score_recall(target, recalled);
        Self {
            score,
            profile: select_profile(score.percent()),
        }
    }
}
