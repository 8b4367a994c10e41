use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use memtest_core::model::{CountdownId, Phase, Profile, Session, Symbol};

/// Final record of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: u8,
    pub correct: u8,
    pub profile: &'static Profile,
    pub target: Vec<Symbol>,
    pub recalled: Vec<Symbol>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Wall time between the start of memorization and scoring.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}

/// One recall button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub symbol: Symbol,
    pub picked: bool,
}

/// Everything a renderer needs for the current phase.
///
/// Fields that have no meaning in the current phase are left empty: the target
/// is only exposed while memorizing, the palette and picks only during recall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub phase: Phase,
    pub remaining_secs: u32,
    pub countdown: CountdownId,
    pub target: Vec<Symbol>,
    pub palette: Vec<PaletteEntry>,
    pub picks: Vec<Symbol>,
    pub can_submit: bool,
    pub result: Option<QuizResult>,
}

impl QuizSnapshot {
    pub(crate) fn capture(session: &Session, result: Option<QuizResult>) -> Self {
        let phase = session.phase();
        let target = if phase == Phase::Memorize {
            session.target().to_vec()
        } else {
            Vec::new()
        };
        let (palette, picks) = if phase == Phase::Recall {
            let palette = session
                .palette()
                .iter()
                .map(|symbol| PaletteEntry {
                    symbol: symbol.clone(),
                    picked: session.is_picked(symbol),
                })
                .collect();
            (palette, session.picks().to_vec())
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            phase,
            remaining_secs: session.remaining_secs(),
            countdown: session.countdown(),
            target,
            palette,
            picks,
            can_submit: session.can_submit(),
            result: if phase == Phase::Results { result } else { None },
        }
    }
}
