use chrono::{DateTime, Utc};
use std::fmt;

use memtest_core::model::{
    Action, CountdownId, Phase, Session, Shuffle, Symbol, SymbolPool, Transition,
};

use super::view::{QuizResult, QuizSnapshot};
use crate::Clock;
use crate::error::QuizError;
use crate::shuffle::RandomShuffler;

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Owns one memory-test session and the randomness and clock it runs on.
///
/// Every user or timer input goes through [`QuizService::apply`]; the service
/// adds timestamps and logging around the pure session reducer.
pub struct QuizService {
    session: Session,
    shuffler: Box<dyn Shuffle + Send>,
    clock: Clock,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizService {
    /// New service on the system clock with an OS-seeded shuffler.
    #[must_use]
    pub fn new(pool: SymbolPool) -> Self {
        Self {
            session: Session::new(pool),
            shuffler: Box::new(RandomShuffler::from_os_rng()),
            clock: Clock::system(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Build from a comma-separated symbol list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Pool` when the list is not a valid pool.
    pub fn from_symbols(raw: &str) -> Result<Self, QuizError> {
        Ok(Self::new(raw.parse()?))
    }

    #[must_use]
    pub fn with_shuffler(mut self, shuffler: impl Shuffle + Send + 'static) -> Self {
        self.shuffler = Box::new(shuffler);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn start(&mut self) -> Transition {
        self.apply(Action::Start)
    }

    pub fn tick(&mut self, countdown: CountdownId) -> Transition {
        self.apply(Action::Tick(countdown))
    }

    pub fn pick(&mut self, symbol: Symbol) -> Transition {
        self.apply(Action::Pick(symbol))
    }

    pub fn unpick(&mut self, index: usize) -> Transition {
        self.apply(Action::Unpick(index))
    }

    pub fn submit(&mut self) -> Transition {
        self.apply(Action::Submit)
    }

    pub fn restart(&mut self) -> Transition {
        self.apply(Action::Restart)
    }

    /// Feed one action to the session.
    pub fn apply(&mut self, action: Action) -> Transition {
        let kind = action_kind(&action);
        let transition = self.session.apply(action, self.shuffler.as_mut());
        match transition {
            Transition::Ignored => {
                tracing::debug!(action = kind, phase = %self.session.phase(), "quiz action ignored");
            }
            Transition::Updated => {
                tracing::trace!(
                    action = kind,
                    remaining_secs = self.session.remaining_secs(),
                    picks = self.session.picks().len(),
                    "quiz updated"
                );
            }
            Transition::Entered(phase) => self.on_entered(phase),
        }
        transition
    }

    fn on_entered(&mut self, phase: Phase) {
        let now = self.clock.now();
        match phase {
            Phase::Memorize => {
                self.started_at = Some(now);
                self.completed_at = None;
            }
            Phase::Results => {
                self.completed_at = Some(now);
                if let Some(outcome) = self.session.outcome() {
                    tracing::info!(
                        score = outcome.score.percent(),
                        profile = outcome.profile.name,
                        recalled = self.session.picks().len(),
                        "quiz scored"
                    );
                }
            }
            Phase::Welcome => {
                self.started_at = None;
                self.completed_at = None;
            }
            Phase::Recall => {}
        }
        tracing::info!(%phase, countdown = self.session.countdown().value(), "quiz phase changed");
    }

    /// Scored result, once the session has reached the results phase.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        let outcome = self.session.outcome()?;
        let started_at = self.started_at?;
        let completed_at = self.completed_at?;
        Some(QuizResult {
            score: outcome.score.percent(),
            correct: outcome.score.correct(),
            profile: outcome.profile,
            target: self.session.target().to_vec(),
            recalled: self.session.picks().to_vec(),
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::capture(&self.session, self.result())
    }
}

fn action_kind(action: &Action) -> &'static str {
    match action {
        Action::Start => "start",
        Action::Tick(_) => "tick",
        Action::Pick(_) => "pick",
        Action::Unpick(_) => "unpick",
        Action::Submit => "submit",
        Action::Restart => "restart",
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("phase", &self.session.phase())
            .field("remaining_secs", &self.session.remaining_secs())
            .field("picks_len", &self.session.picks().len())
            .field("clock", &self.clock)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
