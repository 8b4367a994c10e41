use serde::Serialize;
use std::fmt;

use crate::model::score::Outcome;
use crate::model::symbol::{Shuffle, Symbol, SymbolPool};

/// Number of symbols to memorize and recall.
pub const SEQUENCE_LEN: usize = 10;

/// Length of each timed phase, in seconds.
pub const PHASE_SECS: u32 = 30;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// The four linear stages of a memory test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Welcome,
    Memorize,
    Recall,
    Results,
}

impl Phase {
    /// Whether a countdown runs while in this phase.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(self, Phase::Memorize | Phase::Recall)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Welcome => "welcome",
            Phase::Memorize => "memorize",
            Phase::Recall => "recall",
            Phase::Results => "results",
        };
        f.write_str(label)
    }
}

//
// ─── COUNTDOWN ─────────────────────────────────────────────────────────────────
//

/// Identifies one countdown run.
///
/// A new id is issued whenever a phase boundary is crossed, so a tick scheduled
/// for an earlier phase can never match the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CountdownId(u64);

impl CountdownId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Inputs accepted by [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Begin a new test from the welcome screen.
    Start,
    /// One second elapsed on the countdown with the given id.
    Tick(CountdownId),
    /// Append a palette symbol to the recall.
    Pick(Symbol),
    /// Remove the recalled symbol at this position.
    Unpick(usize),
    /// Finish recall early; only honoured with a full recall.
    Submit,
    /// Leave the results screen and return to welcome.
    Restart,
}

/// What applying an action did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The action was out of phase or failed a guard; nothing changed.
    Ignored,
    /// State changed within the current phase.
    Updated,
    /// The session moved into a new phase.
    Entered(Phase),
}

impl Transition {
    #[must_use]
    pub fn entered(self) -> Option<Phase> {
        match self {
            Transition::Entered(phase) => Some(phase),
            Transition::Ignored | Transition::Updated => None,
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one memory test, advanced only through [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pool: SymbolPool,
    phase: Phase,
    target: Vec<Symbol>,
    palette: Vec<Symbol>,
    picks: Vec<Symbol>,
    remaining_secs: u32,
    countdown: CountdownId,
    outcome: Option<Outcome>,
}

impl Session {
    #[must_use]
    pub fn new(pool: SymbolPool) -> Self {
        Self {
            pool,
            phase: Phase::Welcome,
            target: Vec::new(),
            palette: Vec::new(),
            picks: Vec::new(),
            remaining_secs: 0,
            countdown: CountdownId::default(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sequence to memorize, in order.
    #[must_use]
    pub fn target(&self) -> &[Symbol] {
        &self.target
    }

    /// Target symbols in the order offered during recall.
    #[must_use]
    pub fn palette(&self) -> &[Symbol] {
        &self.palette
    }

    /// Symbols recalled so far, in the order picked.
    #[must_use]
    pub fn picks(&self) -> &[Symbol] {
        &self.picks
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Id of the countdown that may currently tick.
    #[must_use]
    pub fn countdown(&self) -> CountdownId {
        self.countdown
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_picked(&self, symbol: &Symbol) -> bool {
        self.picks.contains(symbol)
    }

    /// Submit is only offered once every slot is filled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Recall && self.picks.len() == SEQUENCE_LEN
    }

    /// Apply one input. Out-of-phase or guarded inputs are no-ops.
    pub fn apply(&mut self, action: Action, shuffler: &mut dyn Shuffle) -> Transition {
        match (self.phase, action) {
            (Phase::Welcome, Action::Start) => self.enter_memorize(shuffler),
            (Phase::Memorize | Phase::Recall, Action::Tick(id)) => self.tick(id, shuffler),
            (Phase::Recall, Action::Pick(symbol)) => self.pick(symbol),
            (Phase::Recall, Action::Unpick(index)) => self.unpick(index),
            (Phase::Recall, Action::Submit) if self.can_submit() => self.enter_results(),
            (Phase::Results, Action::Restart) => self.enter_welcome(),
            _ => Transition::Ignored,
        }
    }

    fn enter_memorize(&mut self, shuffler: &mut dyn Shuffle) -> Transition {
        self.target = self.pool.sample(SEQUENCE_LEN, shuffler);
        self.palette.clear();
        self.picks.clear();
        self.outcome = None;
        self.remaining_secs = PHASE_SECS;
        self.countdown = self.countdown.next();
        self.phase = Phase::Memorize;
        Transition::Entered(Phase::Memorize)
    }

    // Only decrements; expiry is handed to the phase transition helpers.
    fn tick(&mut self, id: CountdownId, shuffler: &mut dyn Shuffle) -> Transition {
        if id != self.countdown || self.remaining_secs == 0 {
            return Transition::Ignored;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return Transition::Updated;
        }
        match self.phase {
            Phase::Memorize => self.enter_recall(shuffler),
            Phase::Recall => self.enter_results(),
            Phase::Welcome | Phase::Results => Transition::Ignored,
        }
    }

    fn enter_recall(&mut self, shuffler: &mut dyn Shuffle) -> Transition {
        if self.palette.is_empty() {
            self.palette = self.target.clone();
            shuffler.shuffle(&mut self.palette);
        }
        self.remaining_secs = PHASE_SECS;
        self.countdown = self.countdown.next();
        self.phase = Phase::Recall;
        Transition::Entered(Phase::Recall)
    }

    fn pick(&mut self, symbol: Symbol) -> Transition {
        if !self.palette.contains(&symbol)
            || self.picks.contains(&symbol)
            || self.picks.len() >= SEQUENCE_LEN
        {
            return Transition::Ignored;
        }
        self.picks.push(symbol);
        Transition::Updated
    }

    fn unpick(&mut self, index: usize) -> Transition {
        if index >= self.picks.len() {
            return Transition::Ignored;
        }
        self.picks.remove(index);
        Transition::Updated
    }

    fn enter_results(&mut self) -> Transition {
        self.outcome = Some(Outcome::evaluate(&self.target, &self.picks));
        self.remaining_secs = 0;
        self.countdown = self.countdown.next();
        self.phase = Phase::Results;
        Transition::Entered(Phase::Results)
    }

    fn enter_welcome(&mut self) -> Transition {
        self.target.clear();
        self.palette.clear();
        self.picks.clear();
        self.outcome = None;
        self.remaining_secs = 0;
        self.countdown = self.countdown.next();
        self.phase = Phase::Welcome;
        Transition::Entered(Phase::Welcome)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
