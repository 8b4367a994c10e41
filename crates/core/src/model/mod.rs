mod profile;
mod score;
mod session;
mod symbol;

pub use profile::{
    BALANCED_LEARNER, BALANCED_LEARNER_MIN, ColorTheme, DEEP_THINKER, DEEP_THINKER_MIN,
    FAST_THINKER, Profile, ProfileKind, select_profile,
};
pub use score::{Outcome, Score, score_recall};
pub use session::{Action, CountdownId, PHASE_SECS, Phase, SEQUENCE_LEN, Session, Transition};
pub use symbol::{DEFAULT_SYMBOLS, Shuffle, Symbol, SymbolPool, SymbolPoolError};
