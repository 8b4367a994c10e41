use std::sync::Arc;

use memtest_core::model::SymbolPool;
use services::{Clock, QuizService, RandomShuffler};

pub trait UiApp: Send + Sync {
    fn symbol_pool(&self) -> SymbolPool;

    /// Fixed shuffle seed, if the launcher asked for reproducible runs.
    fn shuffle_seed(&self) -> Option<u64>;

    fn clock(&self) -> Clock {
        Clock::system()
    }
}

#[derive(Clone)]
pub struct AppContext {
    pool: SymbolPool,
    shuffle_seed: Option<u64>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            pool: app.symbol_pool(),
            shuffle_seed: app.shuffle_seed(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn symbol_pool(&self) -> &SymbolPool {
        &self.pool
    }

    /// A fresh quiz on this context's pool, shuffler and clock.
    #[must_use]
    pub fn new_quiz(&self) -> QuizService {
        QuizService::new(self.pool.clone())
            .with_shuffler(RandomShuffler::from_seed_or_os(self.shuffle_seed))
            .with_clock(self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
