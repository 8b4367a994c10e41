use memtest_core::model::{Action, CountdownId, Phase, SEQUENCE_LEN, Symbol, Transition};
use services::{QuizService, QuizSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Tick(CountdownId),
    Pick(Symbol),
    Unpick(usize),
    Submit,
    Restart,
}

impl From<QuizIntent> for Action {
    fn from(intent: QuizIntent) -> Self {
        match intent {
            QuizIntent::Start => Action::Start,
            QuizIntent::Tick(id) => Action::Tick(id),
            QuizIntent::Pick(symbol) => Action::Pick(symbol),
            QuizIntent::Unpick(index) => Action::Unpick(index),
            QuizIntent::Submit => Action::Submit,
            QuizIntent::Restart => Action::Restart,
        }
    }
}

/// View model for the quiz screens.
pub struct QuizVm {
    service: QuizService,
}

impl QuizVm {
    #[must_use]
    pub fn new(service: QuizService) -> Self {
        Self { service }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) -> Transition {
        self.service.apply(intent.into())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.service.phase()
    }

    /// The countdown the view should be ticking, if any.
    #[must_use]
    pub fn countdown_key(&self) -> Option<CountdownId> {
        let session = self.service.session();
        session
            .phase()
            .is_timed()
            .then(|| session.countdown())
    }

    #[must_use]
    pub fn target(&self) -> &[Symbol] {
        self.service.session().target()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.service.snapshot()
    }
}

/// Heading above the recalled symbols, e.g. `"Your Order (3/10):"`.
#[must_use]
pub fn progress_label(picked: usize) -> String {
    format!("Your Order ({picked}/{SEQUENCE_LEN}):")
}
