use std::future::pending;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, Interval, MissedTickBehavior, interval_at};

use memtest_core::model::{Action, CountdownId, Phase, Symbol, Transition};

use super::service::QuizService;
use super::view::QuizSnapshot;
use crate::error::QuizError;

/// Spacing between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const COMMAND_BUFFER: usize = 32;

/// User inputs accepted by a running quiz. Ticks come only from the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    Start,
    Pick(Symbol),
    Unpick(usize),
    Submit,
    Restart,
}

impl From<QuizCommand> for Action {
    fn from(command: QuizCommand) -> Self {
        match command {
            QuizCommand::Start => Action::Start,
            QuizCommand::Pick(symbol) => Action::Pick(symbol),
            QuizCommand::Unpick(index) => Action::Unpick(index),
            QuizCommand::Submit => Action::Submit,
            QuizCommand::Restart => Action::Restart,
        }
    }
}

//
// ─── HANDLE ────────────────────────────────────────────────────────────────────
//

/// Caller side of a [`QuizRunner`]: sends inputs, observes snapshots.
///
/// The runner stops once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct QuizHandle {
    commands: mpsc::Sender<QuizCommand>,
    snapshots: watch::Receiver<QuizSnapshot>,
}

impl QuizHandle {
    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner has stopped.
    pub async fn send(&self, command: QuizCommand) -> Result<(), QuizError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| QuizError::Closed)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner has stopped.
    pub async fn start(&self) -> Result<(), QuizError> {
        self.send(QuizCommand::Start).await
    }

    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner has stopped.
    pub async fn pick(&self, symbol: Symbol) -> Result<(), QuizError> {
        self.send(QuizCommand::Pick(symbol)).await
    }

    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner has stopped.
    pub async fn unpick(&self, index: usize) -> Result<(), QuizError> {
        self.send(QuizCommand::Unpick(index)).await
    }

    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner has stopped.
    pub async fn submit(&self) -> Result<(), QuizError> {
        self.send(QuizCommand::Submit).await
    }

    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner has stopped.
    pub async fn restart(&self) -> Result<(), QuizError> {
        self.send(QuizCommand::Restart).await
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until the quiz reaches `phase` and return that snapshot.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Closed` if the runner stops first.
    pub async fn wait_for_phase(&self, phase: Phase) -> Result<QuizSnapshot, QuizError> {
        let mut snapshots = self.subscribe();
        let snapshot = snapshots
            .wait_for(|snapshot| snapshot.phase == phase)
            .await
            .map_err(|_| QuizError::Closed)?;
        Ok(snapshot.clone())
    }
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

struct Countdown {
    id: CountdownId,
    interval: Interval,
}

impl Countdown {
    fn begin(id: CountdownId) -> Self {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { id, interval }
    }
}

/// Drives a [`QuizService`] on its own task.
///
/// The runner is the only writer to the session. It holds at most one countdown
/// and replaces it on every phase change, so a tick can only ever reach the
/// phase it was started for.
pub struct QuizRunner {
    service: QuizService,
    commands: mpsc::Receiver<QuizCommand>,
    snapshots: watch::Sender<QuizSnapshot>,
    countdown: Option<Countdown>,
}

impl QuizRunner {
    /// Spawn the runner on the current tokio runtime.
    ///
    /// The join handle yields the service back once all handles are dropped.
    #[must_use]
    pub fn spawn(service: QuizService) -> (QuizHandle, JoinHandle<QuizService>) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(service.snapshot());
        let runner = Self {
            service,
            commands: command_rx,
            snapshots: snapshot_tx,
            countdown: None,
        };
        let task = tokio::spawn(runner.run());
        let handle = QuizHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        };
        (handle, task)
    }

    async fn run(mut self) -> QuizService {
        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(command) = command else { break };
                    let transition = self.service.apply(command.into());
                    self.publish(transition);
                }
                id = next_tick(&mut self.countdown) => {
                    let transition = self.service.tick(id);
                    self.publish(transition);
                }
            }
        }
        tracing::debug!(phase = %self.service.phase(), "quiz runner stopped");
        self.service
    }

    fn publish(&mut self, transition: Transition) {
        if transition == Transition::Ignored {
            return;
        }
        if let Some(phase) = transition.entered() {
            // Dropping the old interval cancels whatever it still had pending.
            let id = self.service.session().countdown();
            self.countdown = phase.is_timed().then(|| Countdown::begin(id));
        }
        self.snapshots.send_replace(self.service.snapshot());
    }
}

async fn next_tick(countdown: &mut Option<Countdown>) -> CountdownId {
    match countdown {
        Some(countdown) => {
            countdown.interval.tick().await;
            countdown.id
        }
        None => pending().await,
    }
}
