mod runner;
mod service;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use runner::{QuizCommand, QuizHandle, QuizRunner, TICK_PERIOD};
pub use service::QuizService;
pub use view::{PaletteEntry, QuizResult, QuizSnapshot};
