#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod shuffle;

pub use memtest_core::Clock;

pub use error::QuizError;
pub use quiz::{
    PaletteEntry, QuizCommand, QuizHandle, QuizResult, QuizRunner, QuizService, QuizSnapshot,
    TICK_PERIOD,
};
pub use shuffle::RandomShuffler;
