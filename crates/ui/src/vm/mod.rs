mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, QuizVm, progress_label};
pub use time_fmt::{format_countdown, format_elapsed};
