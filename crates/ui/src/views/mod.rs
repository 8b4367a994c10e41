mod memorize;
mod quiz;
mod recall;
mod results;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use memorize::MemorizeScreen;
pub use quiz::QuizView;
pub use recall::RecallScreen;
pub use results::ResultsScreen;
pub use welcome::WelcomeScreen;
