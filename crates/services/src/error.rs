//! Shared error types for the services crate.

use thiserror::Error;

use memtest_core::model::SymbolPoolError;

/// Errors emitted by quiz services.
///
/// Invalid user input is never an error here; the session treats it as a no-op.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Pool(#[from] SymbolPoolError),
    #[error("quiz runner has shut down")]
    Closed,
}
