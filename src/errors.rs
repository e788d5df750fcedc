use thiserror::Error;

/// Crate-wide error taxonomy.
///
/// `FormatError` and `EmptyHistory` signal programmer misuse and are always
/// propagated to the caller. `WorkerTimeout` is absorbed by the search
/// driver, which drops the late worker and reports it in the statistics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The flat position string did not have exactly 64 characters.
    #[error("flat position string must be 64 characters long, got {0}")]
    FormatError(usize),
    /// `undo` was called on a position with no history to restore.
    #[error("no moves to undo")]
    EmptyHistory,
    /// The strict apply path was handed a square outside the legal-move set.
    #[error("square {0} is not a legal placement for the side to move")]
    IllegalMoveUse(u8),
    /// A parallel root worker did not finish before the search deadline.
    #[error("root worker for square {0} missed the search deadline")]
    WorkerTimeout(u8),
}
