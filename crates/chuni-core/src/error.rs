use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid decimal literal: {0:?}")]
    InvalidDecimal(String),

    #[error("Invalid chart level: {0:?}")]
    InvalidLevel(String),

    #[error("Score out of range: {0} (max {max})", max = crate::config::score::MAX_SCORE)]
    ScoreOutOfRange(u32),

    #[error("Chart has no notes")]
    InvalidNoteCount,

    #[error("Judgment counts add up to {actual}, chart has {expected} notes")]
    JudgmentCountMismatch { expected: u32, actual: u64 },

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
