use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Pixel budget must be within {min}..={max}, got: {value}")]
    BudgetOutOfRange { value: u64, min: u64, max: u64 },

    #[error(transparent)]
    Selection(#[from] ressel::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
