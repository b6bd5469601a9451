#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Edit error: {0}")]
    Core(#[from] structedit_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
