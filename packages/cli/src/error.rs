#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Edit error: {0}")]
    Core(#[from] structedit_core::Error),

    #[error("Invalid JSON argument {argument:?}: {source}")]
    InvalidArgument {
        argument: String,
        source: serde_json::Error,
    },
}
