#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog source returned {status} for {url}")]
    Status { status: u16, url: String },

    /// A background task running a catalog read panicked or was cancelled.
    #[error("Catalog task failed: {0}")]
    Task(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StorefrontError {
    /// Whether this error came from reading the catalog source (transport,
    /// non-success status, an undecodable body, or a failed read task).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            StorefrontError::Http(_)
                | StorefrontError::Json(_)
                | StorefrontError::Status { .. }
                | StorefrontError::Task(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
