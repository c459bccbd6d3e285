use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure classification surfaced to callers of the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Requested id absent, or filtered out by availability
    NotFound,
    /// Empty or malformed input
    BadInput,
    /// A batch referenced ids that do not exist
    BatchMismatch,
    /// Store error propagated without translation
    StorePassthrough,
    /// Startup and internal failures
    Internal,
}

/// Errors raised by a product store
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The row targeted by an update does not exist
    #[error("Record to update not found (id {id})")]
    RecordNotFound { id: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadInput(String),

    #[error("{0}")]
    BatchMismatch(String),

    /// Request shape validation (DTO layer)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(StoreError::Database(err))
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound | ErrorKind::BadInput | ErrorKind::BatchMismatch => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::StorePassthrough | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::BadInput(_) | AppError::Validation(_) | AppError::Json(_) => {
                ErrorKind::BadInput
            }
            AppError::BatchMismatch(_) => ErrorKind::BatchMismatch,
            AppError::Store(_) => ErrorKind::StorePassthrough,
            AppError::Configuration(_) | AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn bad_input(msg: impl Into<String>) -> Self {
        AppError::BadInput(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
