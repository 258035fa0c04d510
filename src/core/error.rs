use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("channel already exists")]
    Conflict,

    #[error("profile not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict,
            _ => StoreError::Database(err),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("channel is already used by another profile")]
    DuplicateChannel,

    #[error("profile not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(#[from] sqlx::Error),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => ServiceError::DuplicateChannel,
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Database(err) => ServiceError::Internal(err),
        }
    }
}
