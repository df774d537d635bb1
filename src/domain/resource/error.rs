use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ResourceServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("resource not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ResourceServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ResourceServiceError::Invalid(msg),
            AppError::NotFound(_) => ResourceServiceError::NotFound,
            _ => ResourceServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ResourceServiceError> for AppError {
    fn from(err: ResourceServiceError) -> Self {
        match err {
            ResourceServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ResourceServiceError::NotFound => AppError::NotFound("Resource not found".to_string()),
            ResourceServiceError::Dependency(msg) => AppError::Internal(msg),
            ResourceServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
