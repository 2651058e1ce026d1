use crate::model::JobId;
use crate::validate::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobzError {
    #[error("Job not found: {0}")]
    JobNotFound(JobId),

    #[error("No job data available (no saved listings and no seed file)")]
    DataUnavailable,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JobzError>;
