use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::common::args::ArgError;
use crate::infrastructure::codec::CodecError;

#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Args(#[from] ArgError),
    #[error("Error - no such asset {asset} for job {job_id}")]
    NoSuchAsset { job_id: u64, asset: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl JobError {
    /// Client mistakes keep the legacy plain-text 200 response.
    pub fn status(&self) -> StatusCode {
        match self {
            JobError::Args(_) | JobError::NoSuchAsset { .. } => StatusCode::OK,
            JobError::Io(_) | JobError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Plain-text error body with an explicit status.
pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        let status = err.status();
        if status.is_server_error() {
            error!("Job request failed: {}", err);
        }
        ApiError(err.to_string(), status)
    }
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
