use axum::{
    Json,
    body::{Body, Bytes},
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio_util::io::ReaderStream;

use super::dto::{AssetQuery, JobQuery, JobStatusResponse};
use super::service::JobService;
use crate::common::args::first_values;
use crate::common::response::JobError;
use crate::infrastructure::codec::Record;
use crate::state::AppState;

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
    tag = "Jobs"
)]
pub async fn root() -> &'static str {
    "server online"
}

/// Report whether a job exists and is complete
#[utoipa::path(
    get,
    path = "/jobs/",
    params(
        ("jobID" = u64, Query, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job status, or a plain-text validation error", body = JobStatusResponse),
        (status = 500, description = "Record could not be read")
    ),
    tag = "Jobs"
)]
pub async fn job_status(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<JobStatusResponse>, JobError> {
    let query = JobQuery::from_params(&first_values(pairs))?;
    let status = JobService::status(state, query.job_id).await?;
    Ok(Json(status))
}

/// Fetch the full job record
#[utoipa::path(
    get,
    path = "/jobs/checkout",
    params(
        ("jobID" = u64, Query, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job record (empty object for unknown jobs)", body = Object),
        (status = 500, description = "Record could not be read")
    ),
    tag = "Jobs"
)]
pub async fn checkout_job(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Record>, JobError> {
    let query = JobQuery::from_params(&first_values(pairs))?;
    let job = JobService::checkout(state, query.job_id).await?;
    Ok(Json(job))
}

/// Download one asset of a job
#[utoipa::path(
    get,
    path = "/jobs/retrieveAsset",
    params(
        ("jobID" = u64, Query, description = "Job ID"),
        ("assetName" = String, Query, description = "Asset file name")
    ),
    responses(
        (status = 200, description = "Asset bytes as image/<extension>, or a plain-text error"),
        (status = 500, description = "Assets could not be listed or read")
    ),
    tag = "Jobs"
)]
pub async fn retrieve_asset(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, JobError> {
    let query = AssetQuery::from_params(&first_values(pairs))?;
    let asset = JobService::find_asset(state, query.job_id, &query.asset_name).await?;

    let file = tokio::fs::File::open(&asset.path).await?;
    let length = file.metadata().await?.len();
    let content_type = HeaderValue::from_str(&asset.content_type())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    let body = Body::from_stream(ReaderStream::new(file));

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, length)
        .body(body)
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()))
}

/// Overwrite the record of an existing job
#[utoipa::path(
    post,
    path = "/jobs/return",
    params(
        ("jobID" = u64, Query, description = "Job ID")
    ),
    request_body(content = Object, description = "Replacement job record", content_type = "application/json"),
    responses(
        (status = 200, description = "Empty body; unknown jobs and empty bodies are ignored"),
        (status = 500, description = "Record could not be written")
    ),
    tag = "Jobs"
)]
pub async fn return_job(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<(), JobError> {
    let query = JobQuery::from_params(&first_values(pairs))?;

    // Anything other than a JSON object is treated like a missing body.
    let data = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(map)) => map,
        _ => Record::new(),
    };

    JobService::return_job(state, query.job_id, data).await
}
