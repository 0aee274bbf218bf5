use serde_json::Value;
use tracing::{debug, info};

use super::dto::JobStatusResponse;
use super::model::AssetFile;
use super::repository::JobRepository;
use crate::common::response::JobError;
use crate::infrastructure::codec::Record;
use crate::state::AppState;

pub struct JobService;

impl JobService {
    pub async fn status(state: AppState, job_id: u64) -> Result<JobStatusResponse, JobError> {
        let _guard = state.locks.lock(job_id).await;

        let exists = JobRepository::job_exists(&state.store, job_id).await;
        let complete = if exists {
            JobRepository::get_job(&state.store, job_id)
                .await?
                .get("complete")
                .and_then(Value::as_bool)
                .unwrap_or(false)
        } else {
            false
        };

        Ok(JobStatusResponse { exists, complete })
    }

    pub async fn checkout(state: AppState, job_id: u64) -> Result<Record, JobError> {
        let mut job = {
            let _guard = state.locks.lock(job_id).await;
            JobRepository::get_job(&state.store, job_id).await?
        };

        if state.config.inject_id {
            job.insert("id".to_string(), Value::from(job_id));
        }

        Ok(job)
    }

    pub async fn find_asset(
        state: AppState,
        job_id: u64,
        asset_name: &str,
    ) -> Result<AssetFile, JobError> {
        let mut assets = JobRepository::get_assets(&state.store, job_id).await?;

        match assets.remove(asset_name) {
            Some(path) => Ok(AssetFile {
                name: asset_name.to_string(),
                path,
            }),
            None => Err(JobError::NoSuchAsset {
                job_id,
                asset: asset_name.to_string(),
            }),
        }
    }

    /// Replaces the record of an existing job. Empty bodies and unknown jobs
    /// are ignored.
    pub async fn return_job(state: AppState, job_id: u64, data: Record) -> Result<(), JobError> {
        if data.is_empty() {
            debug!("Ignoring empty return for job {}", job_id);
            return Ok(());
        }

        let _guard = state.locks.lock(job_id).await;
        if JobRepository::write_job(&state.store, job_id, &data).await? {
            info!("Job {} record updated", job_id);
        } else {
            debug!("Job {} does not exist, return ignored", job_id);
        }

        Ok(())
    }
}
