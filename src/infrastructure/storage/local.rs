use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::infrastructure::codec::RecordCodec;

/// Filesystem layout of the jobs root:
///
/// ```text
/// <root>/<jobID>/job.<ext>
/// <root>/<jobID>/assets/<name>
/// ```
#[derive(Clone)]
pub struct JobStore {
    root: PathBuf,
    codec: Arc<dyn RecordCodec>,
}

impl JobStore {
    pub fn new(root: impl Into<PathBuf>, codec: Arc<dyn RecordCodec>) -> Self {
        let root = root.into();
        info!(
            "Serving job records from {} (job.{})",
            root.display(),
            codec.extension()
        );
        Self { root, codec }
    }

    pub fn codec(&self) -> &dyn RecordCodec {
        self.codec.as_ref()
    }

    pub fn job_folder(&self, job_id: u64) -> PathBuf {
        self.root.join(job_id.to_string())
    }

    pub fn job_file(&self, job_id: u64) -> PathBuf {
        self.job_folder(job_id)
            .join(format!("job.{}", self.codec.extension()))
    }

    pub fn assets_folder(&self, job_id: u64) -> PathBuf {
        self.job_folder(job_id).join("assets")
    }
}
