use crate::common::locks::JobLocks;
use crate::config::settings::AppConfig;
use crate::infrastructure::storage::local::JobStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: JobStore,
    pub locks: JobLocks,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = JobStore::new(config.jobs_root.clone(), config.format.codec());
        Self {
            config,
            store,
            locks: JobLocks::new(),
        }
    }
}
