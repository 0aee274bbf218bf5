//! HTTP service over job records stored as files on disk.
//!
//! Each job lives in `<jobs_root>/<jobID>/` with a `job.json` or `job.yaml`
//! record and an optional `assets/` folder. The service never creates jobs;
//! it reports their status, hands out records and assets, and overwrites
//! records of jobs that already exist.

pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod infrastructure;
pub mod modules;
pub mod routes;
pub mod state;
