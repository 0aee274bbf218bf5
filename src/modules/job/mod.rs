use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::root))
        .route("/jobs", get(handler::job_status))
        .route("/jobs/", get(handler::job_status))
        .route("/jobs/checkout", get(handler::checkout_job))
        .route("/jobs/retrieveAsset", get(handler::retrieve_asset))
        .route("/jobs/return", post(handler::return_job))
}
