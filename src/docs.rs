use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::job::handler::root,
        crate::modules::job::handler::job_status,
        crate::modules::job::handler::checkout_job,
        crate::modules::job::handler::retrieve_asset,
        crate::modules::job::handler::return_job,
    ),
    components(
        schemas(
            crate::modules::job::dto::JobStatusResponse,
        )
    ),
    tags(
        (name = "Jobs", description = "Job records and assets stored on disk")
    )
)]
pub struct ApiDoc;
