use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use mido_core::{ScrapeRequest, ScrapingJob};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct JobListResponse {
    success: bool,
    data: Vec<ScrapingJob>,
    total: usize,
    message: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct JobCreatedResponse {
    success: bool,
    data: ScrapingJob,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct JobErrorBody {
    success: bool,
    error: &'static str,
}

#[derive(Debug)]
pub(super) enum JobError {
    MissingFields,
    CreateFailed,
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            JobError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            JobError::CreateFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create scraping job",
            ),
        };
        (
            status,
            Json(JobErrorBody {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}

/// GET /api/v1/scraping/jobs: sample jobs for the scraping dashboard.
pub(super) async fn list_jobs() -> Json<JobListResponse> {
    let data = mido_catalog::list_mock_jobs(Utc::now());
    Json(JobListResponse {
        total: data.len(),
        success: true,
        data,
        message: "Scraping jobs retrieved successfully",
    })
}

/// POST /api/v1/scraping/jobs: queue a (nominal) scraping job.
pub(super) async fn create_job(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<JobCreatedResponse>, JobError> {
    let request: ScrapeRequest = body
        .map_err(|e| e.to_string())
        .and_then(|b| serde_json::from_slice::<ScrapeRequest>(&b).map_err(|e| e.to_string()))
        .map_err(|error| {
            tracing::error!(%error, "invalid scraping job request body");
            JobError::CreateFailed
        })?;

    let (source, category) = request.params().ok_or(JobError::MissingFields)?;
    let job = mido_catalog::new_pending_job(&source, &category, Utc::now());
    tracing::info!(job_id = %job.id, %source, %category, "scraping job queued");

    Ok(Json(JobCreatedResponse {
        success: true,
        data: job,
        message: "Scraping job created successfully",
    }))
}
