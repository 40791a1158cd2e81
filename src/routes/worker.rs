use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::dashboard::{JobListing, WorkerStats};
use crate::guards::WorkerGuard;
use crate::models::Application;
use crate::utils::{ApiResponse, ApiError};
use crate::SharedApp;

// ============================================================================
// WORKER DASHBOARD
// ============================================================================

#[openapi(tag = "Worker")]
#[get("/worker/jobs")]
pub async fn list_jobs(
    app: &State<SharedApp>,
    _auth: WorkerGuard,
) -> Result<Json<ApiResponse<Vec<JobListing>>>, ApiError> {
    let app = app.lock().await;
    let (dashboard, worker) = app.worker_dashboard()?;
    Ok(Json(ApiResponse::success(dashboard.listings(&worker.id))))
}

#[openapi(tag = "Worker")]
#[post("/worker/jobs/<job_id>/apply")]
pub async fn apply_to_job(
    app: &State<SharedApp>,
    _auth: WorkerGuard,
    job_id: String,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let mut app = app.lock().await;
    let application = app.apply(&job_id)?;
    Ok(Json(ApiResponse::success_with_message(
        "Application submitted successfully!",
        application,
    )))
}

/// Used to grey out the apply button and show the status badge.
#[openapi(tag = "Worker")]
#[get("/worker/jobs/<job_id>/application")]
pub async fn get_application(
    app: &State<SharedApp>,
    _auth: WorkerGuard,
    job_id: String,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let app = app.lock().await;
    let (dashboard, worker) = app.worker_dashboard()?;
    let application = dashboard
        .application_for(&job_id, &worker.id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("No application for this job"))?;
    Ok(Json(ApiResponse::success(application)))
}

#[openapi(tag = "Worker")]
#[get("/worker/applications")]
pub async fn list_applications(
    app: &State<SharedApp>,
    _auth: WorkerGuard,
) -> Result<Json<ApiResponse<Vec<Application>>>, ApiError> {
    let app = app.lock().await;
    let (dashboard, _) = app.worker_dashboard()?;
    Ok(Json(ApiResponse::success(dashboard.applications().to_vec())))
}

#[openapi(tag = "Worker")]
#[get("/worker/stats")]
pub async fn worker_stats(
    app: &State<SharedApp>,
    _auth: WorkerGuard,
) -> Result<Json<ApiResponse<WorkerStats>>, ApiError> {
    let app = app.lock().await;
    let (dashboard, _) = app.worker_dashboard()?;
    Ok(Json(ApiResponse::success(dashboard.stats())))
}
