use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::dashboard::RecruiterStats;
use crate::guards::RecruiterGuard;
use crate::models::{JobForm, JobResponse};
use crate::utils::{ApiResponse, ApiError};
use crate::SharedApp;

// ============================================================================
// RECRUITER DASHBOARD
// ============================================================================

#[openapi(tag = "Recruiter")]
#[get("/recruiter/jobs")]
pub async fn list_posted_jobs(
    app: &State<SharedApp>,
    _auth: RecruiterGuard,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    let app = app.lock().await;
    let jobs = app
        .recruiter_dashboard()?
        .jobs()
        .iter()
        .cloned()
        .map(JobResponse::from)
        .collect();
    Ok(Json(ApiResponse::success(jobs)))
}

#[openapi(tag = "Recruiter")]
#[post("/recruiter/jobs", data = "<dto>")]
pub async fn post_job(
    app: &State<SharedApp>,
    _auth: RecruiterGuard,
    dto: Json<JobForm>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let mut app = app.lock().await;
    let job = app.post_job(dto.into_inner())?;
    Ok(Json(ApiResponse::success_with_message(
        "Job posted successfully",
        JobResponse::from(job),
    )))
}

#[openapi(tag = "Recruiter")]
#[get("/recruiter/stats")]
pub async fn recruiter_stats(
    app: &State<SharedApp>,
    _auth: RecruiterGuard,
) -> Result<Json<ApiResponse<RecruiterStats>>, ApiError> {
    let app = app.lock().await;
    Ok(Json(ApiResponse::success(app.recruiter_dashboard()?.stats())))
}
