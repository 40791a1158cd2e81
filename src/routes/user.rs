use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use log::warn;

use crate::guards::SessionGuard;
use crate::profile::{ImageUpload, ProfilePatch, ProfileSnapshot};
use crate::session::{App, SessionSnapshot};
use crate::utils::{ApiResponse, ApiError};
use crate::SharedApp;

fn profile_snapshot(app: &App) -> Result<ProfileSnapshot, ApiError> {
    let (editor, user) = app.profile()?;
    Ok(editor.snapshot(user))
}

#[openapi(tag = "Profile")]
#[get("/profile")]
pub async fn get_profile(
    app: &State<SharedApp>,
    _auth: SessionGuard,
) -> Result<Json<ApiResponse<ProfileSnapshot>>, ApiError> {
    let app = app.lock().await;
    Ok(Json(ApiResponse::success(profile_snapshot(&app)?)))
}

#[openapi(tag = "Profile")]
#[post("/profile/edit")]
pub async fn begin_edit(
    app: &State<SharedApp>,
    _auth: SessionGuard,
) -> Result<Json<ApiResponse<ProfileSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.begin_profile_edit()?;
    Ok(Json(ApiResponse::success(profile_snapshot(&app)?)))
}

#[openapi(tag = "Profile")]
#[put("/profile/draft", data = "<dto>")]
pub async fn update_draft(
    app: &State<SharedApp>,
    _auth: SessionGuard,
    dto: Json<ProfilePatch>,
) -> Result<Json<ApiResponse<ProfileSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.update_profile_draft(dto.into_inner())?;
    Ok(Json(ApiResponse::success(profile_snapshot(&app)?)))
}

#[openapi(tag = "Profile")]
#[post("/profile/save")]
pub async fn save_profile(
    app: &State<SharedApp>,
    _auth: SessionGuard,
) -> Result<Json<ApiResponse<ProfileSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.save_profile()?;
    Ok(Json(ApiResponse::success_with_message(
        "Profile updated successfully",
        profile_snapshot(&app)?,
    )))
}

#[openapi(tag = "Profile")]
#[post("/profile/cancel")]
pub async fn cancel_edit(
    app: &State<SharedApp>,
    _auth: SessionGuard,
) -> Result<Json<ApiResponse<ProfileSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.cancel_profile_edit()?;
    Ok(Json(ApiResponse::success(profile_snapshot(&app)?)))
}

/// Photo is held in memory as a data URL and dropped on restart or logout.
#[openapi(tag = "Profile")]
#[post("/profile/photo", data = "<upload>")]
pub async fn upload_photo(
    app: &State<SharedApp>,
    _auth: SessionGuard,
    upload: Json<ImageUpload>,
) -> Result<Json<ApiResponse<ProfileSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.upload_profile_image(upload.into_inner()).map_err(|e| {
        warn!("Profile photo rejected: {}", e);
        e
    })?;
    Ok(Json(ApiResponse::success_with_message(
        "Photo updated",
        profile_snapshot(&app)?,
    )))
}

#[openapi(tag = "Profile")]
#[post("/profile/back")]
pub async fn back(
    app: &State<SharedApp>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.back_from_profile();
    Ok(Json(ApiResponse::success(app.snapshot())))
}
