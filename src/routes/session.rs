use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::session::{SessionSnapshot, View};
use crate::utils::{ApiResponse, ApiError};
use crate::SharedApp;

#[openapi(tag = "Session")]
#[get("/session")]
pub async fn get_session(
    app: &State<SharedApp>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, ApiError> {
    let app = app.lock().await;
    Ok(Json(ApiResponse::success(app.snapshot())))
}

/// Switches page. Guards may land on a different view than requested, e.g.
/// a dashboard without a login shows the matching auth form.
#[openapi(tag = "Session")]
#[post("/navigate/<view>")]
pub async fn navigate(
    app: &State<SharedApp>,
    view: String,
) -> Result<Json<ApiResponse<SessionSnapshot>>, ApiError> {
    let target: View = view.parse()?;
    let mut app = app.lock().await;
    app.navigate(target);
    Ok(Json(ApiResponse::success(app.snapshot())))
}

#[openapi(tag = "Session")]
#[post("/logout")]
pub async fn logout(
    app: &State<SharedApp>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, ApiError> {
    let mut app = app.lock().await;
    app.logout()?;
    Ok(Json(ApiResponse::success_with_message(
        "Logged out",
        app.snapshot(),
    )))
}
