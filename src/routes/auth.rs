use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use log::warn;

use crate::flows::AuthSnapshot;
use crate::models::{LoginForm, SignupForm, UserType, VerifyOtpDto};
use crate::session::SessionSnapshot;
use crate::utils::{ApiResponse, ApiError};
use crate::SharedApp;

fn parse_role(role: &str) -> Result<UserType, ApiError> {
    Ok(role.parse::<UserType>()?)
}

#[openapi(tag = "Auth")]
#[get("/auth/<role>")]
pub async fn get_auth_state(
    app: &State<SharedApp>,
    role: String,
) -> Result<Json<ApiResponse<AuthSnapshot>>, ApiError> {
    let role = parse_role(&role)?;
    let app = app.lock().await;
    Ok(Json(ApiResponse::success(app.auth(role).snapshot())))
}

/// --------------------
/// Login <-> Signup
/// --------------------
#[openapi(tag = "Auth")]
#[post("/auth/<role>/toggle")]
pub async fn toggle(
    app: &State<SharedApp>,
    role: String,
) -> Result<Json<ApiResponse<AuthSnapshot>>, ApiError> {
    let role = parse_role(&role)?;
    let mut app = app.lock().await;
    app.toggle_auth(role);
    Ok(Json(ApiResponse::success(app.auth(role).snapshot())))
}

/// --------------------
/// Mock login
/// --------------------
#[openapi(tag = "Auth")]
#[post("/auth/<role>/login", data = "<dto>")]
pub async fn login(
    app: &State<SharedApp>,
    role: String,
    dto: Json<LoginForm>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, ApiError> {
    let role = parse_role(&role)?;
    let mut app = app.lock().await;
    app.submit_login(role, dto.into_inner())?;
    Ok(Json(ApiResponse::success_with_message(
        "Login successful",
        app.snapshot(),
    )))
}

/// --------------------
/// Signup -> OTP
/// --------------------
#[openapi(tag = "Auth")]
#[post("/auth/<role>/signup", data = "<dto>")]
pub async fn signup(
    app: &State<SharedApp>,
    role: String,
    dto: Json<SignupForm>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let role = parse_role(&role)?;
    let mut app = app.lock().await;
    let otp = app.submit_signup(role, dto.into_inner()).map_err(|e| {
        warn!("{} signup rejected: {}", role, e);
        e
    })?;

    // Delivery is simulated, so the code goes straight back to the user.
    Ok(Json(ApiResponse::success_with_message(
        format!("OTP sent to your phone: {}", otp),
        serde_json::json!({
            "otp": otp,
            "auth": app.auth(role).snapshot(),
        }),
    )))
}

/// --------------------
/// Verify OTP + Login
/// --------------------
#[openapi(tag = "Auth")]
#[post("/auth/<role>/verify-otp", data = "<dto>")]
pub async fn verify_otp(
    app: &State<SharedApp>,
    role: String,
    dto: Json<VerifyOtpDto>,
) -> Result<Json<ApiResponse<SessionSnapshot>>, ApiError> {
    let role = parse_role(&role)?;
    let mut app = app.lock().await;
    app.verify_otp(role, &dto.otp).map_err(|e| {
        warn!("{} OTP verification failed: {}", role, e);
        e
    })?;
    Ok(Json(ApiResponse::success_with_message(
        "Registration successful",
        app.snapshot(),
    )))
}
