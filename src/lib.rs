#[macro_use]
extern crate rocket;

pub mod config;
pub mod dashboard;
pub mod error;
pub mod flows;
pub mod guards;
pub mod models;
pub mod profile;
pub mod routes;
pub mod services;
pub mod session;
pub mod store;
pub mod utils;

use log::info;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{SwaggerUIConfig, make_swagger_ui};

use crate::config::Config;
use crate::services::{InlineOtpSender, MockIdentityProvider};
use crate::session::{App, SessionDeps};
use crate::store::{FileSessionStore, MemorySessionStore, SessionStore};

/// The one session this process serves. Handlers hold the lock for a whole
/// event, so events apply one at a time.
pub type SharedApp = tokio::sync::Mutex<App>;

/* ----------------------------- CORS ----------------------------- */

pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        if let Some(origin) = request.headers().get_one("Origin") {
            response.set_header(Header::new("Access-Control-Allow-Origin", origin));
        }

        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, OPTIONS",
        ));

        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));

        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

/* ----------------------------- OPTIONS ----------------------------- */

#[options("/<_..>")]
fn options_handler() {}

/* ----------------------------- ERRORS ----------------------------- */

#[catch(401)]
fn unauthorized() -> rocket::serde::json::Value {
    rocket::serde::json::json!({
        "success": false,
        "message": "Please log in first"
    })
}

#[catch(403)]
fn forbidden() -> rocket::serde::json::Value {
    rocket::serde::json::json!({
        "success": false,
        "message": "This page belongs to the other account type"
    })
}

#[catch(404)]
fn not_found() -> rocket::serde::json::Value {
    rocket::serde::json::json!({
        "success": false,
        "message": "Resource not found (check /api/v1 prefix)"
    })
}

#[catch(413)]
fn payload_too_large() -> rocket::serde::json::Value {
    rocket::serde::json::json!({
        "success": false,
        "message": "Request body is too large"
    })
}

#[catch(422)]
fn unprocessable() -> rocket::serde::json::Value {
    rocket::serde::json::json!({
        "success": false,
        "message": "Malformed form data"
    })
}

#[catch(500)]
fn internal_error() -> rocket::serde::json::Value {
    rocket::serde::json::json!({
        "success": false,
        "message": "Internal server error"
    })
}

/* ----------------------------- SWAGGER ----------------------------- */

fn swagger_config() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/api/v1/openapi.json".to_string(),
        ..Default::default()
    }
}

/* ----------------------------- BUILD ----------------------------- */

/// Slack for the JSON envelope around a base64 photo.
const JSON_ENVELOPE_BYTES: u64 = 64 * 1024;

/// Body limit for JSON requests: a photo of `max_image_bytes` must still fit
/// once base64 encoded.
pub fn json_limit(max_image_bytes: usize) -> u64 {
    let encoded = (max_image_bytes as u64).div_ceil(3) * 4;
    encoded + JSON_ENVELOPE_BYTES
}

/// Mounts every route around an already booted session.
pub fn build(app: App) -> Rocket<Build> {
    let limit = json_limit(app.max_image_bytes());
    info!("JSON body limit: {} bytes", limit);

    let figment = rocket::Config::figment().merge(("limits.json", limit));

    rocket::custom(figment)
        .manage(SharedApp::new(app))
        .attach(CORS)
        .mount("/", routes![options_handler])
        .mount(
            "/api/v1",
            openapi_get_routes![
                // Session
                routes::session::get_session,
                routes::session::navigate,
                routes::session::logout,
                // Auth
                routes::auth::get_auth_state,
                routes::auth::toggle,
                routes::auth::login,
                routes::auth::signup,
                routes::auth::verify_otp,
                // Recruiter dashboard
                routes::job::list_posted_jobs,
                routes::job::post_job,
                routes::job::recruiter_stats,
                // Worker dashboard
                routes::worker::list_jobs,
                routes::worker::apply_to_job,
                routes::worker::get_application,
                routes::worker::list_applications,
                routes::worker::worker_stats,
                // Profile
                routes::user::get_profile,
                routes::user::begin_edit,
                routes::user::update_draft,
                routes::user::save_profile,
                routes::user::cancel_edit,
                routes::user::upload_photo,
                routes::user::back,
            ],
        )
        .mount("/api/docs", make_swagger_ui(&swagger_config()))
        .register(
            "/",
            catchers![
                unauthorized,
                forbidden,
                not_found,
                payload_too_large,
                unprocessable,
                internal_error
            ],
        )
}

fn configured_store() -> Box<dyn SessionStore> {
    if Config::ephemeral_session() {
        info!("Session storage: in-memory");
        Box::new(MemorySessionStore::new(Config::storage_key()))
    } else {
        let path = Config::session_file();
        info!("Session storage: {}", path.display());
        Box::new(FileSessionStore::new(path, Config::storage_key()))
    }
}

/// Boots the session from configuration and builds the server around it.
pub fn rocket() -> Rocket<Build> {
    let app = App::boot(SessionDeps {
        store: configured_store(),
        identity: Box::new(MockIdentityProvider),
        otp: Box::new(InlineOtpSender),
        max_image_bytes: Config::max_image_bytes(),
    });

    build(app)
}
