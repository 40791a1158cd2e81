use rocket::request::{self, FromRequest, Request, Outcome};
use rocket::http::Status;
use rocket::State;

// === OpenAPI (compatible with rocket_okapi 0.8.0 / 0.8.1) ===
use rocket_okapi::request::{OpenApiFromRequest, RequestHeaderInput};
use rocket_okapi::r#gen::OpenApiGenerator;

use crate::models::User;
use crate::SharedApp;

/// Requires a logged-in user in the session.
pub struct SessionGuard {
    pub user: User,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionGuard {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let app = match req.guard::<&State<SharedApp>>().await {
            Outcome::Success(app) => app,
            _ => return Outcome::Error((Status::InternalServerError, ())),
        };

        let user = app.lock().await.context().user().cloned();
        match user {
            Some(user) => Outcome::Success(SessionGuard { user }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// === OpenAPI Integration (Fallback for older versions) ===
/// Keeps OpenAPI generation working even without new traits.
impl<'a> OpenApiFromRequest<'a> for SessionGuard {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        // The guard doesn't contribute any special header/parameter for docs
        Ok(RequestHeaderInput::None)
    }
}
