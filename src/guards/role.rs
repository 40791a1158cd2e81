use rocket::request::{self, Request, FromRequest, Outcome};
use rocket::http::Status;
use log::warn;
use rocket_okapi::request::OpenApiFromRequest;
use rocket_okapi::r#gen::OpenApiGenerator;
use rocket_okapi::request::RequestHeaderInput;

use crate::guards::SessionGuard;
use crate::models::{User, UserType};

async fn require_role<'r>(req: &'r Request<'_>, role: UserType) -> Outcome<User, ()> {
    match req.guard::<SessionGuard>().await {
        Outcome::Success(session) => {
            if session.user.is(role) {
                Outcome::Success(session.user)
            } else {
                warn!(
                    "Role guard rejected {} ({}) for a {} route",
                    session.user.id, session.user.user_type, role
                );
                Outcome::Error((Status::Forbidden, ()))
            }
        }
        Outcome::Error(e) => Outcome::Error(e),
        Outcome::Forward(f) => Outcome::Forward(f),
    }
}

pub struct RecruiterGuard {
    pub user: User,
}

pub struct WorkerGuard {
    pub user: User,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RecruiterGuard {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        require_role(req, UserType::Recruiter)
            .await
            .map(|user| RecruiterGuard { user })
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for WorkerGuard {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        require_role(req, UserType::Worker)
            .await
            .map(|user| WorkerGuard { user })
    }
}

impl<'a> OpenApiFromRequest<'a> for RecruiterGuard {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        Ok(RequestHeaderInput::None)
    }
}

impl<'a> OpenApiFromRequest<'a> for WorkerGuard {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        Ok(RequestHeaderInput::None)
    }
}
