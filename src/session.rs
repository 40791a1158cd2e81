//! Root controller: which view is showing, who is logged in, and the state
//! each view owns.

use log::{info, warn};
use serde::Serialize;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use std::fmt;
use std::str::FromStr;

use crate::dashboard::{RecruiterDashboard, WorkerDashboard};
use crate::error::{DomainError, DomainResult};
use crate::flows::AuthFlow;
use crate::models::{Application, Job, JobForm, LoginForm, SignupForm, User, UserType};
use crate::profile::{ImageUpload, ProfileEditor, ProfilePatch, DEFAULT_MAX_IMAGE_BYTES};
use crate::services::{IdentityProvider, OtpSender};
use crate::store::SessionStore;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    About,
    Features,
    Contact,
    Profile,
    RecruiterAuth,
    WorkerAuth,
    RecruiterDashboard,
    WorkerDashboard,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Home,
        View::About,
        View::Features,
        View::Contact,
        View::Profile,
        View::RecruiterAuth,
        View::WorkerAuth,
        View::RecruiterDashboard,
        View::WorkerDashboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Features => "features",
            View::Contact => "contact",
            View::Profile => "profile",
            View::RecruiterAuth => "recruiter-auth",
            View::WorkerAuth => "worker-auth",
            View::RecruiterDashboard => "recruiter-dashboard",
            View::WorkerDashboard => "worker-dashboard",
        }
    }

    pub fn dashboard_for(role: UserType) -> View {
        match role {
            UserType::Recruiter => View::RecruiterDashboard,
            UserType::Worker => View::WorkerDashboard,
        }
    }

    pub fn auth_for(role: UserType) -> View {
        match role {
            UserType::Recruiter => View::RecruiterAuth,
            UserType::Worker => View::WorkerAuth,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::UnknownView(s.to_string()))
    }
}

/// Who is logged in. `None` until rehydration or login, and again after
/// logout.
#[derive(Debug, Default, Clone)]
pub struct SessionContext {
    user: Option<User>,
}

impl SessionContext {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> DomainResult<&User> {
        self.user.as_ref().ok_or(DomainError::NotAuthenticated)
    }

    pub fn require_role(&self, role: UserType) -> DomainResult<&User> {
        let user = self.require_user()?;
        if !user.is(role) {
            return Err(DomainError::WrongRole {
                expected: role.as_str(),
            });
        }
        Ok(user)
    }

    fn begin(&mut self, user: User) {
        self.user = Some(user);
    }

    fn end(&mut self) {
        self.user = None;
    }
}

#[derive(Debug, Serialize, Clone, JsonSchema)]
pub struct SessionSnapshot {
    pub view: View,
    pub user: Option<User>,
}

/// Collaborators the controller is wired to at boot.
pub struct SessionDeps {
    pub store: Box<dyn SessionStore>,
    pub identity: Box<dyn IdentityProvider>,
    pub otp: Box<dyn OtpSender>,
    pub max_image_bytes: usize,
}

impl SessionDeps {
    pub fn new(
        store: impl SessionStore + 'static,
        identity: impl IdentityProvider + 'static,
        otp: impl OtpSender + 'static,
    ) -> Self {
        SessionDeps {
            store: Box::new(store),
            identity: Box::new(identity),
            otp: Box::new(otp),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

pub struct App {
    ctx: SessionContext,
    view: View,
    store: Box<dyn SessionStore>,
    identity: Box<dyn IdentityProvider>,
    otp: Box<dyn OtpSender>,
    recruiter_auth: AuthFlow,
    worker_auth: AuthFlow,
    recruiter_dashboard: RecruiterDashboard,
    worker_dashboard: WorkerDashboard,
    profile: ProfileEditor,
    max_image_bytes: usize,
}

impl App {
    /// Rehydrates the session from the store. A record that cannot be read is
    /// cleared and the session starts logged out.
    pub fn boot(deps: SessionDeps) -> Self {
        let mut app = App {
            ctx: SessionContext::default(),
            view: View::Home,
            store: deps.store,
            identity: deps.identity,
            otp: deps.otp,
            recruiter_auth: AuthFlow::new(UserType::Recruiter),
            worker_auth: AuthFlow::new(UserType::Worker),
            recruiter_dashboard: RecruiterDashboard::new(),
            worker_dashboard: WorkerDashboard::new(),
            profile: ProfileEditor::new(deps.max_image_bytes),
            max_image_bytes: deps.max_image_bytes,
        };

        match app.store.load() {
            Ok(Some(user)) => {
                info!("Restored session for {} ({})", user.id, user.user_type);
                app.view = View::dashboard_for(user.user_type);
                app.ctx.begin(user);
            }
            Ok(None) => info!("No stored session, starting logged out"),
            Err(e) => {
                warn!("Discarding unreadable session record: {}", e);
                if let Err(e) = app.store.clear() {
                    warn!("Failed to clear session record: {}", e);
                }
            }
        }

        app
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.view,
            user: self.ctx.user().cloned(),
        }
    }

    /// Moves to `target`, or to where the guards send it instead. Returns the
    /// view actually shown.
    pub fn navigate(&mut self, target: View) -> View {
        let resolved = match (target, self.ctx.user()) {
            (View::Profile, None) => View::Home,
            (View::RecruiterDashboard, user)
                if !user.is_some_and(|u| u.is(UserType::Recruiter)) =>
            {
                View::auth_for(UserType::Recruiter)
            }
            (View::WorkerDashboard, user) if !user.is_some_and(|u| u.is(UserType::Worker)) => {
                View::auth_for(UserType::Worker)
            }
            (
                View::Home
                | View::About
                | View::Features
                | View::Contact
                | View::Profile
                | View::RecruiterAuth
                | View::WorkerAuth
                | View::RecruiterDashboard
                | View::WorkerDashboard,
                _,
            ) => target,
        };

        match resolved {
            View::RecruiterAuth => self.recruiter_auth.reset(),
            View::WorkerAuth => self.worker_auth.reset(),
            View::Profile => self.profile.cancel(),
            View::Home
            | View::About
            | View::Features
            | View::Contact
            | View::RecruiterDashboard
            | View::WorkerDashboard => {}
        }

        self.view = resolved;
        resolved
    }

    /// Starts a session for `user`: persists it and opens its dashboard.
    pub fn login(&mut self, user: User) -> DomainResult<View> {
        self.store.save(&user)?;
        info!("Logged in {} ({})", user.id, user.user_type);

        self.recruiter_dashboard = RecruiterDashboard::new();
        self.worker_dashboard = WorkerDashboard::new();
        self.profile = ProfileEditor::new(self.max_image_bytes);

        let dashboard = View::dashboard_for(user.user_type);
        self.ctx.begin(user);
        self.view = dashboard;
        Ok(dashboard)
    }

    /// Ends the session. Clearing a missing record is not an error.
    pub fn logout(&mut self) -> DomainResult<View> {
        self.store.clear()?;
        if let Some(user) = self.ctx.user() {
            info!("Logged out {}", user.id);
        }

        self.ctx.end();
        self.recruiter_auth.reset();
        self.worker_auth.reset();
        self.recruiter_dashboard = RecruiterDashboard::new();
        self.worker_dashboard = WorkerDashboard::new();
        self.profile = ProfileEditor::new(self.max_image_bytes);
        self.view = View::Home;
        Ok(View::Home)
    }

    pub fn update_profile(&mut self, user: User) -> DomainResult<()> {
        self.store.save(&user)?;
        self.ctx.begin(user);
        Ok(())
    }

    pub fn back_from_profile(&mut self) -> View {
        let target = match self.ctx.user() {
            Some(user) => View::dashboard_for(user.user_type),
            None => View::Home,
        };
        self.navigate(target)
    }

    // ----- auth flows -----

    pub fn auth(&self, role: UserType) -> &AuthFlow {
        match role {
            UserType::Recruiter => &self.recruiter_auth,
            UserType::Worker => &self.worker_auth,
        }
    }

    fn auth_mut(&mut self, role: UserType) -> &mut AuthFlow {
        match role {
            UserType::Recruiter => &mut self.recruiter_auth,
            UserType::Worker => &mut self.worker_auth,
        }
    }

    pub fn toggle_auth(&mut self, role: UserType) {
        self.auth_mut(role).toggle();
    }

    pub fn submit_login(&mut self, role: UserType, form: LoginForm) -> DomainResult<User> {
        let flow = match role {
            UserType::Recruiter => &mut self.recruiter_auth,
            UserType::Worker => &mut self.worker_auth,
        };
        let before = flow.clone();
        let user = flow.login(form, self.identity.as_ref())?;
        self.commit_auth(before, user)
    }

    /// Returns the OTP to show the user.
    pub fn submit_signup(&mut self, role: UserType, form: SignupForm) -> DomainResult<String> {
        let flow = match role {
            UserType::Recruiter => &mut self.recruiter_auth,
            UserType::Worker => &mut self.worker_auth,
        };
        flow.signup(form, self.otp.as_ref())
    }

    pub fn verify_otp(&mut self, role: UserType, entered: &str) -> DomainResult<User> {
        let flow = match role {
            UserType::Recruiter => &mut self.recruiter_auth,
            UserType::Worker => &mut self.worker_auth,
        };
        let before = flow.clone();
        let user = flow.verify_otp(entered, self.identity.as_ref())?;
        self.commit_auth(before, user)
    }

    /// Opens the session for a user the flow just authenticated. If the
    /// record cannot be saved, the flow goes back to `before` so the same
    /// step can be retried.
    fn commit_auth(&mut self, before: AuthFlow, user: User) -> DomainResult<User> {
        if let Err(e) = self.login(user.clone()) {
            warn!("Login for {} not persisted: {}", user.id, e);
            let role = before.role();
            *self.auth_mut(role) = before;
            return Err(e);
        }
        Ok(user)
    }

    // ----- dashboards -----

    pub fn recruiter_dashboard(&self) -> DomainResult<&RecruiterDashboard> {
        self.ctx.require_role(UserType::Recruiter)?;
        Ok(&self.recruiter_dashboard)
    }

    pub fn post_job(&mut self, form: JobForm) -> DomainResult<Job> {
        let recruiter = self.ctx.require_role(UserType::Recruiter)?;
        self.recruiter_dashboard.post_job(form, recruiter)
    }

    pub fn worker_dashboard(&self) -> DomainResult<(&WorkerDashboard, &User)> {
        let worker = self.ctx.require_role(UserType::Worker)?;
        Ok((&self.worker_dashboard, worker))
    }

    pub fn apply(&mut self, job_id: &str) -> DomainResult<Application> {
        let worker = self.ctx.require_role(UserType::Worker)?;
        self.worker_dashboard.apply(job_id, worker)
    }

    // ----- profile -----

    pub fn profile(&self) -> DomainResult<(&ProfileEditor, &User)> {
        let user = self.ctx.require_user()?;
        Ok((&self.profile, user))
    }

    pub fn begin_profile_edit(&mut self) -> DomainResult<()> {
        let user = self.ctx.require_user()?;
        self.profile.begin_edit(user);
        Ok(())
    }

    pub fn update_profile_draft(&mut self, patch: ProfilePatch) -> DomainResult<()> {
        self.ctx.require_user()?;
        self.profile.update_draft(patch)?;
        Ok(())
    }

    /// Saves the draft and persists the merged user.
    pub fn save_profile(&mut self) -> DomainResult<User> {
        let current = self.ctx.require_user()?.clone();
        let updated = self.profile.save(&current)?;
        self.update_profile(updated.clone())?;
        Ok(updated)
    }

    pub fn cancel_profile_edit(&mut self) -> DomainResult<()> {
        self.ctx.require_user()?;
        self.profile.cancel();
        Ok(())
    }

    pub fn upload_profile_image(&mut self, upload: ImageUpload) -> DomainResult<String> {
        self.ctx.require_user()?;
        self.profile.upload_image(upload).map(str::to_string)
    }
}
