use chrono::Utc;
use log::info;
use serde::Serialize;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use uuid::Uuid;

use super::catalog::seed_catalog;
use crate::error::{DomainError, DomainResult};
use crate::models::{Application, ApplicationStatus, Job, JobResponse, User, UserType};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerStats {
    pub available_jobs: usize,
    pub applications: usize,
    pub accepted: usize,
}

/// A catalog entry together with the viewer's application, if any.
#[derive(Debug, Serialize, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(flatten)]
    pub job: JobResponse,
    pub application: Option<Application>,
}

/// Fixed job catalog plus the applications made in this session.
#[derive(Debug, Clone)]
pub struct WorkerDashboard {
    catalog: Vec<Job>,
    applications: Vec<Application>,
}

impl Default for WorkerDashboard {
    fn default() -> Self {
        WorkerDashboard {
            catalog: seed_catalog(),
            applications: Vec::new(),
        }
    }
}

impl WorkerDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[Job] {
        &self.catalog
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn listings(&self, worker_id: &str) -> Vec<JobListing> {
        self.catalog
            .iter()
            .map(|job| JobListing {
                application: self.application_for(&job.id, worker_id).cloned(),
                job: JobResponse::from(job.clone()),
            })
            .collect()
    }

    pub fn application_for(&self, job_id: &str, worker_id: &str) -> Option<&Application> {
        self.applications
            .iter()
            .find(|a| a.job_id == job_id && a.worker_id == worker_id)
    }

    /// At most one application per (worker, job). A repeat is reported and
    /// changes nothing.
    pub fn apply(&mut self, job_id: &str, worker: &User) -> DomainResult<Application> {
        if !worker.is(UserType::Worker) {
            return Err(DomainError::WrongRole {
                expected: UserType::Worker.as_str(),
            });
        }
        if !self.catalog.iter().any(|j| j.id == job_id) {
            return Err(DomainError::job_not_found(job_id));
        }
        if self.application_for(job_id, &worker.id).is_some() {
            return Err(DomainError::already_applied(job_id));
        }

        let application = Application {
            id: Uuid::new_v4().to_string(),
            job_id: job_id.to_string(),
            worker_id: worker.id.clone(),
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };
        info!("Worker {} applied to job {}", worker.id, job_id);

        self.applications.push(application.clone());
        Ok(application)
    }

    pub fn stats(&self) -> WorkerStats {
        WorkerStats {
            available_jobs: self.catalog.len(),
            applications: self.applications.len(),
            accepted: self
                .applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Accepted)
                .count(),
        }
    }
}
