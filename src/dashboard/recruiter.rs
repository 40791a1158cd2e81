use log::info;
use serde::Serialize;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::{Job, JobForm, User, UserType};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterStats {
    pub active_jobs: usize,
    pub applications: usize,
    pub hired: usize,
}

/// A recruiter's postings, in the order they were made. Lives in memory only.
#[derive(Debug, Default, Clone)]
pub struct RecruiterDashboard {
    jobs: Vec<Job>,
}

impl RecruiterDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn post_job(&mut self, form: JobForm, recruiter: &User) -> DomainResult<Job> {
        if !recruiter.is(UserType::Recruiter) {
            return Err(DomainError::WrongRole {
                expected: UserType::Recruiter.as_str(),
            });
        }
        form.check()?;

        let job = Job {
            id: self.fresh_id(),
            title: form.title,
            description: form.description,
            event_type: form.event_type,
            location: form.location,
            datetime: form.datetime,
            recruiter: recruiter.name.clone(),
            can_rehire: form.can_rehire,
            wages: form.wages,
        };
        info!("Job posted by {}: {} ({})", recruiter.id, job.title, job.id);

        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Applications and hires are not tracked for recruiters yet; both stay 0.
    pub fn stats(&self) -> RecruiterStats {
        RecruiterStats {
            active_jobs: self.jobs.len(),
            applications: 0,
            hired: 0,
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.jobs.iter().any(|j| j.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WagePeriod, Wages};

    fn recruiter() -> User {
        User {
            id: "1".to_string(),
            name: "John Recruiter".to_string(),
            email: "john@example.com".to_string(),
            phone: String::new(),
            user_type: UserType::Recruiter,
        }
    }

    fn event_staff() -> JobForm {
        JobForm {
            title: "Event Staff".to_string(),
            description: "Help run the evening".to_string(),
            location: "Pune".to_string(),
            datetime: "2025-01-10T18:00".to_string(),
            wages: Wages {
                amount: 1500.0,
                currency: "INR".to_string(),
                period: WagePeriod::Daily,
            },
            ..JobForm::default()
        }
    }

    #[test]
    fn posting_appends_and_counts() {
        let mut dash = RecruiterDashboard::new();
        assert_eq!(dash.stats().active_jobs, 0);

        let job = dash.post_job(event_staff(), &recruiter()).unwrap();
        assert_eq!(job.recruiter, "John Recruiter");
        assert_eq!(job.wages.label(), "₹1500/daily");
        assert_eq!(
            dash.stats(),
            RecruiterStats {
                active_jobs: 1,
                applications: 0,
                hired: 0
            }
        );
    }

    #[test]
    fn postings_keep_insertion_order_and_unique_ids() {
        let mut dash = RecruiterDashboard::new();
        for title in ["First", "Second", "Third"] {
            let mut form = event_staff();
            form.title = title.to_string();
            dash.post_job(form, &recruiter()).unwrap();
        }

        let titles: Vec<_> = dash.jobs().iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
        assert_ne!(dash.jobs()[0].id, dash.jobs()[1].id);
    }

    #[test]
    fn workers_cannot_post() {
        let mut worker = recruiter();
        worker.user_type = UserType::Worker;

        let mut dash = RecruiterDashboard::new();
        assert!(matches!(
            dash.post_job(event_staff(), &worker),
            Err(DomainError::WrongRole { .. })
        ));
        assert!(dash.jobs().is_empty());
    }

    #[test]
    fn invalid_form_adds_nothing() {
        let mut form = event_staff();
        form.location = String::new();

        let mut dash = RecruiterDashboard::new();
        assert!(dash.post_job(form, &recruiter()).is_err());
        assert_eq!(dash.stats().active_jobs, 0);
    }
}
