use serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use std::fmt;
use validator::{Validate, ValidationError};

use crate::error::DomainError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Weddings,
    Corporate,
    Concerts,
    College,
}

impl EventType {
    pub fn label(self) -> &'static str {
        match self {
            EventType::Weddings => "Weddings",
            EventType::Corporate => "Corporate Functions",
            EventType::Concerts => "Concerts",
            EventType::College => "College Fests",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WagePeriod {
    Hourly,
    #[default]
    Daily,
    Event,
}

impl fmt::Display for WagePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WagePeriod::Hourly => "hourly",
            WagePeriod::Daily => "daily",
            WagePeriod::Event => "event",
        })
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct Wages {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub period: WagePeriod,
}

impl Wages {
    /// Display label shown on job cards, e.g. `₹1500/daily`.
    pub fn label(&self) -> String {
        format!("₹{}/{}", self.amount, self.period)
    }
}

impl Default for Wages {
    fn default() -> Self {
        Wages {
            amount: 0.0,
            currency: default_currency(),
            period: WagePeriod::Daily,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: String,
    pub datetime: String,
    pub recruiter: String,
    pub can_rehire: bool,
    pub wages: Wages,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Recruiter's job posting form.
#[derive(Debug, Deserialize, Clone, Default, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    #[validate(custom = "not_blank")]
    pub title: String,
    #[validate(custom = "not_blank")]
    pub description: String,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    #[validate(custom = "not_blank")]
    pub location: String,
    #[validate(custom = "not_blank")]
    pub datetime: String,
    #[serde(default)]
    pub can_rehire: bool,
    #[serde(default)]
    pub wages: Wages,
}

impl JobForm {
    pub fn check(&self) -> Result<(), DomainError> {
        if let Err(errors) = self.validate() {
            let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
            fields.sort_unstable();
            let field = fields.first().copied().unwrap_or("form");
            return Err(DomainError::invalid_job(field, "must not be blank"));
        }

        if !self.wages.amount.is_finite() || self.wages.amount < 0.0 {
            return Err(DomainError::invalid_job(
                "wages.amount",
                "must be a non-negative number",
            ));
        }

        Ok(())
    }
}

/// A job as listed on a dashboard, with its display labels resolved.
#[derive(Debug, Serialize, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    #[serde(flatten)]
    pub job: Job,
    pub event_label: String,
    pub wage_label: String,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        JobResponse {
            event_label: job.event_type.label().to_string(),
            wage_label: job.wages.label(),
            job,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> JobForm {
        JobForm {
            title: "Event Staff".to_string(),
            description: "Guest coordination".to_string(),
            location: "Mumbai".to_string(),
            datetime: "2024-12-25T18:00".to_string(),
            wages: Wages {
                amount: 1500.0,
                ..Wages::default()
            },
            ..JobForm::default()
        }
    }

    #[test]
    fn wage_label_drops_trailing_zero_fraction() {
        assert_eq!(form().wages.label(), "₹1500/daily");

        let hourly = Wages {
            amount: 812.5,
            currency: "INR".to_string(),
            period: WagePeriod::Hourly,
        };
        assert_eq!(hourly.label(), "₹812.5/hourly");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut bad = form();
        bad.title = "   ".to_string();
        assert!(matches!(
            bad.check(),
            Err(DomainError::InvalidJob { field, .. }) if field == "title"
        ));
    }

    #[test]
    fn negative_wage_is_rejected() {
        let mut bad = form();
        bad.wages.amount = -1.0;
        assert!(matches!(
            bad.check(),
            Err(DomainError::InvalidJob { field, .. }) if field == "wages.amount"
        ));
        assert!(form().check().is_ok());
    }

    #[test]
    fn job_form_accepts_the_browser_shape() {
        let form: JobForm = serde_json::from_value(serde_json::json!({
            "title": "Event Staff",
            "description": "Setup",
            "type": "concerts",
            "location": "Delhi",
            "datetime": "2024-12-30T14:00",
            "canRehire": true,
            "wages": { "amount": 800, "period": "hourly" }
        }))
        .unwrap();

        assert_eq!(form.event_type, EventType::Concerts);
        assert!(form.can_rehire);
        assert_eq!(form.wages.currency, "INR");
        assert_eq!(form.wages.period, WagePeriod::Hourly);
    }
}
