use crate::models::{EventType, Job, WagePeriod, Wages};

fn inr(amount: f64, period: WagePeriod) -> Wages {
    Wages {
        amount,
        currency: "INR".to_string(),
        period,
    }
}

/// Jobs every worker sees. Fixed, and separate from anything recruiters post.
pub fn seed_catalog() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Wedding Event Staff".to_string(),
            description: "Looking for experienced event staff for a wedding celebration. \
                Responsibilities include guest coordination, setup assistance, and general event support."
                .to_string(),
            event_type: EventType::Weddings,
            location: "Mumbai, Maharashtra".to_string(),
            datetime: "2024-12-25T18:00".to_string(),
            recruiter: "Wedding Planners Co.".to_string(),
            can_rehire: true,
            wages: inr(1500.0, WagePeriod::Daily),
        },
        Job {
            id: "2".to_string(),
            title: "Corporate Function Helper".to_string(),
            description: "Need reliable staff for corporate annual function. \
                Tasks include registration desk, crowd management, and logistics support."
                .to_string(),
            event_type: EventType::Corporate,
            location: "Delhi, NCR".to_string(),
            datetime: "2024-12-30T14:00".to_string(),
            recruiter: "Corporate Events Ltd.".to_string(),
            can_rehire: false,
            wages: inr(800.0, WagePeriod::Hourly),
        },
        Job {
            id: "3".to_string(),
            title: "Concert Security Staff".to_string(),
            description: "Security personnel needed for live music concert. \
                Experience in crowd control preferred."
                .to_string(),
            event_type: EventType::Concerts,
            location: "Bangalore, Karnataka".to_string(),
            datetime: "2024-12-28T20:00".to_string(),
            recruiter: "Music Events India".to_string(),
            can_rehire: true,
            wages: inr(2500.0, WagePeriod::Event),
        },
    ]
}
