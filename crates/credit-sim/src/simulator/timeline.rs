use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{CreditProfile, PaymentHistoryTier, ValidationError};
use super::factors::group_thousands;

/// Days between consecutive trajectory points on the chart axis.
const DAYS_PER_MONTH: i64 = 30;

/// Chart point pairing a projected month with its calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub month: u8,
    pub date: NaiveDate,
    pub score: u16,
}

/// Annotation pinned to the trajectory at the month a change is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub month: u8,
    pub text: String,
    pub impact: i16,
    pub anchor_score: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub month: u8,
    pub title: String,
    pub description: String,
}

const MILESTONES: [(u8, &str, &str); 4] = [
    (
        1,
        "1 month of on-time payments",
        "Payment history begins to improve",
    ),
    (
        3,
        "Credit utilization optimization",
        "Pay down balances to <30% for maximum impact",
    ),
    (
        6,
        "Credit age milestone",
        "Older accounts improve your average credit age",
    ),
    (
        12,
        "12-month review",
        "Derogatory marks age and have less impact",
    ),
];

pub fn milestones() -> Vec<Milestone> {
    MILESTONES
        .iter()
        .map(|(month, title, description)| Milestone {
            month: *month,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Fails when the last point would fall past the end of the calendar.
pub(crate) fn points(
    trajectory: &[u16],
    start: NaiveDate,
) -> Result<Vec<TrajectoryPoint>, ValidationError> {
    trajectory
        .iter()
        .enumerate()
        .map(|(month, score)| {
            start
                .checked_add_signed(Duration::days(DAYS_PER_MONTH * month as i64))
                .map(|date| TrajectoryPoint {
                    month: month as u8,
                    date,
                    score: *score,
                })
                .ok_or(ValidationError::StartDateOutOfRange(start))
        })
        .collect()
}

pub(crate) fn key_events(profile: &CreditProfile, trajectory: &[u16]) -> Vec<KeyEvent> {
    let anchor = |month: u8| {
        trajectory
            .get(usize::from(month))
            .copied()
            .unwrap_or(profile.current_score)
    };

    let mut events = Vec::new();

    if profile.utilization_percent > 30 {
        let payment = (f64::from(profile.utilization_percent - 30) / 100.0
            * profile.credit_limit as f64)
            .round() as u64;
        events.push(KeyEvent {
            month: 3,
            text: format!(
                "Credit utilization improves to 30% (₹{} payment)",
                group_thousands(payment)
            ),
            impact: 15,
            anchor_score: anchor(3),
        });
    }

    if profile.payment_history != PaymentHistoryTier::Perfect {
        events.push(KeyEvent {
            month: 6,
            text: "6 months of on-time payments improves payment history".to_string(),
            impact: 10,
            anchor_score: anchor(6),
        });
    }

    if profile.credit_age_years < 5 {
        events.push(KeyEvent {
            month: 12,
            text: format!("Credit age reaches {} years", profile.credit_age_years + 1),
            impact: 5,
            anchor_score: anchor(12),
        });
    }

    events
}
