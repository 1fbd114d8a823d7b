use super::domain::{CreditProfile, PaymentHistoryTier};
use super::factors::group_thousands;
use serde::{Deserialize, Serialize};

pub const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    ReduceUtilization,
    EnableAutopay,
    BuildCreditAge,
    LimitNewCredit,
    AddressDerogatoryMarks,
}

/// Expected score effect of following a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImpactEstimate {
    Points { points: u32 },
    PointsRange { low: u32, high: u32 },
    PointsPerYear { low: u32, high: u32 },
    Qualitative { note: String },
}

impl ImpactEstimate {
    pub fn summary(&self) -> String {
        match self {
            ImpactEstimate::Points { points } => format!("+{points} points potential"),
            ImpactEstimate::PointsRange { low, high } => {
                format!("+{low}-{high} points potential")
            }
            ImpactEstimate::PointsPerYear { low, high } => {
                format!("+{low}-{high} points per year of additional history")
            }
            ImpactEstimate::Qualitative { note } => note.clone(),
        }
    }
}

/// Actionable next step derived from the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub detail: String,
    pub action: String,
    pub impact: ImpactEstimate,
}

impl Recommendation {
    pub fn summary(&self) -> String {
        format!("{}: {} ({})", self.title, self.action, self.impact.summary())
    }
}

/// Emits at most one recommendation per triggered condition, in priority order.
pub(crate) fn recommend(profile: &CreditProfile) -> Vec<Recommendation> {
    let candidates = [
        reduce_utilization(profile),
        enable_autopay(profile),
        build_credit_age(profile),
        limit_new_credit(profile),
        address_derogatory_marks(profile),
    ];

    candidates
        .into_iter()
        .flatten()
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

fn reduce_utilization(profile: &CreditProfile) -> Option<Recommendation> {
    if profile.utilization_percent <= 30 {
        return None;
    }

    let utilization = f64::from(profile.utilization_percent);
    let target = (utilization * 0.7).max(30.0);
    let target = (target * 10.0).round() / 10.0;
    let paydown = ((utilization - target) / 100.0 * profile.credit_limit as f64).round() as u64;
    let gain = ((utilization - 30.0) * 0.8).min(40.0) as u32;

    Some(Recommendation {
        kind: RecommendationKind::ReduceUtilization,
        title: "Reduce Credit Utilization".to_string(),
        detail: format!("Current: {utilization}% -> Target: {target}%"),
        action: format!("Pay down ₹{} across your cards", group_thousands(paydown)),
        impact: ImpactEstimate::Points { points: gain },
    })
}

fn enable_autopay(profile: &CreditProfile) -> Option<Recommendation> {
    if profile.payment_history == PaymentHistoryTier::Perfect {
        return None;
    }

    Some(Recommendation {
        kind: RecommendationKind::EnableAutopay,
        title: "Payment Automation".to_string(),
        detail: "Set up auto-pay for minimum payments".to_string(),
        action: "Enable auto-pay through your bank".to_string(),
        impact: ImpactEstimate::Qualitative {
            note: "Prevents future late payments (35% weighting)".to_string(),
        },
    })
}

fn build_credit_age(profile: &CreditProfile) -> Option<Recommendation> {
    if profile.credit_age_years >= 5 {
        return None;
    }

    Some(Recommendation {
        kind: RecommendationKind::BuildCreditAge,
        title: "Increase Credit Age".to_string(),
        detail: format!("Current average: {} years", profile.credit_age_years),
        action: "Keep your oldest accounts open".to_string(),
        impact: ImpactEstimate::PointsPerYear { low: 3, high: 5 },
    })
}

fn limit_new_credit(profile: &CreditProfile) -> Option<Recommendation> {
    if profile.recent_inquiries <= 2 {
        return None;
    }

    Some(Recommendation {
        kind: RecommendationKind::LimitNewCredit,
        title: "Limit New Credit Applications".to_string(),
        detail: format!("Recent inquiries: {}", profile.recent_inquiries),
        action: "Avoid new applications for 6 months".to_string(),
        impact: ImpactEstimate::Qualitative {
            note: "Inquiries stop affecting score after 12 months".to_string(),
        },
    })
}

fn address_derogatory_marks(profile: &CreditProfile) -> Option<Recommendation> {
    if profile.derogatory_marks == 0 {
        return None;
    }

    Some(Recommendation {
        kind: RecommendationKind::AddressDerogatoryMarks,
        title: "Address Derogatory Marks".to_string(),
        detail: format!("Negative items: {}", profile.derogatory_marks),
        action: "Dispute inaccuracies or negotiate pay-for-delete".to_string(),
        impact: ImpactEstimate::PointsRange { low: 20, high: 50 },
    })
}
