use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MIN_SCORE: u16 = 300;
pub const MAX_SCORE: u16 = 900;

/// Self-reported credit profile captured from the simulator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditProfile {
    pub current_score: u16,
    pub utilization_percent: u8,
    pub payment_history: PaymentHistoryTier,
    pub credit_age_years: u16,
    pub credit_mix: CreditMixTier,
    pub recent_inquiries: u16,
    #[serde(default)]
    pub total_debt: u64,
    #[serde(default)]
    pub credit_limit: u64,
    #[serde(default)]
    pub derogatory_marks: u16,
    #[serde(default)]
    pub overdue_amount: u64,
}

impl CreditProfile {
    /// Checks every field against its declared domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.current_score) {
            return Err(ValidationError::ScoreOutOfRange(self.current_score));
        }
        if self.utilization_percent > 100 {
            return Err(ValidationError::UtilizationOutOfRange(
                self.utilization_percent,
            ));
        }
        Ok(())
    }
}

/// Late-payment record over the last 24 months, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentHistoryTier {
    Perfect,
    Good,
    Fair,
    Poor,
}

impl PaymentHistoryTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect (0 late payments)",
            Self::Good => "Good (1-2 late payments)",
            Self::Fair => "Fair (3-5 late payments)",
            Self::Poor => "Poor (6+ late payments)",
        }
    }
}

impl FromStr for PaymentHistoryTier {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "perfect" => Ok(Self::Perfect),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            _ => Err(UnknownTier {
                kind: "payment history",
                value: value.to_string(),
            }),
        }
    }
}

/// Diversity of active credit lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditMixTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditMixTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (3+ types)",
            Self::Good => "Good (2 types)",
            Self::Fair => "Fair (1 type)",
            Self::Poor => "Poor (no active credit)",
        }
    }
}

impl FromStr for CreditMixTier {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            _ => Err(UnknownTier {
                kind: "credit mix",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} tier '{value}' (expected one of the documented tiers)")]
pub struct UnknownTier {
    kind: &'static str,
    value: String,
}

/// The five weighted factors, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditFactor {
    PaymentHistory,
    CreditUtilization,
    CreditAge,
    CreditMix,
    NewCredit,
}

impl CreditFactor {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PaymentHistory,
            Self::CreditUtilization,
            Self::CreditAge,
            Self::CreditMix,
            Self::NewCredit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentHistory => "Payment History",
            Self::CreditUtilization => "Credit Utilization",
            Self::CreditAge => "Credit Age",
            Self::CreditMix => "Credit Mix",
            Self::NewCredit => "New Credit",
        }
    }

    pub const fn weight(self) -> f64 {
        match self {
            Self::PaymentHistory => 0.35,
            Self::CreditUtilization => 0.30,
            Self::CreditAge => 0.15,
            Self::CreditMix => 0.10,
            Self::NewCredit => 0.10,
        }
    }
}

/// Rejected input; returned to the caller unmodified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("current score {0} is outside the 300-900 range")]
    ScoreOutOfRange(u16),
    #[error("utilization {0}% exceeds 100%")]
    UtilizationOutOfRange(u8),
    #[error("noise standard deviation {0} must be finite and non-negative")]
    InvalidNoise(f64),
    #[error("start date {0} leaves no room for a 12-month timeline")]
    StartDateOutOfRange(NaiveDate),
}
