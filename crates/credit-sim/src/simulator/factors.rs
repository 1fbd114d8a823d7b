use super::domain::{
    CreditFactor, CreditMixTier, CreditProfile, PaymentHistoryTier, MAX_SCORE, MIN_SCORE,
};
use super::{PenaltyKind, PenaltyNote, ScoreComponent, ScorePenalties};

/// Utilization curve: the first threshold with `utilization <= threshold` wins.
const UTILIZATION_CURVE: [(u8, f64, &str); 6] = [
    (0, -10.0, "no revolving balance shows no active credit usage"),
    (10, 15.0, "optimal usage demonstrates responsible credit management"),
    (30, 0.0, "within the 30% ceiling, neutral effect"),
    (50, -25.0, "high utilization begins to negatively impact score"),
    (75, -50.0, "very high utilization significantly hurts score"),
    (100, -75.0, "maxed out credit severely impacts score"),
];

const CREDIT_MIX_TABLE: [(CreditMixTier, f64, &str); 4] = [
    (
        CreditMixTier::Excellent,
        25.0,
        "Diverse credit mix (3+ types) demonstrates responsible management",
    ),
    (
        CreditMixTier::Good,
        10.0,
        "Good credit mix (2 types) has a minor positive impact",
    ),
    (
        CreditMixTier::Fair,
        -5.0,
        "Limited credit mix (1 type) slightly reduces potential",
    ),
    (
        CreditMixTier::Poor,
        -30.0,
        "No active credit accounts significantly limits score",
    ),
];

pub(crate) fn score_factors(profile: &CreditProfile) -> Vec<ScoreComponent> {
    CreditFactor::ordered()
        .into_iter()
        .map(|factor| match factor {
            CreditFactor::PaymentHistory => payment_history(profile),
            CreditFactor::CreditUtilization => utilization(profile),
            CreditFactor::CreditAge => credit_age(profile),
            CreditFactor::CreditMix => credit_mix(profile),
            CreditFactor::NewCredit => new_credit(profile),
        })
        .collect()
}

fn points(impact: f64) -> i64 {
    impact.abs().round() as i64
}

fn component(factor: CreditFactor, impact: f64, reason: String) -> ScoreComponent {
    ScoreComponent {
        factor,
        weight: factor.weight(),
        impact,
        reason,
    }
}

fn payment_history(profile: &CreditProfile) -> ScoreComponent {
    let score = f64::from(profile.current_score);

    let (impact, reason) = match profile.payment_history {
        PaymentHistoryTier::Perfect => (
            0.0,
            "Perfect payment history with no late payments maintains your score".to_string(),
        ),
        PaymentHistoryTier::Good => {
            let impact = -15.0 * (1.0 + 0.05 * score / 100.0);
            (
                impact,
                format!(
                    "1-2 late payments in the last 24 months reduce score by {} points",
                    points(impact)
                ),
            )
        }
        PaymentHistoryTier::Fair => {
            let impact = -40.0 * (1.0 + 0.08 * score / 100.0);
            (
                impact,
                format!(
                    "3-5 late payments in the last 24 months reduce score by {} points",
                    points(impact)
                ),
            )
        }
        PaymentHistoryTier::Poor => {
            let impact = -80.0 * (1.0 + 0.10 * score / 100.0);
            (
                impact,
                format!(
                    "6+ late payments significantly reduce score by {} points",
                    points(impact)
                ),
            )
        }
    };

    component(CreditFactor::PaymentHistory, impact, reason)
}

fn utilization(profile: &CreditProfile) -> ScoreComponent {
    let utilization = profile.utilization_percent;
    let (_, base, note) = UTILIZATION_CURVE
        .iter()
        .find(|(threshold, _, _)| utilization <= *threshold)
        .unwrap_or(&UTILIZATION_CURVE[UTILIZATION_CURVE.len() - 1]);

    let impact = base * f64::from(profile.current_score) / 800.0;
    let reason = if impact > 0.0 {
        format!(
            "Utilization at {utilization}% increases score by {} points ({note})",
            points(impact)
        )
    } else if impact < 0.0 {
        format!(
            "Utilization at {utilization}% decreases score by {} points ({note})",
            points(impact)
        )
    } else {
        format!("Utilization at {utilization}% has no impact on score ({note})")
    };

    component(CreditFactor::CreditUtilization, impact, reason)
}

fn credit_age(profile: &CreditProfile) -> ScoreComponent {
    let years = profile.credit_age_years;
    let age = f64::from(years);
    let multiplier = 1.0 + age.powf(1.5) / 100.0;
    let impact = 15.0 * age.ln_1p() * multiplier;

    let reason = match years {
        0..=2 => format!(
            "Short credit history ({years} years) limits score potential, contributing only {} points",
            points(impact)
        ),
        3..=6 => format!(
            "Moderate credit age ({years} years) contributes {} points",
            points(impact)
        ),
        _ => format!(
            "Long credit history ({years} years) boosts score by {} points",
            points(impact)
        ),
    };

    component(CreditFactor::CreditAge, impact, reason)
}

fn credit_mix(profile: &CreditProfile) -> ScoreComponent {
    let (_, impact, note) = CREDIT_MIX_TABLE
        .iter()
        .find(|(tier, _, _)| *tier == profile.credit_mix)
        .unwrap_or(&CREDIT_MIX_TABLE[CREDIT_MIX_TABLE.len() - 1]);

    component(
        CreditFactor::CreditMix,
        *impact,
        format!("{note} ({:+} points)", *impact as i64),
    )
}

fn new_credit(profile: &CreditProfile) -> ScoreComponent {
    let inquiries = profile.recent_inquiries;
    let impact = if inquiries == 0 {
        0.0
    } else {
        -4.0 * f64::from(inquiries).powf(1.2)
    };

    let reason = match inquiries {
        0 => "No recent inquiries, no impact on score".to_string(),
        1..=2 => format!(
            "{inquiries} recent inquiries reduce score by {} points",
            points(impact)
        ),
        _ => format!(
            "{inquiries} recent inquiries significantly reduce score by {} points (appears credit hungry)",
            points(impact)
        ),
    };

    component(CreditFactor::NewCredit, impact, reason)
}

pub(crate) fn score_penalties(profile: &CreditProfile) -> ScorePenalties {
    let derogatory = -2.0 * f64::from(profile.derogatory_marks).powf(1.5);
    let overdue = -0.0005 * profile.overdue_amount as f64;

    let mut notes = Vec::new();
    if derogatory < 0.0 {
        notes.push(PenaltyNote {
            kind: PenaltyKind::DerogatoryMarks,
            points: derogatory,
            reason: format!(
                "{} derogatory mark(s) on your credit report (defaults, bankruptcies, settlements)",
                profile.derogatory_marks
            ),
        });
    }
    if overdue < 0.0 {
        notes.push(PenaltyNote {
            kind: PenaltyKind::OverdueAmount,
            points: overdue,
            reason: format!(
                "₹{} in overdue payments negatively impacts your score",
                group_thousands(profile.overdue_amount)
            ),
        });
    }

    ScorePenalties {
        derogatory,
        overdue,
        notes,
    }
}

pub(crate) fn composite_score(
    current_score: u16,
    components: &[ScoreComponent],
    penalties: &ScorePenalties,
) -> u16 {
    let weighted: f64 = components
        .iter()
        .map(ScoreComponent::weighted_impact)
        .sum();
    let raw = f64::from(current_score) + weighted + penalties.total();

    raw.trunc()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u16
}

/// Formats currency amounts with comma separators, e.g. `350,000`.
pub(crate) fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_currency_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(350_000), "350,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }
}
