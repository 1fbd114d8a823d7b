use chrono::{Local, NaiveDate};
use clap::Args;
use credit_sim::config::AppConfig;
use credit_sim::error::AppError;
use credit_sim::simulator::router::SimulationResponse;
use credit_sim::simulator::{
    milestones, CreditMixTier, CreditProfile, CreditScoreSimulator, PaymentHistoryTier,
    ScoreResult, ScoreTrend, TrajectoryPoint,
};

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Current credit score (300-900)
    #[arg(long, default_value_t = 750)]
    pub(crate) current_score: u16,
    /// Credit utilization ratio in percent (0-100)
    #[arg(long, default_value_t = 35)]
    pub(crate) utilization: u8,
    /// Payment history over the last 24 months: perfect, good, fair, or poor
    #[arg(long, default_value = "good")]
    pub(crate) payment_history: PaymentHistoryTier,
    /// Average age of credit accounts in years
    #[arg(long, default_value_t = 4)]
    pub(crate) credit_age: u16,
    /// Credit mix diversity: excellent, good, fair, or poor
    #[arg(long, default_value = "good")]
    pub(crate) credit_mix: CreditMixTier,
    /// Hard inquiries in the last 6 months
    #[arg(long, default_value_t = 2)]
    pub(crate) inquiries: u16,
    /// Total outstanding debt
    #[arg(long, default_value_t = 350_000)]
    pub(crate) total_debt: u64,
    /// Total credit limit across revolving accounts
    #[arg(long, default_value_t = 800_000)]
    pub(crate) credit_limit: u64,
    /// Derogatory marks in the last 7 years
    #[arg(long, default_value_t = 0)]
    pub(crate) derogatory_marks: u16,
    /// Amount currently overdue
    #[arg(long, default_value_t = 0)]
    pub(crate) overdue_amount: u64,
    /// Seed for a reproducible trajectory (overrides SIM_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// First date on the trajectory axis (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Print the full result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl SimulateArgs {
    fn profile(&self) -> CreditProfile {
        CreditProfile {
            current_score: self.current_score,
            utilization_percent: self.utilization,
            payment_history: self.payment_history,
            credit_age_years: self.credit_age,
            credit_mix: self.credit_mix,
            recent_inquiries: self.inquiries,
            total_debt: self.total_debt,
            credit_limit: self.credit_limit,
            derogatory_marks: self.derogatory_marks,
            overdue_amount: self.overdue_amount,
        }
    }
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let simulator = CreditScoreSimulator::new(config.simulator);
    let profile = args.profile();

    let result = match args.seed {
        Some(seed) => simulator.simulate_seeded(&profile, seed)?,
        None => simulator.simulate(&profile)?,
    };
    let start = args
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    let timeline = result.timeline(start)?;

    if args.json {
        let response = SimulationResponse {
            timeline,
            milestones: milestones(),
            result,
        };
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Simulation payload unavailable: {err}"),
        }
        return Ok(());
    }

    for line in render_report(&profile, &result, &timeline) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn render_report(
    profile: &CreditProfile,
    result: &ScoreResult,
    timeline: &[TrajectoryPoint],
) -> Vec<String> {
    let mut lines = vec![
        "Credit score simulation".to_string(),
        format!(
            "Profile: score {} | utilization {}% | credit age {} yrs | {} | {}",
            profile.current_score,
            profile.utilization_percent,
            profile.credit_age_years,
            profile.payment_history.label(),
            profile.credit_mix.label()
        ),
    ];

    let marker = match result.trend() {
        ScoreTrend::Improving => " (up)",
        ScoreTrend::Declining => " (down)",
        ScoreTrend::Steady => "",
    };
    lines.push(format!(
        "Projected score: {}{} | change {:+}",
        result.final_score, marker, result.score_change
    ));

    lines.push(String::new());
    lines.push("Score change breakdown".to_string());
    for component in result.components.iter().filter(|c| c.impact != 0.0) {
        lines.push(format!(
            "- {} ({:+}): {}",
            component.factor.label(),
            component.impact as i64,
            component.reason
        ));
    }
    for note in &result.penalties.notes {
        lines.push(format!("- Penalty ({:+}): {}", note.points as i64, note.reason));
    }

    lines.push(String::new());
    lines.push("12-month trajectory".to_string());
    for point in timeline {
        let event = result
            .key_events
            .iter()
            .find(|event| event.month == point.month)
            .map(|event| format!("  <- {}", event.text))
            .unwrap_or_default();
        lines.push(format!(
            "- M{:02} {} : {}{}",
            point.month,
            point.date.format("%b %Y"),
            point.score,
            event
        ));
    }

    lines.push(String::new());
    lines.push("Milestones".to_string());
    for milestone in milestones() {
        lines.push(format!(
            "- {}M {}: {}",
            milestone.month, milestone.title, milestone.description
        ));
    }

    lines.push(String::new());
    if result.recommendations.is_empty() {
        lines.push("Recommendations: none".to_string());
    } else {
        lines.push("Recommendations".to_string());
        for recommendation in &result.recommendations {
            lines.push(format!(
                "- {} [{}]",
                recommendation.summary(),
                recommendation.detail
            ));
        }
    }

    lines
}
