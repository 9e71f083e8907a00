use super::super::domain::ApplicantProfile;
use super::config::ScoringConfig;

/// Loan ceiling before rounding: a multiple of monthly income, capped.
pub(crate) fn loan_ceiling(profile: &ApplicantProfile, config: &ScoringConfig) -> u32 {
    let multiple =
        u64::from(profile.net_monthly_income) * u64::from(config.income_multiplier);
    multiple.min(u64::from(config.loan_cap)) as u32
}

pub(crate) fn debt_to_income(profile: &ApplicantProfile, config: &ScoringConfig) -> f64 {
    let obligations = f64::from(profile.existing_monthly_emi) + profile.prorated_installment();
    obligations / (f64::from(profile.net_monthly_income) + config.income_epsilon)
}

/// Round half-up to the nearest multiple of `step`.
pub(crate) fn round_to_step(amount: u32, step: u32) -> u32 {
    if step == 0 {
        return amount;
    }
    let step = u64::from(step);
    let rounded = (u64::from(amount) + step / 2) / step * step;
    rounded.min(u64::from(u32::MAX)) as u32
}

/// The score gate tolerates soft failures; the loan ceiling is a separate hard gate.
pub(crate) fn decide_eligibility(
    profile: &ApplicantProfile,
    config: &ScoringConfig,
    score: u8,
    ceiling: u32,
) -> bool {
    score >= config.pass_score && profile.desired_loan_amount <= ceiling
}

/// Render an amount with comma thousands separators.
pub(crate) fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a ratio as a percentage with at most one decimal place.
pub(crate) fn format_percent(ratio: f64) -> String {
    let percent = (ratio * 1000.0).round() / 10.0;
    if percent.fract() == 0.0 {
        format!("{percent:.0}")
    } else {
        format!("{percent:.1}")
    }
}
