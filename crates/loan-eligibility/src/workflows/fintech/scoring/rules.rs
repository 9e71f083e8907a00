use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicantProfile, CreditScoreBand, EmploymentType};
use super::config::ScoringConfig;
use super::policy::{format_amount, format_percent};

/// Identifies a row of the scoring table so components stay auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionId {
    Age,
    Income,
    BankingKyc,
    CreditBand,
    DebtToIncome,
    EmploymentType,
}

/// Values a criterion may inspect: the raw profile plus the derived ratio.
pub struct ScoringInputs<'a> {
    pub profile: &'a ApplicantProfile,
    pub debt_to_income: f64,
}

/// One declarative scoring rule. Passing awards `weight` points, failing records `reason`
/// rendered against the active thresholds.
#[derive(Clone, Copy)]
pub struct Criterion {
    pub id: CriterionId,
    pub weight: u8,
    pub reason: fn(&ScoringConfig) -> String,
    pub check: fn(&ScoringInputs<'_>, &ScoringConfig) -> bool,
    pub detail: fn(&ScoringInputs<'_>, &ScoringConfig) -> String,
}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

pub(crate) const STANDARD_CRITERIA: [Criterion; 6] = [
    Criterion {
        id: CriterionId::Age,
        weight: 1,
        reason: age_reason,
        check: age_in_range,
        detail: describe_age,
    },
    Criterion {
        id: CriterionId::Income,
        weight: 1,
        reason: income_reason,
        check: income_meets_minimum,
        detail: describe_income,
    },
    Criterion {
        id: CriterionId::BankingKyc,
        weight: 1,
        reason: kyc_reason,
        check: banking_and_kyc_present,
        detail: describe_kyc,
    },
    Criterion {
        id: CriterionId::CreditBand,
        weight: 1,
        reason: credit_band_reason,
        check: credit_band_accepted,
        detail: describe_credit_band,
    },
    Criterion {
        id: CriterionId::DebtToIncome,
        weight: 1,
        reason: debt_to_income_reason,
        check: debt_to_income_within_limit,
        detail: describe_debt_to_income,
    },
    Criterion {
        id: CriterionId::EmploymentType,
        weight: 1,
        reason: employment_reason,
        check: employment_preferred,
        detail: describe_employment,
    },
];

fn age_reason(config: &ScoringConfig) -> String {
    format!(
        "Not in the eligible age range ({}–{}).",
        config.min_age, config.max_age
    )
}

fn income_reason(config: &ScoringConfig) -> String {
    format!(
        "Minimum monthly income should be ₹{}+.",
        format_amount(config.min_net_monthly_income)
    )
}

fn kyc_reason(_config: &ScoringConfig) -> String {
    "Active bank account and digital KYC (Aadhaar/PAN) are mandatory.".to_string()
}

fn credit_band_reason(_config: &ScoringConfig) -> String {
    "Most fintechs require a 600+ credit score (but some may offer loans based on alternative data).".to_string()
}

fn debt_to_income_reason(config: &ScoringConfig) -> String {
    format!(
        "Requested EMI plus ongoing EMIs is high for your income (should be under {}%).",
        format_percent(config.max_debt_to_income)
    )
}

fn employment_reason(_config: &ScoringConfig) -> String {
    "Employment type is less preferred — may face extra checks.".to_string()
}

fn age_in_range(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> bool {
    (config.min_age..=config.max_age).contains(&inputs.profile.age)
}

fn describe_age(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> String {
    format!(
        "age {} against range {}-{}",
        inputs.profile.age, config.min_age, config.max_age
    )
}

fn income_meets_minimum(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> bool {
    inputs.profile.net_monthly_income >= config.min_net_monthly_income
}

fn describe_income(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> String {
    format!(
        "net monthly income {} against minimum {}",
        inputs.profile.net_monthly_income, config.min_net_monthly_income
    )
}

fn banking_and_kyc_present(inputs: &ScoringInputs<'_>, _config: &ScoringConfig) -> bool {
    inputs.profile.has_kyc()
}

fn describe_kyc(inputs: &ScoringInputs<'_>, _config: &ScoringConfig) -> String {
    format!(
        "bank account {}, digital id {}",
        yes_no(inputs.profile.has_bank_account),
        yes_no(inputs.profile.has_digital_id)
    )
}

// Unknown bands pass: lenders underwrite on alternative data.
fn credit_band_accepted(inputs: &ScoringInputs<'_>, _config: &ScoringConfig) -> bool {
    !matches!(inputs.profile.credit_score_band, CreditScoreBand::Below600)
}

fn describe_credit_band(inputs: &ScoringInputs<'_>, _config: &ScoringConfig) -> String {
    format!("credit band {}", inputs.profile.credit_score_band.label())
}

fn debt_to_income_within_limit(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> bool {
    inputs.debt_to_income <= config.max_debt_to_income
}

fn describe_debt_to_income(inputs: &ScoringInputs<'_>, config: &ScoringConfig) -> String {
    format!(
        "debt-to-income {:.2} against limit {:.2}",
        inputs.debt_to_income, config.max_debt_to_income
    )
}

fn employment_preferred(inputs: &ScoringInputs<'_>, _config: &ScoringConfig) -> bool {
    inputs.profile.employment != EmploymentType::Other
}

fn describe_employment(inputs: &ScoringInputs<'_>, _config: &ScoringConfig) -> String {
    format!("employment {}", inputs.profile.employment.label())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
