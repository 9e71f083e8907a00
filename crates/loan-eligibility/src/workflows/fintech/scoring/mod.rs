mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use rules::{Criterion, CriterionId, ScoringInputs};

use super::domain::ApplicantProfile;
use policy::{debt_to_income, decide_eligibility, format_amount, loan_ceiling, round_to_step};
use rules::STANDARD_CRITERIA;
use serde::{Deserialize, Serialize};

/// Ordered table of weighted criteria.
#[derive(Debug, Clone)]
pub struct ScoringModel {
    criteria: Vec<Criterion>,
}

impl ScoringModel {
    /// Age, income, banking/KYC, credit band, debt-to-income, employment type.
    pub fn standard() -> Self {
        Self::from_criteria(STANDARD_CRITERIA.to_vec())
    }

    pub fn from_criteria(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn max_score(&self) -> u8 {
        self.criteria
            .iter()
            .fold(0u8, |total, criterion| total.saturating_add(criterion.weight))
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stateless evaluator that applies the scoring model to a profile.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    model: ScoringModel,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_model(config, ScoringModel::standard())
    }

    pub fn with_model(config: ScoringConfig, model: ScoringModel) -> Self {
        Self { config, model }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> ScoredVerdict {
        let ceiling = loan_ceiling(profile, &self.config);
        let dti = debt_to_income(profile, &self.config);
        let inputs = ScoringInputs {
            profile,
            debt_to_income: dti,
        };

        let (score, components, reasons) = self.model.criteria.iter().fold(
            (0u8, Vec::new(), Vec::new()),
            |(score, mut components, mut reasons), criterion| {
                let passed = (criterion.check)(&inputs, &self.config);
                let points = if passed { criterion.weight } else { 0 };
                if !passed {
                    reasons.push((criterion.reason)(&self.config));
                }
                components.push(ScoreComponent {
                    criterion: criterion.id,
                    points,
                    note: (criterion.detail)(&inputs, &self.config),
                });
                (score.saturating_add(points), components, reasons)
            },
        );

        ScoredVerdict {
            eligible: decide_eligibility(profile, &self.config, score, ceiling),
            score,
            max_score: self.model.max_score(),
            max_loan: round_to_step(ceiling, self.config.rounding_step),
            dti,
            reasons,
            components,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: CriterionId,
    pub points: u8,
    pub note: String,
}

/// Outcome of a fintech eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVerdict {
    pub eligible: bool,
    pub score: u8,
    pub max_score: u8,
    pub max_loan: u32,
    pub dti: f64,
    pub reasons: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl ScoredVerdict {
    pub fn summary(&self) -> String {
        if self.eligible {
            format!(
                "likely eligible for a fintech app loan (estimated maximum loan ₹{}, debt-to-income {:.1}%)",
                format_amount(self.max_loan),
                self.dti * 100.0
            )
        } else {
            "not eligible for a fintech loan right now".to_string()
        }
    }

    /// Reasons to show the applicant, or a clean-bill note when nothing failed.
    pub fn remarks(&self) -> Vec<String> {
        if self.reasons.is_empty() {
            vec!["Meets all typical fintech eligibility checks.".to_string()]
        } else {
            self.reasons.clone()
        }
    }
}
