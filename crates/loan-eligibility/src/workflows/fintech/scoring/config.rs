use serde::{Deserialize, Serialize};

/// Thresholds backing the six point fintech scoring rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub min_age: u8,
    pub max_age: u8,
    pub min_net_monthly_income: u32,
    pub max_debt_to_income: f64,
    pub income_multiplier: u32,
    pub loan_cap: u32,
    pub pass_score: u8,
    pub rounding_step: u32,
    pub income_epsilon: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 60,
            min_net_monthly_income: 10_000,
            max_debt_to_income: 0.5,
            income_multiplier: 10,
            loan_cap: 500_000,
            pass_score: 5,
            rounding_step: 1_000,
            income_epsilon: 1e-6,
        }
    }
}
