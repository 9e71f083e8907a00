//! Six point scoring for a generic fintech app loan.

pub mod domain;
pub mod import;
pub mod intake;
pub mod scoring;

pub use domain::{ApplicantProfile, CreditScoreBand, EmploymentType, InvalidTenure, TenureMonths};
pub use import::{profiles_from_path, profiles_from_reader, ImportError};
pub use intake::{FintechIntakeBounds, FintechIntakeGuard, FintechIntakeViolation};
pub use scoring::{
    Criterion, CriterionId, ScoreComponent, ScoredVerdict, ScoringConfig, ScoringEngine,
    ScoringInputs, ScoringModel,
};

/// Score a profile with the standard model and default thresholds.
pub fn evaluate_scored(profile: &ApplicantProfile) -> ScoredVerdict {
    ScoringEngine::default().evaluate(profile)
}
