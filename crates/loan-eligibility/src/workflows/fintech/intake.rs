use std::ops::RangeInclusive;

use super::domain::ApplicantProfile;
use super::scoring::ScoringConfig;

/// Validation errors raised before a profile reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FintechIntakeViolation {
    #[error("applicant age {found} outside accepted range {min}-{max}")]
    AgeOutOfBounds { min: u8, max: u8, found: u8 },
    #[error("desired loan amount {found} outside accepted range {min}-{max}")]
    LoanAmountOutOfBounds { min: u32, max: u32, found: u32 },
}

/// Input bounds enforced by the intake surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FintechIntakeBounds {
    pub age: RangeInclusive<u8>,
    pub desired_loan_amount: RangeInclusive<u32>,
}

const MIN_DESIRED_LOAN: u32 = 1_000;

impl FintechIntakeBounds {
    /// Bounds that track the scoring thresholds, so a raised loan cap is reachable.
    pub fn for_scoring(config: &ScoringConfig) -> Self {
        Self {
            age: config.min_age..=config.max_age,
            desired_loan_amount: MIN_DESIRED_LOAN..=config.loan_cap.max(MIN_DESIRED_LOAN),
        }
    }
}

impl Default for FintechIntakeBounds {
    fn default() -> Self {
        Self::for_scoring(&ScoringConfig::default())
    }
}

/// Guard responsible for admitting `ApplicantProfile` values into scoring.
#[derive(Debug, Clone, Default)]
pub struct FintechIntakeGuard {
    bounds: FintechIntakeBounds,
}

impl FintechIntakeGuard {
    pub fn with_bounds(bounds: FintechIntakeBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &FintechIntakeBounds {
        &self.bounds
    }

    pub fn admit(
        &self,
        profile: ApplicantProfile,
    ) -> Result<ApplicantProfile, FintechIntakeViolation> {
        if !self.bounds.age.contains(&profile.age) {
            return Err(FintechIntakeViolation::AgeOutOfBounds {
                min: *self.bounds.age.start(),
                max: *self.bounds.age.end(),
                found: profile.age,
            });
        }

        if !self
            .bounds
            .desired_loan_amount
            .contains(&profile.desired_loan_amount)
        {
            return Err(FintechIntakeViolation::LoanAmountOutOfBounds {
                min: *self.bounds.desired_loan_amount.start(),
                max: *self.bounds.desired_loan_amount.end(),
                found: profile.desired_loan_amount,
            });
        }

        Ok(profile)
    }
}
