use std::ops::RangeInclusive;

use super::domain::{LoanApplication, LoanType};

/// Validation errors raised before an application reaches the rule engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductIntakeViolation {
    #[error("applicant age {found} outside accepted range {min}-{max}")]
    AgeOutOfBounds { min: u8, max: u8, found: u8 },
    #[error("credit score {found} outside accepted range {min}-{max}")]
    CreditScoreOutOfBounds { min: u16, max: u16, found: u16 },
    #[error("loan amount {found} below minimum {min}")]
    LoanAmountTooSmall { min: u32, found: u32 },
    #[error("loan term of {found} months outside accepted range {min}-{max}")]
    LoanTermOutOfBounds { min: u16, max: u16, found: u16 },
    #[error("{field} must be a non-negative number, found {found}")]
    NegativeOrNonFinite { field: &'static str, found: f64 },
    #[error("unsupported loan type '{0}'")]
    UnknownLoanType(String),
}

/// Input bounds enforced by the intake surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIntakeBounds {
    pub age: RangeInclusive<u8>,
    pub credit_score: RangeInclusive<u16>,
    pub min_loan_amount: u32,
    pub loan_term_months: RangeInclusive<u16>,
}

impl Default for ProductIntakeBounds {
    fn default() -> Self {
        Self {
            age: 16..=80,
            credit_score: 300..=900,
            min_loan_amount: 1_000,
            loan_term_months: 6..=480,
        }
    }
}

/// Guard responsible for admitting `LoanApplication` values into evaluation.
#[derive(Debug, Clone, Default)]
pub struct ProductIntakeGuard {
    bounds: ProductIntakeBounds,
}

impl ProductIntakeGuard {
    pub fn with_bounds(bounds: ProductIntakeBounds) -> Self {
        Self { bounds }
    }

    /// Resolve a product tag, rejecting values outside the closed product set.
    pub fn loan_type(&self, raw: &str) -> Result<LoanType, ProductIntakeViolation> {
        LoanType::from_label(raw).ok_or_else(|| ProductIntakeViolation::UnknownLoanType(raw.to_string()))
    }

    pub fn admit(
        &self,
        application: LoanApplication,
    ) -> Result<LoanApplication, ProductIntakeViolation> {
        let applicant = application.applicant();

        if !self.bounds.age.contains(&applicant.age) {
            return Err(ProductIntakeViolation::AgeOutOfBounds {
                min: *self.bounds.age.start(),
                max: *self.bounds.age.end(),
                found: applicant.age,
            });
        }

        if !self.bounds.credit_score.contains(&applicant.credit_score) {
            return Err(ProductIntakeViolation::CreditScoreOutOfBounds {
                min: *self.bounds.credit_score.start(),
                max: *self.bounds.credit_score.end(),
                found: applicant.credit_score,
            });
        }

        if applicant.loan_amount < self.bounds.min_loan_amount {
            return Err(ProductIntakeViolation::LoanAmountTooSmall {
                min: self.bounds.min_loan_amount,
                found: applicant.loan_amount,
            });
        }

        if !self.bounds.loan_term_months.contains(&applicant.loan_term_months) {
            return Err(ProductIntakeViolation::LoanTermOutOfBounds {
                min: *self.bounds.loan_term_months.start(),
                max: *self.bounds.loan_term_months.end(),
                found: applicant.loan_term_months,
            });
        }

        ensure_non_negative("employment_years", applicant.employment_years)?;
        if let LoanApplication::Business { business, .. } = &application {
            ensure_non_negative("business_vintage_years", business.business_vintage_years)?;
        }

        Ok(application)
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ProductIntakeViolation> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProductIntakeViolation::NegativeOrNonFinite {
            field,
            found: value,
        })
    }
}
