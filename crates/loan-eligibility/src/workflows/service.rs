use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::fintech::{
    ApplicantProfile, FintechIntakeBounds, FintechIntakeGuard, FintechIntakeViolation,
    ScoredVerdict, ScoringConfig, ScoringEngine,
};
use super::products::{
    LoanApplication, LoanType, ProductIntakeGuard, ProductIntakeViolation, ProductPolicies,
    ProductRuleEngine, RuleVerdict,
};

/// Service composing the intake guards with both evaluators.
#[derive(Debug, Clone)]
pub struct EligibilityService {
    fintech_guard: FintechIntakeGuard,
    scoring: Arc<ScoringEngine>,
    product_guard: ProductIntakeGuard,
    products: Arc<ProductRuleEngine>,
}

impl Default for EligibilityService {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), ProductPolicies::standard())
    }
}

impl EligibilityService {
    pub fn new(scoring: ScoringConfig, policies: ProductPolicies) -> Self {
        Self::with_guards(
            FintechIntakeGuard::with_bounds(FintechIntakeBounds::for_scoring(&scoring)),
            ProductIntakeGuard::default(),
            ScoringEngine::new(scoring),
            ProductRuleEngine::new(policies),
        )
    }

    pub fn with_guards(
        fintech_guard: FintechIntakeGuard,
        product_guard: ProductIntakeGuard,
        scoring: ScoringEngine,
        products: ProductRuleEngine,
    ) -> Self {
        Self {
            fintech_guard,
            scoring: Arc::new(scoring),
            product_guard,
            products: Arc::new(products),
        }
    }

    /// Validate and score a fintech app loan profile.
    pub fn assess_fintech(
        &self,
        profile: ApplicantProfile,
    ) -> Result<ScoredVerdict, EligibilityServiceError> {
        let profile = self.fintech_guard.admit(profile)?;
        let verdict = self.scoring.evaluate(&profile);

        info!(
            eligible = verdict.eligible,
            score = verdict.score,
            pass_score = self.scoring.config().pass_score,
            max_loan = verdict.max_loan,
            dti = verdict.dti,
            "fintech eligibility scored"
        );
        debug!(components = ?verdict.components, "fintech score breakdown");

        Ok(verdict)
    }

    /// Validate and evaluate a typed product application.
    pub fn assess_product(
        &self,
        application: LoanApplication,
    ) -> Result<RuleVerdict, EligibilityServiceError> {
        let application = self.product_guard.admit(application)?;
        let loan_type = application.loan_type();
        let verdict = self.products.evaluate(&application);

        info!(
            loan_type = loan_type.tag(),
            eligible = verdict.eligible,
            failed_checks = verdict.reasons.len(),
            "product eligibility evaluated"
        );

        Ok(verdict)
    }

    /// Evaluate an untyped payload, answering unknown product tags with an ineligible verdict.
    pub fn assess_product_payload(
        &self,
        payload: Value,
    ) -> Result<ProductAssessment, EligibilityServiceError> {
        let raw_type = payload
            .get("loan_type")
            .and_then(Value::as_str)
            .ok_or(EligibilityServiceError::MissingLoanType)?;

        let loan_type = match self.product_guard.loan_type(raw_type) {
            Ok(loan_type) => loan_type,
            Err(ProductIntakeViolation::UnknownLoanType(raw)) => {
                warn!(loan_type = %raw, "rejecting unknown loan type");
                return Ok(ProductAssessment {
                    loan_type: None,
                    verdict: RuleVerdict::invalid_loan_type(),
                });
            }
            Err(other) => return Err(other.into()),
        };

        let mut payload = payload;
        if let Some(object) = payload.as_object_mut() {
            object.insert(
                "loan_type".to_string(),
                Value::String(loan_type.tag().to_string()),
            );
        }
        let application: LoanApplication = serde_json::from_value(payload)?;
        let verdict = self.assess_product(application)?;

        Ok(ProductAssessment {
            loan_type: Some(loan_type),
            verdict,
        })
    }
}

/// Product verdict paired with the resolved loan type, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductAssessment {
    pub loan_type: Option<LoanType>,
    pub verdict: RuleVerdict,
}

impl ProductAssessment {
    pub fn summary(&self) -> String {
        match self.loan_type {
            Some(loan_type) => self.verdict.summary(loan_type),
            None => "not eligible: invalid loan type".to_string(),
        }
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    FintechIntake(#[from] FintechIntakeViolation),
    #[error(transparent)]
    ProductIntake(#[from] ProductIntakeViolation),
    #[error("payload is missing a string loan_type field")]
    MissingLoanType,
    #[error("malformed application payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
