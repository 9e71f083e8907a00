//! Per-product threshold rules for personal, home, car, business, and education loans.

pub mod domain;
pub mod intake;
pub mod policy;
mod rules;

pub use domain::{
    ApplicantDetails, BusinessDetails, CollateralType, EducationDetails, EmploymentType,
    LoanApplication, LoanType,
};
pub use intake::{ProductIntakeBounds, ProductIntakeGuard, ProductIntakeViolation};
pub use policy::{
    AgeWindow, BusinessPolicy, EducationPolicy, PersonalPolicy, ProductPolicies, ProductPolicy,
    Threshold,
};

use serde::{Deserialize, Serialize};

const INVALID_LOAN_TYPE: &str = "Invalid loan type.";

/// Pass/fail outcome with one reason per failed predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub eligible: bool,
    pub reasons: Vec<String>,
}

impl RuleVerdict {
    /// Verdict for a product tag the evaluator does not recognise.
    pub fn invalid_loan_type() -> Self {
        Self {
            eligible: false,
            reasons: vec![INVALID_LOAN_TYPE.to_string()],
        }
    }

    pub fn summary(&self, loan_type: LoanType) -> String {
        let product = loan_type.label().to_lowercase();
        if self.eligible {
            format!("likely eligible for a {product}")
        } else {
            format!("not eligible for a {product} based on provided details")
        }
    }
}

/// Stateless evaluator dispatching an application to its product's rule set.
#[derive(Debug, Clone, Default)]
pub struct ProductRuleEngine {
    policies: ProductPolicies,
}

impl ProductRuleEngine {
    pub fn new(policies: ProductPolicies) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &ProductPolicies {
        &self.policies
    }

    pub fn evaluate(&self, application: &LoanApplication) -> RuleVerdict {
        match application {
            LoanApplication::Personal { applicant } => {
                rules::check_personal(&self.policies.personal, applicant)
            }
            LoanApplication::Home { applicant } => {
                rules::check_standard(&self.policies.home, applicant)
            }
            LoanApplication::Car { applicant } => {
                rules::check_standard(&self.policies.car, applicant)
            }
            LoanApplication::Business {
                applicant,
                business,
            } => rules::check_business(&self.policies.business, applicant, business),
            LoanApplication::Education {
                applicant,
                education,
            } => rules::check_education(&self.policies.education, applicant, education),
        }
    }
}

/// Evaluate an application against the standard product tables.
pub fn evaluate_by_type(application: &LoanApplication) -> RuleVerdict {
    ProductRuleEngine::default().evaluate(application)
}
