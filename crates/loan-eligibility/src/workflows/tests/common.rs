use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::fintech::{
    ApplicantProfile, CreditScoreBand, EmploymentType as FintechEmployment, ScoringConfig,
    ScoringEngine, TenureMonths,
};
use crate::workflows::products::{
    ApplicantDetails, BusinessDetails, CollateralType, EducationDetails, EmploymentType,
    LoanApplication, ProductRuleEngine,
};
use crate::workflows::{eligibility_router, EligibilityService};

/// Applicant who clears every fintech criterion.
pub(super) fn strong_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 25,
        employment: FintechEmployment::Salaried,
        net_monthly_income: 20_000,
        existing_monthly_emi: 0,
        desired_loan_amount: 50_000,
        tenure: TenureMonths::new(12).expect("offered tenure"),
        credit_score_band: CreditScoreBand::Above700,
        has_bank_account: true,
        has_digital_id: true,
    }
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn salaried_applicant() -> ApplicantDetails {
    ApplicantDetails {
        age: 22,
        credit_score: 700,
        monthly_income: 16_000,
        employment_type: EmploymentType::Salaried,
        employment_years: 1.0,
        loan_amount: 100_000,
        loan_term_months: 60,
    }
}

pub(super) fn personal_application() -> LoanApplication {
    LoanApplication::Personal {
        applicant: salaried_applicant(),
    }
}

pub(super) fn business_application() -> LoanApplication {
    LoanApplication::Business {
        applicant: ApplicantDetails {
            age: 30,
            employment_type: EmploymentType::BusinessOwner,
            ..salaried_applicant()
        },
        business: BusinessDetails {
            business_vintage_years: 1.0,
            annual_turnover: 2_000_000,
            collateral: CollateralType::None,
        },
    }
}

pub(super) fn education_application() -> LoanApplication {
    LoanApplication::Education {
        applicant: ApplicantDetails {
            employment_type: EmploymentType::Student,
            employment_years: 0.0,
            monthly_income: 0,
            loan_amount: 500_000,
            ..salaried_applicant()
        },
        education: EducationDetails {
            coapplicant_income: 30_000,
            admission_confirmed: false,
            collateral_provided: false,
            has_coapplicant: true,
        },
    }
}

pub(super) fn rule_engine() -> ProductRuleEngine {
    ProductRuleEngine::default()
}

pub(super) fn service() -> Arc<EligibilityService> {
    Arc::new(EligibilityService::default())
}

pub(super) fn router() -> axum::Router {
    eligibility_router(service())
}

pub(super) fn strong_profile_json() -> Value {
    json!({
        "age": 25,
        "employment": "salaried",
        "net_monthly_income": 20000,
        "existing_monthly_emi": 0,
        "desired_loan_amount": 50000,
        "tenure": 12,
        "credit_score_band": "above_700",
        "has_bank_account": true,
        "has_digital_id": true
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
