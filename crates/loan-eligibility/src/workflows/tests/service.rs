use super::common::*;
use serde_json::json;

use crate::workflows::fintech::{FintechIntakeViolation, ScoringConfig, TenureMonths};
use crate::workflows::products::{LoanType, ProductPolicies, RuleVerdict};
use crate::workflows::{EligibilityService, EligibilityServiceError};

#[test]
fn assess_fintech_scores_admitted_profiles() {
    let verdict = service()
        .assess_fintech(strong_profile())
        .expect("profile admitted");

    assert!(verdict.eligible);
    assert_eq!(verdict.score, 6);
}

#[test]
fn assess_fintech_surfaces_intake_violations() {
    let mut profile = strong_profile();
    profile.age = 65;

    match service().assess_fintech(profile) {
        Err(EligibilityServiceError::FintechIntake(FintechIntakeViolation::AgeOutOfBounds {
            found,
            ..
        })) => assert_eq!(found, 65),
        other => panic!("expected intake violation, got {other:?}"),
    }
}

#[test]
fn assess_product_evaluates_typed_application() {
    let verdict = service()
        .assess_product(business_application())
        .expect("application admitted");

    assert_eq!(
        verdict.reasons,
        vec!["Business must be operational for at least 2 years.".to_string()]
    );
}

#[test]
fn payload_with_unknown_loan_type_yields_invalid_verdict() {
    let assessment = service()
        .assess_product_payload(json!({ "loan_type": "gold", "applicant": {} }))
        .expect("unknown types are a verdict, not an error");

    assert_eq!(assessment.loan_type, None);
    assert_eq!(assessment.verdict, RuleVerdict::invalid_loan_type());
    assert_eq!(assessment.summary(), "not eligible: invalid loan type");
}

#[test]
fn payload_accepts_display_labels() {
    let mut payload = serde_json::to_value(personal_application()).expect("serializes");
    payload["loan_type"] = json!("Personal Loan");

    let assessment = service()
        .assess_product_payload(payload)
        .expect("label resolves");

    assert_eq!(assessment.loan_type, Some(LoanType::Personal));
    assert!(assessment.verdict.eligible);
}

#[test]
fn payload_without_loan_type_is_rejected() {
    let result = service().assess_product_payload(json!({ "applicant": {} }));
    assert!(matches!(result, Err(EligibilityServiceError::MissingLoanType)));
}

#[test]
fn payload_missing_variant_fields_is_malformed() {
    let mut payload = serde_json::to_value(personal_application()).expect("serializes");
    payload["loan_type"] = json!("education");

    let result = service().assess_product_payload(payload);
    assert!(matches!(
        result,
        Err(EligibilityServiceError::MalformedPayload(_))
    ));
}

#[test]
fn raised_loan_cap_is_reachable() {
    let service = EligibilityService::new(
        ScoringConfig {
            loan_cap: 800_000,
            ..ScoringConfig::default()
        },
        ProductPolicies::standard(),
    );
    let mut profile = strong_profile();
    profile.net_monthly_income = 100_000;
    profile.desired_loan_amount = 700_000;
    profile.tenure = TenureMonths::new(36).expect("offered tenure");

    let verdict = service.assess_fintech(profile).expect("within raised cap");

    assert!(verdict.eligible);
    assert_eq!(verdict.max_loan, 800_000);
}
