//! Scenario and property coverage for the per-product rule evaluator.

use loan_eligibility::workflows::products::{
    evaluate_by_type, ApplicantDetails, BusinessDetails, CollateralType, EducationDetails,
    EmploymentType, LoanApplication,
};
use proptest::prelude::*;

fn applicant(age: u8) -> ApplicantDetails {
    ApplicantDetails {
        age,
        credit_score: 700,
        monthly_income: 16_000,
        employment_type: EmploymentType::Salaried,
        employment_years: 1.0,
        loan_amount: 100_000,
        loan_term_months: 60,
    }
}

#[test]
fn scenario_c_personal_loan_is_eligible() {
    let verdict = evaluate_by_type(&LoanApplication::Personal {
        applicant: applicant(22),
    });

    assert!(verdict.eligible);
    assert!(verdict.reasons.is_empty());
}

#[test]
fn scenario_d_education_loan_needs_admission() {
    let verdict = evaluate_by_type(&LoanApplication::Education {
        applicant: ApplicantDetails {
            loan_amount: 500_000,
            ..applicant(22)
        },
        education: EducationDetails {
            coapplicant_income: 40_000,
            admission_confirmed: false,
            collateral_provided: false,
            has_coapplicant: true,
        },
    });

    assert!(!verdict.eligible);
    assert_eq!(
        verdict.reasons,
        vec!["Admission to a recognized institute is mandatory.".to_string()]
    );
}

#[test]
fn scenario_e_business_loan_needs_vintage() {
    let verdict = evaluate_by_type(&LoanApplication::Business {
        applicant: applicant(30),
        business: BusinessDetails {
            business_vintage_years: 1.0,
            annual_turnover: 2_000_000,
            collateral: CollateralType::None,
        },
    });

    assert!(!verdict.eligible);
    assert_eq!(
        verdict.reasons,
        vec!["Business must be operational for at least 2 years.".to_string()]
    );
}

fn employment() -> impl Strategy<Value = EmploymentType> {
    prop_oneof![
        Just(EmploymentType::Salaried),
        Just(EmploymentType::SelfEmployed),
        Just(EmploymentType::BusinessOwner),
        Just(EmploymentType::Student),
    ]
}

prop_compose! {
    fn applicant_details()(
        age in 16u8..=80,
        credit_score in 300u16..=900,
        monthly_income in 0u32..=200_000,
        employment_type in employment(),
        employment_years in 0.0f64..40.0,
        loan_amount in 1_000u32..=5_000_000,
        loan_term_months in 6u16..=480,
    ) -> ApplicantDetails {
        ApplicantDetails {
            age,
            credit_score,
            monthly_income,
            employment_type,
            employment_years,
            loan_amount,
            loan_term_months,
        }
    }
}

fn application() -> impl Strategy<Value = LoanApplication> {
    prop_oneof![
        applicant_details().prop_map(|applicant| LoanApplication::Personal { applicant }),
        applicant_details().prop_map(|applicant| LoanApplication::Home { applicant }),
        applicant_details().prop_map(|applicant| LoanApplication::Car { applicant }),
        (applicant_details(), 0.0f64..10.0, 0u64..5_000_000).prop_map(
            |(applicant, business_vintage_years, annual_turnover)| LoanApplication::Business {
                applicant,
                business: BusinessDetails {
                    business_vintage_years,
                    annual_turnover,
                    collateral: CollateralType::None,
                },
            }
        ),
        (applicant_details(), any::<[bool; 3]>()).prop_map(|(applicant, flags)| {
            LoanApplication::Education {
                applicant,
                education: EducationDetails {
                    coapplicant_income: 0,
                    admission_confirmed: flags[0],
                    collateral_provided: flags[1],
                    has_coapplicant: flags[2],
                },
            }
        }),
    ]
}

proptest! {
    #[test]
    fn reasons_are_empty_iff_eligible(application in application()) {
        let verdict = evaluate_by_type(&application);
        prop_assert_eq!(verdict.eligible, verdict.reasons.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent(application in application()) {
        prop_assert_eq!(evaluate_by_type(&application), evaluate_by_type(&application));
    }
}
