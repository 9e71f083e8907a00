use crate::check::{render_fintech_verdict, render_product_assessment};
use crate::infra::service_from_env;
use clap::Args;
use loan_eligibility::error::AppError;
use loan_eligibility::workflows::fintech::ApplicantProfile;
use loan_eligibility::workflows::products::{
    ApplicantDetails, BusinessDetails, CollateralType, EducationDetails, EmploymentType,
    LoanApplication,
};
use loan_eligibility::workflows::EligibilityService;
use serde_json::json;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the fintech scoring portion of the demo.
    #[arg(long)]
    pub(crate) skip_fintech: bool,
    /// Skip the per-product portion of the demo.
    #[arg(long)]
    pub(crate) skip_products: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = service_from_env()?;

    println!("Loan eligibility demo (mock results, no data saved)");

    if !args.skip_fintech {
        run_fintech_demo(&service)?;
    }

    if !args.skip_products {
        run_product_demo(&service)?;
    }

    Ok(())
}

fn run_fintech_demo(service: &EligibilityService) -> Result<(), AppError> {
    let steady = demo_fintech_profile()?;
    let thin_income = ApplicantProfile {
        net_monthly_income: 5_000,
        ..steady.clone()
    };

    for (title, profile) in [("Salaried applicant", steady), ("Low income applicant", thin_income)] {
        println!("\nFintech app loan: {title}");
        let verdict = service.assess_fintech(profile)?;
        render_fintech_verdict(&verdict);
    }

    Ok(())
}

fn run_product_demo(service: &EligibilityService) -> Result<(), AppError> {
    for application in demo_product_applications() {
        let loan_type = application.loan_type();
        println!("\n{}", loan_type.label());
        let payload = serde_json::to_value(&application)?;
        let assessment = service.assess_product_payload(payload)?;
        render_product_assessment(&assessment);
    }
    Ok(())
}

fn demo_fintech_profile() -> Result<ApplicantProfile, AppError> {
    let profile = serde_json::from_value(json!({
        "age": 25,
        "employment": "Salaried",
        "net_monthly_income": 20000,
        "existing_monthly_emi": 0,
        "desired_loan_amount": 50000,
        "tenure": 12,
        "credit_score_band": "Above 700",
        "has_bank_account": true,
        "has_digital_id": true
    }))?;
    Ok(profile)
}

fn demo_applicant() -> ApplicantDetails {
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

fn demo_product_applications() -> Vec<LoanApplication> {
    vec![
        LoanApplication::Personal {
            applicant: demo_applicant(),
        },
        LoanApplication::Home {
            applicant: ApplicantDetails {
                age: 38,
                monthly_income: 45_000,
                employment_type: EmploymentType::SelfEmployed,
                employment_years: 2.0,
                loan_amount: 3_000_000,
                loan_term_months: 240,
                ..demo_applicant()
            },
        },
        LoanApplication::Car {
            applicant: ApplicantDetails {
                monthly_income: 28_000,
                employment_years: 3.0,
                loan_amount: 600_000,
                ..demo_applicant()
            },
        },
        LoanApplication::Business {
            applicant: ApplicantDetails {
                age: 30,
                employment_type: EmploymentType::BusinessOwner,
                ..demo_applicant()
            },
            business: BusinessDetails {
                business_vintage_years: 1.0,
                annual_turnover: 2_000_000,
                collateral: CollateralType::Equipment,
            },
        },
        LoanApplication::Education {
            applicant: ApplicantDetails {
                employment_type: EmploymentType::Student,
                employment_years: 0.0,
                monthly_income: 0,
                loan_amount: 500_000,
                ..demo_applicant()
            },
            education: EducationDetails {
                coapplicant_income: 30_000,
                admission_confirmed: false,
                collateral_provided: false,
                has_coapplicant: true,
            },
        },
    ]
}
