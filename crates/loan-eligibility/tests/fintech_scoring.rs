//! Scenario and property coverage for the fintech scoring evaluator through the public API.

use loan_eligibility::workflows::fintech::{
    evaluate_scored, profiles_from_reader, ApplicantProfile, CreditScoreBand, EmploymentType,
    ImportError, TenureMonths,
};
use proptest::prelude::*;

fn scenario_a() -> ApplicantProfile {
    ApplicantProfile {
        age: 25,
        employment: EmploymentType::Salaried,
        net_monthly_income: 20_000,
        existing_monthly_emi: 0,
        desired_loan_amount: 50_000,
        tenure: TenureMonths::new(12).expect("offered tenure"),
        credit_score_band: CreditScoreBand::Above700,
        has_bank_account: true,
        has_digital_id: true,
    }
}

#[test]
fn scenario_a_scores_full_marks() {
    let verdict = evaluate_scored(&scenario_a());

    assert_eq!(verdict.score, 6);
    assert!(verdict.eligible);
    assert_eq!(verdict.max_loan, 200_000);
    assert!((verdict.dti - 0.2083).abs() < 1e-3);
}

#[test]
fn scenario_b_low_income_falls_below_pass_score() {
    let profile = ApplicantProfile {
        net_monthly_income: 5_000,
        ..scenario_a()
    };

    let verdict = evaluate_scored(&profile);

    assert_eq!(verdict.max_loan, 50_000);
    assert!(verdict.score < 5);
    assert!(!verdict.eligible);
}

#[test]
fn csv_rows_import_as_profiles() {
    let csv = "\
age,employment,net_monthly_income,existing_monthly_emi,desired_loan_amount,tenure,credit_score_band,has_bank_account,has_digital_id
25,salaried,20000,0,50000,12,above_700,true,true
34, Gig/Freelancer ,15000,2000,30000,6,I don't know,true,false
";

    let profiles = profiles_from_reader(csv.as_bytes()).expect("csv parses");

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0], scenario_a());
    assert_eq!(profiles[1].employment, EmploymentType::Gig);
    assert_eq!(profiles[1].credit_score_band, CreditScoreBand::Unknown);
    assert!(!evaluate_scored(&profiles[1]).reasons.is_empty());
}

#[test]
fn csv_import_reports_offending_row() {
    let csv = "\
age,employment,net_monthly_income,existing_monthly_emi,desired_loan_amount,tenure,credit_score_band,has_bank_account,has_digital_id
25,salaried,20000,0,50000,12,above_700,true,true
25,salaried,20000,0,50000,7,above_700,true,true
";

    match profiles_from_reader(csv.as_bytes()) {
        Err(ImportError::Row { row, .. }) => assert_eq!(row, 2),
        other => panic!("expected row error, got {other:?}"),
    }
}

fn employment() -> impl Strategy<Value = EmploymentType> {
    prop_oneof![
        Just(EmploymentType::Salaried),
        Just(EmploymentType::SelfEmployed),
        Just(EmploymentType::Gig),
        Just(EmploymentType::Student),
        Just(EmploymentType::Other),
    ]
}

fn credit_band() -> impl Strategy<Value = CreditScoreBand> {
    prop_oneof![
        Just(CreditScoreBand::Unknown),
        Just(CreditScoreBand::Below600),
        Just(CreditScoreBand::From600To650),
        Just(CreditScoreBand::From651To700),
        Just(CreditScoreBand::Above700),
    ]
}

fn tenure() -> impl Strategy<Value = TenureMonths> {
    prop::sample::select(TenureMonths::ALLOWED.to_vec())
        .prop_map(|months| TenureMonths::new(months).expect("allowed tenure"))
}

prop_compose! {
    fn profile()(
        age in 0u8..=100,
        employment in employment(),
        net_monthly_income in 0u32..=200_000,
        existing_monthly_emi in 0u32..=100_000,
        desired_loan_amount in 1_000u32..=500_000,
        tenure in tenure(),
        credit_score_band in credit_band(),
        has_bank_account in any::<bool>(),
        has_digital_id in any::<bool>(),
    ) -> ApplicantProfile {
        ApplicantProfile {
            age,
            employment,
            net_monthly_income,
            existing_monthly_emi,
            desired_loan_amount,
            tenure,
            credit_score_band,
            has_bank_account,
            has_digital_id,
        }
    }
}

fn round_to_thousand(amount: u64) -> u64 {
    (amount + 500) / 1_000 * 1_000
}

proptest! {
    #[test]
    fn score_stays_within_scale(profile in profile()) {
        let verdict = evaluate_scored(&profile);
        prop_assert!(verdict.score <= 6);
        prop_assert!(!verdict.eligible || verdict.score >= 5);
        prop_assert_eq!(usize::from(verdict.score) + verdict.reasons.len(), 6);
    }

    #[test]
    fn max_loan_depends_only_on_income(profile in profile()) {
        let verdict = evaluate_scored(&profile);
        let expected = round_to_thousand((u64::from(profile.net_monthly_income) * 10).min(500_000));
        prop_assert_eq!(u64::from(verdict.max_loan), expected);
    }

    #[test]
    fn zero_income_ratio_is_finite(mut profile in profile()) {
        profile.net_monthly_income = 0;
        prop_assert!(evaluate_scored(&profile).dti.is_finite());
    }

    #[test]
    fn evaluation_is_idempotent(profile in profile()) {
        prop_assert_eq!(evaluate_scored(&profile), evaluate_scored(&profile));
    }
}
