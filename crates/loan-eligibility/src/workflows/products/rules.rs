use super::domain::{ApplicantDetails, BusinessDetails, EducationDetails, EmploymentType};
use super::policy::{
    AgeWindow, BusinessPolicy, EducationPolicy, PersonalPolicy, ProductPolicy, Threshold,
};
use super::RuleVerdict;

/// Accumulates every failed predicate; nothing short-circuits.
#[derive(Debug, Default)]
struct Checklist {
    reasons: Vec<String>,
}

impl Checklist {
    fn require(&mut self, satisfied: bool, reason: &str) {
        if !satisfied {
            self.reasons.push(reason.to_string());
        }
    }

    fn age(&mut self, window: &AgeWindow, age: u8) {
        self.require(window.range.contains(&age), window.reason);
    }

    fn minimum<T: PartialOrd + Copy>(&mut self, threshold: Option<&Threshold<T>>, value: T) {
        if let Some(threshold) = threshold {
            self.require(threshold.is_met(value), threshold.reason);
        }
    }

    // BusinessOwner and Student applicants have no experience rule on these products.
    fn experience(&mut self, policy: &ProductPolicy, applicant: &ApplicantDetails) {
        let rule = match applicant.employment_type {
            EmploymentType::Salaried => policy.salaried_years.as_ref(),
            EmploymentType::SelfEmployed => policy.self_employed_years.as_ref(),
            EmploymentType::BusinessOwner | EmploymentType::Student => None,
        };
        self.minimum(rule, applicant.employment_years);
    }

    fn finish(self) -> RuleVerdict {
        RuleVerdict {
            eligible: self.reasons.is_empty(),
            reasons: self.reasons,
        }
    }
}

fn check_common(checklist: &mut Checklist, policy: &ProductPolicy, applicant: &ApplicantDetails) {
    checklist.age(&policy.age, applicant.age);
    checklist.minimum(policy.monthly_income.as_ref(), applicant.monthly_income);
    checklist.minimum(policy.credit_score.as_ref(), applicant.credit_score);
    checklist.experience(policy, applicant);
}

pub(crate) fn check_personal(policy: &PersonalPolicy, applicant: &ApplicantDetails) -> RuleVerdict {
    let mut checklist = Checklist::default();
    check_common(&mut checklist, &policy.base, applicant);

    let installment = f64::from(applicant.loan_amount) / f64::from(applicant.loan_term_months.max(1));
    let ceiling = policy.max_installment_share * f64::from(applicant.monthly_income);
    checklist.require(installment <= ceiling, policy.installment_reason);

    checklist.finish()
}

/// Home and car loans use the shared table with no extra predicates.
pub(crate) fn check_standard(policy: &ProductPolicy, applicant: &ApplicantDetails) -> RuleVerdict {
    let mut checklist = Checklist::default();
    check_common(&mut checklist, policy, applicant);
    checklist.finish()
}

/// Collateral is optional for business loans and never fails a check.
pub(crate) fn check_business(
    policy: &BusinessPolicy,
    applicant: &ApplicantDetails,
    business: &BusinessDetails,
) -> RuleVerdict {
    let mut checklist = Checklist::default();
    checklist.age(&policy.age, applicant.age);
    checklist.minimum(Some(&policy.vintage_years), business.business_vintage_years);
    checklist.minimum(Some(&policy.annual_turnover), business.annual_turnover);
    checklist.minimum(Some(&policy.credit_score), applicant.credit_score);
    checklist.finish()
}

pub(crate) fn check_education(
    policy: &EducationPolicy,
    applicant: &ApplicantDetails,
    education: &EducationDetails,
) -> RuleVerdict {
    let mut checklist = Checklist::default();
    checklist.age(&policy.age, applicant.age);
    checklist.require(education.admission_confirmed, policy.admission_reason);
    checklist.require(education.has_coapplicant, policy.coapplicant_reason);
    checklist.require(
        applicant.loan_amount <= policy.collateral_above || education.collateral_provided,
        policy.collateral_reason,
    );
    checklist.finish()
}
