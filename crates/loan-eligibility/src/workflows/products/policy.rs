use std::ops::RangeInclusive;

/// A lower bound paired with the reason reported when it is missed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold<T> {
    pub minimum: T,
    pub reason: &'static str,
}

impl<T: PartialOrd + Copy> Threshold<T> {
    pub const fn new(minimum: T, reason: &'static str) -> Self {
        Self { minimum, reason }
    }

    pub fn is_met(&self, value: T) -> bool {
        value >= self.minimum
    }
}

/// Inclusive age window for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeWindow {
    pub range: RangeInclusive<u8>,
    pub reason: &'static str,
}

/// Thresholds shared by the salaried/self-employed products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPolicy {
    pub age: AgeWindow,
    pub monthly_income: Option<Threshold<u32>>,
    pub credit_score: Option<Threshold<u16>>,
    pub salaried_years: Option<Threshold<f64>>,
    pub self_employed_years: Option<Threshold<f64>>,
}

/// Personal loans add an instalment-to-income gate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalPolicy {
    pub base: ProductPolicy,
    pub max_installment_share: f64,
    pub installment_reason: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessPolicy {
    pub age: AgeWindow,
    pub vintage_years: Threshold<f64>,
    pub annual_turnover: Threshold<u64>,
    pub credit_score: Threshold<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationPolicy {
    pub age: AgeWindow,
    pub admission_reason: &'static str,
    pub coapplicant_reason: &'static str,
    pub collateral_above: u32,
    pub collateral_reason: &'static str,
}

/// Rule tables for every product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPolicies {
    pub personal: PersonalPolicy,
    pub home: ProductPolicy,
    pub car: ProductPolicy,
    pub business: BusinessPolicy,
    pub education: EducationPolicy,
}

impl Default for ProductPolicies {
    fn default() -> Self {
        Self::standard()
    }
}

impl ProductPolicies {
    pub fn standard() -> Self {
        Self {
            personal: PersonalPolicy {
                base: ProductPolicy {
                    age: AgeWindow {
                        range: 21..=60,
                        reason: "Age must be between 21 and 60 years.",
                    },
                    monthly_income: Some(Threshold::new(
                        15_000,
                        "Minimum monthly income should be ₹15,000 or $2,000.",
                    )),
                    credit_score: Some(Threshold::new(650, "Credit score must be at least 650.")),
                    salaried_years: Some(Threshold::new(
                        0.5,
                        "At least 6 months in current salaried job.",
                    )),
                    self_employed_years: Some(Threshold::new(
                        2.0,
                        "At least 2 years of self-employment.",
                    )),
                },
                max_installment_share: 0.5,
                installment_reason: "Requested loan amount is high for your income/term.",
            },
            home: ProductPolicy {
                age: AgeWindow {
                    range: 21..=70,
                    reason: "Age must be between 21 and 70 years.",
                },
                monthly_income: Some(Threshold::new(
                    25_000,
                    "Minimum monthly income should be ₹25,000 or $3,000.",
                )),
                credit_score: Some(Threshold::new(700, "Credit score must be at least 700.")),
                salaried_years: Some(Threshold::new(
                    2.0,
                    "Salaried applicants need 2+ years in job.",
                )),
                self_employed_years: Some(Threshold::new(
                    3.0,
                    "Self-employed need 3+ years business stability.",
                )),
            },
            car: ProductPolicy {
                age: AgeWindow {
                    range: 21..=65,
                    reason: "Age must be between 21 and 65 years.",
                },
                monthly_income: Some(Threshold::new(
                    20_000,
                    "Minimum monthly income should be ₹20,000 or $2,500.",
                )),
                credit_score: Some(Threshold::new(650, "Credit score must be at least 650.")),
                salaried_years: Some(Threshold::new(1.0, "Salaried: 1+ year experience required.")),
                self_employed_years: Some(Threshold::new(
                    2.0,
                    "Self-employed: 2+ years in business required.",
                )),
            },
            business: BusinessPolicy {
                age: AgeWindow {
                    range: 21..=65,
                    reason: "Age must be between 21 and 65 years.",
                },
                vintage_years: Threshold::new(
                    2.0,
                    "Business must be operational for at least 2 years.",
                ),
                annual_turnover: Threshold::new(
                    1_000_000,
                    "Annual turnover should be ₹10 lakh+ ($50,000+).",
                ),
                credit_score: Threshold::new(650, "Credit score must be at least 650."),
            },
            education: EducationPolicy {
                age: AgeWindow {
                    range: 18..=35,
                    reason: "Age must be between 18 and 35 years.",
                },
                admission_reason: "Admission to a recognized institute is mandatory.",
                coapplicant_reason: "Co-applicant (parent/guardian) is mandatory.",
                collateral_above: 750_000,
                collateral_reason: "Collateral required for high-value education loans.",
            },
        }
    }
}
