use serde::{Deserialize, Serialize};

/// Loan products offered by the rule evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Personal,
    Home,
    Car,
    Business,
    Education,
}

impl LoanType {
    pub const ALL: [LoanType; 5] = [
        LoanType::Personal,
        LoanType::Home,
        LoanType::Car,
        LoanType::Business,
        LoanType::Education,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Home => "home",
            LoanType::Car => "car",
            LoanType::Business => "business",
            LoanType::Education => "education",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LoanType::Personal => "Personal Loan",
            LoanType::Home => "Home Loan",
            LoanType::Car => "Car Loan",
            LoanType::Business => "Business Loan",
            LoanType::Education => "Education Loan",
        }
    }

    /// Accepts the snake_case tag or the display label, case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|loan_type| {
            loan_type.tag().eq_ignore_ascii_case(value)
                || loan_type.label().eq_ignore_ascii_case(value)
        })
    }
}

/// Applicant categories on the multi-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[serde(alias = "Salaried")]
    Salaried,
    #[serde(alias = "Self-Employed")]
    SelfEmployed,
    #[serde(alias = "Business Owner")]
    BusinessOwner,
    #[serde(alias = "Student")]
    Student,
}

/// Fields collected for every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub age: u8,
    pub credit_score: u16,
    pub monthly_income: u32,
    pub employment_type: EmploymentType,
    pub employment_years: f64,
    pub loan_amount: u32,
    pub loan_term_months: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollateralType {
    #[default]
    None,
    Property,
    Equipment,
    Other,
}

/// Extra fields collected for business loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub business_vintage_years: f64,
    pub annual_turnover: u64,
    #[serde(default)]
    pub collateral: CollateralType,
}

/// Extra fields collected for education loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    pub coapplicant_income: u32,
    pub admission_confirmed: bool,
    pub collateral_provided: bool,
    pub has_coapplicant: bool,
}

/// Application tagged by product; each variant carries only the fields its rules read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loan_type", rename_all = "snake_case")]
pub enum LoanApplication {
    Personal {
        applicant: ApplicantDetails,
    },
    Home {
        applicant: ApplicantDetails,
    },
    Car {
        applicant: ApplicantDetails,
    },
    Business {
        applicant: ApplicantDetails,
        business: BusinessDetails,
    },
    Education {
        applicant: ApplicantDetails,
        education: EducationDetails,
    },
}

impl LoanApplication {
    pub fn loan_type(&self) -> LoanType {
        match self {
            LoanApplication::Personal { .. } => LoanType::Personal,
            LoanApplication::Home { .. } => LoanType::Home,
            LoanApplication::Car { .. } => LoanType::Car,
            LoanApplication::Business { .. } => LoanType::Business,
            LoanApplication::Education { .. } => LoanType::Education,
        }
    }

    pub fn applicant(&self) -> &ApplicantDetails {
        match self {
            LoanApplication::Personal { applicant }
            | LoanApplication::Home { applicant }
            | LoanApplication::Car { applicant }
            | LoanApplication::Business { applicant, .. }
            | LoanApplication::Education { applicant, .. } => applicant,
        }
    }
}
