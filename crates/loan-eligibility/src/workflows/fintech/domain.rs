use serde::{Deserialize, Serialize};

/// Employment categories accepted by app-based lenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[serde(alias = "Salaried")]
    Salaried,
    #[serde(alias = "Self-Employed")]
    SelfEmployed,
    #[serde(alias = "Gig/Freelancer")]
    Gig,
    #[serde(alias = "Student")]
    Student,
    #[serde(alias = "Other")]
    Other,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::Salaried => "Salaried",
            EmploymentType::SelfEmployed => "Self-Employed",
            EmploymentType::Gig => "Gig/Freelancer",
            EmploymentType::Student => "Student",
            EmploymentType::Other => "Other",
        }
    }
}

/// Coarse credit bucket used when the applicant does not know the exact bureau score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditScoreBand {
    #[serde(rename = "unknown", alias = "I don't know")]
    Unknown,
    #[serde(rename = "below_600", alias = "Below 600")]
    Below600,
    #[serde(rename = "600_650", alias = "600-650")]
    From600To650,
    #[serde(rename = "651_700", alias = "651-700")]
    From651To700,
    #[serde(rename = "above_700", alias = "Above 700")]
    Above700,
}

impl CreditScoreBand {
    pub const fn label(self) -> &'static str {
        match self {
            CreditScoreBand::Unknown => "I don't know",
            CreditScoreBand::Below600 => "Below 600",
            CreditScoreBand::From600To650 => "600-650",
            CreditScoreBand::From651To700 => "651-700",
            CreditScoreBand::Above700 => "Above 700",
        }
    }
}

/// Repayment tenure restricted to the durations offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TenureMonths(u16);

impl TenureMonths {
    pub const ALLOWED: [u16; 7] = [3, 6, 9, 12, 18, 24, 36];

    pub fn new(months: u16) -> Result<Self, InvalidTenure> {
        if Self::ALLOWED.contains(&months) {
            Ok(Self(months))
        } else {
            Err(InvalidTenure(months))
        }
    }

    pub const fn months(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for TenureMonths {
    type Error = InvalidTenure;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TenureMonths> for u16 {
    fn from(value: TenureMonths) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tenure of {0} months is not offered (allowed: 3, 6, 9, 12, 18, 24, 36)")]
pub struct InvalidTenure(pub u16);

/// Applicant attributes collected for a single fintech loan check.
///
/// Amounts are whole rupees. Profiles carry no identity and are discarded after scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u8,
    pub employment: EmploymentType,
    pub net_monthly_income: u32,
    pub existing_monthly_emi: u32,
    pub desired_loan_amount: u32,
    pub tenure: TenureMonths,
    pub credit_score_band: CreditScoreBand,
    pub has_bank_account: bool,
    pub has_digital_id: bool,
}

impl ApplicantProfile {
    /// Monthly instalment of the requested loan spread evenly over the tenure.
    pub fn prorated_installment(&self) -> f64 {
        f64::from(self.desired_loan_amount) / f64::from(self.tenure.months())
    }

    pub fn has_kyc(&self) -> bool {
        self.has_bank_account && self.has_digital_id
    }
}
