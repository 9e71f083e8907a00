use crate::infra::{parse_credit_band, parse_employment, parse_tenure, service_from_env};
use chrono::{DateTime, Local};
use clap::Args;
use loan_eligibility::error::AppError;
use loan_eligibility::workflows::fintech::{
    profiles_from_path, ApplicantProfile, CreditScoreBand, EmploymentType, ScoredVerdict,
    TenureMonths,
};
use loan_eligibility::workflows::service::ProductAssessment;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct FintechArgs {
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: u8,
    /// Employment type (salaried, self-employed, gig, student, other)
    #[arg(long, value_parser = parse_employment, default_value = "salaried")]
    pub(crate) employment: EmploymentType,
    /// Net monthly income in rupees
    #[arg(long)]
    pub(crate) income: u32,
    /// Total ongoing monthly EMIs in rupees
    #[arg(long, default_value_t = 0)]
    pub(crate) emi: u32,
    /// Desired loan amount in rupees
    #[arg(long)]
    pub(crate) loan_amount: u32,
    /// Tenure in months (3, 6, 9, 12, 18, 24, 36)
    #[arg(long, value_parser = parse_tenure, default_value = "12")]
    pub(crate) tenure: TenureMonths,
    /// Credit score band (unknown, below_600, 600-650, 651-700, above_700)
    #[arg(long, value_parser = parse_credit_band, default_value = "unknown")]
    pub(crate) credit_band: CreditScoreBand,
    /// Applicant has no active bank account
    #[arg(long)]
    pub(crate) no_bank_account: bool,
    /// Applicant lacks Aadhaar/PAN proof
    #[arg(long)]
    pub(crate) no_digital_id: bool,
    /// Emit the verdict as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl FintechArgs {
    fn profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            age: self.age,
            employment: self.employment,
            net_monthly_income: self.income,
            existing_monthly_emi: self.emi,
            desired_loan_amount: self.loan_amount,
            tenure: self.tenure,
            credit_score_band: self.credit_band,
            has_bank_account: !self.no_bank_account,
            has_digital_id: !self.no_digital_id,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ProductArgs {
    /// JSON file holding a tagged loan application
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Emit the verdict as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one applicant profile per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit the batch report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct BatchReport {
    evaluated_at: DateTime<Local>,
    eligible: usize,
    rejected: usize,
    entries: Vec<BatchEntry>,
}

#[derive(Debug, Serialize)]
struct BatchEntry {
    row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<ScoredVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub(crate) fn run_fintech_check(args: FintechArgs) -> Result<(), AppError> {
    let service = service_from_env()?;
    let verdict = service.assess_fintech(args.profile())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        render_fintech_verdict(&verdict);
    }
    Ok(())
}

pub(crate) fn run_product_check(args: ProductArgs) -> Result<(), AppError> {
    let service = service_from_env()?;
    let raw = std::fs::read_to_string(&args.input)?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;
    let assessment = service.assess_product_payload(payload)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_product_assessment(&assessment);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = service_from_env()?;
    let profiles = profiles_from_path(&args.csv)?;

    let entries: Vec<BatchEntry> = profiles
        .into_iter()
        .enumerate()
        .map(|(idx, profile)| match service.assess_fintech(profile) {
            Ok(verdict) => BatchEntry {
                row: idx + 1,
                verdict: Some(verdict),
                error: None,
            },
            Err(err) => BatchEntry {
                row: idx + 1,
                verdict: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let eligible = entries
        .iter()
        .filter(|entry| entry.verdict.as_ref().is_some_and(|verdict| verdict.eligible))
        .count();
    let report = BatchReport {
        evaluated_at: Local::now(),
        eligible,
        rejected: entries.len() - eligible,
        entries,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Batch fintech eligibility ({} profiles, evaluated {})",
        report.entries.len(),
        report.evaluated_at.format("%Y-%m-%d %H:%M")
    );
    for entry in &report.entries {
        match (&entry.verdict, &entry.error) {
            (Some(verdict), _) => println!(
                "- row {}: {} (score {}, max loan ₹{})",
                entry.row,
                if verdict.eligible { "eligible" } else { "not eligible" },
                score_label(verdict),
                verdict.max_loan
            ),
            (None, Some(error)) => println!("- row {}: rejected at intake ({error})", entry.row),
            (None, None) => {}
        }
    }
    println!(
        "\n{} eligible, {} not eligible or rejected",
        report.eligible, report.rejected
    );
    Ok(())
}

fn score_label(verdict: &ScoredVerdict) -> String {
    format!("{}/{}", verdict.score, verdict.max_score)
}

pub(crate) fn render_fintech_verdict(verdict: &ScoredVerdict) {
    println!("Result: {}", verdict.summary());
    println!("Score: {}", score_label(verdict));
    println!("Debt-to-income: {:.1}%", verdict.dti * 100.0);
    println!("\nWhy?");
    for remark in verdict.remarks() {
        println!("- {remark}");
    }
}

pub(crate) fn render_product_assessment(assessment: &ProductAssessment) {
    println!("Result: {}", assessment.summary());
    if assessment.verdict.reasons.is_empty() {
        return;
    }
    println!("\nExplanation:");
    for reason in &assessment.verdict.reasons {
        println!("- {reason}");
    }
}
