use loan_eligibility::config::AppConfig;
use loan_eligibility::workflows::fintech::{
    CreditScoreBand, EmploymentType, ScoringConfig, TenureMonths,
};
use loan_eligibility::workflows::products::ProductPolicies;
use loan_eligibility::workflows::EligibilityService;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_service(scoring: ScoringConfig) -> EligibilityService {
    EligibilityService::new(scoring, ProductPolicies::standard())
}

pub(crate) fn service_from_env() -> Result<EligibilityService, loan_eligibility::config::ConfigError> {
    let config = AppConfig::load()?;
    Ok(build_service(config.scoring))
}

fn parse_label<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.trim().to_string()))
        .map_err(|_| format!("unrecognised {what} '{raw}'"))
}

pub(crate) fn parse_employment(raw: &str) -> Result<EmploymentType, String> {
    parse_label(raw, "employment type")
}

pub(crate) fn parse_credit_band(raw: &str) -> Result<CreditScoreBand, String> {
    parse_label(raw, "credit score band")
}

pub(crate) fn parse_tenure(raw: &str) -> Result<TenureMonths, String> {
    let months = raw
        .trim()
        .parse::<u16>()
        .map_err(|err| format!("failed to parse '{raw}' as months ({err})"))?;
    TenureMonths::new(months).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_labels() {
        assert_eq!(parse_employment("Self-Employed"), Ok(EmploymentType::SelfEmployed));
        assert_eq!(parse_employment("gig"), Ok(EmploymentType::Gig));
        assert_eq!(parse_credit_band("651-700"), Ok(CreditScoreBand::From651To700));
        assert!(parse_credit_band("excellent").is_err());
    }

    #[test]
    fn tenure_parser_enforces_offered_durations() {
        assert_eq!(parse_tenure("18").map(TenureMonths::months), Ok(18));
        assert!(parse_tenure("19").unwrap_err().contains("not offered"));
        assert!(parse_tenure("twelve").is_err());
    }
}
