//! Loan eligibility workflows.
//!
//! `fintech` scores a single generic app loan on a six point scale, `products` applies
//! per-product threshold rules. Both evaluators are pure; `service` and `router` wrap them
//! with intake validation, logging, and HTTP handlers.

pub mod fintech;
pub mod products;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::eligibility_router;
pub use service::{EligibilityService, EligibilityServiceError};
