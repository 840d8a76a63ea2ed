//! # Zbank Scoring
//!
//! Pure risk-scoring functions for the onboarding flow.
//!
//! Three independent components, each a pure function over its arguments:
//!
//! - [`AgeScorer`] - birth date -> age bracket, score delta, hard-stop signal
//! - [`GeoRiskScorer`] - (nationality, residence, justification) -> per-factor
//!   delta breakdown, total, color band
//! - [`keywords`] - shared risk-keyword classifier used by the geo scorer
//!
//! Nothing in this crate performs I/O or holds mutable state. Every table is
//! a compile-time constant, so all entry points are safe to call concurrently
//! from any number of threads without coordination. Callers combine the two
//! scorer outputs additively into an overall applicant score.

pub mod age;
pub mod geo;
pub mod keywords;

pub use age::{AgeBracket, AgeScore, AgeScorer};
pub use geo::{
    delta_for_level, level_for_country, GeoRiskDelta, GeoRiskResult, GeoRiskScorer, RiskColor,
    RiskFactor,
};
pub use keywords::{is_risky_text, RISK_KEYWORDS};
