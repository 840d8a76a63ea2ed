//! # Zbank Demos
//!
//! This crate contains example scenarios demonstrating the onboarding flow.
//!
//! ## Available Examples
//!
//! 1. **01_onboarding** - Full flow: register TCKN, save KYC profile, evaluate risk
//! 2. **02_risk_scenarios** - Scorer walk-through over a matrix of applicants
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run -p zbank-demos --example 01_onboarding
//! cargo run -p zbank-demos --example 02_risk_scenarios
//! ```

// This crate only contains examples, no library code.
