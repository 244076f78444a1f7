//! # onboard-validator
//!
//! Deterministic input validators for a brokerage onboarding flow.
//!
//! Every validator classifies a raw string and returns a
//! [`ValidationReport`](foundation::ValidationReport): the canonicalized value
//! when the input is acceptable, or the full ordered list of
//! [`Issue`](foundation::Issue)s explaining why it is not. Validators never
//! panic and never short-circuit on the first failure (except for inputs that
//! are empty or structurally unsplittable), so callers always see every
//! applicable reason at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use onboard_validator::prelude::*;
//!
//! let mobile = Mobile::india();
//! let report = mobile.check("+91 95529 31377");
//! assert!(report.is_valid());
//! assert_eq!(report.value().unwrap().as_str(), "9552931377");
//!
//! let report = mobile.check("12345");
//! assert!(!report.is_valid());
//! ```
//!
//! ## Built-in Validators
//!
//! - [`Mobile`](validators::Mobile) — 10-digit Indian mobile numbers, with
//!   country-code stripping and configurable leading-digit rules
//! - [`Email`](validators::Email) — syntactic email validation with
//!   normalization and domain extraction; [`CorporateEmail`](validators::CorporateEmail)
//!   for allow-listed domains
//! - [`Otp`](validators::Otp) — one-time passwords of configurable length;
//!   [`OtpExpiry`](validators::OtpExpiry) adds a wall-clock expiry check

pub mod foundation;
pub mod prelude;
pub mod validators;
