//! Prelude module for convenient imports.
//!
//! A single `use onboard_validator::prelude::*;` brings in the [`Validate`]
//! trait, the report types, and every built-in validator.
//!
//! # Examples
//!
//! ```rust
//! use onboard_validator::prelude::*;
//!
//! let report = Mobile::india().check("9552931377");
//! assert!(report.is_valid());
//! ```

pub use crate::foundation::{
    Issue, Rule, Severity, Validate, ValidationReport, check_all, first_match,
};

pub use crate::validators::{
    CheckedEmail, CheckedMobile, CheckedOtp, CorporateEmail, Email, ExpiryReport, Mobile, Otp,
    OtpExpiry, mask_otp,
};
