//! Built-in validators for the onboarding flow.
//!
//! # Categories
//!
//! - **Mobile**: 10-digit Indian numbers with country-code stripping
//! - **Email**: syntax, normalization, domain extraction, corporate allow-list
//! - **OTP**: fixed-length codes, weak-pattern rejection, expiry, masking
//!
//! # Examples
//!
//! ```rust
//! use onboard_validator::prelude::*;
//!
//! let mobile = Mobile::india();
//! let email = Email::new();
//! let otp = Otp::default();
//!
//! assert!(mobile.check("9552931377").is_valid());
//! assert!(email.check("user@example.com").is_valid());
//! assert!(otp.check("482913").is_valid());
//! ```

pub mod email;
pub mod mobile;
pub mod otp;

pub use email::{CheckedEmail, CorporateEmail, Email};
pub use mobile::{CheckedMobile, Mobile};
pub use otp::{
    CheckedOtp, DEFAULT_OTP_EXPIRY, DEFAULT_OTP_LENGTH, ExpiryReport, Otp, OtpExpiry, mask_otp,
};
