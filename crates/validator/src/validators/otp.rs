//! One-time-password validation: format checks, expiry, display masking.

use std::fmt;
use std::time::{Duration, SystemTime};

use crate::foundation::{Issue, Validate, ValidationReport};

/// Default OTP length for the onboarding flow.
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// Default OTP lifetime.
pub const DEFAULT_OTP_EXPIRY: Duration = Duration::from_secs(300);

// ============================================================================
// OTP VALIDATOR
// ============================================================================

/// Validates a one-time password of a fixed length.
///
/// Weak-pattern handling: an all-zero or all-same-digit code is rejected; a
/// sequential code (ascending or descending) is allowed but flagged with a
/// warning so callers can surface it without blocking the flow.
///
/// # Examples
///
/// ```
/// use onboard_validator::prelude::*;
///
/// let otp = Otp::default(); // 6 digits
/// assert!(otp.check("123456").is_valid());
/// assert!(!otp.check("000000").is_valid());
/// assert!(!otp.check("12345").is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Otp {
    length: usize,
}

impl Otp {
    /// Creates a validator for codes of the given length.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// The required code length.
    #[must_use]
    pub fn expected_length(&self) -> usize {
        self.length
    }

    fn ascending_pattern(&self) -> String {
        (0..self.length)
            .map(|i| char::from(b'0' + (i % 10) as u8))
            .collect()
    }

    fn descending_pattern(&self) -> String {
        (0..self.length)
            .rev()
            .map(|i| char::from(b'0' + (i % 10) as u8))
            .collect()
    }

    fn is_repeated_digit(&self, cleaned: &str) -> bool {
        let mut chars = cleaned.chars();
        match chars.next() {
            Some(first) => {
                first.is_ascii_digit()
                    && cleaned.chars().count() == self.length
                    && chars.all(|c| c == first)
            }
            None => false,
        }
    }
}

impl Default for Otp {
    fn default() -> Self {
        Self::new(DEFAULT_OTP_LENGTH)
    }
}

impl Validate for Otp {
    type Checked = CheckedOtp;

    fn check(&self, raw: &str) -> ValidationReport<CheckedOtp> {
        if raw.trim().is_empty() {
            return ValidationReport::invalid(Issue::empty_input("otp_empty", "OTP"));
        }

        let cleaned: String = raw.trim().chars().filter(|c| *c != ' ').collect();
        let mut issues = Vec::new();

        if !cleaned.chars().all(|c| c.is_ascii_digit()) {
            issues.push(Issue::digits_only("otp_charset", "OTP"));
        }

        let digit_count = cleaned.chars().count();
        if digit_count != self.length {
            issues.push(Issue::digit_length(
                "otp_length",
                "OTP",
                self.length,
                digit_count,
            ));
        }

        // All-zeros keeps its specific message; other repeated digits get
        // the generic one.
        if cleaned == "0".repeat(self.length) {
            issues.push(Issue::new("otp_all_zeros", "OTP cannot be all zeros"));
        } else if self.is_repeated_digit(&cleaned) {
            issues.push(Issue::new(
                "otp_repeated_digit",
                "OTP cannot be all same digits",
            ));
        }

        if cleaned == self.ascending_pattern() || cleaned == self.descending_pattern() {
            issues.push(Issue::warning(
                "otp_sequential",
                "OTP appears to be sequential numbers",
            ));
        }

        ValidationReport::resolve(issues, || CheckedOtp(cleaned))
    }
}

// ============================================================================
// CHECKED OTP
// ============================================================================

/// A validated one-time password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedOtp(String);

impl CheckedOtp {
    /// The cleaned code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code masked for logging, two digits visible at each end.
    #[must_use]
    pub fn masked(&self) -> String {
        mask_otp(&self.0, 2)
    }
}

impl fmt::Display for CheckedOtp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// MASKING
// ============================================================================

/// Masks the interior of an OTP for logs and display, keeping `visible`
/// characters at each end. A code too short to keep both ends distinct is
/// masked entirely.
///
/// # Examples
///
/// ```
/// use onboard_validator::validators::mask_otp;
///
/// assert_eq!(mask_otp("123456", 2), "12**56");
/// assert_eq!(mask_otp("1234", 2), "****");
/// ```
#[must_use]
pub fn mask_otp(otp: &str, visible: usize) -> String {
    let len = otp.chars().count();
    if len <= visible * 2 {
        return "*".repeat(len);
    }

    let mut masked: String = otp.chars().take(visible).collect();
    masked.push_str(&"*".repeat(len - visible * 2));
    masked.extend(otp.chars().skip(len - visible));
    masked
}

// ============================================================================
// EXPIRY
// ============================================================================

/// OTP validation with a wall-clock expiry check.
///
/// The base format checks run first; the expiry comparison happens only for
/// codes that pass them. [`OtpExpiry::check_at`] is pure (the caller supplies
/// "now"); [`OtpExpiry::check`] reads the system clock.
#[derive(Debug, Clone, Copy)]
pub struct OtpExpiry {
    otp: Otp,
    expiry: Duration,
}

impl OtpExpiry {
    /// Wraps an OTP validator with the default 300-second lifetime.
    #[must_use]
    pub fn new(otp: Otp) -> Self {
        Self {
            otp,
            expiry: DEFAULT_OTP_EXPIRY,
        }
    }

    /// Sets the lifetime.
    #[must_use = "builder methods must be chained or built"]
    pub fn expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Validates `raw` as of `now`, for a code received at `received_at`.
    #[must_use]
    pub fn check_at(&self, raw: &str, received_at: SystemTime, now: SystemTime) -> ExpiryReport {
        let mut report = self.otp.check(raw);
        if !report.is_valid() {
            return ExpiryReport {
                report,
                expired: None,
                remaining: None,
            };
        }

        // A received_at in the future (clock skew) counts as just received.
        let elapsed = now.duration_since(received_at).unwrap_or(Duration::ZERO);
        if elapsed > self.expiry {
            report.reject(Issue::new(
                "otp_expired",
                format!("OTP has expired (valid for {} seconds)", self.expiry.as_secs()),
            ));
            ExpiryReport {
                report,
                expired: Some(true),
                remaining: None,
            }
        } else {
            ExpiryReport {
                report,
                expired: Some(false),
                remaining: Some(self.expiry - elapsed),
            }
        }
    }

    /// Validates `raw` against the system clock.
    #[must_use]
    pub fn check(&self, raw: &str, received_at: SystemTime) -> ExpiryReport {
        self.check_at(raw, received_at, SystemTime::now())
    }
}

/// Outcome of an expiry-aware OTP validation.
///
/// `expired` is `None` when the base format checks already failed; the
/// expiry comparison never ran.
#[derive(Debug, Clone)]
pub struct ExpiryReport {
    /// The underlying validation report (flipped invalid on expiry).
    pub report: ValidationReport<CheckedOtp>,
    /// Whether the code had expired, when the base checks passed.
    pub expired: Option<bool>,
    /// Time left before expiry, for live codes.
    pub remaining: Option<Duration>,
}

impl ExpiryReport {
    /// True iff the code is well-formed and not expired.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

// ============================================================================
// TESTS
// ============================================================================
