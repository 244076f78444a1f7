//! Mobile number validator for the onboarding signup screen.
//!
//! Validates 10-digit Indian mobile numbers with tolerant input cleanup.

use std::fmt;

use crate::foundation::{Issue, Validate, ValidationReport};

// ============================================================================
// MOBILE VALIDATOR
// ============================================================================

/// Validates mobile numbers the way the signup form accepts them.
///
/// Cleanup before any check: surrounding whitespace is trimmed and internal
/// spaces, hyphens, and plus signs are removed. A country-code prefix is then
/// stripped, but only when the cleaned string is exactly prefix + required
/// digits long — a 12-character string that does not start with the prefix
/// still fails the length check.
///
/// Checks accumulate: a bad input reports every applicable objection, not
/// just the first one. Only an empty input returns early.
///
/// # Examples
///
/// ```
/// use onboard_validator::prelude::*;
///
/// let mobile = Mobile::india();
/// assert!(mobile.check("9552931377").is_valid());
/// assert!(mobile.check("+91 95529-31377").is_valid());
/// assert!(!mobile.check("1234567890").is_valid()); // bad leading digit
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mobile {
    length: usize,
    country_code: &'static str,
    leading: &'static [char],
}

impl Mobile {
    /// Creates a validator for Indian mobile numbers: 10 digits, optional
    /// "91" country code, first digit 6-9.
    #[must_use]
    pub fn india() -> Self {
        Self {
            length: 10,
            country_code: "91",
            leading: &['6', '7', '8', '9'],
        }
    }

    /// Sets the required digit count.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the country-code prefix stripped during cleanup.
    #[must_use = "builder methods must be chained or built"]
    pub fn country_code(mut self, code: &'static str) -> Self {
        self.country_code = code;
        self
    }

    /// Sets the digits a number may start with.
    #[must_use = "builder methods must be chained or built"]
    pub fn leading_digits(mut self, digits: &'static [char]) -> Self {
        self.leading = digits;
        self
    }

    fn normalize(&self, raw: &str) -> String {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '+'))
            .collect();

        // Strip the country code only at exactly prefix + required length;
        // anything else falls through to the length check unchanged.
        let prefixed_len = self.country_code.chars().count() + self.length;
        if cleaned.chars().count() == prefixed_len && cleaned.starts_with(self.country_code) {
            cleaned[self.country_code.len()..].to_string()
        } else {
            cleaned
        }
    }

    fn leading_digit_list(&self) -> String {
        match self.leading {
            [] => String::new(),
            [only] => only.to_string(),
            [init @ .., last] => {
                let mut list = String::new();
                for digit in init {
                    list.push(*digit);
                    list.push_str(", ");
                }
                list.push_str("or ");
                list.push(*last);
                list
            }
        }
    }
}

impl Default for Mobile {
    fn default() -> Self {
        Self::india()
    }
}

impl Validate for Mobile {
    type Checked = CheckedMobile;

    fn check(&self, raw: &str) -> ValidationReport<CheckedMobile> {
        if raw.trim().is_empty() {
            return ValidationReport::invalid(Issue::empty_input("mobile_empty", "Mobile number"));
        }

        let cleaned = self.normalize(raw);
        let mut issues = Vec::new();

        let digit_count = cleaned.chars().count();
        if digit_count != self.length {
            issues.push(Issue::digit_length(
                "mobile_length",
                "Mobile number",
                self.length,
                digit_count,
            ));
        }

        // An input reduced to nothing by cleanup has no digits either.
        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            issues.push(Issue::digits_only("mobile_charset", "Mobile number"));
        }

        // Runs even when the length check already failed.
        if let Some(first) = cleaned.chars().next() {
            if !self.leading.contains(&first) {
                issues.push(Issue::new(
                    "mobile_prefix",
                    format!(
                        "Invalid mobile number - must start with {}",
                        self.leading_digit_list()
                    ),
                ));
            }
        }

        ValidationReport::resolve(issues, || CheckedMobile(cleaned))
    }
}

// ============================================================================
// CHECKED MOBILE
// ============================================================================

/// A cleaned, validated mobile number (exactly the required digits, country
/// code stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedMobile(String);

impl CheckedMobile {
    /// The cleaned digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the digit string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CheckedMobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CheckedMobile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
