//! Structured validation issues.
//!
//! An [`Issue`] is one reason a validator objected to its input: a stable
//! code for programmatic handling, a human-readable message, optional
//! key/value params, and a severity. Warnings are carried alongside errors
//! but never make a report invalid.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// ISSUE
// ============================================================================

/// A single validation finding.
///
/// # Examples
///
/// ```rust
/// use onboard_validator::foundation::Issue;
///
/// // Static strings — zero allocation:
/// let issue = Issue::new("mobile_empty", "Mobile number is empty");
///
/// // Dynamic strings — allocates only when needed:
/// let issue = Issue::new("otp_length", format!("OTP must be {} digits (found {})", 6, 4))
///     .with_param("expected", "6")
///     .with_param("found", "4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Stable code for programmatic handling.
    ///
    /// Examples: "mobile_length", "email_missing_at", "otp_all_zeros"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Parameters for the message template, as ordered key-value pairs
    /// (typically 0-2 params).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Severity of the finding.
    pub severity: Severity,
}

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// The input is unacceptable (default).
    #[default]
    Error,
    /// Suspicious but acceptable; does not affect validity.
    Warning,
}

impl Issue {
    /// Creates a new error-severity issue with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity issue with a code and message.
    pub fn warning(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::new(code, message)
        }
    }

    /// Adds a parameter to the issue.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true for error-severity issues.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Issue {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl Issue {
    /// Creates an empty-input issue ("`<what>` is empty").
    pub fn empty_input(code: impl Into<Cow<'static, str>>, what: &'static str) -> Self {
        Self::new(code, format!("{what} is empty"))
    }

    /// Creates a wrong-length issue reporting expected vs. found digit counts.
    pub fn digit_length(
        code: impl Into<Cow<'static, str>>,
        what: &'static str,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::new(
            code,
            format!("{what} must be {expected} digits (found {found})"),
        )
        .with_param("expected", expected.to_string())
        .with_param("found", found.to_string())
    }

    /// Creates a non-digit-content issue ("`<what>` must contain only digits").
    pub fn digits_only(code: impl Into<Cow<'static, str>>, what: &'static str) -> Self {
        Self::new(code, format!("{what} must contain only digits"))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_issue() {
        let issue = Issue::new("test", "Test issue");
        assert_eq!(issue.code, "test");
        assert_eq!(issue.message, "Test issue");
        assert!(issue.is_error());
    }

    #[test]
    fn warning_severity() {
        let issue = Issue::warning("otp_sequential", "OTP appears to be sequential numbers");
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.is_error());
    }

    #[test]
    fn params_lookup() {
        let issue = Issue::new("otp_length", "OTP must be 6 digits (found 4)")
            .with_param("expected", "6")
            .with_param("found", "4");

        assert_eq!(issue.param("expected"), Some("6"));
        assert_eq!(issue.param("found"), Some("4"));
        assert_eq!(issue.param("missing"), None);
    }

    #[test]
    fn display_is_the_message() {
        let issue = Issue::new("mobile_charset", "Mobile number must contain only digits");
        assert_eq!(
            issue.to_string(),
            "Mobile number must contain only digits"
        );
    }

    #[test]
    fn digit_length_constructor() {
        let issue = Issue::digit_length("mobile_length", "Mobile number", 10, 5);
        assert_eq!(issue.message, "Mobile number must be 10 digits (found 5)");
        assert_eq!(issue.param("found"), Some("5"));
    }

    #[test]
    fn zero_alloc_static_strings() {
        let issue = Issue::new("mobile_empty", "Mobile number is empty");
        assert!(matches!(issue.code, Cow::Borrowed(_)));
        assert!(matches!(issue.message, Cow::Borrowed(_)));
    }
}
