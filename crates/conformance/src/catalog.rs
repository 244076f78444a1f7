//! Fixed test-case tables for the onboarding inputs.
//!
//! The tables are plain data built at construction time; nothing here is a
//! process-wide singleton. Callers compose their own catalogs with
//! [`Catalog::new`] or start from the built-in ones.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// TEST CASE
// ============================================================================

/// Expected outcome for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The validator should accept the input.
    Pass,
    /// The validator should reject the input.
    Fail,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// One input with its expected classification.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The literal input handed to the validator.
    pub input: Cow<'static, str>,
    /// Whether the validator should accept it.
    pub expected: Expectation,
    /// Human label for reports.
    pub description: Cow<'static, str>,
    /// For rejected inputs: a substring the validator's error message must
    /// contain.
    pub expected_error: Option<Cow<'static, str>>,
}

impl TestCase {
    /// A case the validator should accept.
    pub fn passing(
        input: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            input: input.into(),
            expected: Expectation::Pass,
            description: description.into(),
            expected_error: None,
        }
    }

    /// A case the validator should reject with a message containing
    /// `expected_error`.
    pub fn failing(
        input: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        expected_error: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            input: input.into(),
            expected: Expectation::Fail,
            description: description.into(),
            expected_error: Some(expected_error.into()),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Which subset of a catalog to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Only cases expected to pass.
    Valid,
    /// Only cases expected to fail.
    Invalid,
    /// Every case.
    #[default]
    All,
}

/// An ordered collection of test cases for one validator.
#[derive(Debug, Clone)]
pub struct Catalog {
    cases: Vec<TestCase>,
}

impl Catalog {
    /// Builds a catalog from explicit cases.
    #[must_use]
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// All cases, in table order.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Cases matching the selection, in table order.
    pub fn select(&self, selection: Selection) -> impl Iterator<Item = &TestCase> {
        self.cases.iter().filter(move |case| match selection {
            Selection::Valid => case.expected == Expectation::Pass,
            Selection::Invalid => case.expected == Expectation::Fail,
            Selection::All => true,
        })
    }

    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when the catalog has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The mobile-number table: every accepted leading digit, every rejected
    /// series, and the malformed shapes the signup form guards against.
    #[must_use]
    pub fn mobile() -> Self {
        const SERIES: &str = "must start with 6, 7, 8, or 9";
        Self::new(vec![
            TestCase::passing("9552931377", "Valid 10-digit mobile number starting with 9"),
            TestCase::passing("8976258876", "Valid 10-digit mobile number starting with 8"),
            TestCase::passing("7552931377", "Valid 10-digit mobile number starting with 7"),
            TestCase::passing("6552931377", "Valid 10-digit mobile number starting with 6"),
            TestCase::failing("1111111111", "10 digits but starts with 1", SERIES),
            TestCase::failing("2345678888", "10 digits but starts with 2", SERIES),
            TestCase::failing("3456788888", "10 digits but starts with 3 (0-5 series invalid)", SERIES),
            TestCase::failing("4567899999", "10 digits but starts with 4 (0-5 series invalid)", SERIES),
            TestCase::failing("5567899999", "10 digits but starts with 5 (0-5 series invalid)", SERIES),
            TestCase::failing("0123456789", "10 digits but starts with 0 (0-5 series invalid)", SERIES),
            TestCase::failing("12345", "Less than 10 digits", "must be 10 digits"),
            TestCase::failing("12345678901", "More than 10 digits", "must be 10 digits"),
            TestCase::failing("abcdefghij", "Non-numeric characters only", "must contain only digits"),
            TestCase::failing("95529h31377", "Contains invalid character in middle", "must contain only digits"),
            TestCase::failing("", "Empty mobile number", "Mobile number is empty"),
            TestCase::failing("1234567890", "10 digits, starts with 1 (0-5 series)", SERIES),
        ])
    }

    /// The email table: corporate and public addresses plus the structural
    /// failures the form surfaces.
    #[must_use]
    pub fn email() -> Self {
        Self::new(vec![
            TestCase::passing("Rahul.hajari@rksv.in", "Corporate address with mixed case"),
            TestCase::passing("valid.user@example.com", "Public address with dotted local part"),
            TestCase::failing("test@", "Missing domain part", "missing domain part"),
            TestCase::failing("@rksv.in", "Missing local part", "missing local part"),
            TestCase::failing("test@domain", "Domain without TLD", "missing TLD"),
            TestCase::failing("", "Empty email", "Email is empty"),
            TestCase::failing("test..user@rksv.in", "Consecutive dots in local part", "consecutive dots"),
            TestCase::failing("a@b@c.com", "Multiple @ symbols", "multiple @ symbols"),
        ])
    }

    /// The OTP table for the default six-digit codes.
    #[must_use]
    pub fn otp() -> Self {
        Self::new(vec![
            TestCase::passing("123456", "Ordinary six-digit code"),
            TestCase::passing("654321", "Reverse-reading code"),
            TestCase::failing("12345", "Too short", "must be 6 digits"),
            TestCase::failing("1234567", "Too long", "must be 6 digits"),
            TestCase::failing("abcdef", "Letters instead of digits", "must contain only digits"),
            TestCase::failing("", "Empty OTP", "OTP is empty"),
            TestCase::failing("000000", "All zeros", "cannot be all zeros"),
            TestCase::failing("111111", "Repeated digit", "cannot be all same digits"),
        ])
    }
}

// ============================================================================
// TESTS
// ============================================================================
