//! Core trait for the validation system.

use crate::foundation::report::ValidationReport;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The trait every onboarding validator implements.
///
/// Validators take the raw string exactly as a user (or a browser driver)
/// produced it and return a full [`ValidationReport`]: canonicalized value on
/// success, every applicable issue on failure. They are pure value types —
/// no I/O, no shared state — and may be called concurrently.
///
/// # Examples
///
/// ```rust
/// use onboard_validator::foundation::{Issue, Validate, ValidationReport};
///
/// struct DigitsOnly;
///
/// impl Validate for DigitsOnly {
///     type Checked = String;
///
///     fn check(&self, raw: &str) -> ValidationReport<String> {
///         let mut issues = Vec::new();
///         if !raw.chars().all(|c| c.is_ascii_digit()) {
///             issues.push(Issue::digits_only("charset", "Input"));
///         }
///         ValidationReport::resolve(issues, || raw.to_string())
///     }
/// }
///
/// assert!(DigitsOnly.check("123").is_valid());
/// assert!(!DigitsOnly.check("12a").is_valid());
/// ```
pub trait Validate {
    /// The canonicalized value carried by a valid report.
    type Checked;

    /// Validates the raw input.
    fn check(&self, raw: &str) -> ValidationReport<Self::Checked>;
}

// ============================================================================
// TESTS
// ============================================================================
