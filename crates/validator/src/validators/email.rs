//! Email validator with normalization and domain extraction.

use std::fmt;
use std::sync::LazyLock;

use crate::foundation::{Issue, Rule, Validate, ValidationReport, first_match};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// RFC 5321 overall limit.
const MAX_EMAIL_CHARS: usize = 254;
/// RFC 5321 local-part limit.
const MAX_LOCAL_CHARS: usize = 64;

// ============================================================================
// STRUCTURAL RULE CHAINS
// ============================================================================
//
// The local and domain parts each get a first-match chain: at most one
// structural issue per part is recorded, in priority order.

fn part_missing(s: &str) -> bool {
    s.is_empty()
}

fn local_too_long(s: &str) -> bool {
    s.chars().count() > MAX_LOCAL_CHARS
}

fn dot_at_edge(s: &str) -> bool {
    s.starts_with('.') || s.ends_with('.')
}

fn consecutive_dots(s: &str) -> bool {
    s.contains("..")
}

fn missing_tld(s: &str) -> bool {
    !s.contains('.')
}

const LOCAL_RULES: [Rule; 4] = [
    Rule::new(
        "email_local_empty",
        part_missing,
        "Invalid email format - missing local part (before @)",
    ),
    Rule::new(
        "email_local_length",
        local_too_long,
        "Local part is too long (max 64 characters)",
    ),
    Rule::new(
        "email_local_dot_edge",
        dot_at_edge,
        "Local part cannot start or end with a dot",
    ),
    Rule::new(
        "email_local_dot_run",
        consecutive_dots,
        "Local part cannot contain consecutive dots",
    ),
];

const DOMAIN_RULES: [Rule; 4] = [
    Rule::new(
        "email_domain_empty",
        part_missing,
        "Invalid email format - missing domain part (after @)",
    ),
    Rule::new(
        "email_domain_tld",
        missing_tld,
        "Invalid email format - missing TLD (e.g., .com, .in)",
    ),
    Rule::new(
        "email_domain_dot_edge",
        dot_at_edge,
        "Domain part cannot start or end with a dot",
    ),
    Rule::new(
        "email_domain_dot_run",
        consecutive_dots,
        "Domain part cannot contain consecutive dots",
    ),
];

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email syntax and extracts the normalized address + domain.
///
/// Inputs with no `@`, or with more than one, return early: there is no
/// well-defined local/domain split left to analyze. Everything else
/// accumulates — an overlong address with a bad domain reports both.
///
/// # Examples
///
/// ```
/// use onboard_validator::prelude::*;
///
/// let report = Email::new().check("Rahul.hajari@rksv.in");
/// let email = report.value().unwrap();
/// assert_eq!(email.normalized, "rahul.hajari@rksv.in");
/// assert_eq!(email.domain, "rksv.in");
///
/// assert!(!Email::new().check("test@").is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Email {
    /// Creates the email validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validate for Email {
    type Checked = CheckedEmail;

    fn check(&self, raw: &str) -> ValidationReport<CheckedEmail> {
        if raw.trim().is_empty() {
            return ValidationReport::invalid(Issue::empty_input("email_empty", "Email"));
        }

        let cleaned = raw.trim();
        let mut issues = Vec::new();

        if cleaned.chars().count() > MAX_EMAIL_CHARS {
            issues.push(Issue::new(
                "email_length",
                "Email is too long (max 254 characters)",
            ));
        }

        let at_count = cleaned.matches('@').count();
        if at_count == 0 {
            issues.push(Issue::new(
                "email_missing_at",
                "Invalid email format - missing @ symbol",
            ));
            return ValidationReport::rejected(issues);
        }
        if at_count > 1 {
            issues.push(Issue::new(
                "email_multiple_at",
                "Invalid email format - multiple @ symbols",
            ));
            return ValidationReport::rejected(issues);
        }

        let Some((local, domain)) = cleaned.split_once('@') else {
            // Unreachable: at_count == 1.
            return ValidationReport::rejected(issues);
        };

        if let Some(issue) = first_match(&LOCAL_RULES, local) {
            issues.push(issue);
        }
        if let Some(issue) = first_match(&DOMAIN_RULES, domain) {
            issues.push(issue);
        }

        // Generic fallback only when no specific issue explains the mismatch.
        if issues.is_empty() && !EMAIL_REGEX.is_match(cleaned) {
            issues.push(Issue::new("email_format", "Invalid email format"));
        }

        ValidationReport::resolve(issues, || CheckedEmail {
            normalized: cleaned.to_lowercase(),
            domain: domain.to_lowercase(),
        })
    }
}

// ============================================================================
// CHECKED EMAIL
// ============================================================================

/// A validated email address in canonical (lowercased) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedEmail {
    /// The full address, lowercased.
    pub normalized: String,
    /// The part after `@`, lowercased.
    pub domain: String,
}

impl fmt::Display for CheckedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

// ============================================================================
// CORPORATE EMAIL
// ============================================================================

/// Checks whether an address belongs to one of the allowed corporate
/// domains. The allow-list is supplied at construction; [`Default`] uses the
/// brokerage's own domains.
///
/// # Examples
///
/// ```
/// use onboard_validator::validators::CorporateEmail;
///
/// let corporate = CorporateEmail::default();
/// assert!(corporate.is_corporate("rahul.hajari@rksv.in"));
/// assert!(!corporate.is_corporate("someone@gmail.com"));
/// ```
#[derive(Debug, Clone)]
pub struct CorporateEmail {
    allowed: Vec<String>,
}

impl CorporateEmail {
    /// Creates a checker for the given domain suffixes.
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured domain suffixes.
    #[must_use]
    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed
    }

    /// True iff `raw` is a valid email whose domain ends with one of the
    /// allowed suffixes.
    #[must_use]
    pub fn is_corporate(&self, raw: &str) -> bool {
        Email::new()
            .check(raw)
            .into_value()
            .is_some_and(|email| {
                self.allowed
                    .iter()
                    .any(|suffix| email.domain.ends_with(suffix.as_str()))
            })
    }
}

impl Default for CorporateEmail {
    fn default() -> Self {
        Self::new(["rksv.in", "upstox.com"])
    }
}

// ============================================================================
// TESTS
// ============================================================================
