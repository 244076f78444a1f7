//! Ordered first-match rule tables.
//!
//! Some structural checks are a priority chain: evaluate predicates in order
//! and record only the first one that matches. Expressing the chain as a
//! table keeps the first-match-wins contract explicit and testable instead of
//! burying it in nested conditionals.

use crate::foundation::issue::Issue;

// ============================================================================
// RULE
// ============================================================================

/// One predicate → issue pair in a first-match chain.
///
/// Messages in a chain are static by construction; rules that need to report
/// measured values belong in accumulating check code, not in a chain.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable issue code recorded when the rule matches.
    pub code: &'static str,
    /// Returns true when the input violates this rule.
    pub matches: fn(&str) -> bool,
    /// Message recorded when the rule matches.
    pub message: &'static str,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub const fn new(code: &'static str, matches: fn(&str) -> bool, message: &'static str) -> Self {
        Self {
            code,
            matches,
            message,
        }
    }
}

/// Evaluates a chain in order, returning the issue for the first matching
/// rule, or `None` when every rule passes.
#[must_use]
pub fn first_match(rules: &[Rule], input: &str) -> Option<Issue> {
    rules
        .iter()
        .find(|rule| (rule.matches)(input))
        .map(|rule| Issue::new(rule.code, rule.message))
}

// ============================================================================
// TESTS
// ============================================================================
