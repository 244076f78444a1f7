//! End-to-end acceptance checks mirroring the onboarding form's behavior.

use onboard_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn known_good_mobile_number() {
    let report = Mobile::india().check("9552931377");
    assert!(report.is_valid());
    assert_eq!(report.value().unwrap().as_str(), "9552931377");
}

#[test]
fn short_mobile_number_reports_found_length() {
    let report = Mobile::india().check("12345");
    assert!(!report.is_valid());
    assert!(
        report.error_messages().iter().any(|m| m.contains("found 5")),
        "{:?}",
        report.error_messages()
    );
}

#[test]
fn mobile_number_with_bad_series_reports_leading_digit() {
    let report = Mobile::india().check("1111111111");
    assert!(!report.is_valid());
    assert!(
        report
            .error_messages()
            .iter()
            .any(|m| m.contains("must start with 6, 7, 8, or 9")),
        "{:?}",
        report.error_messages()
    );
}

#[test]
fn corporate_address_normalizes() {
    let report = Email::new().check("Rahul.hajari@rksv.in");
    let email = report.value().expect("address should validate");
    assert_eq!(email.normalized, "rahul.hajari@rksv.in");
    assert_eq!(email.domain, "rksv.in");
}

#[test]
fn address_with_empty_domain_is_rejected() {
    let report = Email::new().check("test@");
    assert!(!report.is_valid());
    assert!(
        report
            .error_messages()
            .iter()
            .any(|m| m.contains("missing domain part")),
        "{:?}",
        report.error_messages()
    );
}

#[test]
fn all_zero_otp_is_rejected() {
    let report = Otp::default().check("000000");
    assert!(!report.is_valid());
    assert!(
        report
            .error_messages()
            .iter()
            .any(|m| m.contains("cannot be all zeros")),
        "{:?}",
        report.error_messages()
    );
}

#[test]
fn ordinary_otp_passes_without_issues() {
    let report = Otp::default().check("123456");
    assert!(report.is_valid());
    assert_eq!(report.value().unwrap().as_str(), "123456");
    assert_eq!(report.errors().count(), 0);
}

#[test]
fn batch_helper_matches_individual_calls() {
    let mobile = Mobile::india();
    let inputs = ["9552931377", "12345", "abcdefghij"];
    let batch = check_all(&mobile, &inputs);
    for (raw, report) in inputs.iter().zip(&batch) {
        assert_eq!(report.is_valid(), mobile.check(raw).is_valid());
    }
}
