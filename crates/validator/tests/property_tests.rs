//! Property-based tests for onboard-validator.

use onboard_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// MOBILE: shape of accepted numbers
// ============================================================================

proptest! {
    #[test]
    fn well_formed_mobile_roundtrips(s in "[6-9][0-9]{9}") {
        let report = Mobile::india().check(&s);
        prop_assert!(report.is_valid());
        prop_assert_eq!(report.value().unwrap().as_str(), s.as_str());
    }

    #[test]
    fn country_code_prefix_is_transparent(s in "[6-9][0-9]{9}") {
        let report = Mobile::india().check(&format!("91{s}"));
        prop_assert!(report.is_valid());
        prop_assert_eq!(report.value().unwrap().as_str(), s.as_str());
    }

    #[test]
    fn accepted_mobile_is_always_ten_valid_digits(s in ".{0,24}") {
        let report = Mobile::india().check(&s);
        if let Some(mobile) = report.value() {
            let formatted = mobile.as_str();
            prop_assert_eq!(formatted.chars().count(), 10);
            prop_assert!(formatted.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(matches!(formatted.chars().next(), Some('6'..='9')));
        } else {
            prop_assert!(report.errors().count() > 0);
        }
    }

    #[test]
    fn mobile_is_deterministic(s in ".{0,24}") {
        let validator = Mobile::india();
        prop_assert_eq!(validator.check(&s), validator.check(&s));
    }
}

// ============================================================================
// EMAIL: normalization is stable under re-validation
// ============================================================================

proptest! {
    #[test]
    fn email_normalization_is_idempotent(s in ".{0,64}") {
        if let Some(email) = Email::new().check(&s).into_value() {
            let again = Email::new().check(&email.normalized);
            prop_assert!(again.is_valid());
            prop_assert_eq!(&again.value().unwrap().normalized, &email.normalized);
        }
    }

    #[test]
    fn simple_addresses_validate_and_extract_domain(
        local in "[a-z0-9]{1,12}",
        host in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let address = format!("{local}@{host}.{tld}");
        let report = Email::new().check(&address);
        prop_assert!(report.is_valid());
        prop_assert_eq!(&report.value().unwrap().domain, &format!("{host}.{tld}"));
    }
}

// ============================================================================
// OTP: validity and masking
// ============================================================================

proptest! {
    #[test]
    fn six_digit_codes_valid_unless_repeated(s in "[0-9]{6}") {
        let report = Otp::default().check(&s);
        let first = s.chars().next().unwrap();
        let all_same = s.chars().all(|c| c == first);
        prop_assert_eq!(report.is_valid(), !all_same);
    }

    #[test]
    fn non_six_digit_codes_never_validate(s in "[0-9]{0,12}") {
        prop_assume!(s.len() != 6);
        prop_assert!(!Otp::default().check(&s).is_valid());
    }

    #[test]
    fn mask_preserves_length_and_ends(s in "[0-9]{0,20}", visible in 0usize..5) {
        let masked = mask_otp(&s, visible);
        let len = s.len();
        prop_assert_eq!(masked.len(), len);

        if len > visible * 2 {
            prop_assert_eq!(&masked[..visible], &s[..visible]);
            prop_assert_eq!(&masked[len - visible..], &s[len - visible..]);
            prop_assert!(masked[visible..len - visible].chars().all(|c| c == '*'));
        } else {
            prop_assert!(masked.chars().all(|c| c == '*'));
        }
    }
}
