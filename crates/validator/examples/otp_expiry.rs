//! OTP expiry example for onboard-validator

use std::time::{Duration, SystemTime};

use onboard_validator::prelude::*;

fn main() {
    let validator = OtpExpiry::new(Otp::default()).expiry(Duration::from_secs(300));

    let received_at = SystemTime::now() - Duration::from_secs(120);
    let outcome = validator.check("482913", received_at);

    let code = "482913";
    println!("checking {} received 120s ago", mask_otp(code, 2));
    match outcome.remaining {
        Some(remaining) => println!("✓ still live, {}s remaining", remaining.as_secs()),
        None => println!("✗ rejected: {}", outcome.report),
    }

    // A code received too long ago flips invalid
    let stale = SystemTime::now() - Duration::from_secs(400);
    let outcome = validator.check(code, stale);
    match outcome.expired {
        Some(true) => println!("✗ code received 400s ago: {}", outcome.report),
        Some(false) => println!("✓ still live"),
        None => println!("✗ malformed code, expiry never checked"),
    }
}
