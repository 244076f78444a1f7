//! Basic usage example for onboard-validator

use onboard_validator::prelude::*;

fn main() {
    let mobile = Mobile::india();

    // Valid input, with formatting characters the signup form tolerates
    let report = mobile.check("+91 95529-31377");
    match report.value() {
        Some(number) => println!("✓ '+91 95529-31377' is valid -> {number}"),
        None => println!("✗ rejected: {report}"),
    }

    // Invalid input: every applicable reason is reported at once
    let report = mobile.check("12345");
    println!("✗ '12345' is invalid:");
    for issue in report.errors() {
        println!("  - {issue}");
    }

    let email = Email::new();
    let report = email.check("Rahul.hajari@rksv.in");
    if let Some(address) = report.value() {
        println!("✓ normalized: {} (domain: {})", address.normalized, address.domain);
    }

    println!("\nonboard-validator is working correctly!");
}
