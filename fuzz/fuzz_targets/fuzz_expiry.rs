//! Fuzz target for the expiry date model.
//!
//! Tests that expiry arithmetic never panics on arbitrary month/year pairs.

#![no_main]

use card_validator::ExpiryDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i32, i32, i32, i32)| {
    let (month, year, ref_year, ref_month) = data;
    let expiry = ExpiryDate::new(month, year);

    let _ = expiry.expired();
    let _ = expiry.to_string();
    let _ = expiry.format_long();

    // A real calendar date implies a plausible month
    if let Some(last_day) = expiry.expiration() {
        assert!((1..=12).contains(&month));
        assert!(!expiry.expired_at(year, month));
        let _ = last_day;
    }

    // Expiry is a strict ordering on (year, month)
    let later = expiry.expired_at(ref_year, ref_month);
    assert_eq!(later, (year, month) < (ref_year, ref_month));
});
