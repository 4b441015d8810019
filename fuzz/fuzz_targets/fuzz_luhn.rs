//! Fuzz target for the Luhn algorithm and brand detection.
//!
//! Tests that neither panics and that check digit generation agrees with
//! validation.

#![no_main]

use card_validator::{luhn, mask, type_for, valid_number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary strings: never panic
    let _ = valid_number(data);
    let _ = type_for(data);
    let _ = mask::mask(data);
    let _ = mask::first_digits(data);
    let _ = mask::last_digits(data);

    // Clamp bytes to valid digit range
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    if digits.is_empty() {
        return;
    }

    let as_string: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(luhn::validate(&digits), valid_number(&as_string));

    if let Some(brand) = type_for(&as_string) {
        assert!(brand.valid_lengths().contains(&(digits.len() as u8)));
    }

    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
