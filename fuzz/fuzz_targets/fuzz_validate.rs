//! Fuzz target for the full validator.
//!
//! Tests that construction, normalization and validation never panic and
//! that validating twice gives the same errors.

#![no_main]

use arbitrary::Arbitrary;
use card_validator::{CardAttributes, CardValidator, RawValue, Validatable, ValidatorConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Nil,
    Int(i64),
    Str(String),
}

impl From<FuzzValue> for RawValue {
    fn from(value: FuzzValue) -> Self {
        match value {
            FuzzValue::Nil => RawValue::Nil,
            FuzzValue::Int(i) => RawValue::Int(i),
            FuzzValue::Str(s) => RawValue::Str(s),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzCard {
    number: FuzzValue,
    month: FuzzValue,
    year: FuzzValue,
    card_type: FuzzValue,
    first_name: FuzzValue,
    last_name: FuzzValue,
    start_month: FuzzValue,
    start_year: FuzzValue,
    issue_number: FuzzValue,
    verification_value: FuzzValue,
    require_verification_value: bool,
    expiry_year_window: i32,
}

fuzz_target!(|input: FuzzCard| {
    let config = ValidatorConfig::default()
        .with_require_verification_value(input.require_verification_value)
        .with_expiry_year_window(input.expiry_year_window);

    let attributes = CardAttributes::new()
        .number(input.number)
        .month(input.month)
        .year(input.year)
        .card_type(input.card_type)
        .first_name(input.first_name)
        .last_name(input.last_name)
        .start_month(input.start_month)
        .start_year(input.start_year)
        .issue_number(input.issue_number)
        .verification_value(input.verification_value);

    let mut card = CardValidator::with_config(attributes, config);
    assert!(card.number().bytes().all(|b| b.is_ascii_digit()));

    card.is_valid();
    let first = card.errors().clone();
    card.is_valid();
    assert_eq!(card.errors(), &first);

    let _ = card.display_number();
    let _ = card.full_name();
    let _ = card.expiry_date().expiration();
    let _ = format!("{:?}", card);
});
