//! Validation orchestration for card attributes.
//!
//! Rules run in a fixed order and every group runs, except that a card typed
//! as the [`BOGUS_TYPE`] sentinel stops after the essential attributes:
//!
//! 1. Essential attributes: names and expiry
//! 2. Card type: present and known
//! 3. Card number: present, passes Luhn, agrees with the type
//! 4. Switch/Solo: start date or issue number
//! 5. Verification value, when the config requires one
//!
//! Failures are reported into an [`ErrorSink`], never returned as `Err`.

use crate::brand::{is_known_type, matching_type, type_for, BOGUS_TYPE};
use crate::card::CardValidator;
use crate::error::{ErrorSink, Errors, Field};
use crate::expiry::current_year_month;
use crate::luhn::valid_number;
use crate::mask::mask;
use crate::normalize::{digits_only, is_blank, is_present};
use tracing::{debug, trace};
use zeroize::Zeroize;

/// Oldest start year accepted on a Switch/Solo card.
pub const MIN_START_YEAR: i32 = 1988;

/// Something that can normalize itself and report field errors.
pub trait Validatable {
    /// Normalizes attributes in place. Must be idempotent.
    fn normalize(&mut self);

    /// Runs every rule, appending failures to `errors`.
    fn validate(&self, errors: &mut dyn ErrorSink);

    /// Returns the errors from the last [`is_valid`](Self::is_valid) call.
    fn errors(&self) -> &Errors;

    /// Mutable access to the stored errors.
    fn errors_mut(&mut self) -> &mut Errors;

    /// Normalizes, replaces the stored errors with a fresh validation pass,
    /// and returns true if that pass reported nothing.
    fn is_valid(&mut self) -> bool {
        self.normalize();

        let mut errors = Errors::new();
        self.validate(&mut errors);

        *self.errors_mut() = errors;
        self.errors().is_empty()
    }
}

impl Validatable for CardValidator {
    fn normalize(&mut self) {
        if !self.number.bytes().all(|b| b.is_ascii_digit()) {
            let digits = digits_only(&self.number);
            self.number.zeroize();
            self.number = digits;
        }

        self.card_type = self.card_type.to_lowercase();
        if is_blank(&self.card_type) {
            self.card_type = match type_for(&self.number) {
                Some(brand) => {
                    trace!(card_type = brand.tag(), "inferred card type from number");
                    brand.tag().to_owned()
                }
                None => String::new(),
            };
        }
    }

    fn validate(&self, errors: &mut dyn ErrorSink) {
        let (year, month) = current_year_month();
        self.validate_as_of(errors, year, month);
    }

    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }
}

impl CardValidator {
    /// Runs every rule as if today fell in `year`/`month`.
    ///
    /// [`Validatable::validate`] calls this with the current UTC month.
    pub fn validate_as_of(&self, errors: &mut dyn ErrorSink, year: i32, month: i32) {
        let mut sink = CountingSink::new(errors);
        self.run_rules(&mut sink, year, month);

        debug!(
            card_type = %self.card_type,
            number = %mask(&self.number),
            errors = sink.added,
            "validation finished"
        );
    }

    fn run_rules(&self, errors: &mut dyn ErrorSink, year: i32, month: i32) {
        validate_essential_attributes(self, errors, year, month);

        if self.card_type == BOGUS_TYPE {
            debug!("bogus card type, skipping number and type checks");
            return;
        }

        validate_card_type(self, errors);
        validate_card_number(self, errors);
        validate_switch_or_solo_attributes(self, errors);
        validate_verification_value(self, errors);
    }
}

/// Forwards to another sink, counting what this pass reported.
struct CountingSink<'a> {
    inner: &'a mut dyn ErrorSink,
    added: usize,
}

impl<'a> CountingSink<'a> {
    fn new(inner: &'a mut dyn ErrorSink) -> Self {
        Self { inner, added: 0 }
    }
}

impl ErrorSink for CountingSink<'_> {
    fn add(&mut self, field: Field, message: &str) {
        self.added += 1;
        self.inner.add(field, message);
    }

    fn has_errors(&self, field: Field) -> bool {
        self.inner.has_errors(field)
    }
}

/// Returns true for a calendar month, 1 through 12.
#[inline]
pub fn valid_month(month: i32) -> bool {
    (1..=12).contains(&month)
}

/// Returns true if `year` lies between `current_year` and `window` years
/// after it, inclusive.
#[inline]
pub fn valid_expiry_year(year: i32, current_year: i32, window: i32) -> bool {
    (current_year..=current_year.saturating_add(window)).contains(&year)
}

/// Returns true for a four-digit year no earlier than [`MIN_START_YEAR`].
#[inline]
pub fn valid_start_year(year: i32) -> bool {
    (MIN_START_YEAR..=9999).contains(&year)
}

/// Returns true for a one or two digit issue number, surrounding whitespace
/// ignored.
#[inline]
pub fn valid_issue_number(issue_number: &str) -> bool {
    let issue_number = issue_number.trim();
    (1..=2).contains(&issue_number.len()) && issue_number.bytes().all(|b| b.is_ascii_digit())
}

fn validate_essential_attributes(
    card: &CardValidator,
    errors: &mut dyn ErrorSink,
    year: i32,
    month: i32,
) {
    if is_blank(&card.first_name) {
        errors.add(Field::FirstName, "cannot be empty");
    }
    if is_blank(&card.last_name) {
        errors.add(Field::LastName, "cannot be empty");
    }

    if card.month == 0 || card.year == 0 {
        if card.month == 0 {
            errors.add(Field::Month, "is required");
        }
        if card.year == 0 {
            errors.add(Field::Year, "is required");
        }
        return;
    }

    if !valid_month(card.month) {
        errors.add(Field::Month, "is not a valid month");
    }

    if card.expiry_date().expired_at(year, month) {
        errors.add(Field::Year, "expired");
    } else if !valid_expiry_year(card.year, year, card.config.expiry_year_window) {
        errors.add(Field::Year, "is not a valid year");
    }
}

fn validate_card_type(card: &CardValidator, errors: &mut dyn ErrorSink) {
    if is_blank(&card.card_type) {
        // Normalization infers the type from the number, so this only fires
        // when no brand rule accepts the number.
        if !card.number.is_empty() {
            errors.add(Field::Type, "is required");
        }
    } else if !is_known_type(&card.card_type) {
        errors.add(Field::Type, "is invalid");
    }
}

fn validate_card_number(card: &CardValidator, errors: &mut dyn ErrorSink) {
    if card.number.is_empty() {
        errors.add(Field::Number, "is required");
    } else if !valid_number(&card.number) {
        errors.add(Field::Number, "is not a valid credit card number");
    }

    if !errors.has_errors(Field::Number)
        && !errors.has_errors(Field::Type)
        && !matching_type(&card.number, &card.card_type)
    {
        errors.add(Field::Type, "is not the correct card type");
    }
}

fn validate_switch_or_solo_attributes(card: &CardValidator, errors: &mut dyn ErrorSink) {
    if !card.brand().is_some_and(|brand| brand.is_legacy()) {
        return;
    }

    let start_month_ok = card.start_month.is_some_and(valid_month);
    let start_year_ok = card.start_year.is_some_and(valid_start_year);
    let issue_number = card.issue_number.as_deref();
    let issue_number_ok = issue_number.is_some_and(valid_issue_number);

    if (start_month_ok && start_year_ok) || issue_number_ok {
        return;
    }

    if !start_month_ok {
        errors.add(Field::StartMonth, "is invalid");
    }
    if !start_year_ok {
        errors.add(Field::StartYear, "is invalid");
    }
    if !is_present(issue_number) {
        errors.add(Field::IssueNumber, "cannot be empty");
    } else if !issue_number_ok {
        errors.add(Field::IssueNumber, "is invalid");
    }
}

fn validate_verification_value(card: &CardValidator, errors: &mut dyn ErrorSink) {
    if card.config.require_verification_value && !card.has_verification_value() {
        errors.add(Field::VerificationValue, "is required");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardAttributes;
    use crate::config::ValidatorConfig;

    const YEAR: i32 = 2026;
    const MONTH: i32 = 10;

    fn valid_attributes() -> CardAttributes {
        CardAttributes::new()
            .number("4242424242424242")
            .month(MONTH)
            .year(YEAR + 1)
            .first_name("Longbob")
            .last_name("Longsen")
            .verification_value("123")
    }

    fn errors_for(attributes: CardAttributes) -> Errors {
        errors_with(attributes, ValidatorConfig::default())
    }

    fn errors_with(attributes: CardAttributes, config: ValidatorConfig) -> Errors {
        let card = CardValidator::with_config(attributes, config);
        let mut errors = Errors::new();
        card.validate_as_of(&mut errors, YEAR, MONTH);
        errors
    }

    #[test]
    fn test_valid_card() {
        let errors = errors_for(valid_attributes());
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn test_expired_once_the_year_rolls_over() {
        let card = CardValidator::new(valid_attributes().month(12).year(2030));

        let mut errors = Errors::new();
        card.validate_as_of(&mut errors, 2030, 12);
        assert!(errors.is_empty(), "unexpected errors: {}", errors);

        let mut errors = Errors::new();
        card.validate_as_of(&mut errors, 2031, 1);
        assert_eq!(errors.on(Field::Year), vec!["expired"]);
    }

    #[test]
    fn test_counting_sink_counts_only_this_pass() {
        let mut errors = Errors::new();
        errors.add(Field::Number, "was already reported");

        let mut sink = CountingSink::new(&mut errors);
        assert!(sink.has_errors(Field::Number));
        sink.add(Field::FirstName, "cannot be empty");
        sink.add(Field::LastName, "cannot be empty");
        assert_eq!(sink.added, 2);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_blank_names() {
        let errors = errors_for(valid_attributes().first_name("").last_name("  "));
        assert_eq!(errors.on(Field::FirstName), vec!["cannot be empty"]);
        assert_eq!(errors.on(Field::LastName), vec!["cannot be empty"]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_missing_expiry_skips_date_checks() {
        let errors = errors_for(valid_attributes().month(0).year(0));
        assert_eq!(errors.on(Field::Month), vec!["is required"]);
        assert_eq!(errors.on(Field::Year), vec!["is required"]);

        let errors = errors_for(valid_attributes().month(13).year(""));
        assert!(errors.on(Field::Month).is_empty());
        assert_eq!(errors.on(Field::Year), vec!["is required"]);
    }

    #[test]
    fn test_invalid_month() {
        let errors = errors_for(valid_attributes().month(13));
        assert_eq!(errors.on(Field::Month), vec!["is not a valid month"]);
        assert!(errors.on(Field::Year).is_empty());
    }

    #[test]
    fn test_expiry_boundaries() {
        let errors = errors_for(valid_attributes().month(MONTH).year(YEAR));
        assert!(errors.is_empty(), "current month must not be expired: {}", errors);

        let errors = errors_for(valid_attributes().month(MONTH - 1).year(YEAR));
        assert_eq!(errors.on(Field::Year), vec!["expired"]);
    }

    #[test]
    fn test_expiry_year_window() {
        let errors = errors_for(valid_attributes().year(YEAR + 20));
        assert!(errors.is_empty());

        let errors = errors_for(valid_attributes().year(YEAR + 21));
        assert_eq!(errors.on(Field::Year), vec!["is not a valid year"]);

        let config = ValidatorConfig::default().with_expiry_year_window(5);
        let errors = errors_with(valid_attributes().year(YEAR + 6), config);
        assert_eq!(errors.on(Field::Year), vec!["is not a valid year"]);
    }

    #[test]
    fn test_expired_is_not_also_invalid_year() {
        let errors = errors_for(valid_attributes().year(1999));
        assert_eq!(errors.on(Field::Year), vec!["expired"]);
    }

    #[test]
    fn test_bogus_type_skips_number_checks() {
        let errors = errors_for(
            valid_attributes()
                .card_type("bogus")
                .number("1")
                .verification_value(None::<&str>),
        );
        assert!(errors.is_empty(), "unexpected errors: {}", errors);

        let errors = errors_for(valid_attributes().card_type("BOGUS").first_name(""));
        assert_eq!(errors.len(), 1);
        assert!(errors.has_errors(Field::FirstName));
    }

    #[test]
    fn test_unknown_type() {
        let errors = errors_for(valid_attributes().card_type("amex"));
        assert_eq!(errors.on(Field::Type), vec!["is invalid"]);
    }

    #[test]
    fn test_type_required_only_for_unclassifiable_number() {
        // A recognisable number fills the type during normalization
        let errors = errors_for(valid_attributes().card_type(""));
        assert!(errors.is_empty());

        // 0000000000000000 passes Luhn but matches no brand rule
        let errors = errors_for(valid_attributes().number("0000000000000000"));
        assert_eq!(errors.on(Field::Type), vec!["is required"]);
        assert!(errors.on(Field::Number).is_empty());
    }

    #[test]
    fn test_missing_number() {
        let errors = errors_for(valid_attributes().number("").card_type("visa"));
        assert_eq!(errors.on(Field::Number), vec!["is required"]);
        assert!(errors.on(Field::Type).is_empty());
    }

    #[test]
    fn test_bad_checksum() {
        let errors = errors_for(valid_attributes().number("4242424242424241"));
        assert_eq!(
            errors.on(Field::Number),
            vec!["is not a valid credit card number"]
        );
        assert!(errors.on(Field::Type).is_empty());
    }

    #[test]
    fn test_type_mismatch() {
        let errors = errors_for(valid_attributes().card_type("master"));
        assert_eq!(errors.on(Field::Type), vec!["is not the correct card type"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_mismatch_not_reported_over_invalid_type() {
        let errors = errors_for(valid_attributes().card_type("amex"));
        assert_eq!(errors.on(Field::Type).len(), 1);
    }

    fn switch_attributes() -> CardAttributes {
        valid_attributes().number("6759000000000000").card_type("switch")
    }

    #[test]
    fn test_switch_without_start_or_issue() {
        let errors = errors_for(switch_attributes());
        assert_eq!(errors.on(Field::StartMonth), vec!["is invalid"]);
        assert_eq!(errors.on(Field::StartYear), vec!["is invalid"]);
        assert_eq!(errors.on(Field::IssueNumber), vec!["cannot be empty"]);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_switch_with_start_date() {
        let errors = errors_for(switch_attributes().start_month(2).start_year(2009));
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn test_switch_with_issue_number() {
        let errors = errors_for(switch_attributes().issue_number("01"));
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn test_switch_rejects_malformed_issue_number() {
        for issue_number in ["abc", "123", "1a"] {
            let errors = errors_for(switch_attributes().issue_number(issue_number));
            assert_eq!(errors.on(Field::IssueNumber), vec!["is invalid"], "{}", issue_number);
            assert_eq!(errors.on(Field::StartMonth), vec!["is invalid"]);
        }

        let errors = errors_for(switch_attributes().issue_number(" 7 "));
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn test_switch_partial_start_date() {
        let errors = errors_for(switch_attributes().start_month(2).start_year(1987));
        assert!(errors.on(Field::StartMonth).is_empty());
        assert_eq!(errors.on(Field::StartYear), vec!["is invalid"]);
        assert_eq!(errors.on(Field::IssueNumber), vec!["cannot be empty"]);
    }

    #[test]
    fn test_solo_is_legacy_too() {
        let errors = errors_for(valid_attributes().number("6767000000000000"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_verification_value_required() {
        let errors = errors_for(valid_attributes().verification_value(" "));
        assert_eq!(errors.on(Field::VerificationValue), vec!["is required"]);

        let config = ValidatorConfig::default().with_require_verification_value(false);
        let errors = errors_with(valid_attributes().verification_value(None::<&str>), config);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_is_valid_stores_errors() {
        // is_valid reads the real clock
        let (current_year, _) = current_year_month();
        let mut card =
            CardValidator::new(valid_attributes().year(current_year + 3).first_name(""));
        assert!(!card.is_valid());
        assert_eq!(card.errors().on(Field::FirstName), vec!["cannot be empty"]);

        card.set_first_name("Longbob");
        assert!(card.is_valid());
        assert!(card.errors().is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut card = CardValidator::new(valid_attributes().number("4242 4242 4242 4242"));
        let number = card.number().to_owned();
        let card_type = card.card_type().to_owned();

        card.normalize();
        card.normalize();
        assert_eq!(card.number(), number);
        assert_eq!(card.card_type(), card_type);
    }

    #[test]
    fn test_set_number_is_normalized_by_is_valid() {
        let mut card = CardValidator::new(valid_attributes());
        card.set_number("5555-5555-5555-4444");
        card.set_card_type("");
        card.is_valid();
        assert_eq!(card.number(), "5555555555554444");
        assert_eq!(card.card_type(), "master");
    }

    #[test]
    fn test_field_helpers() {
        assert!(valid_month(1));
        assert!(valid_month(12));
        assert!(!valid_month(0));
        assert!(!valid_month(13));

        assert!(valid_issue_number("1"));
        assert!(valid_issue_number("01"));
        assert!(!valid_issue_number(""));
        assert!(!valid_issue_number("001"));
        assert!(!valid_issue_number("ab"));

        assert!(valid_expiry_year(2026, 2026, 20));
        assert!(valid_expiry_year(2046, 2026, 20));
        assert!(!valid_expiry_year(2047, 2026, 20));
        assert!(!valid_expiry_year(2025, 2026, 20));

        assert!(valid_start_year(1988));
        assert!(!valid_start_year(1987));
        assert!(!valid_start_year(10000));
    }
}
