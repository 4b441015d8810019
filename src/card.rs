//! Card attributes and the [`CardValidator`] that owns them.
//!
//! [`CardAttributes`] collects raw, loosely-typed input. [`CardValidator`]
//! coerces it into typed fields, normalizes the number and type, and is then
//! checked through the [`Validatable`](crate::Validatable) contract.

use crate::brand::CardBrand;
use crate::config::ValidatorConfig;
use crate::error::Errors;
use crate::expiry::ExpiryDate;
use crate::mask;
use crate::normalize::{is_blank, is_present, RawValue};
use crate::validate::Validatable;
use std::fmt;
use zeroize::Zeroize;

/// Raw card attributes as supplied by the caller.
///
/// Every field accepts anything convertible into a [`RawValue`]: strings,
/// integers or `Option`s of either.
///
/// # Example
///
/// ```
/// use card_validator::CardAttributes;
///
/// let attributes = CardAttributes::new()
///     .number("4242 4242 4242 4242")
///     .month("9")
///     .year(2030)
///     .first_name("Longbob")
///     .last_name("Longsen")
///     .verification_value("123");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardAttributes {
    number: RawValue,
    month: RawValue,
    year: RawValue,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    card_type: RawValue,
    first_name: RawValue,
    last_name: RawValue,
    start_month: RawValue,
    start_year: RawValue,
    issue_number: RawValue,
    verification_value: RawValue,
}

macro_rules! raw_setters {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $field(mut self, value: impl Into<RawValue>) -> Self {
                self.$field = value.into();
                self
            }
        )*
    };
}

impl CardAttributes {
    /// Creates an empty attribute set; every field starts absent.
    pub fn new() -> Self {
        Self::default()
    }

    raw_setters!(
        /// Sets the card number; separators are stripped during normalization.
        number,
        /// Sets the expiry month.
        month,
        /// Sets the four-digit expiry year.
        year,
        /// Sets the brand tag; inferred from the number when left blank.
        card_type,
        /// Sets the holder's first name.
        first_name,
        /// Sets the holder's last name.
        last_name,
        /// Sets the start month (Switch/Solo).
        start_month,
        /// Sets the start year (Switch/Solo).
        start_year,
        /// Sets the issue number (Switch/Solo).
        issue_number,
        /// Sets the verification value.
        verification_value,
    );
}

impl fmt::Debug for CardAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = match &self.number {
            RawValue::Nil => String::new(),
            RawValue::Int(i) => mask::mask(&i.to_string()),
            RawValue::Str(s) => mask::mask(s),
        };
        f.debug_struct("CardAttributes")
            .field("number", &number)
            .field("month", &self.month)
            .field("year", &self.year)
            .field("card_type", &self.card_type)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("start_month", &self.start_month)
            .field("start_year", &self.start_year)
            .field("issue_number", &self.issue_number)
            .field("verification_value", &"***")
            .finish()
    }
}

/// A payment card under validation.
///
/// Construction coerces every raw attribute and normalizes the number and
/// type; [`Validatable::is_valid`] runs the rules and stores the result in
/// [`errors`](Validatable::errors).
///
/// # Security
///
/// - `Debug` shows the masked number only and never the verification value
/// - The number and verification value are zeroed on drop
///
/// # Example
///
/// ```
/// use card_validator::{CardAttributes, CardValidator, Validatable};
///
/// let mut card = CardValidator::new(
///     CardAttributes::new()
///         .number("4242-4242-4242-4242")
///         .month(9)
///         .year(9999)
///         .first_name("Longbob")
///         .last_name("Longsen")
///         .verification_value("123"),
/// );
///
/// assert_eq!(card.card_type(), "visa");
/// assert_eq!(card.display_number(), "XXXX-XXXX-XXXX-4242");
/// // 9999 is outside the default 20 year window
/// assert!(!card.is_valid());
/// ```
pub struct CardValidator {
    pub(crate) number: String,
    pub(crate) month: i32,
    pub(crate) year: i32,
    pub(crate) card_type: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) start_month: Option<i32>,
    pub(crate) start_year: Option<i32>,
    pub(crate) issue_number: Option<String>,
    pub(crate) verification_value: Option<String>,
    pub(crate) config: ValidatorConfig,
    pub(crate) errors: Errors,
}

impl CardValidator {
    /// Creates a validator with the default [`ValidatorConfig`].
    pub fn new(attributes: CardAttributes) -> Self {
        Self::with_config(attributes, ValidatorConfig::default())
    }

    /// Creates a validator with an explicit configuration.
    pub fn with_config(attributes: CardAttributes, config: ValidatorConfig) -> Self {
        let CardAttributes {
            number,
            month,
            year,
            card_type,
            first_name,
            last_name,
            start_month,
            start_year,
            issue_number,
            verification_value,
        } = attributes;

        let mut card = Self {
            number: number.into_string(),
            month: month.to_int(),
            year: year.to_int(),
            card_type: card_type.into_string(),
            first_name: first_name.into_string(),
            last_name: last_name.into_string(),
            start_month: start_month.to_optional_int(),
            start_year: start_year.to_optional_int(),
            issue_number: issue_number.into_optional_string(),
            verification_value: verification_value.into_optional_string(),
            config,
            errors: Errors::new(),
        };
        card.normalize();
        card
    }

    /// Returns the card number (digits only once normalized).
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Use [`display_number`](Self::display_number)
    /// for anything shown or logged.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the expiry month, `0` when it was absent or unparsable.
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the expiry year, `0` when it was absent or unparsable.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the lowercase brand tag, or an empty string.
    #[inline]
    pub fn card_type(&self) -> &str {
        &self.card_type
    }

    /// Returns the brand named by [`card_type`](Self::card_type), if known.
    pub fn brand(&self) -> Option<CardBrand> {
        CardBrand::from_tag(&self.card_type)
    }

    /// Returns the holder's first name.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the holder's last name.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the start month, `None` when never supplied.
    #[inline]
    pub const fn start_month(&self) -> Option<i32> {
        self.start_month
    }

    /// Returns the start year, `None` when never supplied.
    #[inline]
    pub const fn start_year(&self) -> Option<i32> {
        self.start_year
    }

    /// Returns the issue number, if supplied.
    #[inline]
    pub fn issue_number(&self) -> Option<&str> {
        self.issue_number.as_deref()
    }

    /// Returns the verification value, if supplied.
    #[inline]
    pub fn verification_value(&self) -> Option<&str> {
        self.verification_value.as_deref()
    }

    /// Returns true if a non-blank verification value is present.
    #[inline]
    pub fn has_verification_value(&self) -> bool {
        is_present(self.verification_value.as_deref())
    }

    /// Returns the configuration this validator was built with.
    #[inline]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns first and last name joined by a space, skipping blank parts.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns true if either name part is present.
    pub fn has_name(&self) -> bool {
        !is_blank(&self.first_name) || !is_blank(&self.last_name)
    }

    /// Splits a full name into first and last name: the final word becomes
    /// the last name and everything before it the first name.
    pub fn set_name(&mut self, full_name: &str) {
        let mut parts: Vec<&str> = full_name.split_whitespace().collect();
        self.last_name = parts.pop().unwrap_or_default().to_owned();
        self.first_name = parts.join(" ");
    }

    /// Replaces the card number; call [`Validatable::normalize`] or
    /// [`Validatable::is_valid`] afterwards to strip separators.
    pub fn set_number(&mut self, number: impl Into<RawValue>) {
        self.number.zeroize();
        self.number = number.into().into_string();
    }

    /// Replaces the expiry month.
    pub fn set_month(&mut self, month: impl Into<RawValue>) {
        self.month = month.into().to_int();
    }

    /// Replaces the expiry year.
    pub fn set_year(&mut self, year: impl Into<RawValue>) {
        self.year = year.into().to_int();
    }

    /// Replaces the brand tag.
    pub fn set_card_type(&mut self, card_type: impl Into<RawValue>) {
        self.card_type = card_type.into().into_string();
    }

    /// Replaces the first name.
    pub fn set_first_name(&mut self, first_name: impl Into<RawValue>) {
        self.first_name = first_name.into().into_string();
    }

    /// Replaces the last name.
    pub fn set_last_name(&mut self, last_name: impl Into<RawValue>) {
        self.last_name = last_name.into().into_string();
    }

    /// Replaces the start month; an absent value clears it.
    pub fn set_start_month(&mut self, start_month: impl Into<RawValue>) {
        self.start_month = start_month.into().to_optional_int();
    }

    /// Replaces the start year; an absent value clears it.
    pub fn set_start_year(&mut self, start_year: impl Into<RawValue>) {
        self.start_year = start_year.into().to_optional_int();
    }

    /// Replaces the issue number.
    pub fn set_issue_number(&mut self, issue_number: impl Into<RawValue>) {
        self.issue_number = issue_number.into().into_optional_string();
    }

    /// Replaces the verification value.
    pub fn set_verification_value(&mut self, verification_value: impl Into<RawValue>) {
        self.verification_value.zeroize();
        self.verification_value = verification_value.into().into_optional_string();
    }

    /// Returns the expiry as an [`ExpiryDate`], built fresh on every call.
    #[inline]
    pub const fn expiry_date(&self) -> ExpiryDate {
        ExpiryDate::new(self.month, self.year)
    }

    /// Returns true if the card has expired as of the current month.
    pub fn expired(&self) -> bool {
        self.expiry_date().expired()
    }

    /// Returns the number masked for display, e.g. `XXXX-XXXX-XXXX-4338`.
    pub fn display_number(&self) -> String {
        mask::mask(&self.number)
    }

    /// Returns up to the first 6 digits of the number.
    pub fn first_digits(&self) -> String {
        mask::first_digits(&self.number)
    }

    /// Returns up to the last 4 digits of the number.
    pub fn last_digits(&self) -> String {
        mask::last_digits(&self.number)
    }
}

impl fmt::Debug for CardValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardValidator")
            .field("number", &self.display_number())
            .field("expiry", &self.expiry_date())
            .field("card_type", &self.card_type)
            .field("name", &self.full_name())
            .field("start_month", &self.start_month)
            .field("start_year", &self.start_year)
            .field("issue_number", &self.issue_number)
            .field("verification_value", &"***")
            .field("errors", &self.errors)
            .finish()
    }
}

impl Drop for CardValidator {
    fn drop(&mut self) {
        self.number.zeroize();
        self.verification_value.zeroize();
    }
}
