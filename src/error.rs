//! Error types for card validation.
//!
//! Rule violations are never returned as `Err`: each one becomes a
//! `(field, message)` entry in an [`ErrorSink`]. [`Errors`] is the sink the
//! crate ships for callers that do not bring their own.

use std::fmt;

/// A card attribute that validation can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Card holder's first name.
    FirstName,
    /// Card holder's last name.
    LastName,
    /// Expiry month.
    Month,
    /// Expiry year.
    Year,
    /// Card network tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    Type,
    /// Card number.
    Number,
    /// Start month (Switch/Solo only).
    StartMonth,
    /// Start year (Switch/Solo only).
    StartYear,
    /// Issue number (Switch/Solo only).
    IssueNumber,
    /// Card verification value (CVV/CVC/CID).
    VerificationValue,
}

impl Field {
    /// Returns the attribute name, e.g. `"first_name"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Month => "month",
            Self::Year => "year",
            Self::Type => "type",
            Self::Number => "number",
            Self::StartMonth => "start_month",
            Self::StartYear => "start_year",
            Self::IssueNumber => "issue_number",
            Self::VerificationValue => "verification_value",
        }
    }

    /// Returns the attribute name for use at the start of a sentence,
    /// e.g. `"First name"`.
    pub const fn human_name(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::Type => "Type",
            Self::Number => "Number",
            Self::StartMonth => "Start month",
            Self::StartYear => "Start year",
            Self::IssueNumber => "Issue number",
            Self::VerificationValue => "Verification value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for field-level validation failures.
///
/// Implementations must be append-only: an entry, once added, is visible to
/// every later [`has_errors`](ErrorSink::has_errors) call during the pass.
pub trait ErrorSink {
    /// Records `message` against `field`.
    fn add(&mut self, field: Field, message: &str);

    /// Returns true if at least one message has been recorded for `field`.
    fn has_errors(&self, field: Field) -> bool;
}

/// Ordered multimap of field errors.
///
/// # Example
///
/// ```
/// use card_validator::{ErrorSink, Errors, Field};
///
/// let mut errors = Errors::new();
/// errors.add(Field::Month, "is required");
/// errors.add(Field::Year, "is required");
///
/// assert_eq!(errors.on(Field::Month), vec!["is required"]);
/// assert_eq!(errors.full_messages()[1], "Year is required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Errors {
    entries: Vec<(Field, String)>,
}

impl Errors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message recorded for `field`, in insertion order.
    pub fn on(&self, field: Field) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// Returns the total number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(field, message)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Returns each error as a sentence, e.g. `"Month is required"`.
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(field, message)| format!("{} {}", field.human_name(), message))
            .collect()
    }

    /// Removes every recorded message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ErrorSink for Errors {
    fn add(&mut self, field: Field, message: &str) {
        self.entries.push((field, message.to_owned()));
    }

    fn has_errors(&self, field: Field) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

/// A string that is not the tag of any known card brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError {
    input: String,
}

impl ParseBrandError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown card brand '{}' - expected one of the card_companies() tags",
            self.input.escape_default()
        )
    }
}

impl std::error::Error for ParseBrandError {}
