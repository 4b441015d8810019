//! Card expiry date model.
//!
//! A card stays valid through the last day of its expiry month, so expiry
//! is a comparison of `(year, month)` pairs, never of exact days.
//!
//! # Example
//!
//! ```
//! use card_validator::ExpiryDate;
//!
//! let expiry = ExpiryDate::new(3, 2021);
//! assert!(expiry.expired());
//! assert!(!expiry.expired_at(2021, 3));
//! assert_eq!(expiry.to_string(), "03/21");
//! ```

use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;

/// A month/year pair as printed on a card.
///
/// Holds whatever integers it was given; month validity is checked by the
/// validation rules, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryDate {
    month: i32,
    year: i32,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    #[inline]
    pub const fn new(month: i32, year: i32) -> Self {
        Self { month, year }
    }

    /// Returns the month.
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if the card has expired as of the current UTC month.
    ///
    /// A card expiring this month is not expired.
    pub fn expired(&self) -> bool {
        let (year, month) = current_year_month();
        self.expired_at(year, month)
    }

    /// Returns true if the expiry month precedes `year`/`month`.
    #[inline]
    pub const fn expired_at(&self, year: i32, month: i32) -> bool {
        self.year < year || (self.year == year && self.month < month)
    }

    /// Returns the last calendar day the card is usable, or `None` when the
    /// month/year do not form a calendar date.
    pub fn expiration(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, 1)?;

        let (next_year, next_month) = if month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

/// Gets the current UTC year and month.
pub(crate) fn current_year_month() -> (i32, i32) {
    let today = Utc::now().date_naive();
    (today.year(), today.month() as i32)
}
