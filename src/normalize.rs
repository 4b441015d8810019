//! Coercion of raw, loosely-typed card attributes.
//!
//! Card data arrives from forms, JSON payloads and fixtures, so a month may
//! be `12`, `"12"`, `" 12 "`, `""` or missing entirely. [`RawValue`] carries
//! any of those, and the helpers here turn it into the typed fields the
//! validator works with. Coercion never fails: anything unusable becomes
//! `0` or an empty string and is reported later by the validation rules.

/// An attribute value as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    /// Absent value.
    #[default]
    Nil,
    /// Integer value.
    Int(i64),
    /// String value, not yet trimmed or parsed.
    Str(String),
}

impl RawValue {
    /// Returns true for [`RawValue::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true for `Nil` and for strings that are empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Int(_) => false,
            Self::Str(s) => is_blank(s),
        }
    }

    /// Coerces to an integer; unparsable or absent values become `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use card_validator::RawValue;
    ///
    /// assert_eq!(RawValue::from(" 09 ").to_int(), 9);
    /// assert_eq!(RawValue::from("Sept").to_int(), 0);
    /// assert_eq!(RawValue::Nil.to_int(), 0);
    /// ```
    pub fn to_int(&self) -> i32 {
        match self {
            Self::Nil => 0,
            Self::Int(i) => i32::try_from(*i).unwrap_or(0),
            Self::Str(s) => s.trim().parse().unwrap_or(0),
        }
    }

    /// Like [`to_int`](Self::to_int), but keeps an absent value absent.
    pub fn to_optional_int(&self) -> Option<i32> {
        if self.is_nil() {
            None
        } else {
            Some(self.to_int())
        }
    }

    /// Converts to a string; `Nil` becomes empty.
    pub fn into_string(self) -> String {
        match self {
            Self::Nil => String::new(),
            Self::Int(i) => i.to_string(),
            Self::Str(s) => s,
        }
    }

    /// Converts to a string, keeping an absent value absent.
    pub fn into_optional_string(self) -> Option<String> {
        if self.is_nil() {
            None
        } else {
            Some(self.into_string())
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

macro_rules! raw_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(i: $ty) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

raw_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/// Removes every character that is not an ASCII digit.
///
/// # Example
///
/// ```
/// use card_validator::normalize::digits_only;
///
/// assert_eq!(digits_only("4242-4242 4242.4242"), "4242424242424242");
/// ```
#[inline]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns true if `s` is empty or whitespace only.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Returns true if `value` is present and not blank.
#[inline]
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !is_blank(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int() {
        assert_eq!(RawValue::from(12).to_int(), 12);
        assert_eq!(RawValue::from("12").to_int(), 12);
        assert_eq!(RawValue::from(" 2030 ").to_int(), 2030);
        assert_eq!(RawValue::from("").to_int(), 0);
        assert_eq!(RawValue::from("twelve").to_int(), 0);
        assert_eq!(RawValue::from("12/30").to_int(), 0);
        assert_eq!(RawValue::Int(i64::MAX).to_int(), 0);
        assert_eq!(RawValue::Nil.to_int(), 0);
    }

    #[test]
    fn test_to_optional_int() {
        assert_eq!(RawValue::Nil.to_optional_int(), None);
        assert_eq!(RawValue::from("").to_optional_int(), Some(0));
        assert_eq!(RawValue::from(1999).to_optional_int(), Some(1999));
    }

    #[test]
    fn test_into_string() {
        assert_eq!(RawValue::from(4242).into_string(), "4242");
        assert_eq!(RawValue::Nil.into_string(), "");
        assert_eq!(RawValue::Nil.into_optional_string(), None);
        assert_eq!(
            RawValue::from("12").into_optional_string(),
            Some("12".to_owned())
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(RawValue::from(None::<&str>), RawValue::Nil);
        assert_eq!(RawValue::from(Some(7u8)), RawValue::Int(7));
    }

    #[test]
    fn test_blank() {
        assert!(RawValue::Nil.is_blank());
        assert!(RawValue::from("  ").is_blank());
        assert!(!RawValue::from(0).is_blank());
        assert!(!is_present(None));
        assert!(!is_present(Some(" ")));
        assert!(is_present(Some("123")));
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("4242 4242 4242 4242"), "4242424242424242");
        assert_eq!(digits_only("4242-4242-4242-4242"), "4242424242424242");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[null, 12, "12"]"#).unwrap();
        assert_eq!(
            values,
            vec![RawValue::Nil, RawValue::Int(12), RawValue::Str("12".into())]
        );
    }
}
