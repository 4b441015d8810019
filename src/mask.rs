//! Masking and truncation of card numbers for display and logging.
//!
//! Only the first 6 digits (BIN) and the last 4 digits of a card number may
//! be shown; everything here reveals at most one of those.

/// Character substituted for hidden digits.
pub const MASK_CHAR: char = 'X';

/// Separator between 4-digit groups in masked output.
pub const GROUP_SEPARATOR: char = '-';

/// Masks a card number showing only the last 4 digits.
///
/// Groups are counted from the right, so the visible digits always form the
/// final group. Non-digit characters are ignored; numbers of four digits or
/// fewer are returned as-is.
///
/// # Example
///
/// ```
/// use card_validator::mask::mask;
///
/// assert_eq!(mask("2132542376824338"), "XXXX-XXXX-XXXX-4338");
/// assert_eq!(mask("378282246310005"), "XXX-XXXX-XXXX-0005");
/// ```
pub fn mask(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return digits.into_iter().collect();
    }

    let mut result = String::with_capacity(len + len / 4);
    for (i, &digit) in digits.iter().enumerate() {
        let from_right = len - i;
        if i > 0 && from_right % 4 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(if from_right > 4 { MASK_CHAR } else { digit });
    }

    result
}

/// Returns up to the first 6 digits (the BIN).
///
/// # Example
///
/// ```
/// use card_validator::mask::first_digits;
///
/// assert_eq!(first_digits("4242424242424242"), "424242");
/// assert_eq!(first_digits("4242"), "4242");
/// ```
#[inline]
pub fn first_digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).take(6).collect()
}

/// Returns up to the last 4 digits.
#[inline]
pub fn last_digits(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_16_digits() {
        assert_eq!(mask("2132542376824338"), "XXXX-XXXX-XXXX-4338");
        assert_eq!(mask("4242424242424242"), "XXXX-XXXX-XXXX-4242");
    }

    #[test]
    fn test_mask_other_lengths() {
        assert_eq!(mask("378282246310005"), "XXX-XXXX-XXXX-0005");
        assert_eq!(mask("30569309025904"), "XX-XXXX-XXXX-5904");
        assert_eq!(mask("6759000000000000005"), "XXX-XXXX-XXXX-XXXX-0005");
        assert_eq!(mask("12345"), "X-2345");
        assert_eq!(mask("12345678"), "XXXX-5678");
    }

    #[test]
    fn test_mask_short_and_empty() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("123"), "123");
        assert_eq!(mask("1234"), "1234");
    }

    #[test]
    fn test_mask_ignores_separators() {
        assert_eq!(mask("2132-5423-7682-4338"), "XXXX-XXXX-XXXX-4338");
        assert_eq!(mask("2132 5423 7682 4338"), "XXXX-XXXX-XXXX-4338");
    }

    #[test]
    fn test_first_digits() {
        assert_eq!(first_digits("2132542376824338"), "213254");
        assert_eq!(first_digits("123"), "123");
        assert_eq!(first_digits(""), "");
    }

    #[test]
    fn test_last_digits() {
        assert_eq!(last_digits("2132542376824338"), "4338");
        assert_eq!(last_digits("4111-1111-1111-1234"), "1234");
        assert_eq!(last_digits("123"), "123");
        assert_eq!(last_digits(""), "");
    }
}
