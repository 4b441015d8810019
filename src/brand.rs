//! Card brand detection using BIN/IIN prefix matching.
//!
//! Every supported network is described by one row of [`BRAND_RULES`]: the
//! leading-digit ranges it owns and the total lengths it issues. A single
//! generic matcher walks the table in order and the first satisfied rule
//! wins, so broad rules (Maestro) sit after the narrower ones they overlap.

use crate::error::ParseBrandError;
use std::fmt;
use std::str::FromStr;

/// Type tag reserved for test fixtures. A card carrying it skips number,
/// type, legacy and verification checks.
pub const BOGUS_TYPE: &str = "bogus";

/// Supported card brands/networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardBrand {
    /// Visa - Prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    #[cfg_attr(feature = "serde", serde(rename = "master"))]
    Master,
    /// Discover - Prefix 6011, 622126-622925, 644-649, 65, lengths 16, 19
    Discover,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// JCB - Prefix 3528-3589, length 16-19
    Jcb,
    /// Switch (UK debit, legacy) - Prefix 6759, lengths 16, 18, 19
    Switch,
    /// Solo (UK debit, legacy) - Prefix 6767, lengths 16, 18, 19
    Solo,
    /// Dankort (Denmark) - Prefix 5019, length 16
    Dankort,
    /// Maestro - Prefix 50, 56-69, length 12-19
    Maestro,
    /// Forbrugsforeningen (Denmark) - Prefix 600722, length 16
    Forbrugsforeningen,
    /// Laser (Ireland, legacy) - Prefix 6304, 6706, 6709, 6771, lengths 16, 18, 19
    Laser,
}

/// Every known brand, in registry order.
pub const CARD_COMPANIES: &[CardBrand] = &[
    CardBrand::Visa,
    CardBrand::Master,
    CardBrand::Discover,
    CardBrand::AmericanExpress,
    CardBrand::DinersClub,
    CardBrand::Jcb,
    CardBrand::Switch,
    CardBrand::Solo,
    CardBrand::Dankort,
    CardBrand::Maestro,
    CardBrand::Forbrugsforeningen,
    CardBrand::Laser,
];

impl CardBrand {
    /// Returns the lowercase tag used for this brand in card attributes.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Master => "master",
            Self::Discover => "discover",
            Self::AmericanExpress => "american_express",
            Self::DinersClub => "diners_club",
            Self::Jcb => "jcb",
            Self::Switch => "switch",
            Self::Solo => "solo",
            Self::Dankort => "dankort",
            Self::Maestro => "maestro",
            Self::Forbrugsforeningen => "forbrugsforeningen",
            Self::Laser => "laser",
        }
    }

    /// Looks up a brand by its exact lowercase tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        CARD_COMPANIES.iter().copied().find(|brand| brand.tag() == tag)
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Master => "Mastercard",
            Self::Discover => "Discover",
            Self::AmericanExpress => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Switch => "Switch",
            Self::Solo => "Solo",
            Self::Dankort => "Dankort",
            Self::Maestro => "Maestro",
            Self::Forbrugsforeningen => "Forbrugsforeningen",
            Self::Laser => "Laser",
        }
    }

    /// Returns the card lengths this brand issues.
    pub fn valid_lengths(&self) -> &'static [u8] {
        BRAND_RULES
            .iter()
            .find(|rule| rule.brand == *self)
            .map(|rule| rule.lengths)
            .unwrap_or(&[])
    }

    /// Returns true for the legacy networks that carry start date and issue
    /// number fields.
    #[inline]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::Switch | Self::Solo)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CardBrand {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CARD_COMPANIES
            .iter()
            .copied()
            .find(|brand| brand.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBrandError::new(s))
    }
}

/// An inclusive range of leading-digit values, e.g. `2221..=2720`.
///
/// `width` is the number of leading digits the range is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    width: usize,
    low: u32,
    high: u32,
}

impl PrefixRange {
    /// Range covering `low..=high`; both bounds must have the same digit count.
    pub const fn new(low: u32, high: u32) -> Self {
        let mut width = 1;
        let mut rest = low / 10;
        while rest > 0 {
            width += 1;
            rest /= 10;
        }
        Self { width, low, high }
    }

    /// A single prefix value.
    pub const fn exact(prefix: u32) -> Self {
        Self::new(prefix, prefix)
    }

    /// Returns true if the leading digits of `digits` fall in this range.
    pub fn matches(&self, digits: &[u8]) -> bool {
        if digits.len() < self.width {
            return false;
        }

        let leading = digits[..self.width]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32);
        (self.low..=self.high).contains(&leading)
    }
}

/// One row of the brand classification table.
#[derive(Debug, Clone, Copy)]
pub struct BrandRule {
    /// Brand this rule identifies.
    pub brand: CardBrand,
    /// Accepted leading-digit ranges; any one must match.
    pub prefixes: &'static [PrefixRange],
    /// Accepted total lengths.
    pub lengths: &'static [u8],
}

impl BrandRule {
    /// Returns true if `digits` satisfies both the prefix and length rules.
    pub fn matches(&self, digits: &[u8]) -> bool {
        self.lengths.iter().any(|&len| len as usize == digits.len())
            && self.prefixes.iter().any(|prefix| prefix.matches(digits))
    }
}

const fn range(low: u32, high: u32) -> PrefixRange {
    PrefixRange::new(low, high)
}

const fn exact(prefix: u32) -> PrefixRange {
    PrefixRange::exact(prefix)
}

/// Brand classification table, evaluated top to bottom.
pub static BRAND_RULES: &[BrandRule] = &[
    BrandRule {
        brand: CardBrand::Visa,
        prefixes: &[exact(4)],
        lengths: &[13, 16, 19],
    },
    BrandRule {
        brand: CardBrand::Master,
        prefixes: &[range(51, 55), range(2221, 2720)],
        lengths: &[16],
    },
    BrandRule {
        brand: CardBrand::Discover,
        prefixes: &[exact(6011), range(622126, 622925), range(644, 649), exact(65)],
        lengths: &[16, 19],
    },
    BrandRule {
        brand: CardBrand::AmericanExpress,
        prefixes: &[exact(34), exact(37)],
        lengths: &[15],
    },
    BrandRule {
        brand: CardBrand::DinersClub,
        prefixes: &[range(300, 305), exact(36), exact(38)],
        lengths: &[14],
    },
    BrandRule {
        brand: CardBrand::Jcb,
        prefixes: &[range(3528, 3589)],
        lengths: &[16, 17, 18, 19],
    },
    BrandRule {
        brand: CardBrand::Switch,
        prefixes: &[exact(6759)],
        lengths: &[16, 18, 19],
    },
    BrandRule {
        brand: CardBrand::Solo,
        prefixes: &[exact(6767)],
        lengths: &[16, 18, 19],
    },
    // Must be before Maestro 50
    BrandRule {
        brand: CardBrand::Dankort,
        prefixes: &[exact(5019)],
        lengths: &[16],
    },
    BrandRule {
        brand: CardBrand::Forbrugsforeningen,
        prefixes: &[exact(600722)],
        lengths: &[16],
    },
    BrandRule {
        brand: CardBrand::Laser,
        prefixes: &[exact(6304), exact(6706), exact(6709), exact(6771)],
        lengths: &[16, 18, 19],
    },
    // Catch-all for the remaining 5x/6x debit ranges
    BrandRule {
        brand: CardBrand::Maestro,
        prefixes: &[exact(50), range(56, 69)],
        lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
    },
];

/// Detects the card brand from a sequence of digits (0-9 values).
#[inline]
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    if digits.is_empty() {
        return None;
    }

    BRAND_RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map(|rule| rule.brand)
}

/// Classifies a digit string into its card brand.
///
/// Returns `None` for empty input, input containing anything but ASCII
/// digits, or a number no rule accepts.
///
/// # Example
///
/// ```
/// use card_validator::{type_for, CardBrand};
///
/// assert_eq!(type_for("4242424242424242"), Some(CardBrand::Visa));
/// assert_eq!(type_for("5555555555554444"), Some(CardBrand::Master));
/// assert_eq!(type_for("378282246310005"), Some(CardBrand::AmericanExpress));
/// assert_eq!(type_for("1234"), None);
/// ```
pub fn type_for(number: &str) -> Option<CardBrand> {
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    detect_brand(&digits)
}

/// Returns true if `number` classifies to the brand tagged `card_type`.
///
/// # Example
///
/// ```
/// use card_validator::matching_type;
///
/// assert!(matching_type("4242424242424242", "visa"));
/// assert!(!matching_type("4242424242424242", "master"));
/// ```
pub fn matching_type(number: &str, card_type: &str) -> bool {
    type_for(number).is_some_and(|brand| brand.tag() == card_type)
}

/// Returns the tags of every known brand, in registry order.
pub fn card_companies() -> impl Iterator<Item = &'static str> {
    CARD_COMPANIES.iter().map(CardBrand::tag)
}

/// Returns true if `card_type` is one of the known brand tags.
#[inline]
pub fn is_known_type(card_type: &str) -> bool {
    CardBrand::from_tag(card_type).is_some()
}
