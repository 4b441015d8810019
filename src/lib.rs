//! # card_validator
//!
//! Validation and normalization of payment card data before it is handed to
//! a payment gateway.
//!
//! ## Features
//!
//! - Luhn checksum validation
//! - Card brand detection from a declarative prefix/length table (12 brands)
//! - Expiry date model with month-granular expiry
//! - Field-level validation with itemized `(field, message)` errors
//! - Switch/Solo start date and issue number rules
//! - Card number masking for display
//!
//! ## Quick Start
//!
//! ```rust
//! use card_validator::{CardAttributes, CardValidator, Field, Validatable};
//! use chrono::{Datelike, Utc};
//!
//! let mut card = CardValidator::new(
//!     CardAttributes::new()
//!         .number("4242 4242 4242 4242")
//!         .month(12)
//!         .year(Utc::now().year() + 3)
//!         .first_name("Longbob")
//!         .last_name("Longsen")
//!         .verification_value("123"),
//! );
//!
//! assert_eq!(card.card_type(), "visa");
//! assert!(card.is_valid());
//!
//! // Safe for logging - never exposes the full card number
//! assert_eq!(card.display_number(), "XXXX-XXXX-XXXX-4242");
//!
//! card.set_card_type("master");
//! assert!(!card.is_valid());
//! assert_eq!(card.errors().on(Field::Type), vec!["is not the correct card type"]);
//! ```
//!
//! ## Brand Registry
//!
//! The classification helpers are plain functions, usable without a
//! validator:
//!
//! ```rust
//! use card_validator::{card_companies, matching_type, mask, type_for, valid_number, CardBrand};
//!
//! assert!(valid_number("4242424242424242"));
//! assert!(!valid_number("4242424242424241"));
//!
//! assert_eq!(type_for("378282246310005"), Some(CardBrand::AmericanExpress));
//! assert!(matching_type("5555555555554444", "master"));
//! assert!(card_companies().any(|tag| tag == "switch"));
//!
//! assert_eq!(mask::mask("2132542376824338"), "XXXX-XXXX-XXXX-4338");
//! assert_eq!(mask::first_digits("2132542376824338"), "213254");
//! assert_eq!(mask::last_digits("2132542376824338"), "4338");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Tag | Prefix | Length |
//! |-----|--------|--------|
//! | `visa` | 4 | 13, 16, 19 |
//! | `master` | 51-55, 2221-2720 | 16 |
//! | `discover` | 6011, 622126-622925, 644-649, 65 | 16, 19 |
//! | `american_express` | 34, 37 | 15 |
//! | `diners_club` | 300-305, 36, 38 | 14 |
//! | `jcb` | 3528-3589 | 16-19 |
//! | `switch` | 6759 | 16, 18, 19 |
//! | `solo` | 6767 | 16, 18, 19 |
//! | `dankort` | 5019 | 16 |
//! | `maestro` | 50, 56-69 | 12-19 |
//! | `forbrugsforeningen` | 600722 | 16 |
//! | `laser` | 6304, 6706, 6709, 6771 | 16, 18, 19 |
//!
//! The `bogus` type is reserved for test fixtures and skips every check
//! except names and expiry.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for config, raw attributes and errors |
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; install a subscriber to see them.
//! Card numbers are only ever logged masked.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod card;
pub mod config;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod validate;

// Re-export main types at crate root
pub use brand::{
    card_companies, is_known_type, matching_type, type_for, CardBrand, BOGUS_TYPE,
    CARD_COMPANIES,
};
pub use card::{CardAttributes, CardValidator};
pub use config::ValidatorConfig;
pub use error::{ErrorSink, Errors, Field, ParseBrandError};
pub use expiry::ExpiryDate;
pub use luhn::valid_number;
pub use normalize::RawValue;
pub use validate::Validatable;
