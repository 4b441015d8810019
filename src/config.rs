//! Validator configuration.

/// Default number of years past the current one an expiry year may be.
pub const DEFAULT_EXPIRY_YEAR_WINDOW: i32 = 20;

/// Settings shared by every validation pass of a [`CardValidator`].
///
/// Copied into each validator at construction, so two validators with
/// different settings never affect each other.
///
/// # Example
///
/// ```
/// use card_validator::ValidatorConfig;
///
/// let config = ValidatorConfig::default().with_require_verification_value(false);
/// assert!(!config.require_verification_value);
/// assert_eq!(config.expiry_year_window, 20);
/// ```
///
/// [`CardValidator`]: crate::CardValidator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// Whether a card must carry a verification value (CVV/CVC/CID).
    pub require_verification_value: bool,
    /// Expiry years accepted: the current year through this many years ahead.
    pub expiry_year_window: i32,
}

impl ValidatorConfig {
    /// Sets whether a verification value is required.
    #[must_use]
    pub const fn with_require_verification_value(mut self, required: bool) -> Self {
        self.require_verification_value = required;
        self
    }

    /// Sets how many years ahead an expiry year may be.
    #[must_use]
    pub const fn with_expiry_year_window(mut self, years: i32) -> Self {
        self.expiry_year_window = years;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            require_verification_value: true,
            expiry_year_window: DEFAULT_EXPIRY_YEAR_WINDOW,
        }
    }
}
