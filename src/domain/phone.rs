//! Mobile phone number formats.
//!
//! A [`MobileFormat`] is the pluggable predicate behind phone validation.
//! The application is configured with one region; `id-ID` is the default.

use super::errors::ValidationError;
use regex::Regex;

/// Region used when nothing else is configured.
pub const DEFAULT_REGION: &str = "id-ID";

/// Built-in mobile numbering plans, keyed by locale-style region code.
///
/// Digits and whitespace are spelled as ASCII classes: `\d` and `\s` would
/// also match non-ASCII digits and spaces.
const BUILTIN_FORMATS: &[(&str, &str)] = &[
    // Indonesia: 0 / 62 / +62, then 8 and an operator code, then the subscriber digits.
    (
        "id-ID",
        r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[12356789]|7[78]|9[56789]|8[1-9])[[:space:][:digit:]]{5,11}$",
    ),
    (
        "en-US",
        r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$",
    ),
    ("en-GB", r"^(\+?44|0)7[0-9]{9}$"),
    ("en-SG", r"^(\+65)?[3689][0-9]{7}$"),
    (
        "ms-MY",
        r"^(\+?60|0)1(([0145](-|[[:space:]])?[0-9]{7,8})|([236-9](-|[[:space:]])?[0-9]{7}))$",
    ),
];

/// A region's mobile number format.
#[derive(Debug, Clone)]
pub struct MobileFormat {
    region: String,
    pattern: Regex,
}

impl MobileFormat {
    /// Look up the built-in format for `region` (e.g. `"id-ID"`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnsupportedRegion` for unknown codes.
    pub fn for_region(region: &str) -> Result<Self, ValidationError> {
        let (code, pattern) = BUILTIN_FORMATS
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(region))
            .ok_or_else(|| ValidationError::UnsupportedRegion(region.to_string()))?;

        Self::custom(*code, pattern)
    }

    /// Build a format from an arbitrary regular expression.
    ///
    /// The pattern should be anchored; it is matched against the raw input.
    pub fn custom(region: impl Into<String>, pattern: &str) -> Result<Self, ValidationError> {
        let pattern =
            Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            region: region.into(),
            pattern,
        })
    }

    /// Region codes with a built-in format.
    pub fn supported_regions() -> impl Iterator<Item = &'static str> {
        BUILTIN_FORMATS.iter().map(|(code, _)| *code)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Check a raw phone string against this format.
    pub fn matches(&self, phone: &str) -> bool {
        self.pattern.is_match(phone)
    }
}

impl Default for MobileFormat {
    fn default() -> Self {
        // The built-in table is covered by tests, so the default region always resolves.
        Self::for_region(DEFAULT_REGION).expect("default region is built in")
    }
}

/// Check whether `phone` is a mobile number in the given format.
pub fn is_valid_mobile(phone: &str, format: &MobileFormat) -> bool {
    format.matches(phone)
}
