//! The closed filter-kind vocabulary.
//!
//! Engines speak in terms of these kinds. The enumeration is owned by this
//! crate so the vocabulary is an interface boundary: an engine adapter maps
//! each kind onto whatever its backing library calls the same transform.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// FILTER KIND
// ============================================================================

/// Identifies which transform or validator an engine runs for a rule.
///
/// Kinds fall into three categories (see [`FilterCategory`]): validation
/// kinds accept or reject a value, sanitization kinds transform it, and
/// [`FilterKind::Callback`] defers to a caller-supplied function.
///
/// The serde representation uses the stable snake_case names returned by
/// [`FilterKind::as_str`], so rule definitions can round-trip through
/// configuration without depending on enum ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Validate a boolean-like value ("1", "true", "on", "yes", ...).
    ValidateBool,
    /// Validate a domain name.
    ValidateDomain,
    /// Validate an e-mail address.
    ValidateEmail,
    /// Validate a floating-point value.
    ValidateFloat,
    /// Validate an integer.
    ValidateInt,
    /// Validate an IP address.
    ValidateIp,
    /// Validate a MAC address.
    ValidateMac,
    /// Validate against a regular expression pattern.
    ValidateRegexp,
    /// Backslash-escape quotes, backslashes and NUL.
    SanitizeAddSlashes,
    /// Strip characters not allowed in an e-mail address.
    SanitizeEmail,
    /// URL-encode a string.
    SanitizeEncoded,
    /// Strip characters not allowed in a floating-point number.
    SanitizeNumberFloat,
    /// HTML-encode all special characters.
    SanitizeFullSpecialChars,
    /// Strip characters other than digits and signs.
    SanitizeNumberInt,
    /// HTML-encode `'"<>&` and control characters.
    SanitizeSpecialChars,
    /// Strip tags and encode quotes.
    SanitizeString,
    /// Pass the value through unchanged (modulo flag-driven strip/encode).
    SanitizeUnsafeRaw,
    /// Strip characters not allowed in a URL.
    SanitizeUrl,
    /// Run a caller-supplied callback instead of a built-in transform.
    Callback,
}

/// The broad behavior class of a [`FilterKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    /// Accepts or rejects the input.
    Validation,
    /// Transforms the input.
    Sanitization,
    /// Defers to a caller-supplied function.
    Callback,
}

impl FilterKind {
    /// Returns the stable name used in serialized definitions and by engine
    /// adapter mapping tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidateBool => "validate_bool",
            Self::ValidateDomain => "validate_domain",
            Self::ValidateEmail => "validate_email",
            Self::ValidateFloat => "validate_float",
            Self::ValidateInt => "validate_int",
            Self::ValidateIp => "validate_ip",
            Self::ValidateMac => "validate_mac",
            Self::ValidateRegexp => "validate_regexp",
            Self::SanitizeAddSlashes => "sanitize_add_slashes",
            Self::SanitizeEmail => "sanitize_email",
            Self::SanitizeEncoded => "sanitize_encoded",
            Self::SanitizeNumberFloat => "sanitize_number_float",
            Self::SanitizeFullSpecialChars => "sanitize_full_special_chars",
            Self::SanitizeNumberInt => "sanitize_number_int",
            Self::SanitizeSpecialChars => "sanitize_special_chars",
            Self::SanitizeString => "sanitize_string",
            Self::SanitizeUnsafeRaw => "sanitize_unsafe_raw",
            Self::SanitizeUrl => "sanitize_url",
            Self::Callback => "callback",
        }
    }

    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> FilterCategory {
        match self {
            Self::ValidateBool
            | Self::ValidateDomain
            | Self::ValidateEmail
            | Self::ValidateFloat
            | Self::ValidateInt
            | Self::ValidateIp
            | Self::ValidateMac
            | Self::ValidateRegexp => FilterCategory::Validation,
            Self::SanitizeAddSlashes
            | Self::SanitizeEmail
            | Self::SanitizeEncoded
            | Self::SanitizeNumberFloat
            | Self::SanitizeFullSpecialChars
            | Self::SanitizeNumberInt
            | Self::SanitizeSpecialChars
            | Self::SanitizeString
            | Self::SanitizeUnsafeRaw
            | Self::SanitizeUrl => FilterCategory::Sanitization,
            Self::Callback => FilterCategory::Callback,
        }
    }

    /// Returns true for validation kinds.
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(self.category(), FilterCategory::Validation)
    }

    /// Returns true for sanitization kinds.
    #[must_use]
    pub const fn is_sanitization(self) -> bool {
        matches!(self.category(), FilterCategory::Sanitization)
    }

    /// Returns true for the callback kind.
    #[must_use]
    pub const fn is_callback(self) -> bool {
        matches!(self, Self::Callback)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Validation => "validation",
            Self::Sanitization => "sanitization",
            Self::Callback => "callback",
        };
        f.write_str(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================
