//! Sanitization-rule constructors.
//!
//! Pure transforms: no default-value support. Boolean parameters translate
//! one-for-one into strip/encode flags.

use crate::foundation::{FilterFlags, FilterKind, add_flag_if, add_flags_if};
use crate::rule::{Options, Rule};

use super::RuleFactory;

/// The sanitization sub-builder, obtained via
/// [`RuleFactory::clean`](super::RuleFactory::clean).
#[derive(Debug, Clone, Copy)]
pub struct CleanSet<'a> {
    factory: &'a RuleFactory,
}

impl<'a> CleanSet<'a> {
    pub(super) fn new(factory: &'a RuleFactory) -> Self {
        Self { factory }
    }

    /// Backslash-escape quotes, backslashes and NUL.
    #[must_use]
    pub fn with_slashes(&self) -> Rule {
        self.factory.create(
            FilterKind::SanitizeAddSlashes,
            FilterFlags::empty(),
            Options::new(),
        )
    }

    /// Remove all characters not allowed in an e-mail address.
    #[must_use]
    pub fn email(&self) -> Rule {
        self.factory.create(
            FilterKind::SanitizeEmail,
            FilterFlags::empty(),
            Options::new(),
        )
    }

    /// URL-encode the string, optionally stripping or encoding special
    /// characters first.
    #[must_use]
    pub fn encoded_string(
        &self,
        strip_low: bool,
        strip_high: bool,
        strip_backtick: bool,
        encode_low: bool,
        encode_high: bool,
    ) -> Rule {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::STRIP_LOW, strip_low),
                (FilterFlags::STRIP_HIGH, strip_high),
                (FilterFlags::STRIP_BACKTICK, strip_backtick),
                (FilterFlags::ENCODE_LOW, encode_low),
                (FilterFlags::ENCODE_HIGH, encode_high),
            ],
        );

        self.factory
            .create(FilterKind::SanitizeEncoded, flags, Options::new())
    }

    /// Remove all characters except digits, signs and optionally `.,eE`.
    #[must_use]
    pub fn decimal(
        &self,
        allow_fractions: bool,
        allow_thousands: bool,
        allow_scientific: bool,
    ) -> Rule {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::ALLOW_FRACTION, allow_fractions),
                (FilterFlags::ALLOW_THOUSAND, allow_thousands),
                (FilterFlags::ALLOW_SCIENTIFIC, allow_scientific),
            ],
        );

        self.factory
            .create(FilterKind::SanitizeNumberFloat, flags, Options::new())
    }

    /// HTML-encode every special character, quotes included unless
    /// `encode_quotes` is false.
    #[must_use]
    pub fn full_special_chars(&self, encode_quotes: bool) -> Rule {
        let flags = add_flag_if(
            FilterFlags::empty(),
            !encode_quotes,
            FilterFlags::NO_ENCODE_QUOTES,
        );

        self.factory
            .create(FilterKind::SanitizeFullSpecialChars, flags, Options::new())
    }

    /// Remove all characters except digits and plus/minus signs.
    #[must_use]
    pub fn digits(&self) -> Rule {
        self.factory.create(
            FilterKind::SanitizeNumberInt,
            FilterFlags::empty(),
            Options::new(),
        )
    }

    /// HTML-encode `'"<>&` and control characters, optionally stripping or
    /// encoding others.
    #[must_use]
    pub fn special_chars(
        &self,
        strip_low: bool,
        strip_high: bool,
        strip_backtick: bool,
        encode_high: bool,
    ) -> Rule {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::STRIP_LOW, strip_low),
                (FilterFlags::STRIP_HIGH, strip_high),
                (FilterFlags::STRIP_BACKTICK, strip_backtick),
                (FilterFlags::ENCODE_HIGH, encode_high),
            ],
        );

        self.factory
            .create(FilterKind::SanitizeSpecialChars, flags, Options::new())
    }

    /// Strip tags and HTML-encode quotes, with the full set of strip/encode
    /// toggles.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn str(
        &self,
        encode_quotes: bool,
        strip_low: bool,
        strip_high: bool,
        strip_backtick: bool,
        encode_low: bool,
        encode_high: bool,
        encode_amp: bool,
    ) -> Rule {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::NO_ENCODE_QUOTES, !encode_quotes),
                (FilterFlags::STRIP_LOW, strip_low),
                (FilterFlags::STRIP_HIGH, strip_high),
                (FilterFlags::STRIP_BACKTICK, strip_backtick),
                (FilterFlags::ENCODE_LOW, encode_low),
                (FilterFlags::ENCODE_HIGH, encode_high),
                (FilterFlags::ENCODE_AMP, encode_amp),
            ],
        );

        self.factory
            .create(FilterKind::SanitizeString, flags, Options::new())
    }

    /// Do nothing, optionally stripping or encoding special characters.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn unsafe_raw(
        &self,
        strip_low: bool,
        strip_high: bool,
        strip_backtick: bool,
        encode_low: bool,
        encode_high: bool,
        encode_amp: bool,
    ) -> Rule {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::STRIP_LOW, strip_low),
                (FilterFlags::STRIP_HIGH, strip_high),
                (FilterFlags::STRIP_BACKTICK, strip_backtick),
                (FilterFlags::ENCODE_LOW, encode_low),
                (FilterFlags::ENCODE_HIGH, encode_high),
                (FilterFlags::ENCODE_AMP, encode_amp),
            ],
        );

        self.factory
            .create(FilterKind::SanitizeUnsafeRaw, flags, Options::new())
    }

    /// Remove all characters not allowed in a URL.
    #[must_use]
    pub fn url(&self) -> Rule {
        self.factory.create(
            FilterKind::SanitizeUrl,
            FilterFlags::empty(),
            Options::new(),
        )
    }
}
