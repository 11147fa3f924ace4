//! Validation-rule constructors.
//!
//! Each method translates named parameters into the `(kind, flags, options)`
//! triple for one validation kind. Every constructor takes an optional
//! `default`, stored as the `default` option when given; the engine returns
//! it in place of the failure sentinel when validation fails.

use serde_json::Value;

use crate::foundation::{FilterFlags, FilterKind, add_flag_if, add_flags_if};
use crate::rule::{Options, Rule, option};

use super::RuleFactory;

/// The validation sub-builder, obtained via
/// [`RuleFactory::valid`](super::RuleFactory::valid).
#[derive(Debug, Clone, Copy)]
pub struct ValidSet<'a> {
    factory: &'a RuleFactory,
}

impl<'a> ValidSet<'a> {
    pub(super) fn new(factory: &'a RuleFactory) -> Self {
        Self { factory }
    }

    /// A valid boolean. Always carries
    /// [`NULL_ON_FAILURE`](FilterFlags::NULL_ON_FAILURE) so the engine can
    /// distinguish "false" from "not a boolean".
    #[must_use]
    pub fn boolean(&self, default: Option<Value>) -> Rule {
        let rule = self.factory.create(
            FilterKind::ValidateBool,
            FilterFlags::NULL_ON_FAILURE,
            Options::new(),
        );

        apply_default(rule, default)
    }

    /// A valid domain name.
    ///
    /// `check_hostname` additionally requires hostname shape: leading
    /// alphanumeric, alphanumerics and hyphens only.
    #[must_use]
    pub fn domain(&self, check_hostname: bool, default: Option<Value>) -> Rule {
        let flags = add_flag_if(FilterFlags::empty(), check_hostname, FilterFlags::HOSTNAME);

        let rule = self
            .factory
            .create(FilterKind::ValidateDomain, flags, Options::new());

        apply_default(rule, default)
    }

    /// A valid e-mail address, optionally accepting unicode local parts.
    #[must_use]
    pub fn email(&self, check_unicode: bool, default: Option<Value>) -> Rule {
        let flags = add_flag_if(
            FilterFlags::empty(),
            check_unicode,
            FilterFlags::EMAIL_UNICODE,
        );

        let rule = self
            .factory
            .create(FilterKind::ValidateEmail, flags, Options::new());

        apply_default(rule, default)
    }

    /// A valid floating-point value, with optional bounds and precision.
    ///
    /// `allow_thousands` accepts thousand separators (commas).
    #[must_use]
    pub fn decimal(
        &self,
        min: Option<f64>,
        max: Option<f64>,
        decimals: Option<u32>,
        allow_thousands: bool,
        default: Option<Value>,
    ) -> Rule {
        let mut options = Options::new();

        if let Some(min) = min {
            options.insert(option::MIN_RANGE.into(), Value::from(min));
        }

        if let Some(max) = max {
            options.insert(option::MAX_RANGE.into(), Value::from(max));
        }

        if let Some(decimals) = decimals {
            options.insert(option::DECIMAL.into(), Value::from(decimals));
        }

        let flags = add_flag_if(
            FilterFlags::empty(),
            allow_thousands,
            FilterFlags::ALLOW_THOUSAND,
        );

        let rule = self.factory.create(FilterKind::ValidateFloat, flags, options);

        apply_default(rule, default)
    }

    /// A valid integer, with optional bounds and octal/hex notation.
    #[must_use]
    pub fn integer(
        &self,
        min: Option<i64>,
        max: Option<i64>,
        allow_octal: bool,
        allow_hex: bool,
        default: Option<Value>,
    ) -> Rule {
        let mut options = Options::new();

        if let Some(min) = min {
            options.insert(option::MIN_RANGE.into(), Value::from(min));
        }

        if let Some(max) = max {
            options.insert(option::MAX_RANGE.into(), Value::from(max));
        }

        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::ALLOW_OCTAL, allow_octal),
                (FilterFlags::ALLOW_HEX, allow_hex),
            ],
        );

        let rule = self.factory.create(FilterKind::ValidateInt, flags, options);

        apply_default(rule, default)
    }

    /// A valid IP address.
    ///
    /// `allow_private_range` and `allow_reserved_range` default-on in
    /// spirit: passing `false` sets the corresponding `NO_*_RANGE` flag.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn ip_address(
        &self,
        allow_v4: bool,
        allow_v6: bool,
        allow_private_range: bool,
        allow_reserved_range: bool,
        default: Option<Value>,
    ) -> Rule {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::IPV4, allow_v4),
                (FilterFlags::IPV6, allow_v6),
                (FilterFlags::NO_PRIV_RANGE, !allow_private_range),
                (FilterFlags::NO_RES_RANGE, !allow_reserved_range),
            ],
        );

        let rule = self
            .factory
            .create(FilterKind::ValidateIp, flags, Options::new());

        apply_default(rule, default)
    }

    /// A valid MAC address.
    #[must_use]
    pub fn mac_address(&self, default: Option<Value>) -> Rule {
        let rule = self
            .factory
            .create(FilterKind::ValidateMac, FilterFlags::empty(), Options::new());

        apply_default(rule, default)
    }

    /// A valid match for the given regular expression pattern.
    ///
    /// The pattern is stored as the `regexp` option and interpreted by the
    /// engine; no compilation happens here.
    #[must_use]
    pub fn regexp(&self, pattern: impl Into<String>, default: Option<Value>) -> Rule {
        let mut options = Options::new();
        options.insert(option::REGEXP.into(), Value::from(pattern.into()));

        let rule = self
            .factory
            .create(FilterKind::ValidateRegexp, FilterFlags::empty(), options);

        apply_default(rule, default)
    }
}

/// Stores `default` as the rule's `default` option iff one was given.
fn apply_default(mut rule: Rule, default: Option<Value>) -> Rule {
    if let Some(default) = default {
        rule.set_option(option::DEFAULT, default);
    }

    rule
}
