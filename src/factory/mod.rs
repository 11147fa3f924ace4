//! The rule-construction DSL.
//!
//! [`RuleFactory`] is the entry point: stateless, cheap to clone, safe to
//! share. Construction methods are grouped into two borrowing sub-builders,
//! [`valid()`](RuleFactory::valid) for validation rules and
//! [`clean()`](RuleFactory::clean) for sanitization rules, plus the two
//! callback escape hatches on the factory itself.
//!
//! # Examples
//!
//! ```
//! use filterset::factory::RuleFactory;
//!
//! let factory = RuleFactory::new();
//!
//! let age = factory.valid().integer(Some(0), Some(130), false, false, None);
//! let bio = factory.clean().full_special_chars(true);
//! let tag = factory.with_closure(|value| value.clone());
//! ```

pub mod clean;
pub mod valid;

pub use clean::CleanSet;
pub use valid::ValidSet;

use serde_json::Value;

use crate::foundation::{FilterFlags, FilterKind};
use crate::rule::{Callback, Options, Rule};

/// Builds [`Rule`]s for every supported kind.
///
/// Every construction method returns a fresh, independent rule; nothing is
/// cached or shared between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFactory;

impl RuleFactory {
    /// Creates a factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The base constructor every DSL method funnels through.
    #[must_use]
    pub fn create(&self, kind: FilterKind, flags: FilterFlags, options: Options) -> Rule {
        Rule::with_parts(kind, flags, options, None)
    }

    /// The validation-rule sub-builder.
    #[must_use]
    pub fn valid(&self) -> ValidSet<'_> {
        ValidSet::new(self)
    }

    /// The sanitization-rule sub-builder.
    #[must_use]
    pub fn clean(&self) -> CleanSet<'_> {
        CleanSet::new(self)
    }

    /// Wraps a plain named function into a callback-kind rule.
    #[must_use]
    pub fn with_callable(&self, callback: fn(&Value) -> Value) -> Rule {
        let mut rule = self.create(FilterKind::Callback, FilterFlags::empty(), Options::new());
        rule.set_callback(Some(Callback::from_fn(callback)));
        rule
    }

    /// Wraps a first-class closure into a callback-kind rule.
    #[must_use]
    pub fn with_closure<F>(&self, callback: F) -> Rule
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        let mut rule = self.create(FilterKind::Callback, FilterFlags::empty(), Options::new());
        rule.set_callback(Some(Callback::new(callback)));
        rule
    }
}
