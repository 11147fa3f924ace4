//! The rule value object and its engine-facing serialization.
//!
//! A [`Rule`] describes one transform: a [`FilterKind`], a set of
//! [`FilterFlags`], an ordered option map, and, for callback-kind rules,
//! the callback itself. Rules are built mutably (by hand or through
//! [`RuleFactory`](crate::factory::RuleFactory)) and treated as read-only
//! once handed to a [`Filter`](crate::filter::Filter).
//!
//! [`Rule::to_definition`] produces the [`Definition`] shape engines
//! consume: the kind always, the flags only when non-zero, and an options
//! slot holding either the option map or the callback, with the callback
//! taking precedence when both are present.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{FilterFlags, FilterKind};

/// Ordered option-name → value map carried by a rule.
pub type Options = IndexMap<String, Value>;

/// Well-known option names shared with engine adapters.
pub mod option {
    /// Lower bound for numeric validation.
    pub const MIN_RANGE: &str = "min_range";
    /// Upper bound for numeric validation.
    pub const MAX_RANGE: &str = "max_range";
    /// Decimal precision for float validation.
    pub const DECIMAL: &str = "decimal";
    /// Pattern for regexp validation.
    pub const REGEXP: &str = "regexp";
    /// Value returned by the engine when validation fails.
    pub const DEFAULT: &str = "default";
}

// ============================================================================
// CALLBACK
// ============================================================================

/// A caller-supplied unary transform attached to a callback-kind rule.
///
/// The engine invokes it synchronously in place of a built-in transform.
/// Cloning is cheap (shared reference); equality is identity: two
/// separately-created callbacks are never equal, a clone and its source
/// always are.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&Value) -> Value + Send + Sync>);

impl Callback {
    /// Wraps a first-class closure.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Wraps a plain named function.
    #[must_use]
    pub fn from_fn(callback: fn(&Value) -> Value) -> Self {
        Self(Arc::new(callback))
    }

    /// Invokes the callback on one value.
    #[must_use]
    pub fn invoke(&self, value: &Value) -> Value {
        (self.0)(value)
    }

    /// Identity comparison: true iff both wrap the same underlying function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback").field(&"<fn>").finish()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A declarative description of one validation/sanitization/callback
/// transform to apply to a field's value.
///
/// Mutators act in place and return `&mut Self` for chaining. No
/// kind/flag/option compatibility checks are performed; rules carry what
/// the caller set and the engine honors what it understands, mirroring the
/// permissiveness of the engines this layer fronts.
///
/// # Examples
///
/// ```
/// use filterset::foundation::{FilterFlags, FilterKind};
/// use filterset::rule::{Rule, option};
///
/// let mut rule = Rule::new(FilterKind::ValidateInt);
/// rule.set_option(option::MIN_RANGE, 0.into())
///     .set_option(option::MAX_RANGE, 10.into())
///     .add_flag(FilterFlags::ALLOW_HEX);
///
/// let definition = rule.to_definition();
/// assert_eq!(definition.filter, FilterKind::ValidateInt);
/// assert_eq!(definition.flags, Some(FilterFlags::ALLOW_HEX));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    kind: FilterKind,
    flags: FilterFlags,
    options: Options,
    callback: Option<Callback>,
}

impl Rule {
    /// Creates a rule with zero flags, no options and no callback.
    #[must_use]
    pub fn new(kind: FilterKind) -> Self {
        Self::with_parts(kind, FilterFlags::empty(), Options::new(), None)
    }

    /// Creates a rule from all four parts at once.
    #[must_use]
    pub fn with_parts(
        kind: FilterKind,
        flags: FilterFlags,
        options: Options,
        callback: Option<Callback>,
    ) -> Self {
        Self {
            kind,
            flags,
            options,
            callback,
        }
    }

    /// The filter kind.
    #[must_use]
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// The current flag set.
    #[must_use]
    pub fn flags(&self) -> FilterFlags {
        self.flags
    }

    /// Bitwise test for a flag.
    #[must_use]
    pub fn has_flag(&self, flag: FilterFlags) -> bool {
        self.flags.contains(flag)
    }

    /// ORs a flag into the set.
    pub fn add_flag(&mut self, flag: FilterFlags) -> &mut Self {
        self.flags |= flag;
        self
    }

    /// Clears exactly the given flag; other set bits are untouched, and
    /// removing an unset flag is a no-op.
    pub fn remove_flag(&mut self, flag: FilterFlags) -> &mut Self {
        self.flags &= !flag;
        self
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether an option is present.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Looks up an option, falling back to `default` when absent.
    #[must_use]
    pub fn option(&self, name: &str, default: Value) -> Value {
        self.options.get(name).cloned().unwrap_or(default)
    }

    /// Sets an option, replacing any previous value under the same name.
    pub fn set_option(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.options.insert(name.into(), value);
        self
    }

    /// Removes an option; absent names are a no-op.
    pub fn remove_option(&mut self, name: &str) -> &mut Self {
        self.options.shift_remove(name);
        self
    }

    /// The attached callback, if any.
    #[must_use]
    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }

    /// Attaches or clears the callback.
    pub fn set_callback(&mut self, callback: Option<Callback>) -> &mut Self {
        self.callback = callback;
        self
    }

    /// Serializes the rule into the shape engines consume.
    ///
    /// - `filter` is always the rule's kind
    /// - `flags` is present iff the flag set is non-zero
    /// - `options` is present iff a callback is attached or the option map
    ///   is non-empty, the callback winning when both hold
    #[must_use]
    pub fn to_definition(&self) -> Definition {
        let options = if let Some(callback) = &self.callback {
            Some(DefinitionOptions::Callback(callback.clone()))
        } else if self.options.is_empty() {
            None
        } else {
            Some(DefinitionOptions::Options(self.options.clone()))
        };

        Definition {
            filter: self.kind,
            flags: (!self.flags.is_empty()).then_some(self.flags),
            options,
        }
    }
}

// ============================================================================
// DEFINITION
// ============================================================================

/// The options slot of a [`Definition`]: either the rule's option map or,
/// for callback rules, the callback itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionOptions {
    /// Named options for a built-in kind.
    Options(Options),
    /// The caller-supplied transform of a callback-kind rule.
    Callback(Callback),
}

/// The serialized `{filter, flags?, options?}` form of a rule, the shape
/// the external engine consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Which transform to run.
    pub filter: FilterKind,
    /// Flag set, present iff non-zero.
    pub flags: Option<FilterFlags>,
    /// Options or callback, present per the serialization contract.
    pub options: Option<DefinitionOptions>,
}

impl Definition {
    /// The flag set, empty when the `flags` key was omitted.
    #[must_use]
    pub fn flags_or_empty(&self) -> FilterFlags {
        self.flags.unwrap_or_default()
    }

    /// The option map, if the options slot holds one.
    #[must_use]
    pub fn options_map(&self) -> Option<&Options> {
        match &self.options {
            Some(DefinitionOptions::Options(options)) => Some(options),
            _ => None,
        }
    }

    /// The callback, if the options slot holds one.
    #[must_use]
    pub fn callback(&self) -> Option<&Callback> {
        match &self.options {
            Some(DefinitionOptions::Callback(callback)) => Some(callback),
            _ => None,
        }
    }

    /// Convenience lookup into the option map.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options_map().and_then(|options| options.get(name))
    }
}

// ============================================================================
// TESTS
// ============================================================================
