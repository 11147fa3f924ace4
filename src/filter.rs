//! Applying a rule set to values and payloads.
//!
//! The declaration point is [`RuleSource`]: one required method returning
//! the field-name → [`Rule`] mapping. The four filtering operations live on
//! [`FilterExt`], which is blanket-implemented for every rule source: a
//! concrete filter definition only declares its rules and gets the
//! operations for free.
//!
//! [`Filter`] is the ready-made rule source carrying an explicit map,
//! usually produced by [`FilterFactory`](crate::filter_factory::FilterFactory).
//!
//! # Examples
//!
//! ```rust,ignore
//! use filterset::prelude::*;
//!
//! struct SignupFilter {
//!     rules: IndexMap<String, Rule>,
//! }
//!
//! impl RuleSource for SignupFilter {
//!     fn rules(&self) -> &IndexMap<String, Rule> {
//!         &self.rules
//!     }
//! }
//!
//! let filtered = signup_filter.filter_array(&engine, &body, true);
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::factory::RuleFactory;
use crate::foundation::{FilterEngine, FilterKind, InputSource};
use crate::rule::{Definition, Rule};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised by the strict single-value operations.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    /// A declared rule whose serialized definition has no usable filter:
    /// a callback-kind rule with no callback attached. Carries the
    /// offending rule for caller introspection.
    #[error("rule for field `{field}` is a callback rule with no callback attached")]
    InvalidRule {
        /// The field the rule was declared under.
        field: String,
        /// The offending rule.
        rule: Rule,
    },
}

// ============================================================================
// RULE SOURCE
// ============================================================================

/// Declares which fields are filtered and by which rules.
///
/// The mapping is treated as read-only: build it up front, then only read
/// it. Insertion order is preserved and determines the field order of
/// batch-filtering output.
pub trait RuleSource {
    /// The field-name → rule declarations this source filters with.
    fn rules(&self) -> &IndexMap<String, Rule>;
}

// ============================================================================
// FILTERING OPERATIONS
// ============================================================================

/// Filtering operations, available on every [`RuleSource`].
///
/// Each operation serializes the relevant rules to their engine
/// [`Definition`]s and makes exactly one delegation call into the engine.
pub trait FilterExt: RuleSource {
    /// Serializes the rule declared for `field`, if any.
    fn definition(&self, field: &str) -> Option<Definition> {
        self.rules().get(field).map(Rule::to_definition)
    }

    /// Serializes every declared rule, preserving declaration order.
    fn definitions(&self) -> IndexMap<String, Definition> {
        self.rules()
            .iter()
            .map(|(field, rule)| (field.clone(), rule.to_definition()))
            .collect()
    }

    /// Filters a single caller-supplied value.
    ///
    /// A field with no declared rule returns `default` unchanged (null when
    /// no default is given); that outcome is not an error.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidRule`] when the declared rule's definition has
    /// no usable filter (callback kind, callback missing).
    fn filter_value<E>(
        &self,
        engine: &E,
        field: &str,
        value: &Value,
        default: Option<Value>,
    ) -> Result<Value, FilterError>
    where
        E: FilterEngine + ?Sized,
    {
        let Some(rule) = self.rules().get(field) else {
            trace!(field, "no rule declared; returning default");
            return Ok(default.unwrap_or(Value::Null));
        };

        let definition = usable_definition(field, rule)?;
        trace!(field, kind = %definition.filter, "applying filter to value");

        Ok(engine.apply_value(value, definition.filter, &definition))
    }

    /// Filters a single ambient named input.
    ///
    /// Identical to [`filter_value`](FilterExt::filter_value), except the
    /// engine reads the raw value from `source` by field name.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidRule`], as for `filter_value`.
    fn filter_input<E>(
        &self,
        engine: &E,
        source: InputSource,
        field: &str,
        default: Option<Value>,
    ) -> Result<Value, FilterError>
    where
        E: FilterEngine + ?Sized,
    {
        let Some(rule) = self.rules().get(field) else {
            trace!(field, %source, "no rule declared; returning default");
            return Ok(default.unwrap_or(Value::Null));
        };

        let definition = usable_definition(field, rule)?;
        trace!(field, %source, kind = %definition.filter, "applying filter to input");

        Ok(engine.apply_input(source, field, definition.filter, &definition))
    }

    /// Filters a whole payload in one batch engine call.
    ///
    /// When the engine signals total failure (a non-map result, e.g. for a
    /// payload that is not map-shaped), the result is normalized: every
    /// declared field mapped to null when `add_empty` holds, an empty map
    /// otherwise. An engine success passes through unchanged, including the
    /// engine's own handling of fields missing from `data`.
    fn filter_array<E>(
        &self,
        engine: &E,
        data: &IndexMap<String, Value>,
        add_empty: bool,
    ) -> IndexMap<String, Value>
    where
        E: FilterEngine + ?Sized,
    {
        let definitions = self.definitions();

        match engine.apply_map(data, &definitions, add_empty) {
            Some(filtered) => filtered,
            None => {
                debug!(add_empty, "engine signalled total failure; normalizing");
                normalize_failure(&definitions, add_empty)
            }
        }
    }

    /// Filters a whole ambient input space in one batch engine call.
    ///
    /// Same normalization contract as [`filter_array`](FilterExt::filter_array).
    fn filter_input_array<E>(
        &self,
        engine: &E,
        source: InputSource,
        add_empty: bool,
    ) -> IndexMap<String, Value>
    where
        E: FilterEngine + ?Sized,
    {
        let definitions = self.definitions();

        match engine.apply_input_map(source, &definitions, add_empty) {
            Some(filtered) => filtered,
            None => {
                debug!(%source, add_empty, "engine signalled total failure; normalizing");
                normalize_failure(&definitions, add_empty)
            }
        }
    }
}

impl<T: RuleSource> FilterExt for T {}

/// Rejects definitions with no usable filter before touching the engine.
fn usable_definition(field: &str, rule: &Rule) -> Result<Definition, FilterError> {
    if rule.kind() == FilterKind::Callback && rule.callback().is_none() {
        return Err(FilterError::InvalidRule {
            field: field.to_string(),
            rule: rule.clone(),
        });
    }

    Ok(rule.to_definition())
}

fn normalize_failure(
    definitions: &IndexMap<String, Definition>,
    add_empty: bool,
) -> IndexMap<String, Value> {
    if add_empty {
        definitions
            .keys()
            .map(|field| (field.clone(), Value::Null))
            .collect()
    } else {
        IndexMap::new()
    }
}

// ============================================================================
// FILTER
// ============================================================================

/// A rule source backed by an explicit field → rule map.
///
/// The rule set is fixed at construction. A [`RuleFactory`] may be attached
/// afterwards (set-or-clear) for rule sources layered on top of this one;
/// none of the filtering operations require it.
#[derive(Debug, Clone)]
pub struct Filter {
    rules: IndexMap<String, Rule>,
    rule_factory: Option<RuleFactory>,
}

impl Filter {
    /// Creates a filter over the given rule set.
    #[must_use]
    pub fn new(rules: IndexMap<String, Rule>) -> Self {
        Self {
            rules,
            rule_factory: None,
        }
    }

    /// Attaches or clears the rule factory.
    pub fn set_rule_factory(&mut self, rule_factory: Option<RuleFactory>) -> &mut Self {
        self.rule_factory = rule_factory;
        self
    }

    /// The attached rule factory, if any.
    #[must_use]
    pub fn rule_factory(&self) -> Option<&RuleFactory> {
        self.rule_factory.as_ref()
    }
}

impl RuleSource for Filter {
    fn rules(&self) -> &IndexMap<String, Rule> {
        &self.rules
    }
}

// ============================================================================
// TESTS
// ============================================================================
