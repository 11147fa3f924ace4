//! Building validated [`Filter`]s from a rule-set builder.
//!
//! [`FilterFactory::create`] invokes a caller-supplied builder with the
//! factory's [`RuleFactory`] and validates its output before wrapping it
//! into a [`Filter`]. The builder returns a [`RuleSetSpec`], a
//! deliberately dynamic shape (named map, positional list, or arbitrary
//! value) so that misdeclared rule sets coming from loosely-typed layers
//! (configuration, scripts, serialized payloads) are caught here with a
//! precise, typed error rather than surfacing later as engine garbage.
//!
//! Well-formed builders just return a map of rules, directly or through the
//! [`rule_set!`](crate::rule_set) macro:
//!
//! ```
//! use filterset::factory::RuleFactory;
//! use filterset::filter_factory::FilterFactory;
//! use filterset::rule_set;
//!
//! let factory = FilterFactory::new(RuleFactory::new());
//!
//! let filter = factory
//!     .create(|rules| {
//!         rule_set! {
//!             "age" => rules.valid().integer(Some(0), Some(130), false, false, None),
//!             "email" => rules.valid().email(false, None),
//!         }
//!     })
//!     .unwrap();
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::factory::RuleFactory;
use crate::filter::Filter;
use crate::rule::Rule;

// ============================================================================
// BUILDER OUTPUT SHAPE
// ============================================================================

/// One entry of a rule-set map: a [`Rule`], or any other value a
/// misdeclared builder produced.
#[derive(Debug, Clone)]
pub enum RuleEntry {
    /// A proper rule.
    Rule(Rule),
    /// Anything else; rejected by [`FilterFactory::create`] with the
    /// value's type in the message.
    Other(Value),
}

impl From<Rule> for RuleEntry {
    fn from(rule: Rule) -> Self {
        Self::Rule(rule)
    }
}

impl From<Value> for RuleEntry {
    fn from(value: Value) -> Self {
        Self::Other(value)
    }
}

/// The dynamically-shaped output of a rule-set builder.
#[derive(Debug, Clone)]
pub enum RuleSetSpec {
    /// Field-name keyed entries, the only shape that validates.
    Map(IndexMap<String, RuleEntry>),
    /// Positional entries; rejected.
    List(Vec<RuleEntry>),
    /// A non-collection value; rejected.
    Other(Value),
}

impl From<IndexMap<String, RuleEntry>> for RuleSetSpec {
    fn from(entries: IndexMap<String, RuleEntry>) -> Self {
        Self::Map(entries)
    }
}

impl From<IndexMap<String, Rule>> for RuleSetSpec {
    fn from(rules: IndexMap<String, Rule>) -> Self {
        Self::Map(
            rules
                .into_iter()
                .map(|(field, rule)| (field, RuleEntry::Rule(rule)))
                .collect(),
        )
    }
}

impl<S: Into<String>> From<Vec<(S, Rule)>> for RuleSetSpec {
    fn from(rules: Vec<(S, Rule)>) -> Self {
        Self::Map(
            rules
                .into_iter()
                .map(|(field, rule)| (field.into(), RuleEntry::Rule(rule)))
                .collect(),
        )
    }
}

impl From<Vec<Rule>> for RuleSetSpec {
    fn from(rules: Vec<Rule>) -> Self {
        Self::List(rules.into_iter().map(RuleEntry::Rule).collect())
    }
}

impl From<Vec<RuleEntry>> for RuleSetSpec {
    fn from(entries: Vec<RuleEntry>) -> Self {
        Self::List(entries)
    }
}

impl From<Value> for RuleSetSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(field, value)| (field, RuleEntry::Other(value)))
                    .collect(),
            ),
            Value::Array(values) => {
                Self::List(values.into_iter().map(RuleEntry::Other).collect())
            }
            other => Self::Other(other),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Configuration-shape errors raised by [`FilterFactory::create`].
///
/// All three are immediately fatal to the `create` call; nothing is retried
/// or partially applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleSetError {
    /// The builder returned something that is not a map at all.
    #[error("expected a map of rules; {actual} given")]
    ExpectedRuleMap {
        /// Type of the value the builder returned.
        actual: &'static str,
    },

    /// The builder returned a positional list (or an empty collection)
    /// instead of a non-empty, field-name-keyed map.
    #[error("expected a non-empty map of rules keyed by field name; a positional list given")]
    ExpectedNamedKeys,

    /// A value in the map is not a [`Rule`]. Raised for the first offending
    /// entry encountered.
    #[error("expected a Rule for field `{field}`; {actual} given")]
    ExpectedRule {
        /// The field carrying the offending value.
        field: String,
        /// Type of the offending value.
        actual: &'static str,
    },
}

// ============================================================================
// FILTER FACTORY
// ============================================================================

/// Builds [`Filter`]s from rule-set builder functions.
#[derive(Debug, Clone, Default)]
pub struct FilterFactory {
    rule_factory: RuleFactory,
}

impl FilterFactory {
    /// Creates a factory around the given rule factory.
    #[must_use]
    pub fn new(rule_factory: RuleFactory) -> Self {
        Self { rule_factory }
    }

    /// The rule factory handed to builders.
    #[must_use]
    pub fn rule_factory(&self) -> &RuleFactory {
        &self.rule_factory
    }

    /// Invokes `builder` with the rule factory, validates the returned rule
    /// set, and wraps it into a [`Filter`] with the rule factory attached.
    ///
    /// # Errors
    ///
    /// [`RuleSetError`] when the builder's output is not a non-empty,
    /// field-name-keyed map of rules; see the variant docs.
    pub fn create<B, S>(&self, builder: B) -> Result<Filter, RuleSetError>
    where
        B: FnOnce(&RuleFactory) -> S,
        S: Into<RuleSetSpec>,
    {
        let spec = builder(&self.rule_factory).into();
        let rules = validate_rules(spec)?;
        debug!(fields = rules.len(), "rule set validated");

        let mut filter = Filter::new(rules);
        filter.set_rule_factory(Some(self.rule_factory));

        Ok(filter)
    }
}

/// Checks shape, keying and per-entry types, failing fast on the first
/// offending entry.
fn validate_rules(spec: RuleSetSpec) -> Result<IndexMap<String, Rule>, RuleSetError> {
    match spec {
        RuleSetSpec::Other(value) => Err(RuleSetError::ExpectedRuleMap {
            actual: json_type_name(&value),
        }),
        RuleSetSpec::List(_) => Err(RuleSetError::ExpectedNamedKeys),
        RuleSetSpec::Map(entries) if entries.is_empty() => Err(RuleSetError::ExpectedNamedKeys),
        RuleSetSpec::Map(entries) => entries
            .into_iter()
            .map(|(field, entry)| match entry {
                RuleEntry::Rule(rule) => Ok((field, rule)),
                RuleEntry::Other(value) => Err(RuleSetError::ExpectedRule {
                    actual: json_type_name(&value),
                    field,
                }),
            })
            .collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RuleSource;
    use crate::foundation::FilterKind;
    use crate::rule_set;
    use serde_json::json;

    fn factory() -> FilterFactory {
        FilterFactory::new(RuleFactory::new())
    }

    #[test]
    fn test_create_happy_path() {
        let filter = factory()
            .create(|rules| {
                rule_set! {
                    "int" => rules.valid().integer(Some(0), Some(10), false, false, None),
                }
            })
            .unwrap();

        assert_eq!(filter.rules().len(), 1);
        assert_eq!(filter.rules()["int"].kind(), FilterKind::ValidateInt);
        assert!(filter.rule_factory().is_some());
    }

    #[test]
    fn test_create_rejects_non_map() {
        let err = factory().create(|_| json!(null)).unwrap_err();
        assert_eq!(err, RuleSetError::ExpectedRuleMap { actual: "null" });
        assert_eq!(err.to_string(), "expected a map of rules; null given");

        let err = factory().create(|_| json!(42)).unwrap_err();
        assert_eq!(err, RuleSetError::ExpectedRuleMap { actual: "number" });
    }

    #[test]
    fn test_create_rejects_positional_list() {
        let err = factory()
            .create(|rules| vec![rules.clean().email(), rules.clean().url()])
            .unwrap_err();
        assert_eq!(err, RuleSetError::ExpectedNamedKeys);
    }

    #[test]
    fn test_create_rejects_empty_map() {
        let err = factory().create(|_| rule_set! {}).unwrap_err();
        assert_eq!(err, RuleSetError::ExpectedNamedKeys);
    }

    #[test]
    fn test_create_rejects_non_rule_value() {
        let err = factory().create(|_| json!({ "foo": "bar" })).unwrap_err();
        assert_eq!(
            err,
            RuleSetError::ExpectedRule {
                field: "foo".to_string(),
                actual: "string",
            }
        );
        assert_eq!(
            err.to_string(),
            "expected a Rule for field `foo`; string given"
        );
    }

    #[test]
    fn test_create_fails_fast_on_first_offender() {
        let err = factory()
            .create(|rules| {
                rule_set! {
                    "ok" => rules.clean().url(),
                    "bad_first" => json!(1),
                    "bad_second" => json!(true),
                }
            })
            .unwrap_err();

        assert_eq!(
            err,
            RuleSetError::ExpectedRule {
                field: "bad_first".to_string(),
                actual: "number",
            }
        );
    }

    #[test]
    fn test_vec_of_pairs_builds_named_map() {
        let filter = factory()
            .create(|rules| vec![("email", rules.valid().email(false, None))])
            .unwrap();
        assert_eq!(filter.rules().len(), 1);
        assert!(filter.rules().contains_key("email"));
    }

    #[test]
    fn test_rule_factory_accessor() {
        let filter_factory = factory();
        let _rule = filter_factory.rule_factory().clean().digits();
    }
}
