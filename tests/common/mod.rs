//! Shared stub engines for the integration suites.
//!
//! These engines observe the delegation contract (what reaches the engine
//! and how results flow back) rather than validating anything for real.
//! [`StubEngine`] implements the minimum needed to see a definition acted
//! on: callbacks are invoked, regexp definitions are matched (falling back
//! to the rule's `default` option), everything else echoes the input.

use indexmap::IndexMap;
use serde_json::Value;

use filterset::prelude::*;

/// Echo-style engine with a seedable ambient-input store.
#[derive(Default)]
pub struct StubEngine {
    inputs: IndexMap<(InputSource, String), Value>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one ambient input value.
    pub fn with_input(mut self, source: InputSource, name: &str, value: Value) -> Self {
        self.inputs.insert((source, name.to_string()), value);
        self
    }

    fn input(&self, source: InputSource, name: &str) -> Option<&Value> {
        self.inputs.get(&(source, name.to_string()))
    }

    fn apply(&self, value: &Value, kind: FilterKind, definition: &Definition) -> Value {
        if let Some(callback) = definition.callback() {
            return callback.invoke(value);
        }

        if kind == FilterKind::ValidateRegexp {
            let pattern = definition
                .option(option::REGEXP)
                .and_then(Value::as_str)
                .unwrap_or_default();
            let pattern = regex::Regex::new(pattern).expect("suite patterns are valid");

            if value.as_str().is_some_and(|s| pattern.is_match(s)) {
                return value.clone();
            }

            return definition
                .option(option::DEFAULT)
                .cloned()
                .unwrap_or(Value::Bool(false));
        }

        value.clone()
    }
}

impl FilterEngine for StubEngine {
    fn apply_value(&self, value: &Value, kind: FilterKind, definition: &Definition) -> Value {
        self.apply(value, kind, definition)
    }

    fn apply_input(
        &self,
        source: InputSource,
        name: &str,
        kind: FilterKind,
        definition: &Definition,
    ) -> Value {
        let raw = self.input(source, name).cloned().unwrap_or(Value::Null);
        self.apply(&raw, kind, definition)
    }

    fn apply_map(
        &self,
        data: &IndexMap<String, Value>,
        definitions: &IndexMap<String, Definition>,
        add_empty: bool,
    ) -> Option<IndexMap<String, Value>> {
        let mut filtered = IndexMap::new();

        for (field, definition) in definitions {
            match data.get(field) {
                Some(value) => {
                    filtered.insert(
                        field.clone(),
                        self.apply(value, definition.filter, definition),
                    );
                }
                None if add_empty => {
                    filtered.insert(field.clone(), Value::Null);
                }
                None => {}
            }
        }

        Some(filtered)
    }

    fn apply_input_map(
        &self,
        source: InputSource,
        definitions: &IndexMap<String, Definition>,
        add_empty: bool,
    ) -> Option<IndexMap<String, Value>> {
        let mut filtered = IndexMap::new();

        for (field, definition) in definitions {
            match self.input(source, field) {
                Some(value) => {
                    filtered.insert(
                        field.clone(),
                        self.apply(value, definition.filter, definition),
                    );
                }
                None if add_empty => {
                    filtered.insert(field.clone(), Value::Null);
                }
                None => {}
            }
        }

        Some(filtered)
    }
}

/// Signals total failure on every batch call and the failure sentinel on
/// every single-value call.
pub struct FailingEngine;

impl FilterEngine for FailingEngine {
    fn apply_value(&self, _value: &Value, _kind: FilterKind, _definition: &Definition) -> Value {
        Value::Bool(false)
    }

    fn apply_input(
        &self,
        _source: InputSource,
        _name: &str,
        _kind: FilterKind,
        _definition: &Definition,
    ) -> Value {
        Value::Bool(false)
    }

    fn apply_map(
        &self,
        _data: &IndexMap<String, Value>,
        _definitions: &IndexMap<String, Definition>,
        _add_empty: bool,
    ) -> Option<IndexMap<String, Value>> {
        None
    }

    fn apply_input_map(
        &self,
        _source: InputSource,
        _definitions: &IndexMap<String, Definition>,
        _add_empty: bool,
    ) -> Option<IndexMap<String, Value>> {
        None
    }
}
