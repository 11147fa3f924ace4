//! The engine seam: the external collaborator that actually filters.
//!
//! This crate builds and dispatches rule definitions; it never decides what
//! a valid e-mail looks like or how quotes get encoded. That work belongs to
//! a [`FilterEngine`] implementation, typically a thin adapter over a
//! validation/sanitization library, mapping each [`FilterKind`] onto the
//! library's equivalent and honoring the flags and options it understands.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::foundation::FilterKind;
use crate::rule::Definition;

// ============================================================================
// AMBIENT INPUT SOURCES
// ============================================================================

/// A named ambient input space an engine can read raw values from.
///
/// Which spaces are actually populated is engine-defined; a server-side
/// engine would back [`InputSource::Query`] and [`InputSource::Post`] with
/// the current request, for example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// Query-string parameters.
    Query,
    /// Form-body fields.
    Post,
    /// Request cookies.
    Cookie,
    /// Server/request metadata.
    Server,
    /// Process environment.
    Env,
}

impl InputSource {
    /// Stable name of the input space.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Post => "post",
            Self::Cookie => "cookie",
            Self::Server => "server",
            Self::Env => "env",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ENGINE CONTRACT
// ============================================================================

/// The black-box filtering collaborator.
///
/// All four calls are synchronous, bounded transformations. Single-value
/// calls return the filtered value directly; how failure is signalled
/// (a sentinel value, null under
/// [`NULL_ON_FAILURE`](crate::foundation::FilterFlags::NULL_ON_FAILURE),
/// or the rule's `default` option) is part of the engine's own contract.
/// Batch calls return `None` as the total-failure sentinel, e.g. when the
/// payload itself is not map-shaped; callers normalize that case (see
/// [`FilterExt::filter_array`](crate::filter::FilterExt::filter_array)).
///
/// Engines are expected to be side-effect-free, except that applying a
/// callback-kind definition invokes the caller-supplied callback, which may
/// do anything its author wrote.
pub trait FilterEngine {
    /// Applies one definition to an explicit value.
    fn apply_value(&self, value: &Value, kind: FilterKind, definition: &Definition) -> Value;

    /// Reads `name` from the given ambient input space, then applies one
    /// definition to it.
    fn apply_input(
        &self,
        source: InputSource,
        name: &str,
        kind: FilterKind,
        definition: &Definition,
    ) -> Value;

    /// Applies a batch of definitions over an explicit payload.
    ///
    /// `add_empty` asks the engine to emit null entries for declared fields
    /// missing from `data` (as opposed to omitting them).
    fn apply_map(
        &self,
        data: &IndexMap<String, Value>,
        definitions: &IndexMap<String, Definition>,
        add_empty: bool,
    ) -> Option<IndexMap<String, Value>>;

    /// Applies a batch of definitions over an ambient input space.
    fn apply_input_map(
        &self,
        source: InputSource,
        definitions: &IndexMap<String, Definition>,
        add_empty: bool,
    ) -> Option<IndexMap<String, Value>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_names() {
        assert_eq!(InputSource::Query.to_string(), "query");
        assert_eq!(InputSource::Post.as_str(), "post");
    }

    #[test]
    fn test_input_source_serde() {
        let json = serde_json::to_string(&InputSource::Cookie).unwrap();
        assert_eq!(json, "\"cookie\"");
    }
}
