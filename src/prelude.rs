//! Prelude module for convenient imports.
//!
//! Provides a single `use filterset::prelude::*;` import that brings in the
//! vocabulary, the rule model, the factories and the filtering traits.
//!
//! # Examples
//!
//! ```rust,ignore
//! use filterset::prelude::*;
//!
//! let factory = FilterFactory::new(RuleFactory::new());
//! let filter = factory.create(|rules| rule_set! {
//!     "email" => rules.valid().email(false, None),
//! })?;
//! ```

// ============================================================================
// FOUNDATION: kinds, flags, the engine seam
// ============================================================================

pub use crate::foundation::{
    FilterCategory, FilterEngine, FilterFlags, FilterKind, InputSource, add_flag_if, add_flags_if,
};

// ============================================================================
// RULES: the value object and its serialized form
// ============================================================================

pub use crate::rule::{Callback, Definition, DefinitionOptions, Options, Rule, option};

// ============================================================================
// FACTORIES AND FILTERS
// ============================================================================

pub use crate::factory::{CleanSet, RuleFactory, ValidSet};
pub use crate::filter::{Filter, FilterError, FilterExt, RuleSource};
pub use crate::filter_factory::{FilterFactory, RuleEntry, RuleSetError, RuleSetSpec};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::rule_set;
