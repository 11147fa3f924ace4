//! # filterset
//!
//! Declarative per-field validation and sanitization rules over a pluggable
//! filter engine.
//!
//! This crate is the rule-building and dispatch layer only: callers declare,
//! per named field, which transform to run (a [`FilterKind`] plus
//! [`FilterFlags`] toggles, options and optional callbacks), and a
//! [`FilterEngine`] implementation (the external collaborator) does the
//! actual validating and sanitizing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use filterset::prelude::*;
//!
//! let factory = FilterFactory::new(RuleFactory::new());
//!
//! let filter = factory.create(|rules| rule_set! {
//!     "age" => rules.valid().integer(Some(0), Some(130), false, false, None),
//!     "email" => rules.valid().email(false, None),
//!     "bio" => rules.clean().full_special_chars(true),
//! })?;
//!
//! // `engine` is any FilterEngine implementation.
//! let body = filter.filter_array(&engine, &payload, true);
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the closed kind/flag vocabulary and the engine seam
//! - [`rule`]: the [`Rule`](rule::Rule) value object and its serialized
//!   [`Definition`](rule::Definition)
//! - [`factory`]: the [`RuleFactory`](factory::RuleFactory) DSL with its
//!   `valid()` / `clean()` sub-builders
//! - [`filter`]: [`RuleSource`](filter::RuleSource) declarations and the
//!   [`FilterExt`](filter::FilterExt) operations
//! - [`filter_factory`]: validated construction of
//!   [`Filter`](filter::Filter)s from builder functions
//!
//! [`FilterKind`]: foundation::FilterKind
//! [`FilterFlags`]: foundation::FilterFlags
//! [`FilterEngine`]: foundation::FilterEngine

pub mod factory;
pub mod filter;
pub mod filter_factory;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;

#[doc(hidden)]
pub mod __private {
    pub use indexmap::IndexMap;
}
