//! Foundation vocabulary shared by rules, factories and engines.
//!
//! This module owns the closed enumerations the rest of the crate is built
//! on:
//!
//! - **Kinds**: [`FilterKind`], [`FilterCategory`], selecting which
//!   transform runs
//! - **Flags**: [`FilterFlags`] plus the [`add_flag_if`]/[`add_flags_if`]
//!   helpers, boolean toggles OR'd into a bit set
//! - **Engine seam**: [`FilterEngine`], [`InputSource`], the external
//!   collaborator contract
//!
//! The vocabulary is deliberately an interface boundary: nothing here knows
//! how any kind is actually implemented, and engine adapters translate these
//! identifiers into their backing library's own.

pub mod engine;
pub mod flags;
pub mod kind;

pub use engine::{FilterEngine, InputSource};
pub use flags::{FilterFlags, add_flag_if, add_flags_if};
pub use kind::{FilterCategory, FilterKind};
