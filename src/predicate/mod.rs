//! Predicate combinators and the bridge from predicates to rules
//!
//! Catalog checks in [`crate::check`] are plain functions returning `bool`.
//! This module lets them be composed with `and` / `or` / `not` and attached
//! to a [`Validator`](crate::Validator) with [`ensure`] or [`ensure_with`].
//!
//! # Example
//!
//! ```rust
//! use tollgate::check::{string_contains_chars, string_min_length};
//! use tollgate::predicate::*;
//! use tollgate::Validator;
//!
//! let strong_enough = (|s: &str| string_min_length(s, 8))
//!     .and(|s: &str| string_contains_chars(s, "@"));
//!
//! let validator = Validator::<str>::new()
//!     .with_rule(ensure(strong_enough, "must be 8+ chars and contain @"));
//!
//! assert!(validator.validate("user@example").is_ok());
//! assert!(validator.validate("user").is_err());
//! ```

mod combinators;
mod rule;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use rule::{ensure, ensure_with, Ensure, EnsureWith};
