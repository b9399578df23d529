//! # Tollgate
//!
//! Small validation helpers: a catalog of standalone checks and a fail-fast
//! rule runner.
//!
//! - [`check`] holds pure functions such as [`check::email_is_valid`] or
//!   [`check::password_matches_policy`] that answer `true` or `false`.
//! - [`Validator`] runs an ordered list of [`Rule`]s against one value and
//!   reports the first failure.
//! - [`predicate`] composes checks with `and` / `or` / `not` and turns them
//!   into rules with [`predicate::ensure`].
//!
//! ## Quick Example
//!
//! ```rust
//! use tollgate::check::{email_is_valid, string_max_length};
//! use tollgate::predicate::ensure;
//! use tollgate::{Failure, Validator};
//!
//! let email = Validator::<str>::new()
//!     .with_rule(ensure(|s: &str| string_max_length(s, 254), "email is too long"))
//!     .with_rule(ensure(|s: &str| email_is_valid(s), "email is malformed"));
//!
//! assert_eq!(email.validate("user@example.com"), Ok(()));
//! assert_eq!(
//!     email.validate("userexample.com"),
//!     Err(Failure::new("email is malformed"))
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace` event when a rule rejects a value.
//! - `serde`: (de)serialize [`check::PasswordPolicy`] from configuration.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod error;
pub mod predicate;
pub mod rules;
pub mod testing;

// Re-exports
pub use error::Failure;
pub use rules::{Rule, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::*;
    pub use crate::error::Failure;
    pub use crate::predicate::{ensure, ensure_with, Predicate, PredicateExt};
    pub use crate::rules::{Rule, Validator};
}
