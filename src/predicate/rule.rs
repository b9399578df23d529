//! Turning predicates into rules
//!
//! A predicate answers yes or no; a [`Rule`] also says why. These adapters pair a
//! predicate with the failure to report when it answers no.

use super::combinators::Predicate;
use crate::Rule;

/// Rule that reports a fixed failure when its predicate is false.
///
/// Created by [`ensure`].
#[derive(Clone, Debug)]
pub struct Ensure<P, F> {
    predicate: P,
    failure: F,
}

impl<T, E, P, F> Rule<T, E> for Ensure<P, F>
where
    T: ?Sized,
    P: Predicate<T>,
    F: Clone + Into<E> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> Result<(), E> {
        if self.predicate.check(value) {
            Ok(())
        } else {
            Err(self.failure.clone().into())
        }
    }
}

/// Build a rule from a predicate and the failure it reports.
///
/// The failure is cloned on every rejection and converted into the
/// validator's error type with `Into`.
///
/// # Example
///
/// ```rust
/// use tollgate::check::email_is_valid;
/// use tollgate::predicate::ensure;
/// use tollgate::{Failure, Validator};
///
/// let validator = Validator::<str>::new()
///     .with_rule(ensure(|s: &str| email_is_valid(s), "invalid email"));
///
/// assert_eq!(validator.validate("user@example.com"), Ok(()));
/// assert_eq!(
///     validator.validate("userexample.com"),
///     Err(Failure::new("invalid email"))
/// );
/// ```
pub fn ensure<P, F>(predicate: P, failure: F) -> Ensure<P, F> {
    Ensure { predicate, failure }
}

/// Rule that builds its failure from the rejected value.
///
/// Created by [`ensure_with`].
#[derive(Clone, Debug)]
pub struct EnsureWith<P, F> {
    predicate: P,
    on_failure: F,
}

impl<T, E, P, F> Rule<T, E> for EnsureWith<P, F>
where
    T: ?Sized,
    P: Predicate<T>,
    F: Fn(&T) -> E + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> Result<(), E> {
        if self.predicate.check(value) {
            Ok(())
        } else {
            Err((self.on_failure)(value))
        }
    }
}

/// Build a rule whose failure is computed from the rejected value.
///
/// # Example
///
/// ```rust
/// use tollgate::check::string_max_length;
/// use tollgate::predicate::ensure_with;
/// use tollgate::{Failure, Validator};
///
/// let validator = Validator::<str>::new().with_rule(ensure_with(
///     |s: &str| string_max_length(s, 5),
///     |s: &str| Failure::new(format!("'{}' is longer than 5 bytes", s)),
/// ));
///
/// assert_eq!(
///     validator.validate("toolong").unwrap_err().message(),
///     "'toolong' is longer than 5 bytes"
/// );
/// ```
pub fn ensure_with<P, F>(predicate: P, on_failure: F) -> EnsureWith<P, F> {
    EnsureWith {
        predicate,
        on_failure,
    }
}
