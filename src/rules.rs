//! Fail-fast rule runner
//!
//! A [`Validator`] holds an ordered list of [`Rule`]s and runs them against a
//! single value. The first rule that rejects the value wins: its failure is
//! returned as-is and the remaining rules are never invoked.
//!
//! # Examples
//!
//! ```
//! use tollgate::{Failure, Validator};
//!
//! let mut validator = Validator::<i64>::new();
//! validator.add_rule(|value: &i64| {
//!     if *value < 0 {
//!         Err(Failure::new("value must be positive"))
//!     } else {
//!         Ok(())
//!     }
//! });
//!
//! assert_eq!(validator.validate(&5), Ok(()));
//! assert_eq!(
//!     validator.validate(&-5),
//!     Err(Failure::new("value must be positive"))
//! );
//! ```
//!
//! Rules are usually built from catalog predicates with
//! [`ensure`](crate::predicate::ensure):
//!
//! ```
//! use tollgate::check::{string_max_length, string_min_length};
//! use tollgate::predicate::ensure;
//! use tollgate::Validator;
//!
//! let username = Validator::<str>::new()
//!     .with_rule(ensure(|s: &str| string_min_length(s, 3), "too short"))
//!     .with_rule(ensure(|s: &str| string_max_length(s, 16), "too long"));
//!
//! assert!(username.validate("alice").is_ok());
//! assert_eq!(username.validate("al").unwrap_err().message(), "too short");
//! ```

use std::fmt;

use crate::Failure;

/// A single check against a value of type `T`.
///
/// `Ok(())` means the value passed; `Err(e)` carries the failure description.
/// Any `Fn(&T) -> Result<(), E>` closure is a rule.
///
/// # Example
///
/// ```rust
/// use tollgate::Rule;
///
/// struct NonZero;
///
/// impl Rule<i32, &'static str> for NonZero {
///     fn check(&self, value: &i32) -> Result<(), &'static str> {
///         if *value == 0 { Err("must not be zero") } else { Ok(()) }
///     }
/// }
///
/// assert_eq!(NonZero.check(&0), Err("must not be zero"));
/// assert_eq!(NonZero.check(&1), Ok(()));
/// ```
pub trait Rule<T: ?Sized, E>: Send + Sync {
    /// Check the value, returning the failure if it is rejected.
    fn check(&self, value: &T) -> Result<(), E>;
}

impl<T: ?Sized, E, F> Rule<T, E> for F
where
    F: Fn(&T) -> Result<(), E> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> Result<(), E> {
        self(value)
    }
}

/// An ordered, append-only sequence of rules run with first-failure-wins
/// semantics.
///
/// Insertion order is evaluation order. Rules cannot be removed or reordered.
/// The runner does no locking of its own; share one across threads behind a
/// `Mutex` or `RwLock` if rules are added while it is in use.
///
/// A rule that panics is not caught: the panic unwinds through
/// [`validate`](Validator::validate) to its caller.
pub struct Validator<T: ?Sized, E = Failure> {
    rules: Vec<Box<dyn Rule<T, E>>>,
}

impl<T: ?Sized, E> Validator<T, E> {
    /// Create an empty validator. It accepts every value until rules are added.
    pub fn new() -> Self {
        Validator { rules: Vec::new() }
    }

    /// Append a rule to the end of the sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::Validator;
    ///
    /// let mut validator = Validator::<i32, &str>::new();
    /// validator
    ///     .add_rule(|v: &i32| if *v > 0 { Ok(()) } else { Err("not positive") })
    ///     .add_rule(|v: &i32| if *v < 100 { Ok(()) } else { Err("too large") });
    ///
    /// assert_eq!(validator.len(), 2);
    /// assert_eq!(validator.validate(&500), Err("too large"));
    /// ```
    pub fn add_rule<R>(&mut self, rule: R) -> &mut Self
    where
        R: Rule<T, E> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Builder form of [`add_rule`](Validator::add_rule).
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<T, E> + 'static,
    {
        self.add_rule(rule);
        self
    }

    /// Run every rule in insertion order against `value`.
    ///
    /// Returns the failure of the first rule that rejects the value, exactly as
    /// that rule produced it. Later rules are not invoked. With no rules, or
    /// when every rule passes, returns `Ok(())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::Validator;
    ///
    /// let validator = Validator::<str, &str>::new()
    ///     .with_rule(|s: &str| if s.len() >= 5 { Ok(()) } else { Err("too short") })
    ///     .with_rule(|s: &str| if s.len() <= 10 { Ok(()) } else { Err("too long") });
    ///
    /// assert_eq!(validator.validate("hello"), Ok(()));
    /// assert_eq!(validator.validate("hi"), Err("too short"));
    /// ```
    pub fn validate(&self, value: &T) -> Result<(), E> {
        for (_index, rule) in self.rules.iter().enumerate() {
            if let Err(failure) = rule.check(value) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    rule = _index,
                    rules = self.rules.len(),
                    "validation rule rejected value"
                );
                return Err(failure);
            }
        }
        Ok(())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules have been registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized, E> Default for Validator<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> fmt::Debug for Validator<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}
