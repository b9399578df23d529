//! Testing utilities for rule runners
//!
//! Assertion macros for [`Validator`](crate::Validator) results, and a
//! [`CallProbe`] for checking which rules actually ran.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use tollgate::{assert_fails_with, assert_passes, Failure, Validator};
//!
//! let validator = Validator::<i64>::new().with_rule(|v: &i64| {
//!     if *v < 0 { Err(Failure::new("negative")) } else { Ok(()) }
//! });
//!
//! assert_passes!(validator, &5);
//! assert_fails_with!(validator, &-5, Failure::new("negative"));
//! ```
//!
//! ## Call Probe
//!
//! ```rust
//! use tollgate::testing::CallProbe;
//! use tollgate::Validator;
//!
//! let probe = CallProbe::new();
//! let validator = Validator::<str, &str>::new()
//!     .with_rule(|_: &str| -> Result<(), &'static str> { Err("stop") })
//!     .with_rule(probe.passing());
//!
//! assert_eq!(validator.validate("x"), Err("stop"));
//! assert_eq!(probe.calls(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::Rule;

/// Shared invocation counter for rules handed to a validator.
///
/// Clones share the same counter, so the probe kept by the test observes
/// calls made through rules owned by the validator.
#[derive(Debug, Clone, Default)]
pub struct CallProbe {
    calls: Arc<AtomicUsize>,
}

impl CallProbe {
    /// Create a probe with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total invocations across every rule created from this probe.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A rule that always passes and records the call.
    pub fn passing<E>(&self) -> CountingRule<E> {
        CountingRule {
            calls: Arc::clone(&self.calls),
            outcome: Ok(()),
        }
    }

    /// A rule that always fails with `failure` and records the call.
    pub fn failing<E>(&self, failure: E) -> CountingRule<E> {
        CountingRule {
            calls: Arc::clone(&self.calls),
            outcome: Err(failure),
        }
    }
}

/// Rule produced by a [`CallProbe`]. Returns a fixed outcome and bumps the
/// probe's counter on every call.
#[derive(Debug, Clone)]
pub struct CountingRule<E> {
    calls: Arc<AtomicUsize>,
    outcome: Result<(), E>,
}

impl<T: ?Sized, E: Clone + Send + Sync> Rule<T, E> for CountingRule<E> {
    fn check(&self, _value: &T) -> Result<(), E> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Assert that a validator accepts a value.
///
/// Panics with the failure if any rule rejects the value.
///
/// # Example
///
/// ```rust
/// use tollgate::{assert_passes, Validator};
///
/// let validator = Validator::<str>::new();
/// assert_passes!(validator, "anything");
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($validator:expr, $value:expr) => {
        match $validator.validate($value) {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected value to pass, got failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validator rejects a value.
///
/// # Example
///
/// ```rust
/// use tollgate::{assert_fails, Failure, Validator};
///
/// let validator = Validator::<str>::new()
///     .with_rule(|_: &str| -> Result<(), Failure> { Err("never".into()) });
/// assert_fails!(validator, "anything");
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($validator:expr, $value:expr) => {
        match $validator.validate($value) {
            ::std::result::Result::Err(_) => {}
            ::std::result::Result::Ok(()) => {
                panic!("Expected value to fail, but every rule passed");
            }
        }
    };
}

/// Assert that a validator rejects a value with a specific failure.
#[macro_export]
macro_rules! assert_fails_with {
    ($validator:expr, $value:expr, $expected:expr) => {
        match $validator.validate($value) {
            ::std::result::Result::Err(failure) => {
                assert_eq!(failure, $expected);
            }
            ::std::result::Result::Ok(()) => {
                panic!(
                    "Expected failure {:?}, but every rule passed",
                    $expected
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Failure, Validator};

    fn non_negative(v: &i64) -> Result<(), Failure> {
        if *v < 0 {
            Err(Failure::new("negative"))
        } else {
            Ok(())
        }
    }

    #[test]
    fn probe_counts_calls() {
        let probe = CallProbe::new();
        let validator = Validator::<i64>::new()
            .with_rule(probe.passing())
            .with_rule(probe.passing());

        validator.validate(&1).unwrap();
        validator.validate(&2).unwrap();
        assert_eq!(probe.calls(), 4);
    }

    #[test]
    fn probe_clones_share_counter() {
        let probe = CallProbe::new();
        let clone = probe.clone();
        let rule = clone.passing::<Failure>();

        Rule::<str, Failure>::check(&rule, "x").unwrap();
        assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn probe_failing_rule() {
        let probe = CallProbe::new();
        let validator = Validator::<i64, &str>::new().with_rule(probe.failing("boom"));

        assert_eq!(validator.validate(&0), Err("boom"));
        assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn assert_passes_macro() {
        let validator = Validator::<i64>::new().with_rule(non_negative);
        assert_passes!(validator, &5);
    }

    #[test]
    fn assert_fails_macro() {
        let validator = Validator::<i64>::new().with_rule(non_negative);
        assert_fails!(validator, &-5);
    }

    #[test]
    fn assert_fails_with_macro() {
        let validator = Validator::<i64>::new().with_rule(non_negative);
        assert_fails_with!(validator, &-5, Failure::new("negative"));
    }

    #[test]
    #[should_panic(expected = "Expected value to pass, got failure")]
    fn assert_passes_panics_on_failure() {
        let validator = Validator::<i64>::new().with_rule(non_negative);
        assert_passes!(validator, &-5);
    }

    #[test]
    #[should_panic(expected = "Expected value to fail")]
    fn assert_fails_panics_on_success() {
        let validator = Validator::<i64>::new().with_rule(non_negative);
        assert_fails!(validator, &5);
    }

    #[test]
    #[should_panic(expected = "Expected failure")]
    fn assert_fails_with_panics_on_success() {
        let validator = Validator::<i64>::new().with_rule(non_negative);
        assert_fails_with!(validator, &5, Failure::new("negative"));
    }
}
