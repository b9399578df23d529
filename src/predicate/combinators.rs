//! Core predicate trait and logical combinators

/// A composable boolean check over values of type `T`.
///
/// Every `Fn(&T) -> bool` closure is a predicate, so catalog functions plug in
/// with a one-line closure.
///
/// # Example
///
/// ```rust
/// use tollgate::check::{string_contains_chars, string_min_length};
/// use tollgate::predicate::*;
///
/// let long = |s: &str| string_min_length(s, 8);
/// let has_at = |s: &str| string_contains_chars(s, "@");
///
/// let p = long.and(has_at);
/// assert!(p.check("user@example"));
/// assert!(!p.check("u@x"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-chaining combinators for predicates.
///
/// Each method returns a concrete type, so a chain compiles down to the
/// underlying checks.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true. `other` is skipped when
    /// `self` is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::check::{numeric_max_int, numeric_min_int};
    /// use tollgate::predicate::*;
    ///
    /// let p = (|n: &i64| numeric_min_int(*n, 1)).and(|n: &i64| numeric_max_int(*n, 10));
    /// assert!(p.check(&5));
    /// assert!(!p.check(&0));
    /// assert!(!p.check(&11));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true. `other` is skipped when `self`
    /// is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::check::string_is_empty;
    /// use tollgate::predicate::*;
    ///
    /// let filled = (|s: &str| string_is_empty(s)).not();
    /// assert!(filled.check("x"));
    /// assert!(!filled.check(""));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
