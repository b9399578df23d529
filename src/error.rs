//! Default failure description for rule runners
//!
//! [`Failure`] is the error type a [`Validator`](crate::Validator) uses when the
//! caller does not pick one. It is a plain message: rules produce it, the runner
//! hands it back untouched.
//!
//! # Examples
//!
//! ```
//! use tollgate::Failure;
//!
//! let failure = Failure::new("value must be positive");
//! assert_eq!(failure.message(), "value must be positive");
//! assert_eq!(failure.to_string(), "value must be positive");
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A human-readable description of why a value was rejected.
///
/// Static messages are stored without allocating; formatted messages are
/// stored as owned strings.
///
/// # Examples
///
/// ```
/// use tollgate::Failure;
///
/// let fixed: Failure = "too short".into();
/// let formatted: Failure = format!("expected at most {} chars", 10).into();
///
/// assert_eq!(fixed.message(), "too short");
/// assert_eq!(formatted.message(), "expected at most 10 chars");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    message: Cow<'static, str>,
}

impl Failure {
    /// Create a failure from a static or owned message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure and return its message.
    ///
    /// # Examples
    ///
    /// ```
    /// use tollgate::Failure;
    ///
    /// let message = Failure::new("not a string").into_message();
    /// assert_eq!(message, "not a string");
    /// ```
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Failure {}

impl From<&'static str> for Failure {
    fn from(message: &'static str) -> Self {
        Failure::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::new(message)
    }
}
