//! Email address check

use regex::Regex;
use std::sync::LazyLock;

// local-part "@" domain, with a TLD of two or more letters. ASCII only.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// True if the string looks like a conventional email address.
///
/// This is a shape check: one `@`, a non-empty ASCII local part, and a
/// dotted domain ending in an alphabetic label. It does not consult DNS and
/// does not accept quoted local parts or internationalized domains.
///
/// # Example
///
/// ```rust
/// use tollgate::check::email_is_valid;
///
/// assert!(email_is_valid("user@example.com"));
/// assert!(!email_is_valid("userexample.com"));
/// ```
pub fn email_is_valid(value: &str) -> bool {
    EMAIL.is_match(value)
}
