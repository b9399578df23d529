//! URL check

use url::Url;

/// True if the string is an absolute URL with a scheme and a non-empty host.
///
/// Relative references and host-less URLs such as `mailto:` or `data:` are
/// rejected.
///
/// # Example
///
/// ```rust
/// use tollgate::check::url_is_valid;
///
/// assert!(url_is_valid("https://example.com"));
/// assert!(!url_is_valid("https//example.com"));
/// assert!(!url_is_valid("invalid-url"));
/// ```
pub fn url_is_valid(value: &str) -> bool {
    match Url::parse(value) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
