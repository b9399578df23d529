//! String checks
//!
//! Lengths are measured in bytes, matching `str::len`.

use regex::Regex;

/// True if the string has length zero.
///
/// # Example
///
/// ```rust
/// use tollgate::check::string_is_empty;
///
/// assert!(string_is_empty(""));
/// assert!(!string_is_empty("hello"));
/// ```
#[inline]
pub fn string_is_empty(value: &str) -> bool {
    value.is_empty()
}

/// True if the string is at least `min` bytes long.
///
/// # Example
///
/// ```rust
/// use tollgate::check::string_min_length;
///
/// assert!(string_min_length("hello", 5));
/// assert!(!string_min_length("hello", 6));
/// ```
#[inline]
pub fn string_min_length(value: &str, min: usize) -> bool {
    value.len() >= min
}

/// True if the string is at most `max` bytes long.
///
/// # Example
///
/// ```rust
/// use tollgate::check::string_max_length;
///
/// assert!(string_max_length("hello", 5));
/// assert!(!string_max_length("hello", 4));
/// ```
#[inline]
pub fn string_max_length(value: &str, max: usize) -> bool {
    value.len() <= max
}

/// True if `pattern` matches somewhere in the string.
///
/// The pattern is not implicitly anchored; use `^...$` to match the whole
/// string. Compiling the pattern is left to the caller, so a malformed
/// pattern is reported by `Regex::new` rather than here.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use tollgate::check::string_matches_regex;
///
/// let lowercase = Regex::new("^[a-z]+$").unwrap();
/// assert!(string_matches_regex("hello", &lowercase));
/// assert!(!string_matches_regex("hello123", &lowercase));
/// ```
#[inline]
pub fn string_matches_regex(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// Compile `pattern` and report whether it matches somewhere in the string.
///
/// Returns `Err` when the pattern is malformed. Prefer
/// [`string_matches_regex`] with a pre-compiled pattern when checking many
/// values.
///
/// # Example
///
/// ```rust
/// use tollgate::check::string_matches_pattern;
///
/// assert_eq!(string_matches_pattern("hello123", "^[a-z0-9]+$").ok(), Some(true));
/// assert_eq!(string_matches_pattern("hello123", "^[a-z]+$").ok(), Some(false));
/// assert!(string_matches_pattern("hello", "([a-z]").is_err());
/// ```
pub fn string_matches_pattern(value: &str, pattern: &str) -> Result<bool, regex::Error> {
    let compiled = Regex::new(pattern)?;
    Ok(compiled.is_match(value))
}

/// True if every character of `chars` occurs at least once in the string.
///
/// Order and repetition in `chars` do not matter. An empty `chars` is
/// trivially satisfied.
///
/// # Example
///
/// ```rust
/// use tollgate::check::string_contains_chars;
///
/// assert!(string_contains_chars("hello", "helo"));
/// assert!(!string_contains_chars("hello", "aeiou"));
/// ```
pub fn string_contains_chars(value: &str, chars: &str) -> bool {
    chars.chars().all(|c| value.contains(c))
}
