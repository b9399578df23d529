//! Numeric range and format checks
//!
//! Format checks answer only "parses or not": a string that is numeric but
//! outside the representable range is reported the same as one that is not
//! numeric at all.

/// True if `value >= min`.
#[inline]
pub fn numeric_min_int(value: i64, min: i64) -> bool {
    value >= min
}

/// True if `value <= max`.
#[inline]
pub fn numeric_max_int(value: i64, max: i64) -> bool {
    value <= max
}

/// True if `value >= min`. NaN on either side is never in range.
///
/// # Example
///
/// ```rust
/// use tollgate::check::numeric_min_float;
///
/// assert!(numeric_min_float(1.5, 1.0));
/// assert!(!numeric_min_float(1.5, 2.0));
/// assert!(!numeric_min_float(f64::NAN, 0.0));
/// ```
#[inline]
pub fn numeric_min_float(value: f64, min: f64) -> bool {
    value >= min
}

/// True if `value <= max`. NaN on either side is never in range.
#[inline]
pub fn numeric_max_float(value: f64, max: f64) -> bool {
    value <= max
}

/// True if the string is a base-10 integer that fits in an `i64`.
///
/// An optional leading `+` or `-` is accepted; surrounding whitespace is not.
///
/// # Example
///
/// ```rust
/// use tollgate::check::numeric_is_int;
///
/// assert!(numeric_is_int("123"));
/// assert!(numeric_is_int("-42"));
/// assert!(!numeric_is_int("abc"));
/// assert!(!numeric_is_int("1.5"));
/// ```
#[inline]
pub fn numeric_is_int(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// True if the string is a decimal floating-point literal representable as
/// an `f64`.
///
/// Exponents (`1e3`) and the literals `inf`, `infinity` and `nan` (any case,
/// optional sign) are accepted. A finite literal too large for `f64`, such as
/// `1e400`, is rejected.
///
/// # Example
///
/// ```rust
/// use tollgate::check::numeric_is_float;
///
/// assert!(numeric_is_float("1.23"));
/// assert!(numeric_is_float("-4e10"));
/// assert!(!numeric_is_float("abc"));
/// assert!(!numeric_is_float("1e400"));
/// ```
pub fn numeric_is_float(value: &str) -> bool {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_infinite() => is_infinity_literal(value),
        Ok(_) => true,
        Err(_) => false,
    }
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
