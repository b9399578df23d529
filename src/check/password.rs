//! Password policy check

/// Minimum requirements for a password.
///
/// Symbols are the printable ASCII punctuation characters: `!` through `/`,
/// `:` through `@`, `[` through `` ` ``, and `{` through `~`. Non-ASCII
/// characters count toward length but are neither digits nor symbols.
///
/// With the `serde` feature enabled the policy can be loaded from
/// configuration; missing fields default to zero.
///
/// # Example
///
/// ```rust
/// use tollgate::check::PasswordPolicy;
///
/// let policy = PasswordPolicy::new(8, 2, 1);
/// assert!(policy.check("P@ssw0rd2"));
/// assert!(!policy.check("Password"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PasswordPolicy {
    /// Minimum length in bytes.
    pub min_length: usize,
    /// Minimum number of ASCII digits.
    pub min_digits: usize,
    /// Minimum number of ASCII punctuation characters.
    pub min_symbols: usize,
}

impl PasswordPolicy {
    /// Create a policy from its three minimums.
    pub fn new(min_length: usize, min_digits: usize, min_symbols: usize) -> Self {
        PasswordPolicy {
            min_length,
            min_digits,
            min_symbols,
        }
    }

    /// True if `password` meets every minimum of this policy.
    pub fn check(&self, password: &str) -> bool {
        if password.len() < self.min_length {
            return false;
        }

        let mut digits = 0;
        let mut symbols = 0;
        for c in password.chars() {
            if c.is_ascii_digit() {
                digits += 1;
            } else if c.is_ascii_punctuation() {
                symbols += 1;
            }
        }

        digits >= self.min_digits && symbols >= self.min_symbols
    }
}

impl crate::predicate::Predicate<str> for PasswordPolicy {
    #[inline]
    fn check(&self, value: &str) -> bool {
        PasswordPolicy::check(self, value)
    }
}

/// True if `password` is at least `min_length` bytes long and contains at
/// least `min_digits` ASCII digits and `min_symbols` ASCII punctuation
/// characters.
///
/// # Example
///
/// ```rust
/// use tollgate::check::password_matches_policy;
///
/// assert!(password_matches_policy("P@ssw0rd2", 8, 2, 1));
/// assert!(!password_matches_policy("P@ssw0rd", 8, 2, 1)); // one digit
/// ```
pub fn password_matches_policy(
    password: &str,
    min_length: usize,
    min_digits: usize,
    min_symbols: usize,
) -> bool {
    PasswordPolicy::new(min_length, min_digits, min_symbols).check(password)
}
