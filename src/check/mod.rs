//! Catalog of standalone validity checks
//!
//! Every function here is pure and returns `bool`. Input that cannot be
//! interpreted (a non-numeric string given to a numeric format check, an
//! unparseable URL) is reported as `false`, never as an error or panic.
//!
//! | Subject | Checks |
//! |---|---|
//! | string | [`string_is_empty`], [`string_min_length`], [`string_max_length`], [`string_matches_regex`], [`string_matches_pattern`], [`string_contains_chars`] |
//! | numeric | [`numeric_min_int`], [`numeric_max_int`], [`numeric_min_float`], [`numeric_max_float`], [`numeric_is_int`], [`numeric_is_float`] |
//! | email | [`email_is_valid`] |
//! | URL | [`url_is_valid`] |
//! | date/time | [`datetime_is_valid`], [`datetime_is_future`], [`datetime_is_past`], [`datetime_is_future_at`], [`datetime_is_past_at`] |
//! | password | [`password_matches_policy`], [`PasswordPolicy`] |
//! | file | [`file_is_valid_extension`] |
//!
//! # Example
//!
//! ```rust
//! use tollgate::check::*;
//!
//! assert!(string_is_empty(""));
//! assert!(numeric_is_int("123"));
//! assert!(email_is_valid("user@example.com"));
//! assert!(url_is_valid("https://example.com"));
//! assert!(password_matches_policy("P@ssw0rd2", 8, 2, 1));
//! assert!(file_is_valid_extension("example.jpg", &[".jpg", ".png"]));
//! ```

mod datetime;
mod email;
mod file;
mod numeric;
mod password;
mod string;
mod uri;

pub use datetime::{
    datetime_is_future, datetime_is_future_at, datetime_is_past, datetime_is_past_at,
    datetime_is_valid,
};
pub use email::email_is_valid;
pub use file::file_is_valid_extension;
pub use numeric::{
    numeric_is_float, numeric_is_int, numeric_max_float, numeric_max_int, numeric_min_float,
    numeric_min_int,
};
pub use password::{password_matches_policy, PasswordPolicy};
pub use string::{
    string_contains_chars, string_is_empty, string_matches_pattern, string_matches_regex,
    string_max_length, string_min_length,
};
pub use uri::url_is_valid;
