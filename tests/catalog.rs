//! Catalog checks through the public API, including their use as rules

use chrono::{Duration, Utc};
use regex::Regex;
use tollgate::prelude::*;
use tollgate::{assert_fails_with, assert_passes};

#[test]
fn string_checks() {
    assert!(string_is_empty(""));
    assert!(string_min_length("hello", 5));
    assert!(!string_min_length("hello", 6));
    assert!(string_max_length("hello", 5));
    assert!(!string_matches_regex("hello123", &Regex::new("^[a-z]+$").unwrap()));
    assert!(!string_contains_chars("hello", "aeiou"));
}

#[test]
fn numeric_checks() {
    assert!(!numeric_min_int(5, 10));
    assert!(numeric_max_int(5, 10));
    assert!(!numeric_min_float(1.5, 2.0));
    assert!(numeric_max_float(1.5, 2.0));
    assert!(numeric_is_int("123"));
    assert!(!numeric_is_int("abc"));
    assert!(numeric_is_float("1.23"));
}

#[test]
fn email_and_url_checks() {
    assert!(email_is_valid("user@example.com"));
    assert!(!email_is_valid("userexample.com"));
    assert!(url_is_valid("https://example.com"));
    assert!(!url_is_valid("https//example.com"));
}

#[test]
fn datetime_checks() {
    assert!(datetime_is_valid("2022-01-01", "%Y-%m-%d"));
    assert!(datetime_is_future(&(Utc::now() + Duration::hours(1))));
    assert!(datetime_is_past(&(Utc::now() - Duration::hours(1))));
}

#[test]
fn password_and_file_checks() {
    assert!(password_matches_policy("P@ssw0rd2", 8, 2, 1));
    assert!(file_is_valid_extension("example.jpg", &[".jpg", ".png"]));
    assert!(!file_is_valid_extension("example.jpg", &[".doc", ".pdf"]));
}

#[test]
fn signup_form_rules() {
    let username = Validator::<str>::new()
        .with_rule(ensure((|s: &str| string_is_empty(s)).not(), "username is required"))
        .with_rule(ensure(|s: &str| string_max_length(s, 16), "username is too long"))
        .with_rule(ensure(
            |s: &str| string_matches_regex(s, &USERNAME),
            "username may only contain lowercase letters, digits and '_'",
        ));

    assert_passes!(username, "alice_01");
    assert_fails_with!(username, "", Failure::new("username is required"));
    assert_fails_with!(
        username,
        "a_very_long_username",
        Failure::new("username is too long")
    );
    assert_fails_with!(
        username,
        "Alice",
        Failure::new("username may only contain lowercase letters, digits and '_'")
    );

    let policy = PasswordPolicy::new(10, 2, 1);
    let password = Validator::<str>::new().with_rule(ensure(policy, "password is too weak"));

    assert_passes!(password, "c0rrect-h0rse");
    assert_fails_with!(password, "password", Failure::new("password is too weak"));
}

#[test]
fn upload_rules() {
    let upload = Validator::<str>::new()
        .with_rule(ensure(
            |name: &str| file_is_valid_extension(name, &[".png", ".jpg", ".gif"]),
            "unsupported image type",
        ))
        .with_rule(ensure_with(
            |name: &str| string_max_length(name, 64),
            |name: &str| Failure::new(format!("file name is {} bytes, limit is 64", name.len())),
        ));

    assert_passes!(upload, "avatar.png");
    assert_fails_with!(upload, "avatar.bmp", Failure::new("unsupported image type"));

    let long_name = format!("{}.png", "x".repeat(70));
    assert_fails_with!(
        upload,
        long_name.as_str(),
        Failure::new("file name is 74 bytes, limit is 64")
    );
}

#[test]
fn numeric_field_from_text() {
    let quantity = Validator::<str>::new()
        .with_rule(ensure(|s: &str| numeric_is_int(s), "quantity must be a whole number"))
        .with_rule(ensure(
            |s: &str| s.parse::<i64>().is_ok_and(|n| numeric_min_int(n, 1) && numeric_max_int(n, 99)),
            "quantity must be between 1 and 99",
        ));

    assert_passes!(quantity, "12");
    assert_fails_with!(quantity, "1.5", Failure::new("quantity must be a whole number"));
    assert_fails_with!(quantity, "0", Failure::new("quantity must be between 1 and 99"));
}

static USERNAME: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new("^[a-z0-9_]+$").unwrap());
