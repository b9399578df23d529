//! A tour of the check catalog and the rule runner
//!
//! Run with: cargo run --example catalog_tour

use chrono::{Duration, Utc};
use regex::Regex;
use tollgate::check::*;
use tollgate::{Failure, Validator};

fn main() {
    println!("=== String ===");
    println!("string_is_empty: {}", string_is_empty(""));
    println!("string_min_length: {}", string_min_length("hello", 5));
    println!("string_max_length: {}", string_max_length("hello", 5));
    match Regex::new("^[a-z]+$") {
        Ok(lowercase) => println!(
            "string_matches_regex: {}",
            string_matches_regex("hello123", &lowercase)
        ),
        Err(e) => println!("string_matches_regex: bad pattern: {}", e),
    }
    println!(
        "string_contains_chars: {}",
        string_contains_chars("hello", "aeiou")
    );

    println!("\n=== Numeric ===");
    println!("numeric_min_int: {}", numeric_min_int(5, 10));
    println!("numeric_max_int: {}", numeric_max_int(5, 10));
    println!("numeric_min_float: {}", numeric_min_float(1.5, 2.0));
    println!("numeric_max_float: {}", numeric_max_float(1.5, 2.0));
    println!("numeric_is_int: {}", numeric_is_int("123"));
    println!("numeric_is_float: {}", numeric_is_float("1.23"));

    println!("\n=== Email / URL ===");
    println!("email_is_valid: {}", email_is_valid("user@example.com"));
    println!("email_is_valid: {}", email_is_valid("userexample.com"));
    println!("url_is_valid: {}", url_is_valid("https://example.com"));
    println!("url_is_valid: {}", url_is_valid("https//example.com"));

    println!("\n=== Date and time ===");
    println!(
        "datetime_is_valid: {}",
        datetime_is_valid("2022-01-01", "%Y-%m-%d")
    );
    println!(
        "datetime_is_future: {}",
        datetime_is_future(&(Utc::now() + Duration::hours(1)))
    );
    println!(
        "datetime_is_past: {}",
        datetime_is_past(&(Utc::now() - Duration::hours(1)))
    );

    println!("\n=== Password / file ===");
    println!(
        "password_matches_policy: {}",
        password_matches_policy("P@ssw0rd2", 8, 2, 1)
    );
    println!(
        "file_is_valid_extension: {}",
        file_is_valid_extension("example.jpg", &[".jpg", ".png"])
    );

    println!("\n=== Custom rules ===");
    let validator = Validator::<i64>::new().with_rule(|value: &i64| {
        if *value < 0 {
            Err(Failure::new("value must be positive"))
        } else {
            Ok(())
        }
    });
    for value in [5, -5] {
        match validator.validate(&value) {
            Ok(()) => println!("validate({}): ok", value),
            Err(failure) => println!("validate({}): {}", value, failure),
        }
    }
}
