//! Shows the trace event emitted when a rule rejects a value
//!
//! Run with: cargo run --example traced_rules --features tracing

use tollgate::check::{email_is_valid, string_max_length};
use tollgate::predicate::ensure;
use tollgate::Validator;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let email = Validator::<str>::new()
        .with_rule(ensure(|s: &str| string_max_length(s, 254), "email is too long"))
        .with_rule(ensure(|s: &str| email_is_valid(s), "email is malformed"));

    for input in ["user@example.com", "userexample.com"] {
        match email.validate(input) {
            Ok(()) => tracing::info!(input, "accepted"),
            Err(failure) => tracing::warn!(input, %failure, "rejected"),
        }
    }
}
