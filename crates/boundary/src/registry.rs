//! Static registry of named field constructors.
//!
//! Maps a rule name to a constructor that validates one raw field and returns
//! its normalized text. Used by the CLI to turn `--rule field=rule` flags into
//! calls without a dispatch table of its own.

use crate::construct::{EmailAddress, Integer, TryCreate};
use railyard_core::{Error, Outcome, OutcomeExt};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Validates `raw` for `field` and returns the normalized value.
pub type Constructor = fn(field: &str, raw: &str) -> Outcome<String>;

crate::required_string!(
    /// Any non-blank text, trimmed.
    pub RequiredText
);

/// Returns the constructor registered under `name`, if any.
pub fn lookup(name: &str) -> Option<&'static Constructor> {
    let found = CONSTRUCTORS.get(name);
    if found.is_none() {
        tracing::debug!(rule = name, "no constructor registered");
    }
    found
}

/// Registered rule names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CONSTRUCTORS.keys().copied().collect();
    names.sort_unstable();
    names
}

static CONSTRUCTORS: LazyLock<HashMap<&'static str, Constructor>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, Constructor> = HashMap::new();

    m.insert("required", required);
    m.insert("email", email);
    m.insert("integer", integer);
    m.insert("positive", positive);

    m
});

fn required(field: &str, raw: &str) -> Outcome<String> {
    RequiredText::try_create(raw, Some(field)).map(String::from)
}

fn email(field: &str, raw: &str) -> Outcome<String> {
    EmailAddress::try_create(raw, Some(field)).map(String::from)
}

fn integer(field: &str, raw: &str) -> Outcome<String> {
    Integer::try_create(raw, Some(field)).map(|n| n.to_string())
}

fn positive(field: &str, raw: &str) -> Outcome<String> {
    Integer::try_create(raw, Some(field))
        .ensure(
            |n| n.value() > 0,
            Error::validation(field, format!("{} must be greater than zero", raw.trim())),
        )
        .map(|n| n.to_string())
}
