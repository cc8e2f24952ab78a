//! Presence/absence container without error context.

use crate::error::Error;
use crate::outcome::Outcome;

/// Either a value or nothing.
///
/// Deliberately narrower than [`Option`]: there is no flat-map. Anything that
/// needs to compose with a failure reason converts with
/// [`to_outcome`](Optional::to_outcome) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    pub const fn none() -> Self {
        Self(None)
    }

    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    #[inline]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub const fn has_no_value(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics when empty. Check [`has_value`](Self::has_value) or eliminate
    /// with [`to_outcome`](Self::to_outcome) instead.
    #[track_caller]
    pub fn value(self) -> T {
        match self.0 {
            Some(value) => value,
            None => panic!("attempted to read the value of an empty Optional"),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    pub fn value_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.0.unwrap_or_else(f)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        Optional(self.0.map(f))
    }

    /// `Ok(value)` when present, `Err(if_none)` otherwise.
    pub fn to_outcome(self, if_none: Error) -> Outcome<T> {
        self.0.ok_or(if_none)
    }

    /// Like [`to_outcome`](Self::to_outcome), building the error only when empty.
    pub fn to_outcome_with<F: FnOnce() -> Error>(self, if_none: F) -> Outcome<T> {
        self.0.ok_or_else(if_none)
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option_maps_presence() {
        let some = Optional::from(Some(3));
        let none = Optional::<i32>::from(None);
        assert!(some.has_value());
        assert!(none.has_no_value());
        assert_eq!(some.value(), 3);
    }

    #[test]
    fn map_is_noop_on_none() {
        let mut called = false;
        let mapped = Optional::<i32>::none().map(|v| {
            called = true;
            v + 1
        });
        assert!(!called);
        assert_eq!(mapped, Optional::none());
        assert_eq!(Optional::some(2).map(|v| v * 10), Optional::some(20));
    }

    #[test]
    fn to_outcome_uses_supplied_error_only_when_empty() {
        let err = Error::not_found("user");
        assert_eq!(Optional::<i32>::none().to_outcome(err.clone()), Err(err.clone()));
        assert_eq!(Optional::some(5).to_outcome(err), Ok(5));
    }

    #[test]
    fn to_outcome_with_is_lazy() {
        let outcome = Optional::some("x").to_outcome_with(|| panic!("must not build error"));
        assert_eq!(outcome, Ok("x"));
    }

    #[test]
    fn equality_follows_contents() {
        assert_eq!(Optional::some("a"), Optional::some("a"));
        assert_ne!(Optional::some("a"), Optional::some("b"));
        assert_eq!(Optional::<&str>::none(), Optional::none());
        assert_ne!(Optional::some("a"), Optional::none());
    }

    #[test]
    fn accessors_do_not_consume() {
        let name = Optional::some(String::from("ada"));
        assert_eq!(name.get().map(String::as_str), Some("ada"));
        assert_eq!(name.as_ref().map(|s| s.len()).value(), 3);
        assert_eq!(name.value_or_else(String::new), "ada");
        assert_eq!(Optional::<String>::default().value_or("anon".into()), "anon");
    }

    #[test]
    #[should_panic(expected = "empty Optional")]
    fn reading_empty_value_panics() {
        Optional::<u8>::none().value();
    }
}
