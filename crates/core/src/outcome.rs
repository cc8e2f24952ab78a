//! `Outcome<T>` and its fail-fast combinators.
//!
//! An outcome is a plain [`Result`] whose failure side is the workspace
//! [`Error`]. `map` and `?` come from `Result` itself; everything else is on
//! [`OutcomeExt`]. Every combinator is a passthrough once the receiver has
//! failed, so continuations after the first failure are never called.

use crate::error::Error;
use crate::optional::Optional;

pub type Outcome<T> = Result<T, Error>;

/// `Ok(value)` when `condition` holds, `Err(error)` otherwise.
pub fn success_if<T>(condition: bool, value: T, error: Error) -> Outcome<T> {
    if condition {
        Ok(value)
    } else {
        Err(error)
    }
}

/// `Err(error)` when `condition` holds, `Ok(value)` otherwise.
pub fn failure_if<T>(condition: bool, value: T, error: Error) -> Outcome<T> {
    success_if(!condition, value, error)
}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::Outcome<T> {}
}

/// Railway combinators on [`Outcome`].
pub trait OutcomeExt<T>: sealed::Sealed + Sized {
    /// Flattening composition: runs `f` on success and returns its outcome.
    ///
    /// Use this, not `map`, when the continuation can itself fail; `map`
    /// would produce `Outcome<Outcome<U>>`.
    fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>;

    /// Side effect on success; the receiver is returned unchanged.
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T);

    /// Side effect on failure; the receiver is returned unchanged.
    fn tap_on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error);

    /// Fails with `error` when `predicate` rejects the success value.
    fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool;

    /// Fails with the error `f` computes; the original value survives success.
    fn ensure_with<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<R>;

    /// Total elimination into a plain value.
    fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R;

    /// Replaces a failure with whatever `f` produces.
    fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>;

    /// Transforms the carried error; success passes through.
    fn map_on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error;

    /// Drops the error, keeping only presence.
    fn to_optional(self) -> Optional<T>;

    /// # Panics
    ///
    /// Panics on a failed outcome.
    fn into_value(self) -> T;

    /// # Panics
    ///
    /// Panics on a successful outcome.
    fn into_error(self) -> Error;
}

impl<T> OutcomeExt<T> for Outcome<T> {
    #[inline]
    fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.and_then(f)
    }

    #[inline]
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    fn tap_on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Err(error) = &self {
            f(error);
        }
        self
    }

    fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let value = self?;
        success_if(predicate(&value), value, error)
    }

    fn ensure_with<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<R>,
    {
        let value = self?;
        f(&value)?;
        Ok(value)
    }

    #[inline]
    fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    #[inline]
    fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        self.or_else(f)
    }

    #[inline]
    fn map_on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        self.map_err(f)
    }

    fn to_optional(self) -> Optional<T> {
        Optional::from(self.ok())
    }

    #[track_caller]
    fn into_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("attempted to read the value of a failed outcome: {error}"),
        }
    }

    #[track_caller]
    fn into_error(self) -> Error {
        match self {
            Ok(_) => panic!("attempted to read the error of a successful outcome"),
            Err(error) => error,
        }
    }
}

/// Collapses an accidentally nested outcome, the usual result of calling
/// `map` with a fallible continuation.
pub trait Unnest<T> {
    fn unnest(self) -> Outcome<T>;
}

impl<T> Unnest<T> for Outcome<Outcome<T>> {
    #[inline]
    fn unnest(self) -> Outcome<T> {
        self.and_then(|inner| inner)
    }
}
