//! Ready outcome, pending continuation.
//!
//! The receiver is already known; only the continuation suspends. A failed
//! receiver never calls the continuation, so no future is even created.

use railyard_core::{Error, Outcome};
use std::future::Future;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for railyard_core::Outcome<T> {}
}

/// Async-continuation mirrors of [`OutcomeExt`](railyard_core::OutcomeExt) on a ready [`Outcome`].
pub trait OutcomeAsyncExt<T>: sealed::Sealed + Sized {
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>;

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>;

    fn tap_on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>;

    fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>;

    fn ensure_with_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<R>>;

    fn match_async<R, S, SFut, E, EFut>(self, on_success: S, on_failure: E) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>;

    fn recover_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>;

    fn map_on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>;
}

impl<T> OutcomeAsyncExt<T> for Outcome<T> {
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move {
            match self {
                Ok(value) => f(value).await,
                Err(error) => Err(error),
            }
        }
    }

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self {
                Ok(value) => Ok(f(value).await),
                Err(error) => Err(error),
            }
        }
    }

    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            if let Ok(value) = &self {
                f(value).await;
            }
            self
        }
    }

    fn tap_on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            if let Err(error) = &self {
                f(error).await;
            }
            self
        }
    }

    fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move {
            let value = self?;
            if predicate(&value).await {
                Ok(value)
            } else {
                Err(error)
            }
        }
    }

    fn ensure_with_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<R>>,
    {
        async move {
            let value = self?;
            f(&value).await?;
            Ok(value)
        }
    }

    fn match_async<R, S, SFut, E, EFut>(self, on_success: S, on_failure: E) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        async move {
            match self {
                Ok(value) => on_success(value).await,
                Err(error) => on_failure(error).await,
            }
        }
    }

    fn recover_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move {
            match self {
                Ok(value) => Ok(value),
                Err(error) => f(error).await,
            }
        }
    }

    fn map_on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        async move {
            match self {
                Ok(value) => Ok(value),
                Err(error) => Err(f(error).await),
            }
        }
    }
}
