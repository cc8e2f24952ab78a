//! Pending outcome receivers.
//!
//! [`FutureOutcomeExt`] chains onto any future that resolves to an
//! [`Outcome`]. Plain names take synchronous continuations, `_async` names
//! take asynchronous ones. Either way the receiver is awaited first and a
//! failure skips the continuation entirely.

use crate::outcome::OutcomeAsyncExt;
use railyard_core::{Error, Outcome, OutcomeExt};
use std::future::Future;

/// Combinators on a future of [`Outcome`].
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    // -- synchronous continuations ------------------------------------------

    fn bind<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>;

    fn map<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U;

    fn tap<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T);

    fn tap_on_failure<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error);

    fn ensure<P>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool;

    fn ensure_with<R, F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Outcome<R>;

    fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R;

    fn recover<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>;

    fn map_on_failure<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Error;

    // -- asynchronous continuations -----------------------------------------

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

impl<T, P> FutureOutcomeExt<T> for P
where
    P: Future<Output = Outcome<T>>,
{
    fn bind<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { OutcomeExt::bind(self.await, f) }
    }

    fn map<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    fn tap<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { OutcomeExt::tap(self.await, f) }
    }

    fn tap_on_failure<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error),
    {
        async move { OutcomeExt::tap_on_failure(self.await, f) }
    }

    fn ensure<Pr>(self, predicate: Pr, error: Error) -> impl Future<Output = Outcome<T>>
    where
        Pr: FnOnce(&T) -> bool,
    {
        async move { OutcomeExt::ensure(self.await, predicate, error) }
    }

    fn ensure_with<R, F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Outcome<R>,
    {
        async move { OutcomeExt::ensure_with(self.await, f) }
    }

    fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        async move { OutcomeExt::match_with(self.await, on_success, on_failure) }
    }

    fn recover<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        async move { OutcomeExt::recover(self.await, f) }
    }

    fn map_on_failure<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Error,
    {
        async move { OutcomeExt::map_on_failure(self.await, f) }
    }

    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { OutcomeAsyncExt::bind_async(self.await, f).await }
    }

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { OutcomeAsyncExt::map_async(self.await, f).await }
    }

    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { OutcomeAsyncExt::tap_async(self.await, f).await }
    }

    fn tap_on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { OutcomeAsyncExt::tap_on_failure_async(self.await, f).await }
    }

    fn ensure_async<Pr, Fut>(self, predicate: Pr, error: Error) -> impl Future<Output = Outcome<T>>
    where
        Pr: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { OutcomeAsyncExt::ensure_async(self.await, predicate, error).await }
    }

    fn ensure_with_async<R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<R>>,
    {
        async move { OutcomeAsyncExt::ensure_with_async(self.await, f).await }
    }

    fn match_async<R, S, SFut, E, EFut>(self, on_success: S, on_failure: E) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        async move { OutcomeAsyncExt::match_async(self.await, on_success, on_failure).await }
    }

    fn recover_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { OutcomeAsyncExt::recover_async(self.await, f).await }
    }

    fn map_on_failure_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        async move { OutcomeAsyncExt::map_on_failure_async(self.await, f).await }
    }
}
