//! Raw pending values entering the railway.

use crate::cancel::{with_cancellation, Cancelled};
use railyard_core::Outcome;
use std::future::Future;

/// Lifts any future of a plain value into outcome chains.
pub trait PendingExt: Future + Sized {
    /// Resolves to `Ok(value)`.
    fn into_outcome(self) -> impl Future<Output = Outcome<Self::Output>> {
        async move { Ok(self.await) }
    }

    /// Feeds the resolved value into a fallible synchronous step.
    fn bind_value<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(Self::Output) -> Outcome<U>,
    {
        async move { f(self.await) }
    }

    /// Feeds the resolved value into a fallible asynchronous step.
    fn bind_value_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(Self::Output) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { f(self.await).await }
    }

    /// Races this future against `signal`; see [`with_cancellation`].
    fn cancel_on<S>(self, signal: S) -> impl Future<Output = Result<Self::Output, Cancelled>>
    where
        S: Future<Output = ()>,
    {
        with_cancellation(signal, self)
    }
}

impl<F: Future> PendingExt for F {}

#[cfg(test)]
mod tests {
    use super::*;
    use railyard_core::Error;

    async fn fetch_count() -> usize {
        tokio::task::yield_now().await;
        3
    }

    fn at_least_one(n: usize) -> Outcome<usize> {
        if n > 0 {
            Ok(n)
        } else {
            Err(Error::validation("count", "must be at least 1"))
        }
    }

    #[tokio::test]
    async fn raw_value_into_outcome_continuation() {
        assert_eq!(fetch_count().into_outcome().await, Ok(3));
        assert_eq!(fetch_count().bind_value(at_least_one).await, Ok(3));
        assert_eq!(
            async { 0usize }.bind_value(at_least_one).await,
            Err(Error::validation("count", "must be at least 1"))
        );
    }

    #[tokio::test]
    async fn raw_value_into_async_continuation() {
        let out = fetch_count()
            .bind_value_async(|n| async move { at_least_one(n * 2) })
            .await;
        assert_eq!(out, Ok(6));
    }
}
