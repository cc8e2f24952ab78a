//! Cancellation boundary for outcome chains.
//!
//! Dropping a chain's future abandons it at its current suspension point;
//! nothing after that point runs. [`with_cancellation`] turns an external
//! signal into that drop and reports it as [`Cancelled`], which lives outside
//! the [`Error`](railyard_core::Error) taxonomy so it can never be mistaken
//! for a failed outcome.

use std::future::Future;

/// The chain was abandoned before it produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("chain cancelled before completion")]
pub struct Cancelled;

/// Drives `chain` until it completes or `signal` resolves, whichever is first.
///
/// The signal is polled before the chain on every wake-up, so a signal that
/// is already resolved wins even against a chain that is ready. On
/// cancellation the chain is dropped in place.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use railyard_async::{with_cancellation, Cancelled};
///
/// let (tx, rx) = tokio::sync::oneshot::channel::<()>();
/// tx.send(()).unwrap();
/// let signal = async move {
///     let _ = rx.await;
/// };
/// let out = with_cancellation(signal, std::future::pending::<u8>()).await;
/// assert_eq!(out, Err(Cancelled));
/// # }
/// ```
pub async fn with_cancellation<T, S, C>(signal: S, chain: C) -> Result<T, Cancelled>
where
    S: Future<Output = ()>,
    C: Future<Output = T>,
{
    tokio::select! {
        biased;
        () = signal => {
            tracing::debug!("outcome chain abandoned on cancellation signal");
            Err(Cancelled)
        }
        out = chain => Ok(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railyard_core::{Error, Outcome};
    use std::time::Duration;

    #[tokio::test]
    async fn completed_chain_passes_through_unchanged() {
        let out = with_cancellation(std::future::pending(), async {
            Err::<u8, _>(Error::conflict("stale"))
        })
        .await;
        assert_eq!(out, Ok(Err(Error::conflict("stale"))));
    }

    #[tokio::test(start_paused = true)]
    async fn signal_abandons_pending_chain() {
        let chain = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, Error>(1)
        };
        let out: Result<Outcome<i32>, Cancelled> =
            with_cancellation(tokio::time::sleep(Duration::from_secs(1)), chain).await;
        assert_eq!(out, Err(Cancelled));
    }

    #[test]
    fn cancelled_displays_reason() {
        assert_eq!(Cancelled.to_string(), "chain cancelled before completion");
    }
}
