//! Asynchronous outcome chains.
//!
//! Three receiver shapes are covered: a ready outcome with an async
//! continuation ([`OutcomeAsyncExt`]), a pending outcome with either kind of
//! continuation ([`FutureOutcomeExt`]), and a pending plain value entering
//! the railway ([`PendingExt`]). Combined tuples keep their positional
//! continuations across suspension points ([`SpreadAsync2`],
//! [`FutureSpread2`] and their higher arities). Cancellation is reported through
//! [`Cancelled`], never as a failed outcome.

pub mod cancel;
pub mod combine;
pub mod future;
pub mod outcome;
pub mod pending;
pub mod spread;

pub use cancel::{with_cancellation, Cancelled};
pub use combine::{combine_all_async, combine_async, CombineAsync};
pub use future::FutureOutcomeExt;
pub use outcome::OutcomeAsyncExt;
pub use pending::PendingExt;
pub use spread::{
    FutureSpread2, FutureSpread3, FutureSpread4, FutureSpread5, FutureSpread6, FutureSpread7,
    FutureSpread8, FutureSpread9, SpreadAsync2, SpreadAsync3, SpreadAsync4, SpreadAsync5,
    SpreadAsync6, SpreadAsync7, SpreadAsync8, SpreadAsync9,
};
