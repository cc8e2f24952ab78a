//! Concurrent join of pending outcomes.
//!
//! Every operand is driven to completion before the errors are folded, so a
//! failure in one operand never cuts the others short. Folding uses the same
//! left-to-right order as [`railyard_core::combine`].

use railyard_core::{combine_all, Combine, Outcome};
use std::future::Future;

/// A fixed-arity tuple of outcome futures that can be awaited as one.
pub trait CombineAsync {
    type Output;

    fn combine_async(self) -> impl Future<Output = Outcome<Self::Output>>;
}

/// Awaits a tuple of outcome futures concurrently. See [`CombineAsync`].
pub fn combine_async<C: CombineAsync>(futures: C) -> impl Future<Output = Outcome<C::Output>> {
    futures.combine_async()
}

/// Awaits each future in turn and collects like [`combine_all`].
///
/// Operands run one after another; reach for [`combine_async`] when they are
/// independent and the arity is fixed.
pub async fn combine_all_async<T, I>(futures: I) -> Outcome<Vec<T>>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T>>,
{
    let mut outcomes = Vec::new();
    for future in futures {
        outcomes.push(future.await);
    }
    combine_all(outcomes)
}

macro_rules! impl_combine_async {
    ($($f:ident $t:ident $v:ident),+) => {
        impl<$($f, $t),+> CombineAsync for ($($f,)+)
        where
            $($f: Future<Output = Outcome<$t>>,)+
        {
            type Output = ($($t,)+);

            fn combine_async(self) -> impl Future<Output = Outcome<Self::Output>> {
                let ($($v,)+) = self;
                async move {
                    let joined = tokio::join!($($v),+);
                    joined.combine()
                }
            }
        }
    };
}

impl_combine_async!(FA A a, FB B b);
impl_combine_async!(FA A a, FB B b, FC C c);
impl_combine_async!(FA A a, FB B b, FC C c, FD D d);
impl_combine_async!(FA A a, FB B b, FC C c, FD D d, FE E e);
impl_combine_async!(FA A a, FB B b, FC C c, FD D d, FE E e, FF F f);
impl_combine_async!(FA A a, FB B b, FC C c, FD D d, FE E e, FF F f, FG G g);
impl_combine_async!(FA A a, FB B b, FC C c, FD D d, FE E e, FF F f, FG G g, FH H h);
impl_combine_async!(FA A a, FB B b, FC C c, FD D d, FE E e, FF F f, FG G g, FH H h, FI I i);
