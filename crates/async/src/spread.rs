//! Positional continuations on combined tuples, across suspension points.
//!
//! [`SpreadAsync2`]..[`SpreadAsync9`] take async continuations on a ready
//! tuple outcome. [`FutureSpread2`]..[`FutureSpread9`] chain onto a pending
//! one, typically straight off [`combine_async`](crate::combine_async), with
//! plain names for synchronous continuations and `_async` names for
//! asynchronous ones. A failed tuple never calls the continuation.

use railyard_core::Outcome;
use std::future::Future;

macro_rules! spread_async_traits {
    ($ready:ident, $pending:ident; $($t:ident $v:ident),+) => {
        /// Async `map`/`bind` over a ready combined tuple, destructured into arguments.
        pub trait $ready<$($t),+>: Sized {
            fn map_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = R>;

            fn bind_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = Outcome<R>>;
        }

        impl<$($t),+> $ready<$($t),+> for Outcome<($($t,)+)> {
            fn map_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = R>,
            {
                async move {
                    match self {
                        Ok(($($v,)+)) => Ok(f($($v),+).await),
                        Err(error) => Err(error),
                    }
                }
            }

            fn bind_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = Outcome<R>>,
            {
                async move {
                    match self {
                        Ok(($($v,)+)) => f($($v),+).await,
                        Err(error) => Err(error),
                    }
                }
            }
        }

        /// `map`/`bind` over a pending combined tuple, destructured into arguments.
        pub trait $pending<$($t),+>: Future<Output = Outcome<($($t,)+)>> + Sized {
            fn map_spread<R, Op>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> R;

            fn bind_spread<R, Op>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Outcome<R>;

            fn map_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = R>;

            fn bind_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = Outcome<R>>;
        }

        impl<Pending, $($t),+> $pending<$($t),+> for Pending
        where
            Pending: Future<Output = Outcome<($($t,)+)>>,
        {
            fn map_spread<R, Op>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> R,
            {
                async move { self.await.map(|($($v,)+)| f($($v),+)) }
            }

            fn bind_spread<R, Op>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Outcome<R>,
            {
                async move { self.await.and_then(|($($v,)+)| f($($v),+)) }
            }

            fn map_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = R>,
            {
                async move { $ready::map_spread_async(self.await, f).await }
            }

            fn bind_spread_async<R, Op, Fut>(self, f: Op) -> impl Future<Output = Outcome<R>>
            where
                Op: FnOnce($($t),+) -> Fut,
                Fut: Future<Output = Outcome<R>>,
            {
                async move { $ready::bind_spread_async(self.await, f).await }
            }
        }
    };
}

spread_async_traits!(SpreadAsync2, FutureSpread2; A a, B b);
spread_async_traits!(SpreadAsync3, FutureSpread3; A a, B b, C c);
spread_async_traits!(SpreadAsync4, FutureSpread4; A a, B b, C c, D d);
spread_async_traits!(SpreadAsync5, FutureSpread5; A a, B b, C c, D d, E e);
spread_async_traits!(SpreadAsync6, FutureSpread6; A a, B b, C c, D d, E e, F f);
spread_async_traits!(SpreadAsync7, FutureSpread7; A a, B b, C c, D d, E e, F f, G g);
spread_async_traits!(SpreadAsync8, FutureSpread8; A a, B b, C c, D d, E e, F f, G g, H h);
spread_async_traits!(SpreadAsync9, FutureSpread9; A a, B b, C c, D d, E e, F f, G g, H h, I i);
