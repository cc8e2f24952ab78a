//! Error-collecting join of independent outcomes.
//!
//! Unlike [`bind`](crate::OutcomeExt::bind), combining never stops at the
//! first failure: every operand is inspected and all errors are folded left
//! to right with [`Error::combine`].
//!
//! ```
//! use railyard_core::{combine, Error, Outcome, Spread3};
//!
//! let email: Outcome<&str> = Ok("ada@example.com");
//! let age: Outcome<u8> = Ok(36);
//! let admin: Outcome<bool> = Ok(false);
//!
//! let summary = combine((email, age, admin))
//!     .map_spread(|email, age, admin| format!("{email} ({age}) admin={admin}"));
//! assert_eq!(summary.unwrap(), "ada@example.com (36) admin=false");
//! ```

use crate::error::Error;
use crate::outcome::Outcome;

/// A fixed-arity tuple of outcomes that can be joined into one.
///
/// Implemented for tuples of 2 to 9 outcomes; chain calls for more.
pub trait Combine {
    type Output;

    fn combine(self) -> Outcome<Self::Output>;
}

/// Joins a tuple of outcomes. See [`Combine`].
pub fn combine<C: Combine>(outcomes: C) -> Outcome<C::Output> {
    outcomes.combine()
}

/// Homogeneous, any-length variant of [`combine`].
///
/// Values keep input order; failures fold left to right.
pub fn combine_all<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut collector = Collector::default();
    let values: Vec<T> = outcomes
        .into_iter()
        .filter_map(|outcome| collector.take(outcome))
        .collect();
    collector.finish(values)
}

/// Running left fold of failures seen so far.
#[derive(Default)]
struct Collector {
    error: Option<Error>,
}

impl Collector {
    #[inline]
    fn take<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.error = Some(match self.error.take() {
                    Some(acc) => acc.combine(error),
                    None => error,
                });
                None
            }
        }
    }

    #[inline]
    fn finish<T>(self, value: T) -> Outcome<T> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(value),
        }
    }
}

macro_rules! impl_combine {
    ($($t:ident $v:ident),+) => {
        impl<$($t),+> Combine for ($(Outcome<$t>,)+) {
            type Output = ($($t,)+);

            fn combine(self) -> Outcome<Self::Output> {
                let mut collector = Collector::default();
                let ($($v,)+) = self;
                $(let $v = collector.take($v);)+
                if let Some(error) = collector.error {
                    return Err(error);
                }
                match ($($v,)+) {
                    ($(Some($v),)+) => Ok(($($v,)+)),
                    _ => unreachable!("no failure was collected, so every operand succeeded"),
                }
            }
        }
    };
}

impl_combine!(A a, B b);
impl_combine!(A a, B b, C c);
impl_combine!(A a, B b, C c, D d);
impl_combine!(A a, B b, C c, D d, E e);
impl_combine!(A a, B b, C c, D d, E e, F f);
impl_combine!(A a, B b, C c, D d, E e, F f, G g);
impl_combine!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_combine!(A a, B b, C c, D d, E e, F f, G g, H h, I i);

// ---------------------------------------------------------------------------
// Spread: tuple outcomes with positional continuations
// ---------------------------------------------------------------------------

macro_rules! spread_trait {
    ($name:ident; $($t:ident $v:ident),+) => {
        /// `map`/`bind` over a combined tuple, destructured into arguments.
        pub trait $name<$($t),+> {
            fn map_spread<R, Op>(self, f: Op) -> Outcome<R>
            where
                Op: FnOnce($($t),+) -> R;

            fn bind_spread<R, Op>(self, f: Op) -> Outcome<R>
            where
                Op: FnOnce($($t),+) -> Outcome<R>;
        }

        impl<$($t),+> $name<$($t),+> for Outcome<($($t,)+)> {
            #[inline]
            fn map_spread<R, Op>(self, f: Op) -> Outcome<R>
            where
                Op: FnOnce($($t),+) -> R,
            {
                self.map(|($($v,)+)| f($($v),+))
            }

            #[inline]
            fn bind_spread<R, Op>(self, f: Op) -> Outcome<R>
            where
                Op: FnOnce($($t),+) -> Outcome<R>,
            {
                self.and_then(|($($v,)+)| f($($v),+))
            }
        }
    };
}

spread_trait!(Spread2; A a, B b);
spread_trait!(Spread3; A a, B b, C c);
spread_trait!(Spread4; A a, B b, C c, D d);
spread_trait!(Spread5; A a, B b, C c, D d, E e);
spread_trait!(Spread6; A a, B b, C c, D d, E e, F f);
spread_trait!(Spread7; A a, B b, C c, D d, E e, F f, G g);
spread_trait!(Spread8; A a, B b, C c, D d, E e, F f, G g, H h);
spread_trait!(Spread9; A a, B b, C c, D d, E e, F f, G g, H h, I i);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn all_ok_yields_tuple_in_operand_order() {
        let out = combine((Ok::<_, Error>(1), Ok::<_, Error>("a"), Ok::<_, Error>(true)));
        assert_eq!(out, Ok((1, "a", true)));
    }

    #[test]
    fn validation_failures_merge_around_successes() {
        let out = combine((
            Err::<i32, _>(Error::validation("email", "required")),
            Ok::<_, Error>(5),
            Err::<i32, _>(Error::validation("name", "required")),
        ));
        let expected = ValidationError::new()
            .with_field("email", "required")
            .with_field("name", "required");
        let Err(Error::Validation(v)) = out else {
            panic!("expected validation failure");
        };
        assert_eq!(v.fields, expected.fields);
    }

    #[test]
    fn mixed_failures_aggregate() {
        let out = combine((
            Err::<(), _>(Error::validation("email", "required")),
            Err::<(), _>(Error::not_found("x")),
        ));
        let Err(Error::Aggregate(agg)) = out else {
            panic!("expected aggregate");
        };
        assert_eq!(agg.errors, [Error::validation("email", "required"), Error::not_found("x")]);
    }

    #[test]
    fn every_operand_is_inspected() {
        let out = combine((
            Err::<u8, _>(Error::conflict("1")),
            Err::<u8, _>(Error::conflict("2")),
            Err::<u8, _>(Error::conflict("3")),
            Err::<u8, _>(Error::conflict("4")),
        ));
        let Err(Error::Aggregate(agg)) = out else {
            panic!("expected aggregate");
        };
        let details: Vec<&str> = agg.errors.iter().map(Error::detail).collect();
        assert_eq!(details, ["1", "2", "3", "4"]);
    }

    #[test]
    fn nine_operands() {
        let out = combine((
            Ok::<_, Error>(1u8),
            Ok::<_, Error>(2u16),
            Ok::<_, Error>(3u32),
            Ok::<_, Error>(4u64),
            Ok::<_, Error>('5'),
            Ok::<_, Error>("6"),
            Ok::<_, Error>(7i8),
            Ok::<_, Error>(8i16),
            Ok::<_, Error>(9i32),
        ));
        assert_eq!(out, Ok((1, 2, 3, 4, '5', "6", 7, 8, 9)));
    }

    #[test]
    fn spread_continuations_receive_positional_arguments() {
        let pair = combine((Ok::<_, Error>(2), Ok::<_, Error>(3)));
        assert_eq!(pair.clone().map_spread(|a, b| a * b), Ok(6));
        assert_eq!(
            pair.bind_spread(|a, b| {
                if a > b {
                    Ok(a - b)
                } else {
                    Err(Error::domain("a must exceed b"))
                }
            }),
            Err(Error::domain("a must exceed b"))
        );
    }

    #[test]
    fn spread_is_skipped_after_failed_combine() {
        let mut called = false;
        let out = combine((Ok::<_, Error>(1), Err::<i32, _>(Error::forbidden("no"))))
            .map_spread(|a, b| {
                called = true;
                a + b
            });
        assert!(!called);
        assert_eq!(out, Err(Error::forbidden("no")));
    }

    #[test]
    fn combine_all_collects_values_or_every_error() {
        assert_eq!(combine_all(vec![Ok::<_, Error>(1), Ok(2), Ok(3)]), Ok(vec![1, 2, 3]));
        assert_eq!(combine_all(Vec::<Outcome<i32>>::new()), Ok(vec![]));

        let out = combine_all(vec![
            Err(Error::validation("a", "bad")),
            Ok(2),
            Err(Error::validation("a", "worse")),
        ]);
        let Err(Error::Validation(v)) = out else {
            panic!("expected validation");
        };
        assert_eq!(v.fields.len(), 1);
        assert_eq!(v.fields[0].details.as_slice(), ["bad", "worse"]);
    }
}
