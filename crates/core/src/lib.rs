//! Outcome/optional algebra, error model, and the error-collecting combine.
//!
//! Foundation crate -- no async or I/O dependencies.

pub mod combine;
pub mod error;
pub mod optional;
pub mod outcome;

pub use combine::{
    combine, combine_all, Combine, Spread2, Spread3, Spread4, Spread5, Spread6, Spread7, Spread8,
    Spread9,
};
pub use error::{AggregateError, Error, Fault, FieldError, ValidationError};
pub use optional::Optional;
pub use outcome::{failure_if, success_if, Outcome, OutcomeExt, Unnest};
