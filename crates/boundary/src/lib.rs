//! Construction and elimination contracts at the edge of outcome chains.
//!
//! Raw input enters through [`TryCreate`] constructors and the
//! [`registry`]; outcomes leave as [`Problem`] reports, text or NDJSON rows.

pub mod construct;
pub mod registry;
pub mod report;
pub mod sink;
pub mod source;

pub use construct::{camel_case, EmailAddress, Integer, TryCreate};
pub use registry::Constructor;
pub use report::{BatchReport, Problem, ProblemField, RecordReport, Status};
pub use source::{load_until, NdjsonFileSource, Record, RecordSource};

#[doc(hidden)]
pub mod __private {
    pub use railyard_core::Outcome;
}
