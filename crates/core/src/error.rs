//! Error model shared by every outcome in the workspace.
//!
//! [`Error`] is a closed sum: two composite variants ([`ValidationError`],
//! [`AggregateError`]) and eight leaf variants carrying a [`Fault`].
//! Composites are built by [`Error::combine`], which merges validation
//! failures field-wise and flattens everything else into one aggregate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

// ---------------------------------------------------------------------------
// Default codes
// ---------------------------------------------------------------------------

pub const VALIDATION_CODE: &str = "validation.error";
pub const AGGREGATE_CODE: &str = "aggregate.error";
pub const NOT_FOUND_CODE: &str = "not.found.error";
pub const CONFLICT_CODE: &str = "conflict.error";
pub const DOMAIN_CODE: &str = "domain.error";
pub const UNAUTHORIZED_CODE: &str = "unauthorized.error";
pub const FORBIDDEN_CODE: &str = "forbidden.error";
pub const RATE_LIMIT_CODE: &str = "rate.limit.error";
pub const UNEXPECTED_CODE: &str = "unexpected.error";
pub const SERVICE_UNAVAILABLE_CODE: &str = "service.unavailable.error";

const AGGREGATE_DETAIL: &str = "Aggregated error";
const VALIDATION_DETAIL: &str = "One or more validation errors occurred";

// ---------------------------------------------------------------------------
// Fault
// ---------------------------------------------------------------------------

/// The `(code, detail, instance)` triple every error variant carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fault {
    pub code: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Fault {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            instance: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// One invalid field and every message reported against it, in insertion order.
///
/// Details are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
    pub field_name: String,
    pub details: SmallVec<[String; 2]>,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, detail: impl Into<String>) -> Self {
        let mut details = SmallVec::new();
        details.push(detail.into());
        Self {
            field_name: field_name.into(),
            details,
        }
    }

    pub fn with_details<I, S>(field_name: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field_name: field_name.into(),
            details: details.into_iter().map(Into::into).collect(),
        }
    }
}

/// Field-level validation failure.
///
/// Field order is first-seen order; appending a detail to an existing field
/// keeps the field where it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(flatten)]
    pub fault: Fault,
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Empty validation error with the default code and detail.
    pub fn new() -> Self {
        Self {
            fault: Fault::new(VALIDATION_CODE, VALIDATION_DETAIL),
            fields: Vec::new(),
        }
    }

    /// Single-field error. The error-level detail stays the generic summary
    /// so it still holds after further fields are merged in.
    pub fn for_field(field_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new().with_field(field_name, detail)
    }

    pub fn from_fields(fields: impl IntoIterator<Item = FieldError>) -> Self {
        fields
            .into_iter()
            .fold(Self::new(), |acc, field| acc.push_field(field))
    }

    /// Appends `detail` to `field_name`, creating the field if it is new.
    pub fn with_field(self, field_name: impl Into<String>, detail: impl Into<String>) -> Self {
        self.push_field(FieldError::new(field_name, detail))
    }

    /// Field-wise merge: `self`'s fields first, then fields only `other` has.
    /// Shared fields get `other`'s details appended after `self`'s.
    ///
    /// The receiver's code, detail and instance are kept.
    pub fn merge(self, other: ValidationError) -> Self {
        other
            .fields
            .into_iter()
            .fold(self, |acc, field| acc.push_field(field))
    }

    pub fn field(&self, field_name: &str) -> Option<&FieldError> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }

    fn push_field(mut self, field: FieldError) -> Self {
        match self
            .fields
            .iter_mut()
            .find(|existing| existing.field_name == field.field_name)
        {
            Some(existing) => existing.details.extend(field.details),
            None => self.fields.push(field),
        }
        self
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fault.detail)?;
        for field in &self.fields {
            write!(f, "; {}: {}", field.field_name, field.details.join(", "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Flat list of heterogeneous errors. Never contains another aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateError {
    #[serde(flatten)]
    pub fault: Fault,
    pub errors: Vec<Error>,
}

impl AggregateError {
    /// Builds an aggregate, splicing in the elements of any nested aggregate.
    pub fn new(errors: impl IntoIterator<Item = Error>) -> Self {
        let mut flat = Vec::new();
        for error in errors {
            splice_into(&mut flat, error);
        }
        Self {
            fault: Fault::new(AGGREGATE_CODE, AGGREGATE_DETAIL),
            errors: flat,
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} errors)", self.fault.detail, self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

fn splice_into(flat: &mut Vec<Error>, error: Error) {
    match error {
        Error::Aggregate(aggregate) => flat.extend(aggregate.errors),
        other => flat.push(other),
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Failure side of every [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    #[error("{0}")]
    Aggregate(AggregateError),

    #[error("not found: {}", .0.detail)]
    NotFound(Fault),

    #[error("conflict: {}", .0.detail)]
    Conflict(Fault),

    #[error("domain rule violated: {}", .0.detail)]
    Domain(Fault),

    #[error("unauthorized: {}", .0.detail)]
    Unauthorized(Fault),

    #[error("forbidden: {}", .0.detail)]
    Forbidden(Fault),

    #[error("rate limit exceeded: {}", .0.detail)]
    RateLimit(Fault),

    #[error("unexpected error: {}", .0.detail)]
    Unexpected(Fault),

    #[error("service unavailable: {}", .0.detail)]
    ServiceUnavailable(Fault),
}

impl Error {
    pub fn validation(field_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation(ValidationError::for_field(field_name, detail))
    }

    pub fn aggregate(errors: impl IntoIterator<Item = Error>) -> Self {
        Self::Aggregate(AggregateError::new(errors))
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(Fault::new(NOT_FOUND_CODE, detail))
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict(Fault::new(CONFLICT_CODE, detail))
    }

    pub fn domain(detail: impl Into<String>) -> Self {
        Self::Domain(Fault::new(DOMAIN_CODE, detail))
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::Unauthorized(Fault::new(UNAUTHORIZED_CODE, detail))
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(Fault::new(FORBIDDEN_CODE, detail))
    }

    pub fn rate_limit(detail: impl Into<String>) -> Self {
        Self::RateLimit(Fault::new(RATE_LIMIT_CODE, detail))
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected(Fault::new(UNEXPECTED_CODE, detail))
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self::ServiceUnavailable(Fault::new(SERVICE_UNAVAILABLE_CODE, detail))
    }

    /// Replaces the machine-readable code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.fault_mut().code = code.into();
        self
    }

    /// Attaches a correlation id.
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.fault_mut().instance = Some(instance.into());
        self
    }

    pub fn fault(&self) -> &Fault {
        match self {
            Self::Validation(v) => &v.fault,
            Self::Aggregate(a) => &a.fault,
            Self::NotFound(f)
            | Self::Conflict(f)
            | Self::Domain(f)
            | Self::Unauthorized(f)
            | Self::Forbidden(f)
            | Self::RateLimit(f)
            | Self::Unexpected(f)
            | Self::ServiceUnavailable(f) => f,
        }
    }

    fn fault_mut(&mut self) -> &mut Fault {
        match self {
            Self::Validation(v) => &mut v.fault,
            Self::Aggregate(a) => &mut a.fault,
            Self::NotFound(f)
            | Self::Conflict(f)
            | Self::Domain(f)
            | Self::Unauthorized(f)
            | Self::Forbidden(f)
            | Self::RateLimit(f)
            | Self::Unexpected(f)
            | Self::ServiceUnavailable(f) => f,
        }
    }

    pub fn code(&self) -> &str {
        &self.fault().code
    }

    pub fn detail(&self) -> &str {
        &self.fault().detail
    }

    pub fn instance(&self) -> Option<&str> {
        self.fault().instance.as_deref()
    }

    /// Stable snake_case name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Aggregate(_) => "aggregate",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Domain(_) => "domain",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::RateLimit(_) => "rate_limit",
            Self::Unexpected(_) => "unexpected",
            Self::ServiceUnavailable(_) => "service_unavailable",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Aggregate(_))
    }

    /// Merges two errors, `self` first.
    ///
    /// Two validation errors merge field-wise into one. Any other pairing
    /// becomes a flat [`AggregateError`]: existing aggregates are spliced in,
    /// single errors become one element each. Not commutative.
    pub fn combine(self, other: Error) -> Error {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => Self::Validation(a.merge(b)),
            (a, b) => Self::aggregate([a, b]),
        }
    }

    /// Left fold of [`Error::combine`]; `None` for an empty input.
    pub fn combine_all(errors: impl IntoIterator<Item = Error>) -> Option<Error> {
        errors.into_iter().reduce(Error::combine)
    }
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<AggregateError> for Error {
    fn from(value: AggregateError) -> Self {
        Self::Aggregate(value)
    }
}
