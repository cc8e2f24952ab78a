//! Elimination of outcomes into transport-ready problem reports.
//!
//! Every [`Error`] is unpacked by an exhaustive match: validation failures
//! list their fields with ordered messages, aggregates list their elements
//! side by side, and each element keeps its own kind.

use railyard_core::{Error, Outcome, OutcomeExt};
use serde::Serialize;
use std::time::Duration;

/// Serializable view of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub kind: &'static str,
    pub code: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ProblemField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Problem>,
}

/// One invalid field of a validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemField {
    pub field: String,
    pub messages: Vec<String>,
}

impl Problem {
    fn leaf(error: &Error) -> Self {
        Self {
            kind: error.kind(),
            code: error.code().to_string(),
            detail: error.detail().to_string(),
            instance: error.instance().map(str::to_string),
            fields: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl From<&Error> for Problem {
    fn from(error: &Error) -> Self {
        match error {
            Error::Validation(validation) => Self {
                fields: validation
                    .fields
                    .iter()
                    .map(|f| ProblemField {
                        field: f.field_name.clone(),
                        messages: f.details.to_vec(),
                    })
                    .collect(),
                ..Self::leaf(error)
            },
            Error::Aggregate(aggregate) => Self {
                errors: aggregate.errors.iter().map(Problem::from).collect(),
                ..Self::leaf(error)
            },
            Error::NotFound(_)
            | Error::Conflict(_)
            | Error::Domain(_)
            | Error::Unauthorized(_)
            | Error::Forbidden(_)
            | Error::RateLimit(_)
            | Error::Unexpected(_)
            | Error::ServiceUnavailable(_) => Self::leaf(error),
        }
    }
}

impl From<Error> for Problem {
    fn from(error: Error) -> Self {
        Self::from(&error)
    }
}

// ---------------------------------------------------------------------------
// Per-record report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
}

/// Result of validating one input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport<T> {
    pub line: usize,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<Problem>,
}

impl<T> RecordReport<T> {
    pub fn from_outcome(line: usize, outcome: Outcome<T>) -> Self {
        outcome.match_with(
            |value| Self {
                line,
                status: Status::Valid,
                value: Some(value),
                problem: None,
            },
            |error| Self {
                line,
                status: Status::Invalid,
                value: None,
                problem: Some(Problem::from(error)),
            },
        )
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}

// ---------------------------------------------------------------------------
// Batch report
// ---------------------------------------------------------------------------

/// Every record report of one run plus summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport<T> {
    pub source: String,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    #[serde(skip)]
    pub load_time: Duration,
    #[serde(skip)]
    pub total_time: Duration,
    pub records: Vec<RecordReport<T>>,
}

impl<T> BatchReport<T> {
    /// Build a report; records are ordered by line.
    pub fn build(
        source: impl Into<String>,
        mut records: Vec<RecordReport<T>>,
        load_time: Duration,
        total_time: Duration,
    ) -> Self {
        records.sort_by_key(|r| r.line);
        let valid = records.iter().filter(|r| r.is_valid()).count();
        Self {
            source: source.into(),
            total: records.len(),
            valid,
            invalid: records.len() - valid,
            load_time,
            total_time,
            records,
        }
    }

    /// Render the report as a formatted string, invalid records only.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push('\n');
        out.push_str("╔══════════════════════════════════════════════════════════════╗\n");
        out.push_str("║                  RAILYARD VALIDATION REPORT                  ║\n");
        out.push_str("╠══════════════════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Source:             {:>39} ║\n", elide_left(&self.source, 39)));
        out.push_str(&format!("║  Records:            {:>39} ║\n", self.total));
        out.push_str(&format!("║  Valid:              {:>39} ║\n", self.valid));
        out.push_str(&format!("║  Invalid:            {:>39} ║\n", self.invalid));
        out.push_str(&format!("║  Load time:          {:>39} ║\n", format!("{:?}", self.load_time)));
        out.push_str(&format!("║  Total time:         {:>39} ║\n", format!("{:?}", self.total_time)));
        out.push_str("╠══════════════════════════════════════════════════════════════╣\n");

        if self.invalid == 0 {
            out.push_str("║  All records valid.                                          ║\n");
        } else {
            out.push_str("║  PROBLEMS                                                    ║\n");
            out.push_str("╠══════════════════════════════════════════════════════════════╣\n");

            for record in self.records.iter().filter(|r| !r.is_valid()) {
                let Some(problem) = &record.problem else {
                    continue;
                };
                out.push_str(&format!("║  line {}\n", record.line));
                render_problem(&mut out, problem, 1);
            }
        }

        out.push_str("╚══════════════════════════════════════════════════════════════╝\n");
        out
    }
}

/// Keeps the last `width` characters, marking the cut with a leading `…`.
fn elide_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    let tail: String = text.chars().skip(len - width + 1).collect();
    format!("…{tail}")
}

fn render_problem(out: &mut String, problem: &Problem, depth: usize) {
    let pad = "   ".repeat(depth);
    if problem.errors.is_empty() {
        out.push_str(&format!("║  {pad}[{}] {}\n", problem.kind, problem.detail));
    }
    for field in &problem.fields {
        out.push_str(&format!(
            "║  {pad}   {}: {}\n",
            field.field,
            field.messages.join("; ")
        ));
    }
    for nested in &problem.errors {
        render_problem(out, nested, depth);
    }
}
