//! Asynchronous record sources.

use async_trait::async_trait;
use railyard_async::{Cancelled, PendingExt};
use railyard_core::{combine_all, Error, FieldError, Outcome, ValidationError};
use serde_json::{Map, Value};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// One input record: a flat JSON object and the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub line: usize,
    pub fields: Map<String, Value>,
}

impl Record {
    /// Text form of a scalar field. Strings are returned as-is; numbers and
    /// booleans are formatted; null and missing fields are `Ok(None)`.
    /// Arrays and objects fail with a validation error on `field`.
    pub fn text(&self, field: &str) -> Outcome<Option<String>> {
        let Some(value) = self.fields.get(field) else {
            return Ok(None);
        };
        match value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Null => Ok(None),
            Value::Array(_) => Err(not_scalar(field, "an array")),
            Value::Object(_) => Err(not_scalar(field, "an object")),
        }
    }
}

fn not_scalar(field: &str, found: &str) -> Error {
    Error::validation(field, format!("expected a string, number or boolean, found {found}"))
}

/// Abstraction for loading records from any source.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable name of the source, used in reports.
    fn name(&self) -> String;

    async fn load(&self) -> Outcome<Vec<Record>>;
}

/// Newline-delimited JSON objects from a file. Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct NdjsonFileSource {
    path: PathBuf,
}

impl NdjsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for NdjsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Outcome<Vec<Record>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;
        let records = parse_ndjson(&text)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "records loaded");
        Ok(records)
    }
}

/// Loads from `source` unless `shutdown` resolves first.
pub async fn load_until<S>(
    source: &dyn RecordSource,
    shutdown: S,
) -> Result<Outcome<Vec<Record>>, Cancelled>
where
    S: Future<Output = ()>,
{
    source.load().cancel_on(shutdown).await
}

fn io_error(path: &Path, error: io::Error) -> Error {
    let instance = path.display().to_string();
    let mapped = match error.kind() {
        io::ErrorKind::NotFound => Error::not_found(format!("no such file: {instance}")),
        _ => {
            tracing::warn!(path = %instance, error = %error, "record source unreadable");
            Error::unexpected(format!("failed to read {instance}: {error}"))
        }
    };
    mapped.with_instance(instance)
}

/// Parses every non-blank line, collecting all malformed lines into one
/// validation error keyed `line N`.
pub fn parse_ndjson(text: &str) -> Outcome<Vec<Record>> {
    let parsed = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line));
    combine_all(parsed)
}

fn parse_line(line: usize, text: &str) -> Outcome<Record> {
    let malformed = |detail: String| {
        Error::Validation(ValidationError::from_fields([FieldError::new(
            format!("line {line}"),
            detail,
        )]))
    };
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => Ok(Record { line, fields }),
        Ok(_) => Err(malformed("expected a JSON object".to_string())),
        Err(e) => Err(malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_objects_and_skips_blank_lines() {
        let records = parse_ndjson("{\"a\":1}\n\n{\"a\":\"x\",\"b\":true}\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 3);
        assert_eq!(records[0].text("a"), Ok(Some("1".to_string())));
        assert_eq!(records[1].text("b"), Ok(Some("true".to_string())));
        assert_eq!(records[1].text("missing"), Ok(None));
    }

    #[test]
    fn nested_values_are_a_type_mismatch_not_a_blank() {
        let records = parse_ndjson(r#"{"tags":["a"],"owner":{"id":1},"note":null}"#).unwrap();
        let record = &records[0];
        assert_eq!(
            record.text("tags"),
            Err(Error::validation(
                "tags",
                "expected a string, number or boolean, found an array"
            ))
        );
        assert_eq!(
            record.text("owner"),
            Err(Error::validation(
                "owner",
                "expected a string, number or boolean, found an object"
            ))
        );
        assert_eq!(record.text("note"), Ok(None));
    }

    #[test]
    fn every_malformed_line_is_reported() {
        let err = parse_ndjson("{\"ok\":1}\nnot json\n[1,2]\n").unwrap_err();
        let Error::Validation(v) = err else {
            panic!("expected validation, got {err:?}");
        };
        let names: Vec<&str> = v.fields.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, ["line 2", "line 3"]);
        assert_eq!(v.fields[1].details.as_slice(), ["expected a JSON object"]);
    }

    struct Stalled;

    #[async_trait]
    impl RecordSource for Stalled {
        fn name(&self) -> String {
            "stalled".into()
        }

        async fn load(&self) -> Outcome<Vec<Record>> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn shutdown_abandons_a_stalled_load() {
        let out = load_until(&Stalled, async {}).await;
        assert_eq!(out, Err(Cancelled));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = NdjsonFileSource::new("/definitely/not/here.ndjson");
        let err = source.load().await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.instance(), Some("/definitely/not/here.ndjson"));
    }
}
