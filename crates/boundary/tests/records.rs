//! Load, validate, and report a small NDJSON file end to end.

use railyard_boundary::{registry, BatchReport, NdjsonFileSource, Record, RecordReport, RecordSource};
use railyard_boundary::sink::ndjson::NdjsonSink;
use railyard_core::{combine_all, Error, Outcome, OutcomeExt};
use std::io::Write;
use std::time::Duration;

fn validate(record: &Record, rules: &[(&str, &str)]) -> Outcome<Vec<(String, String)>> {
    combine_all(rules.iter().map(|&(field, rule)| {
        let construct = registry::lookup(rule).expect("rule registered");
        record
            .text(field)
            .map(Option::unwrap_or_default)
            .bind(|raw| construct(field, &raw))
            .map(|value| (field.to_string(), value))
    }))
}

fn write_input(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn every_failing_field_is_reported() {
    let input = write_input(&[
        r#"{"email":"Ada@Example.com","age":36}"#,
        r#"{"email":"nobody","age":"-1"}"#,
        "",
        r#"{"age":"x"}"#,
    ]);
    let rules = [("email", "email"), ("age", "positive")];

    let source = NdjsonFileSource::new(input.path());
    let records = source.load().await.unwrap();
    assert_eq!(records.len(), 3);

    let reports: Vec<RecordReport<Vec<(String, String)>>> = records
        .iter()
        .map(|r| RecordReport::from_outcome(r.line, validate(r, &rules)))
        .collect();
    let batch = BatchReport::build(source.name(), reports, Duration::ZERO, Duration::ZERO);
    assert_eq!((batch.valid, batch.invalid), (1, 2));

    let pairs = |items: &[(&str, &str)]| -> Vec<(String, String)> {
        items.iter().map(|&(k, v)| (k.to_string(), v.to_string())).collect()
    };
    assert_eq!(
        batch.records[0].value,
        Some(pairs(&[("email", "ada@example.com"), ("age", "36")]))
    );

    let second = batch.records[1].problem.as_ref().unwrap();
    let fields: Vec<&str> = second.fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, ["email", "age"]);

    let third = batch.records[2].problem.as_ref().unwrap();
    assert_eq!(batch.records[2].line, 4);
    assert_eq!(third.fields[0].messages, ["must not be empty"]);
    assert_eq!(third.fields[1].messages, ["'x' is not an integer"]);

    let mut buf = Vec::new();
    let mut sink = NdjsonSink::new(&mut buf);
    let (summary, rows) = batch.to_rows();
    sink.write_summary(&summary).unwrap();
    sink.write_records(rows).unwrap();
    assert_eq!(sink.finish().unwrap(), 4);
}

#[tokio::test]
async fn malformed_lines_fail_the_load() {
    let input = write_input(&[r#"{"a":1}"#, "{oops", r#""text""#]);
    let err = NdjsonFileSource::new(input.path()).load().await.unwrap_err();
    let Error::Validation(v) = err else {
        panic!("expected validation, got {err:?}");
    };
    assert!(v.field("line 2").is_some());
    assert!(v.field("line 3").is_some());
}
