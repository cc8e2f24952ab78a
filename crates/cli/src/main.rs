//! CLI for the railyard record validator.
//!
//! Pipeline: parse rules -> load records -> parallel validate -> report.

use clap::{Parser, Subcommand};
use railyard_boundary::sink::ndjson::NdjsonSink;
use railyard_boundary::{
    load_until, registry, BatchReport, Constructor, NdjsonFileSource, Record, RecordReport,
    RecordSource,
};
use railyard_core::{combine_all, Outcome, OutcomeExt};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "railyard", version, about = "Validate NDJSON records and report every failure")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every record of an NDJSON file against field rules.
    Validate {
        #[arg(short, long, env = "RAILYARD_INPUT")]
        input: PathBuf,

        /// `field=rule`, repeatable. Rules: email, integer, positive, required.
        #[arg(short, long = "rule", value_name = "FIELD=RULE", required = true)]
        rules: Vec<String>,

        #[arg(long, default_value_t = false)]
        json: bool,

        /// Sink output: "ndjson" writes NDJSON to stdout,
        /// "ndjson:/path/to/file" writes to file.
        #[arg(long)]
        sink: Option<String>,
    },
}

/// Setup failures: anything that stops a run before or while loading input.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid rule '{0}': expected FIELD=RULE")]
    MalformedRule(String),

    #[error("unknown rule '{rule}' for field '{field}' (known: {known})")]
    UnknownRule {
        field: String,
        rule: String,
        known: String,
    },

    #[error("unknown sink '{0}': use 'ndjson' or 'ndjson:/path'")]
    UnknownSink(String),

    #[error("could not load records: {0}")]
    Load(#[from] railyard_core::Error),

    #[error("interrupted before records were loaded")]
    Interrupted(#[from] railyard_async::Cancelled),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A field paired with the constructor that validates it.
#[derive(Debug, Clone, Copy)]
struct Rule<'a> {
    field: &'a str,
    name: &'a str,
    construct: &'static Constructor,
}

enum SinkTarget<'a> {
    Stdout,
    File(&'a str),
}

type Fields = BTreeMap<String, String>;

fn parse_rules(specs: &[String]) -> Result<Vec<Rule<'_>>, CliError> {
    specs
        .iter()
        .map(|spec| {
            let (field, name) = spec
                .split_once('=')
                .map(|(f, r)| (f.trim(), r.trim()))
                .filter(|(f, r)| !f.is_empty() && !r.is_empty())
                .ok_or_else(|| CliError::MalformedRule(spec.clone()))?;
            let construct = registry::lookup(name).ok_or_else(|| CliError::UnknownRule {
                field: field.to_string(),
                rule: name.to_string(),
                known: registry::names().join(", "),
            })?;
            Ok(Rule {
                field,
                name,
                construct,
            })
        })
        .collect()
}

fn parse_sink(spec: &str) -> Result<SinkTarget<'_>, CliError> {
    if spec == "ndjson" {
        Ok(SinkTarget::Stdout)
    } else if let Some(path) = spec.strip_prefix("ndjson:").filter(|p| !p.is_empty()) {
        Ok(SinkTarget::File(path))
    } else {
        Err(CliError::UnknownSink(spec.to_string()))
    }
}

/// Runs every rule against `record`, collecting all failures.
fn validate(record: &Record, rules: &[Rule<'_>]) -> Outcome<Fields> {
    let values = rules.iter().map(|rule| {
        record
            .text(rule.field)
            .map(Option::unwrap_or_default)
            .bind(|raw| (rule.construct)(rule.field, &raw))
            .map(|value| (rule.field.to_string(), value))
    });
    combine_all(values).map(|pairs| pairs.into_iter().collect())
}

fn write_sink<W: Write>(
    sink: &mut NdjsonSink<W>,
    report: &BatchReport<Fields>,
) -> std::io::Result<()> {
    let (summary, records) = report.to_rows();
    sink.write_summary(&summary)?;
    sink.write_records(records)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            input,
            rules,
            json,
            sink,
        } => run_validate(input, &rules, json, sink.as_deref()).await?,
    }

    Ok(())
}

async fn run_validate(
    input: PathBuf,
    rules: &[String],
    json: bool,
    sink: Option<&str>,
) -> Result<(), CliError> {
    let t0 = Instant::now();

    // 1. Resolve configuration before touching the input.
    let rules = parse_rules(rules)?;
    let sink = sink.map(parse_sink).transpose()?;
    for rule in &rules {
        tracing::debug!(field = rule.field, rule = rule.name, "rule resolved");
    }
    tracing::info!(input = %input.display(), rules = rules.len(), "starting validation");

    // 2. Load records; Ctrl-C abandons the load.
    let source = NdjsonFileSource::new(input);
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let records = load_until(&source, shutdown).await??;
    let t_load = t0.elapsed();
    tracing::info!(
        records = records.len(),
        elapsed_ms = t_load.as_millis(),
        "records loaded"
    );

    // 3. Validate in parallel.
    let reports: Vec<RecordReport<Fields>> = records
        .par_iter()
        .map(|record| RecordReport::from_outcome(record.line, validate(record, &rules)))
        .collect();
    let t_total = t0.elapsed();

    // 4. Build report.
    let report = BatchReport::build(source.name(), reports, t_load, t_total);
    tracing::info!(
        valid = report.valid,
        invalid = report.invalid,
        elapsed_ms = t_total.as_millis(),
        "validation complete"
    );

    // 5. Output.
    match sink {
        Some(SinkTarget::Stdout) => {
            let mut s = NdjsonSink::stdout();
            write_sink(&mut s, &report)?;
            let n = s.finish()?;
            tracing::info!(rows = n, "ndjson sink: wrote to stdout");
            eprint!("{}", report.render());
        }
        Some(SinkTarget::File(path)) => {
            let file = std::fs::File::create(path)?;
            let mut s = NdjsonSink::new(file);
            write_sink(&mut s, &report)?;
            let n = s.finish()?;
            tracing::info!(rows = n, path, "ndjson sink: wrote to file");
            eprint!("{}", report.render());
        }
        None if json => println!("{}", serde_json::to_string_pretty(&report)?),
        None => print!("{}", report.render()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use railyard_core::Error;

    fn specs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(json: &str) -> Record {
        let serde_json::Value::Object(fields) = serde_json::from_str(json).unwrap() else {
            panic!("test record must be an object");
        };
        Record { line: 1, fields }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_arguments() {
        let cli = Cli::try_parse_from([
            "railyard", "validate", "--input", "in.ndjson", "--rule", "email=email", "-r",
            "age=positive", "--json",
        ])
        .unwrap();
        let Commands::Validate { input, rules, json, sink } = cli.command;
        assert_eq!(input, PathBuf::from("in.ndjson"));
        assert_eq!(rules, ["email=email", "age=positive"]);
        assert!(json);
        assert!(sink.is_none());
    }

    #[test]
    fn rule_specs_resolve_to_constructors() {
        let specs = specs(&["email = email", "age=integer"]);
        let rules = parse_rules(&specs).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!((rules[0].field, rules[0].name), ("email", "email"));
    }

    #[test]
    fn unknown_or_malformed_rules_are_config_errors() {
        let err = parse_rules(&specs(&["zip=zipcode"])).unwrap_err();
        assert!(matches!(err, CliError::UnknownRule { ref rule, .. } if rule == "zipcode"));
        assert!(err.to_string().contains("known: email, integer, positive, required"));

        for bad in ["email", "=email", "email="] {
            let err = parse_rules(&specs(&[bad])).unwrap_err();
            assert!(matches!(err, CliError::MalformedRule(_)), "{bad}");
        }
    }

    #[test]
    fn sink_specs() {
        assert!(matches!(parse_sink("ndjson"), Ok(SinkTarget::Stdout)));
        assert!(matches!(parse_sink("ndjson:/tmp/out"), Ok(SinkTarget::File("/tmp/out"))));
        assert!(matches!(parse_sink("ndjson:"), Err(CliError::UnknownSink(_))));
        assert!(matches!(parse_sink("csv"), Err(CliError::UnknownSink(_))));
    }

    #[test]
    fn validation_reports_every_failing_field() {
        let specs = specs(&["email=email", "name=required", "age=positive"]);
        let rules = parse_rules(&specs).unwrap();

        let ok = validate(&record(r#"{"email":"A@B.io","name":" Ada ","age":3}"#), &rules);
        let fields = ok.unwrap();
        assert_eq!(fields["email"], "a@b.io");
        assert_eq!(fields["name"], "Ada");

        let bad = validate(&record(r#"{"email":"nope","age":0}"#), &rules);
        let Err(Error::Validation(v)) = bad else {
            panic!("expected validation failure");
        };
        let names: Vec<&str> = v.fields.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, ["email", "name", "age"]);
    }

    #[test]
    fn nested_field_values_report_a_type_mismatch() {
        let specs = specs(&["name=required"]);
        let rules = parse_rules(&specs).unwrap();

        let out = validate(&record(r#"{"name":["Ada","Grace"]}"#), &rules);
        let Err(Error::Validation(v)) = out else {
            panic!("expected validation failure");
        };
        let name = v.field("name").expect("name reported");
        assert_eq!(
            name.details.as_slice(),
            ["expected a string, number or boolean, found an array"]
        );
    }
}
