//! Command line front end: loads definitions from files or inline JSON,
//! falling back to a built-in thermostat model, and prints the crisp output.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use fuzzy_mamdani::{
    Error, Fuzzification, MamdaniInference, Rules, VariableDefinition, DEFAULT_ANTECEDENT_STEP,
    DEFAULT_CONSEQUENT_STEP,
};

#[derive(Parser)]
#[command(name = "fuzzy-mamdani")]
#[command(version)]
#[command(about = "Mamdani fuzzy inference from a single crisp input", long_about = None)]
struct Cli {
    /// Antecedent variable: a file path or inline JSON
    #[arg(long)]
    antecedent: Option<String>,

    /// Consequent variable: a file path or inline JSON
    #[arg(long)]
    consequent: Option<String>,

    /// Rules: a file path or inline JSON
    #[arg(long)]
    rules: Option<String>,

    /// Crisp input value
    #[arg(long, default_value_t = 15.)]
    input: f64,

    /// Sampling step of the antecedent universe
    #[arg(long, default_value_t = DEFAULT_ANTECEDENT_STEP)]
    antecedent_step: f64,

    /// Sampling step of the consequent universe
    #[arg(long, default_value_t = DEFAULT_CONSEQUENT_STEP)]
    consequent_step: f64,

    /// Read firing strengths off the sampled antecedent universe
    #[arg(long)]
    sampled: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn default_antecedent() -> String {
    json!({
        "temperature": [
            {"id": "cold", "points": [[0, 0], [5, 1], [10, 1], [12, 0]]},
            {"id": "comfortable", "points": [[18, 0], [22, 1], [24, 1], [26, 0]]},
            {"id": "hot", "points": [[24, 0], [26, 1], [40, 1], [50, 0]]}
        ]
    })
    .to_string()
}

fn default_consequent() -> String {
    json!({
        "heating": [
            {"id": "weak", "points": [[0, 0], [0, 1], [5, 1], [8, 0]]},
            {"id": "moderate", "points": [[5, 0], [8, 1], [13, 1], [16, 0]]},
            {"id": "intense", "points": [[13, 0], [18, 1], [23, 1], [26, 0]]}
        ]
    })
    .to_string()
}

fn default_rules() -> String {
    json!([["cold", "intense"], ["comfortable", "moderate"], ["hot", "weak"]]).to_string()
}

/// Reads `source` as a file if one exists there, otherwise as inline JSON.
/// Anything that fails to load or parse falls back to `default`.
fn load<T>(
    what: &str,
    source: Option<&str>,
    default: fn() -> String,
    parse: fn(&str) -> fuzzy_mamdani::Result<T>,
) -> Result<T> {
    if let Some(source) = source {
        let loaded: Result<T> = if Path::new(source).is_file() {
            std::fs::read_to_string(source)
                .with_context(|| format!("reading {source}"))
                .and_then(|text| parse(&text).map_err(Into::into))
        } else {
            parse(source).map_err(Into::into)
        };

        match loaded {
            Ok(value) => return Ok(value),
            Err(err) => tracing::warn!(error = %err, "failed to load {what}, using the default"),
        }
    }

    parse(&default()).with_context(|| format!("parsing the default {what}"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let antecedent = load(
        "antecedent",
        cli.antecedent.as_deref(),
        default_antecedent,
        VariableDefinition::from_json,
    )?
    .into_variable(cli.antecedent_step)?;
    let consequent = load(
        "consequent",
        cli.consequent.as_deref(),
        default_consequent,
        VariableDefinition::from_json,
    )?
    .into_variable(cli.consequent_step)?;
    let rules = load("rules", cli.rules.as_deref(), default_rules, Rules::from_json)?;

    let fuzzification = if cli.sampled {
        Fuzzification::Sampled
    } else {
        Fuzzification::Exact
    };

    match MamdaniInference::new(fuzzification).infer(&antecedent, &consequent, &rules, cli.input) {
        Ok(output) => {
            println!("{output:.2}");
            Ok(ExitCode::SUCCESS)
        },
        Err(err @ Error::EmptyOutputRegion) => {
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        },
        Err(err) => Err(err.into()),
    }
}

#[test]
fn test_load_inline_json() {
    let rules = load(
        "rules",
        Some(r#"[["cold", "intense"]]"#),
        default_rules,
        Rules::from_json,
    )
    .unwrap();

    assert_eq!(rules.len(), 1);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("fuzzy-mamdani-rules-{}.json", std::process::id()));

    std::fs::write(&path, r#"[["hot", "weak"], ["cold", "intense"]]"#).unwrap();

    let rules = load("rules", path.to_str(), default_rules, Rules::from_json);

    std::fs::remove_file(&path).unwrap();

    let rules = rules.unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules.iter().next().map(|r| r.antecedent()), Some("hot"));
}

#[test]
fn test_load_falls_back_to_default() {
    for source in [None, Some("not json"), Some(r#"{"a": [], "b": []}"#)] {
        let antecedent = load("antecedent", source, default_antecedent, VariableDefinition::from_json).unwrap();

        assert_eq!(antecedent.name, "temperature");
        assert_eq!(antecedent.terms.len(), 3);
    }

    let consequent = load("consequent", None, default_consequent, VariableDefinition::from_json)
        .unwrap()
        .into_variable(DEFAULT_CONSEQUENT_STEP)
        .unwrap();
    let antecedent = load("antecedent", None, default_antecedent, VariableDefinition::from_json)
        .unwrap()
        .into_variable(DEFAULT_ANTECEDENT_STEP)
        .unwrap();
    let rules = load("rules", Some("[[1, 2]]"), default_rules, Rules::from_json).unwrap();

    assert_eq!(rules.len(), 3);

    // The built-in model reproduces the original default run: 15 degrees fires nothing
    assert!(matches!(
        MamdaniInference::default().infer(&antecedent, &consequent, &rules, 15.),
        Err(Error::EmptyOutputRegion)
    ));
    assert!(MamdaniInference::default().infer(&antecedent, &consequent, &rules, 7.).is_ok());
}
