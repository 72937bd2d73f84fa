//! Generate Combinations
//!
//! Reads a JSON object of sections (section name → array of string values)
//! and prints every combination as a JSON array, or only a count report.
//!
//! Usage: cargo run --bin generate_combinations -- [input.json | -]
//!
//! Configuration from environment variables:
//! - COMBINATIONS_INPUT: input path when no argument is given (default: stdin)
//! - COMBINATIONS_MODE: `generate` or `count` (default: generate)
//! - COMBINATIONS_LIMIT: refuse results larger than this (default: 1000000)
//! - COMBINATIONS_PRETTY: `1` or `true` to pretty-print JSON
//! - RUST_LOG: log filter (default: combination_generator=info,warn)

use anyhow::{Context, Result};
use combination_generator::{count_combinations, generate, parse_sections, CombinationError};
use serde::Serialize;
use std::io::{self, Read, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Generate,
    Count,
}

#[derive(Debug, PartialEq, Eq)]
struct Config {
    /// `None` reads stdin
    input: Option<String>,
    mode: Mode,
    limit: usize,
    pretty: bool,
}

/// Output of count mode
#[derive(Debug, Serialize)]
struct CountReport {
    sections: usize,
    combinations: usize,
    limit: usize,
    within_limit: bool,
}

impl Config {
    fn from_env() -> Result<Self> {
        Self::from_vars(std::env::args().nth(1), |name| std::env::var(name).ok())
    }

    /// Build from the positional argument and an environment lookup
    fn from_vars<F>(arg: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = arg
            .or_else(|| lookup("COMBINATIONS_INPUT"))
            .filter(|path| path != "-");

        let mode = match lookup("COMBINATIONS_MODE").as_deref() {
            Some("count") => Mode::Count,
            Some("generate") | None => Mode::Generate,
            Some(other) => anyhow::bail!("Unknown COMBINATIONS_MODE: {}", other),
        };

        let limit = match lookup("COMBINATIONS_LIMIT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid COMBINATIONS_LIMIT: {:?}", raw))?,
            None => DEFAULT_LIMIT,
        };

        let pretty = lookup("COMBINATIONS_PRETTY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Config { input, mode, limit, pretty })
    }
}

/// Refuse to materialize more than `limit` combinations
fn check_limit(count: usize, limit: usize) -> Result<()> {
    if count > limit {
        anyhow::bail!(
            "Refusing to generate {} combinations (COMBINATIONS_LIMIT is {})",
            count,
            limit
        );
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Log a library error, naming the validation cause when there is one
fn report_error(err: &CombinationError) {
    match err.validation() {
        Some(cause) => tracing::error!(kind = %err.kind(), "Rejected input: {}", cause),
        None => tracing::error!(kind = %err.kind(), "{}", err),
    }
}

fn run(config: &Config) -> Result<()> {
    let raw = read_input(config.input.as_deref())?;

    let outcome = parse_sections(&raw).and_then(|sections| {
        let count = count_combinations(&sections)?;
        Ok((sections, count))
    });
    let (sections, count) = match outcome {
        Ok(parsed) => parsed,
        Err(err) => {
            report_error(&err);
            return Err(err.into());
        }
    };
    tracing::info!("{} sections, {} combinations", sections.len(), count);

    let mut stdout = io::stdout().lock();

    if config.mode == Mode::Count {
        let report = CountReport {
            sections: sections.len(),
            combinations: count,
            limit: config.limit,
            within_limit: count <= config.limit,
        };
        serde_json::to_writer(&mut stdout, &report)?;
        writeln!(stdout)?;
        return Ok(());
    }

    check_limit(count, config.limit)?;

    let combinations = generate(&sections)?;
    if config.pretty {
        serde_json::to_writer_pretty(&mut stdout, &combinations)?;
    } else {
        serde_json::to_writer(&mut stdout, &combinations)?;
    }
    writeln!(stdout)?;

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "combination_generator=info,generate_combinations=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  input: {}", config.input.as_deref().unwrap_or("<stdin>"));
    tracing::info!("  mode: {:?}", config.mode);
    tracing::info!("  limit: {}", config.limit);

    run(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(arg: Option<&str>, vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(arg.map(str::to_string), |name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(None, &[]).unwrap();
        assert_eq!(
            cfg,
            Config {
                input: None,
                mode: Mode::Generate,
                limit: DEFAULT_LIMIT,
                pretty: false,
            }
        );
    }

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(config(Some("-"), &[]).unwrap().input, None);

        let cfg = config(None, &[("COMBINATIONS_INPUT", "-")]).unwrap();
        assert_eq!(cfg.input, None);
    }

    #[test]
    fn test_argument_overrides_env_input() {
        let cfg = config(Some("a.json"), &[("COMBINATIONS_INPUT", "b.json")]).unwrap();
        assert_eq!(cfg.input.as_deref(), Some("a.json"));

        let cfg = config(None, &[("COMBINATIONS_INPUT", "b.json")]).unwrap();
        assert_eq!(cfg.input.as_deref(), Some("b.json"));
    }

    #[test]
    fn test_mode_parsing() {
        let cfg = config(None, &[("COMBINATIONS_MODE", "count")]).unwrap();
        assert_eq!(cfg.mode, Mode::Count);

        let err = config(None, &[("COMBINATIONS_MODE", "list")]).unwrap_err();
        assert!(err.to_string().contains("Unknown COMBINATIONS_MODE: list"));
    }

    #[test]
    fn test_limit_parsing() {
        let cfg = config(None, &[("COMBINATIONS_LIMIT", "25")]).unwrap();
        assert_eq!(cfg.limit, 25);

        let err = config(None, &[("COMBINATIONS_LIMIT", "lots")]).unwrap_err();
        assert!(err.to_string().contains("Invalid COMBINATIONS_LIMIT"));

        assert!(config(None, &[("COMBINATIONS_LIMIT", "-1")]).is_err());
    }

    #[test]
    fn test_pretty_flag() {
        for (raw, expected) in [("1", true), ("true", true), ("TRUE", true), ("0", false), ("yes", false)] {
            let cfg = config(None, &[("COMBINATIONS_PRETTY", raw)]).unwrap();
            assert_eq!(cfg.pretty, expected, "COMBINATIONS_PRETTY={raw}");
        }
    }

    #[test]
    fn test_check_limit() {
        // Equal to the limit is allowed
        assert!(check_limit(4, 4).is_ok());
        assert!(check_limit(0, 0).is_ok());

        let err = check_limit(5, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Refusing to generate 5 combinations (COMBINATIONS_LIMIT is 4)"
        );
    }

    #[test]
    fn test_count_report_json() {
        let report = CountReport {
            sections: 2,
            combinations: 4,
            limit: 3,
            within_limit: false,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"sections":2,"combinations":4,"limit":3,"within_limit":false}"#
        );
    }
}
