//! qrc - Query Reconcile CLI tool
//!
//! A command line tool for hashing, matching and structurally merging
//! YAML/JSON values.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use query_reconcile::value::{self, Value};
use query_reconcile::{
    hash_key, is_plain_list, partial_match_key, replace_equal_deep, Error, Result,
};

#[derive(Debug, Parser)]
#[command(name = "qrc", version)]
#[command(about = "Query key hashing, matching and structural sharing", long_about = None)]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical hash of a query key
    Hash {
        /// YAML/JSON file holding the key
        file: PathBuf,
    },
    /// Check whether a query key satisfies a filter key
    Match {
        #[arg(long)]
        key: PathBuf,
        #[arg(long)]
        filter: PathBuf,
        /// Require equal hashes instead of containment
        #[arg(long)]
        exact: bool,
    },
    /// Merge two values, sharing unchanged parts of the previous one
    Merge {
        #[arg(long)]
        prev: PathBuf,
        #[arg(long)]
        next: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(&cli.output)?)
    };

    match cli.command {
        Command::Hash { file } => {
            hash(&file, &mut output)?;
            Ok(true)
        }
        Command::Match { key, filter, exact } => matches(&key, &filter, exact, &mut output),
        Command::Merge { prev, next } => {
            merge(&prev, &next, &mut output)?;
            Ok(true)
        }
    }
}

/// Reads a value, choosing YAML or JSON by file extension.
fn load(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    debug!(path = %path.display(), is_yaml, "loading value");
    if is_yaml {
        value::from_yaml(&content)
    } else {
        value::from_json(&content)
    }
}

fn load_key(path: &Path) -> Result<Value> {
    let key = load(path)?;
    if !is_plain_list(&key) {
        return Err(Error::invalid_key(format!(
            "{} does not hold a list, got a {}",
            path.display(),
            key.kind()
        )));
    }
    Ok(key)
}

fn hash(file: &Path, output: &mut dyn Write) -> Result<()> {
    let key = load_key(file)?;
    writeln!(output, "{}", hash_key(&key))?;
    Ok(())
}

fn matches(
    key_file: &Path,
    filter_file: &Path,
    exact: bool,
    output: &mut dyn Write,
) -> Result<bool> {
    let key = load_key(key_file)?;
    let filter = load_key(filter_file)?;

    let matched = if exact {
        hash_key(&key) == hash_key(&filter)
    } else {
        partial_match_key(&key, &filter)
    };

    writeln!(output, "{}", if matched { "match" } else { "no match" })?;
    Ok(matched)
}

fn merge(prev_file: &Path, next_file: &Path, output: &mut dyn Write) -> Result<()> {
    let prev = load(prev_file)?;
    let next = load(next_file)?;

    let merged = replace_equal_deep(&prev, &next);

    writeln!(output, "{}", value::to_json(&merged)?)?;

    if merged.same(&prev) {
        eprintln!("unchanged: previous value kept");
    } else if let (Some(old), Some(new)) = (prev.as_map(), merged.as_map()) {
        let shared: Vec<&str> = new
            .iter()
            .filter(|(k, v)| old.get(k).is_some_and(|o| o.same(v)))
            .map(|(k, _)| k.as_str())
            .collect();
        eprintln!("changed: shared fields [{}]", shared.join(", "));
    } else {
        eprintln!("changed");
    }

    Ok(())
}
